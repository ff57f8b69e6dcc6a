use pathviz_core::Point;

/// Estimate of the remaining cost between two cells.
///
/// Must never overestimate the true shortest-path cost (admissible) and must
/// never be negative, otherwise the path returned by
/// [`PathSearch`](crate::PathSearch) is no longer guaranteed to be shortest.
pub trait Heuristic {
    fn estimate(&self, from: Point, to: Point) -> i32;
}

/// Manhattan (L1) distance between two points.
#[inline]
pub fn manhattan(a: Point, b: Point) -> i32 {
    (a.row - b.row).abs() + (a.col - b.col).abs()
}

/// The Manhattan heuristic: exact on an empty 4-connected grid.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Manhattan;

impl Heuristic for Manhattan {
    #[inline]
    fn estimate(&self, from: Point, to: Point) -> i32 {
        manhattan(from, to)
    }
}

impl<F> Heuristic for F
where
    F: Fn(Point, Point) -> i32,
{
    #[inline]
    fn estimate(&self, from: Point, to: Point) -> i32 {
        self(from, to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manhattan_is_symmetric_l1() {
        let a = Point::new(1, 7);
        let b = Point::new(4, 3);
        assert_eq!(manhattan(a, b), 7);
        assert_eq!(manhattan(b, a), 7);
        assert_eq!(manhattan(a, a), 0);
    }

    #[test]
    fn closures_are_heuristics() {
        let zero = |_: Point, _: Point| 0;
        assert_eq!(zero.estimate(Point::ZERO, Point::new(9, 9)), 0);
        assert_eq!(Manhattan.estimate(Point::ZERO, Point::new(9, 9)), 18);
    }
}

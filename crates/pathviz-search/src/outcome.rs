use pathviz_core::Point;

/// Where a [`PathSearch`](crate::PathSearch) is in its lifecycle.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SearchStatus {
    /// No run started yet.
    #[default]
    Idle,
    Running,
    Succeeded,
    Failed,
    Cancelled,
}

impl SearchStatus {
    /// Whether the last run has finished one way or another.
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Succeeded | Self::Failed | Self::Cancelled)
    }
}

/// A shortest path, from start to end inclusive.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Path {
    cells: Vec<Point>,
}

impl Path {
    pub(crate) fn new(cells: Vec<Point>) -> Self {
        debug_assert!(cells.len() >= 2);
        Self { cells }
    }

    /// Every cell on the path, start first.
    #[inline]
    pub fn cells(&self) -> &[Point] {
        &self.cells
    }

    /// Cells strictly between start and end (the ones tagged Path).
    pub fn interior(&self) -> &[Point] {
        let n = self.cells.len();
        if n < 2 { &[] } else { &self.cells[1..n - 1] }
    }

    /// Number of moves (one less than the number of cells).
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len().saturating_sub(1)
    }

    /// Whether the path has no moves.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// First cell. `None` only for a path built from empty data.
    pub fn start(&self) -> Option<Point> {
        self.cells.first().copied()
    }

    pub fn end(&self) -> Option<Point> {
        self.cells.last().copied()
    }

    pub fn contains(&self, p: Point) -> bool {
        self.cells.contains(&p)
    }
}

/// How a run ended.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// The end was reached; the shortest path is attached.
    Succeeded(Path),
    /// The frontier ran dry: end is unreachable from start.
    Failed,
    /// The cancellation context was triggered before the run finished.
    Cancelled,
}

impl Outcome {
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Succeeded(p) => Some(p),
            _ => None,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Succeeded(_))
    }

    pub fn status(&self) -> SearchStatus {
        match self {
            Self::Succeeded(_) => SearchStatus::Succeeded,
            Self::Failed => SearchStatus::Failed,
            Self::Cancelled => SearchStatus::Cancelled,
        }
    }
}

/// Counters for the most recent run.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchStats {
    /// Cells popped from the frontier.
    pub expanded: usize,
    /// Frontier insertions, including the start cell.
    pub insertions: u64,
    /// Step callbacks delivered.
    pub steps: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_accessors() {
        let p = Path::new(vec![Point::new(0, 0), Point::new(0, 1), Point::new(1, 1)]);
        assert_eq!(p.len(), 2);
        assert!(!p.is_empty());
        assert_eq!(p.start(), Some(Point::new(0, 0)));
        assert_eq!(p.end(), Some(Point::new(1, 1)));
        assert_eq!(p.interior(), &[Point::new(0, 1)]);
        assert!(p.contains(Point::new(0, 1)));
    }

    #[test]
    fn outcome_status_mapping() {
        assert_eq!(Outcome::Failed.status(), SearchStatus::Failed);
        assert_eq!(Outcome::Cancelled.status(), SearchStatus::Cancelled);
        assert!(Outcome::Failed.path().is_none());
        assert!(SearchStatus::Cancelled.is_terminal());
        assert!(!SearchStatus::Running.is_terminal());
    }
}

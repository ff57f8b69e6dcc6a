//! The [`Cell`] type: one grid square with a state tag and cached
//! adjacency.

use crate::geom::Point;

/// What a cell currently is, from the editor's or the search's point of
/// view.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellState {
    /// Walkable and untouched.
    #[default]
    Free,
    /// Not walkable; never appears in an adjacency list.
    Barrier,
    /// Where the search begins.
    Start,
    /// Where the search should end.
    End,
    /// Discovered and waiting in the frontier.
    Open,
    /// Fully expanded.
    Closed,
    /// Part of the reconstructed shortest path.
    Path,
    /// The end cell after a successful search.
    Ended,
}

impl CellState {
    /// Whether the search may step onto a cell in this state.
    #[inline]
    pub const fn is_walkable(self) -> bool {
        !matches!(self, Self::Barrier)
    }

    /// Whether this tag was written by a search run (as opposed to the
    /// editor).
    #[inline]
    pub const fn is_search_mark(self) -> bool {
        matches!(self, Self::Open | Self::Closed | Self::Path | Self::Ended)
    }

    /// Single-character form used by ASCII layouts.
    pub const fn to_char(self) -> char {
        match self {
            Self::Free => '.',
            Self::Barrier => '#',
            Self::Start => 'S',
            Self::End => 'E',
            Self::Open => 'o',
            Self::Closed => 'x',
            Self::Path => '*',
            Self::Ended => 'e',
        }
    }

    /// Inverse of [`to_char`](Self::to_char).
    pub const fn from_char(ch: char) -> Option<Self> {
        Some(match ch {
            '.' => Self::Free,
            '#' => Self::Barrier,
            'S' => Self::Start,
            'E' => Self::End,
            'o' => Self::Open,
            'x' => Self::Closed,
            '*' => Self::Path,
            'e' => Self::Ended,
            _ => return None,
        })
    }
}

/// A single grid square.
///
/// The position is fixed at construction. The adjacency list is a snapshot
/// taken by [`Grid::update_neighbors`](crate::Grid::update_neighbors) and is
/// not kept in sync with later edits.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cell {
    pos: Point,
    state: CellState,
    neighbors: Vec<Point>,
}

impl Cell {
    /// A free cell at `pos` with no adjacency computed yet.
    pub fn new(pos: Point) -> Self {
        Self {
            pos,
            state: CellState::Free,
            neighbors: Vec::new(),
        }
    }

    #[inline]
    pub fn position(&self) -> Point {
        self.pos
    }

    #[inline]
    pub fn row(&self) -> i32 {
        self.pos.row
    }

    #[inline]
    pub fn col(&self) -> i32 {
        self.pos.col
    }

    #[inline]
    pub fn state(&self) -> CellState {
        self.state
    }

    /// Overwrite the state tag. Does not touch any other cell, so placing a
    /// second Start leaves the first one in place.
    #[inline]
    pub fn set_state(&mut self, state: CellState) {
        self.state = state;
    }

    /// Adjacent walkable cells as of the last adjacency update, in the
    /// order down, up, right, left.
    #[inline]
    pub fn neighbors(&self) -> &[Point] {
        &self.neighbors
    }

    pub(crate) fn set_neighbors(&mut self, neighbors: Vec<Point>) {
        self.neighbors = neighbors;
    }

    pub fn is_free(&self) -> bool {
        self.state == CellState::Free
    }

    pub fn is_barrier(&self) -> bool {
        self.state == CellState::Barrier
    }

    pub fn is_start(&self) -> bool {
        self.state == CellState::Start
    }

    pub fn is_end(&self) -> bool {
        self.state == CellState::End
    }

    pub fn is_open(&self) -> bool {
        self.state == CellState::Open
    }

    pub fn is_closed(&self) -> bool {
        self.state == CellState::Closed
    }

    pub fn is_path(&self) -> bool {
        self.state == CellState::Path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_cell_is_free_without_neighbors() {
        let c = Cell::new(Point::new(2, 3));
        assert!(c.is_free());
        assert_eq!(c.position().position(), (2, 3));
        assert_eq!((c.row(), c.col()), (2, 3));
        assert!(c.neighbors().is_empty());
    }

    #[test]
    fn state_predicates_follow_tag() {
        let mut c = Cell::new(Point::ZERO);
        c.set_state(CellState::Barrier);
        assert!(c.is_barrier());
        assert!(!c.state().is_walkable());
        c.set_state(CellState::Closed);
        assert!(c.is_closed());
        assert!(c.state().is_search_mark());
        c.set_state(CellState::Start);
        assert!(c.is_start());
        assert!(!c.state().is_search_mark());
    }

    #[test]
    fn char_mapping_is_reversible() {
        for state in [
            CellState::Free,
            CellState::Barrier,
            CellState::Start,
            CellState::End,
            CellState::Open,
            CellState::Closed,
            CellState::Path,
            CellState::Ended,
        ] {
            assert_eq!(CellState::from_char(state.to_char()), Some(state));
        }
        assert_eq!(CellState::from_char('?'), None);
    }
}

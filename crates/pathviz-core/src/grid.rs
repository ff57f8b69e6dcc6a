//! The [`Grid`] type: a fixed square of [`Cell`]s addressed by
//! `(row, col)`.
//!
//! Adjacency is cached per cell and rebuilt on demand. The grid counts
//! every edit that changes which cells are walkable (its *layout
//! revision*) and remembers the revision its adjacency was computed at, so
//! callers can tell when the cached lists have gone stale.

use std::fmt::Write as _;

use thiserror::Error;

use crate::cell::{Cell, CellState};
use crate::geom::Point;

/// Problems found while parsing an ASCII layout.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
    #[error("layout row {row} has {len} cells, expected {expected}")]
    NotSquare {
        row: usize,
        len: usize,
        expected: usize,
    },
    #[error("unknown cell glyph {ch:?} at {pos}")]
    UnknownGlyph { ch: char, pos: Point },
}

/// Cells in a `size`×`size` grid, counted in `usize` so large sizes cannot
/// overflow.
fn cell_count(size: i32) -> usize {
    let side = size.max(0) as usize;
    side * side
}

/// A square grid of [`Cell`]s, stored row-major.
#[derive(Clone, Debug)]
pub struct Grid {
    size: i32,
    cells: Vec<Cell>,
    layout_revision: u64,
    neighbors_revision: Option<u64>,
}

impl Grid {
    /// Create an `n`×`n` grid of free cells. Negative sizes give an empty
    /// grid.
    pub fn new(n: i32) -> Self {
        let size = n.max(0);
        let mut cells = Vec::with_capacity(cell_count(size));
        for row in 0..size {
            for col in 0..size {
                cells.push(Cell::new(Point::new(row, col)));
            }
        }
        Self {
            size,
            cells,
            layout_revision: 0,
            neighbors_revision: None,
        }
    }

    /// Parse a layout where each string is one row. See
    /// [`CellState::from_char`] for the glyphs. Surrounding whitespace on
    /// each row is ignored and blank rows are skipped.
    pub fn from_ascii<S: AsRef<str>>(rows: &[S]) -> Result<Self, LayoutError> {
        let rows: Vec<&str> = rows
            .iter()
            .map(|r| r.as_ref().trim())
            .filter(|r| !r.is_empty())
            .collect();
        let n = rows.len();
        let mut grid = Self::new(n as i32);
        for (row, line) in rows.iter().enumerate() {
            let len = line.chars().count();
            if len != n {
                return Err(LayoutError::NotSquare {
                    row,
                    len,
                    expected: n,
                });
            }
            for (col, ch) in line.chars().enumerate() {
                let pos = Point::new(row as i32, col as i32);
                let state = CellState::from_char(ch).ok_or(LayoutError::UnknownGlyph { ch, pos })?;
                grid.set_state(pos, state);
            }
        }
        Ok(grid)
    }

    /// Render the grid in the format read by [`from_ascii`](Self::from_ascii),
    /// one line per row.
    pub fn to_ascii(&self) -> String {
        let mut out = String::with_capacity(self.cells.len() + self.size as usize);
        for row in self.cells.chunks(self.size.max(1) as usize) {
            for cell in row {
                out.push(cell.state().to_char());
            }
            let _ = writeln!(out);
        }
        out
    }

    /// Number of rows (and columns).
    #[inline]
    pub fn size(&self) -> i32 {
        self.size
    }

    /// Total number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Whether `p` is inside the grid.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        p.row >= 0 && p.col >= 0 && p.row < self.size && p.col < self.size
    }

    /// Flat row-major index of `p`, or `None` if out of bounds.
    #[inline]
    pub fn index(&self, p: Point) -> Option<usize> {
        if !self.contains(p) {
            return None;
        }
        Some(p.row as usize * self.size as usize + p.col as usize)
    }

    /// Inverse of [`index`](Self::index).
    #[inline]
    pub fn point(&self, idx: usize) -> Point {
        let n = self.size as usize;
        Point::new((idx / n) as i32, (idx % n) as i32)
    }

    /// The cell at `p`, or `None` if out of bounds.
    pub fn at(&self, p: Point) -> Option<&Cell> {
        self.index(p).map(|i| &self.cells[i])
    }

    /// The state at `p`, or `None` if out of bounds.
    pub fn state(&self, p: Point) -> Option<CellState> {
        self.at(p).map(Cell::state)
    }

    /// Set the state at `p`. Returns `false` (and does nothing) if `p` is
    /// out of bounds.
    ///
    /// Turning a cell into a barrier, or a barrier into anything else,
    /// bumps the layout revision and so marks the cached adjacency stale.
    pub fn set_state(&mut self, p: Point, state: CellState) -> bool {
        let Some(i) = self.index(p) else {
            return false;
        };
        let old = self.cells[i].state();
        if old.is_walkable() != state.is_walkable() {
            self.layout_revision += 1;
        }
        self.cells[i].set_state(state);
        true
    }

    /// Row-major iterator over all cells.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    /// The first cell (row-major) holding `state`.
    pub fn find(&self, state: CellState) -> Option<Point> {
        self.cells
            .iter()
            .find(|c| c.state() == state)
            .map(Cell::position)
    }

    /// How many cells hold `state`.
    pub fn count(&self, state: CellState) -> usize {
        self.cells.iter().filter(|c| c.state() == state).count()
    }

    /// Cached adjacency of the cell at `p` (empty if out of bounds).
    pub fn neighbors(&self, p: Point) -> &[Point] {
        self.at(p).map(Cell::neighbors).unwrap_or(&[])
    }

    /// Compute the walkable cardinal neighbours of `p` from the current
    /// layout, in the order down, up, right, left.
    pub fn walkable_neighbors(&self, p: Point) -> Vec<Point> {
        p.neighbors_4()
            .into_iter()
            .filter(|&n| self.state(n).is_some_and(CellState::is_walkable))
            .collect()
    }

    /// Recompute the adjacency of a single cell.
    pub fn update_cell_neighbors(&mut self, p: Point) {
        let Some(i) = self.index(p) else {
            return;
        };
        let neighbors = self.walkable_neighbors(p);
        self.cells[i].set_neighbors(neighbors);
    }

    /// Recompute the adjacency of every cell and record the layout revision
    /// it reflects.
    pub fn update_neighbors(&mut self) {
        for i in 0..self.cells.len() {
            let p = self.point(i);
            let neighbors = self.walkable_neighbors(p);
            self.cells[i].set_neighbors(neighbors);
        }
        self.neighbors_revision = Some(self.layout_revision);
        log::debug!(
            "recomputed adjacency for {}x{} grid at layout revision {}",
            self.size,
            self.size,
            self.layout_revision
        );
    }

    /// Whether the cached adjacency was never computed or predates the
    /// latest layout change.
    #[inline]
    pub fn neighbors_stale(&self) -> bool {
        self.neighbors_revision != Some(self.layout_revision)
    }

    /// Undo the marks left by a search: Open, Closed and Path become Free,
    /// Ended goes back to End. Barriers and endpoints are kept.
    pub fn clear_search_marks(&mut self) {
        for cell in &mut self.cells {
            match cell.state() {
                CellState::Open | CellState::Closed | CellState::Path => {
                    cell.set_state(CellState::Free)
                }
                CellState::Ended => cell.set_state(CellState::End),
                _ => {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_new_is_all_free() {
        let g = Grid::new(4);
        assert_eq!(g.size(), 4);
        assert_eq!(g.len(), 16);
        assert_eq!(g.count(CellState::Free), 16);
        assert_eq!(g.at(Point::new(3, 2)).map(Cell::position), Some(Point::new(3, 2)));
        assert!(g.at(Point::new(4, 0)).is_none());
        assert!(g.at(Point::new(0, -1)).is_none());
    }

    #[test]
    fn negative_size_is_empty() {
        let g = Grid::new(-3);
        assert!(g.is_empty());
        assert!(!g.contains(Point::ZERO));
        assert_eq!(g.to_ascii(), "");
    }

    #[test]
    fn cell_count_does_not_overflow_i32() {
        assert_eq!(cell_count(46_341), 2_147_488_281);
        assert_eq!(cell_count(-3), 0);
    }

    #[test]
    fn index_point_roundtrip() {
        let g = Grid::new(5);
        for i in 0..g.len() {
            assert_eq!(g.index(g.point(i)), Some(i));
        }
    }

    #[test]
    fn set_state_out_of_bounds_is_noop() {
        let mut g = Grid::new(2);
        assert!(!g.set_state(Point::new(2, 0), CellState::Barrier));
        assert_eq!(g.layout_revision, 0);
    }

    #[test]
    fn neighbors_order_and_bounds() {
        let mut g = Grid::new(3);
        g.update_neighbors();
        assert_eq!(
            g.neighbors(Point::new(1, 1)),
            &[
                Point::new(2, 1),
                Point::new(0, 1),
                Point::new(1, 2),
                Point::new(1, 0),
            ]
        );
        // corner: only down and right
        assert_eq!(g.neighbors(Point::new(0, 0)), &[Point::new(1, 0), Point::new(0, 1)]);
        // right edge on row 0 still has its left neighbour
        assert_eq!(
            g.neighbors(Point::new(0, 2)),
            &[Point::new(1, 2), Point::new(0, 1)]
        );
    }

    #[test]
    fn neighbors_skip_barriers() {
        let mut g = Grid::new(3);
        g.set_state(Point::new(2, 1), CellState::Barrier);
        g.set_state(Point::new(1, 0), CellState::Barrier);
        g.update_neighbors();
        assert_eq!(
            g.neighbors(Point::new(1, 1)),
            &[Point::new(0, 1), Point::new(1, 2)]
        );
    }

    #[test]
    fn adjacency_is_a_snapshot() {
        let mut g = Grid::new(3);
        g.update_neighbors();
        assert!(!g.neighbors_stale());

        g.set_state(Point::new(0, 1), CellState::Barrier);
        assert!(g.neighbors_stale());
        // cached list still contains the new barrier until recomputed
        assert!(g.neighbors(Point::new(0, 0)).contains(&Point::new(0, 1)));

        g.update_cell_neighbors(Point::new(0, 0));
        assert_eq!(g.neighbors(Point::new(0, 0)), &[Point::new(1, 0)]);

        g.update_neighbors();
        assert!(!g.neighbors_stale());
    }

    #[test]
    fn non_layout_edits_keep_adjacency_fresh() {
        let mut g = Grid::new(3);
        g.update_neighbors();
        g.set_state(Point::new(0, 0), CellState::Start);
        g.set_state(Point::new(1, 1), CellState::Open);
        assert!(!g.neighbors_stale());
    }

    #[test]
    fn clear_search_marks_keeps_layout() {
        let mut g = Grid::from_ascii(&["Sox", "#*e", "..."]).unwrap();
        g.clear_search_marks();
        assert_eq!(g.to_ascii(), "S..\n#.E\n...\n");
    }

    #[test]
    fn find_and_count() {
        let g = Grid::from_ascii(&["S.#", "..#", "#.E"]).unwrap();
        assert_eq!(g.find(CellState::Start), Some(Point::new(0, 0)));
        assert_eq!(g.find(CellState::End), Some(Point::new(2, 2)));
        assert_eq!(g.find(CellState::Path), None);
        assert_eq!(g.count(CellState::Barrier), 3);
    }

    #[test]
    fn ascii_roundtrip_and_errors() {
        let rows = ["S..", ".#.", "..E"];
        let g = Grid::from_ascii(&rows).unwrap();
        assert_eq!(g.to_ascii(), "S..\n.#.\n..E\n");

        assert_eq!(
            Grid::from_ascii(&["...", ".."]).unwrap_err(),
            LayoutError::NotSquare {
                row: 0,
                len: 3,
                expected: 2
            }
        );
        assert_eq!(
            Grid::from_ascii(&["..", ".?"]).unwrap_err(),
            LayoutError::UnknownGlyph {
                ch: '?',
                pos: Point::new(1, 1)
            }
        );
    }
}

//! Step-wise A* search over a [`pathviz_core::Grid`].
//!
//! [`PathSearch::run`] expands one cell per iteration, tags cells on the
//! grid as it goes (Open, Closed, Path, Ended) and calls back after every
//! step so a front end can redraw or cancel. Moves are 4-directional with
//! unit cost; the default heuristic is [`Manhattan`].
//!
//! Frontier ties on f-score are broken by insertion order: of two equally
//! promising cells, the one discovered first is expanded first, so the same
//! layout always yields the same path.

mod astar;
mod distance;
mod error;
mod frontier;
mod outcome;

pub use astar::PathSearch;
pub use distance::{Heuristic, Manhattan, manhattan};
pub use error::InvalidEndpoints;
pub use outcome::{Outcome, Path, SearchStats, SearchStatus};

//! **pathviz-core**: grid model for the pathviz A* visualiser.
//!
//! This crate provides the types shared by the search engine and the
//! presentation side: grid coordinates, tagged cells, the square search
//! grid with its cached adjacency, a cooperative cancellation token, input
//! events, and the small render canvas that drivers flush to the screen.

pub mod app;
pub mod canvas;
pub mod cell;
pub mod geom;
pub mod grid;
pub mod messages;
pub mod style;

pub use app::{Context, Driver};
pub use canvas::{Canvas, Frame, FrameGlyph, Glyph, compute_frame};
pub use cell::{Cell, CellState};
pub use geom::Point;
pub use grid::{Grid, LayoutError};
pub use messages::*;
pub use style::Color;

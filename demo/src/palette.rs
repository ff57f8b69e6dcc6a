//! Colours for each cell state.

use pathviz_core::{CellState, Color};

// -- Cells --

pub const FREE: Color = Color::from_rgb(255, 255, 255);
/// Near-black: `Color(0)` is reserved for the terminal default.
pub const BARRIER: Color = Color::from_rgb(0, 0, 1);
pub const START: Color = Color::from_rgb(255, 165, 0);
pub const END: Color = Color::from_rgb(64, 224, 208);
pub const OPEN: Color = Color::from_rgb(0, 255, 0);
pub const CLOSED: Color = Color::from_rgb(255, 0, 0);
pub const PATH: Color = Color::from_rgb(128, 0, 128);

// -- Chrome --

/// Behind the grid and the status line.
pub const BACKGROUND: Color = Color::from_rgb(128, 128, 128);
pub const STATUS_FG: Color = Color::from_rgb(255, 255, 255);

/// Background colour of a cell in `state`.
pub fn cell_color(state: CellState) -> Color {
    match state {
        CellState::Free => FREE,
        CellState::Barrier => BARRIER,
        CellState::Start => START,
        CellState::End | CellState::Ended => END,
        CellState::Open => OPEN,
        CellState::Closed => CLOSED,
        CellState::Path => PATH,
    }
}

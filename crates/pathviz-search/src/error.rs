use pathviz_core::Point;
use thiserror::Error;

/// Endpoints a search refuses to start from. Reported before any search
/// state is allocated or any cell is touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidEndpoints {
    #[error("invalid endpoints: {0} lies outside the grid")]
    OutOfBounds(Point),
    #[error("invalid endpoints: start and end are both {0}")]
    Coincident(Point),
    #[error("invalid endpoints: {0} is a barrier")]
    Barrier(Point),
}

impl InvalidEndpoints {
    /// The offending position.
    pub fn point(self) -> Point {
        match self {
            Self::OutOfBounds(p) | Self::Coincident(p) | Self::Barrier(p) => p,
        }
    }
}

use std::fmt;

use tilepath_core::{GridError, Point};

/// Errors reported by finder construction or by [`Finder::find_path`].
///
/// Failing to find a route is not an error: finders return an empty path.
///
/// [`Finder::find_path`]: crate::Finder::find_path
#[derive(Debug, Clone, PartialEq)]
pub enum FindError {
    /// A grid query failed, typically an endpoint outside the grid.
    Grid(GridError),
    /// The start or end cell is not walkable.
    BlockedEndpoint { pos: Point },
    /// The heuristic weight is below 1 or not finite.
    InvalidWeight(f64),
}

impl fmt::Display for FindError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Grid(e) => write!(f, "grid error: {e}"),
            Self::BlockedEndpoint { pos } => write!(f, "endpoint {pos} is not walkable"),
            Self::InvalidWeight(w) => {
                write!(f, "heuristic weight must be a finite value >= 1, got {w}")
            }
        }
    }
}

impl std::error::Error for FindError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Grid(e) => Some(e),
            _ => None,
        }
    }
}

impl From<GridError> for FindError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}

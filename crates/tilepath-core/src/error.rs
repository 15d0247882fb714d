use std::fmt;

use crate::geom::Point;

/// Errors raised while building or querying a [`Grid`](crate::Grid).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// The occupancy matrix does not match the declared dimensions.
    DimensionMismatch {
        width: i32,
        height: i32,
        /// Number of rows actually supplied.
        rows: usize,
        /// Index and length of the first row with the wrong length, if any.
        bad_row: Option<(usize, usize)>,
    },
    /// A coordinate lies outside the grid.
    OutOfBounds { pos: Point, width: i32, height: i32 },
    /// An ASCII map contained a character other than `.` or `#`.
    InvalidTile { ch: char, pos: Point },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DimensionMismatch {
                width,
                height,
                rows,
                bad_row,
            } => {
                write!(f, "matrix does not fit a {width}x{height} grid: ")?;
                match bad_row {
                    Some((i, len)) => write!(f, "row {i} has {len} columns"),
                    None => write!(f, "got {rows} rows"),
                }
            }
            Self::OutOfBounds { pos, width, height } => {
                write!(f, "position {pos} is outside the {width}x{height} grid")
            }
            Self::InvalidTile { ch, pos } => {
                write!(f, "invalid tile \u{201c}{ch}\u{201d} at {pos}")
            }
        }
    }
}

impl std::error::Error for GridError {}

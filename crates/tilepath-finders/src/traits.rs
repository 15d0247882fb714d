use tilepath_core::{Grid, Point};

use crate::error::FindError;

/// Common interface of the path finders.
pub trait Finder {
    /// Find a path from `start` to `end` on `grid`.
    ///
    /// The returned path includes both endpoints. An empty path means the
    /// end is unreachable. Errors are reserved for invalid requests: an
    /// endpoint outside the grid or on a blocked cell.
    fn find_path(&self, start: Point, end: Point, grid: &Grid) -> Result<Vec<Point>, FindError>;
}

//! Shortest-path search on tile grids.
//!
//! Two finders share the same [`Finder`] interface:
//!
//! - **A\*** with a single frontier ([`AStarFinder`])
//! - **Bidirectional A\*** growing one search from each endpoint
//!   ([`BiAStarFinder`])
//!
//! Both are configured through [`FinderOptions`], resolved once into an
//! immutable [`FinderConfig`]. Every call to [`Finder::find_path`] allocates
//! its own search state, so a [`Grid`] can be shared between searches and
//! threads without being reset.
//!
//! # Costs and heuristics
//!
//! | Move | Cost |
//! |---|---|
//! | straight | 1 |
//! | diagonal | √2 ([`SQRT2`]) |
//!
//! The default [`Heuristic`] depends on the [`DiagonalMovement`] policy:
//! Manhattan when diagonals are forbidden, Octile otherwise.
//!
//! The [`util`] module holds path post-processing helpers.

mod astar;
mod biastar;
mod error;
mod frontier;
mod heuristic;
mod options;
mod search;
mod traits;
pub mod util;

#[cfg(test)]
mod oracle;

pub use astar::AStarFinder;
pub use biastar::BiAStarFinder;
pub use error::FindError;
pub use frontier::Frontier;
pub use heuristic::{Heuristic, SQRT2, chebyshev, euclidean, manhattan, octile};
pub use options::{FinderConfig, FinderOptions};
pub use traits::Finder;
pub use util::{compress_path, expand_path, interpolate, is_valid_path, path_length, smoothen_path};

pub use tilepath_core::{DiagonalMovement, Grid, GridError, Node, Point};

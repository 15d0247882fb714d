//! **tilepath-core**: grid topology for tile-based pathfinding.
//!
//! This crate provides the types every finder in the *tilepath* workspace
//! shares: integer geometry, the occupancy [`Grid`] with its [`Node`]s, the
//! [`DiagonalMovement`] corner-cutting policy, and [`GridError`].

pub mod error;
pub mod geom;
pub mod grid;

pub use error::GridError;
pub use geom::{Point, Range};
pub use grid::{DiagonalMovement, Grid, Node};

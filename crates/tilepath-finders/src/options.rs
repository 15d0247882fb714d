//! Finder configuration.
//!
//! [`FinderOptions`] is what callers fill in; [`FinderConfig`] is the
//! resolved, immutable form a finder holds for its whole lifetime.

use tilepath_core::{DiagonalMovement, Point};

use crate::error::FindError;
use crate::heuristic::Heuristic;

/// Options accepted by the finders.
///
/// When `diagonal_movement` is `None` the legacy flags decide the policy:
///
/// | `allow_diagonal` | `dont_cross_corners` | policy |
/// |---|---|---|
/// | `false` | any | [`Never`](DiagonalMovement::Never) |
/// | `true` | `true` | [`OnlyWhenNoObstacles`](DiagonalMovement::OnlyWhenNoObstacles) |
/// | `true` | `false` | [`IfAtMostOneObstacle`](DiagonalMovement::IfAtMostOneObstacle) |
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FinderOptions {
    /// Legacy flag: allow diagonal moves.
    pub allow_diagonal: bool,
    /// Legacy flag: forbid diagonal moves that touch a blocked corner.
    pub dont_cross_corners: bool,
    /// Explicit policy; takes precedence over the legacy flags.
    pub diagonal_movement: Option<DiagonalMovement>,
    /// Explicit heuristic; defaults to one admissible for the policy.
    pub heuristic: Option<Heuristic>,
    /// Multiplier applied to the heuristic. Values above 1 trade optimality
    /// for fewer expanded nodes.
    pub weight: f64,
}

impl Default for FinderOptions {
    fn default() -> Self {
        Self {
            allow_diagonal: false,
            dont_cross_corners: false,
            diagonal_movement: None,
            heuristic: None,
            weight: 1.0,
        }
    }
}

impl FinderOptions {
    /// Options with an explicit diagonal policy and everything else default.
    pub fn with_policy(policy: DiagonalMovement) -> Self {
        Self {
            diagonal_movement: Some(policy),
            ..Self::default()
        }
    }

    /// Set the heuristic.
    pub fn heuristic(mut self, heuristic: Heuristic) -> Self {
        self.heuristic = Some(heuristic);
        self
    }

    /// Set the heuristic weight.
    pub fn weight(mut self, weight: f64) -> Self {
        self.weight = weight;
        self
    }

    /// Resolve the options into a [`FinderConfig`].
    pub fn resolve(&self) -> Result<FinderConfig, FindError> {
        if !self.weight.is_finite() || self.weight < 1.0 {
            return Err(FindError::InvalidWeight(self.weight));
        }
        let diagonal_movement = self.diagonal_movement.unwrap_or(
            match (self.allow_diagonal, self.dont_cross_corners) {
                (false, _) => DiagonalMovement::Never,
                (true, true) => DiagonalMovement::OnlyWhenNoObstacles,
                (true, false) => DiagonalMovement::IfAtMostOneObstacle,
            },
        );
        Ok(FinderConfig {
            diagonal_movement,
            heuristic: self
                .heuristic
                .unwrap_or(Heuristic::default_for(diagonal_movement)),
            weight: self.weight,
        })
    }
}

/// Resolved finder configuration.
#[derive(Debug, Clone, Copy)]
pub struct FinderConfig {
    diagonal_movement: DiagonalMovement,
    heuristic: Heuristic,
    weight: f64,
}

impl Default for FinderConfig {
    fn default() -> Self {
        Self {
            diagonal_movement: DiagonalMovement::Never,
            heuristic: Heuristic::Manhattan,
            weight: 1.0,
        }
    }
}

impl FinderConfig {
    #[inline]
    pub fn diagonal_movement(&self) -> DiagonalMovement {
        self.diagonal_movement
    }

    #[inline]
    pub fn heuristic(&self) -> Heuristic {
        self.heuristic
    }

    #[inline]
    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// Unweighted heuristic estimate from `from` to `to`.
    #[inline]
    pub(crate) fn estimate(&self, from: Point, to: Point) -> f64 {
        f64::from(self.heuristic.between(from, to))
    }
}

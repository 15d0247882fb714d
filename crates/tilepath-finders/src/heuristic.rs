use tilepath_core::{DiagonalMovement, Point};

/// Cost of a diagonal step.
pub const SQRT2: f64 = std::f64::consts::SQRT_2;

/// Manhattan (L1) distance: `dx + dy`.
#[inline]
pub fn manhattan(dx: i32, dy: i32) -> i32 {
    dx + dy
}

/// Euclidean distance, rounded up.
#[inline]
pub fn euclidean(dx: i32, dy: i32) -> i32 {
    let (dx, dy) = (f64::from(dx), f64::from(dy));
    (dx * dx + dy * dy).sqrt().ceil() as i32
}

/// Octile distance (straight cost 1, diagonal cost √2), rounded up.
#[inline]
pub fn octile(dx: i32, dy: i32) -> i32 {
    let (lo, hi) = (dx.min(dy), dx.max(dy));
    ((SQRT2 - 1.0) * f64::from(lo) + f64::from(hi)).ceil() as i32
}

/// Chebyshev (L∞) distance: `max(dx, dy)`.
#[inline]
pub fn chebyshev(dx: i32, dy: i32) -> i32 {
    dx.max(dy)
}

/// Distance estimate used to guide a search towards its target.
///
/// Every variant receives absolute coordinate deltas `(dx, dy)`.
#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Heuristic {
    Manhattan,
    Euclidean,
    Octile,
    Chebyshev,
    /// A caller-supplied estimate. Negative results are treated as zero.
    /// Cannot be serialized.
    #[cfg_attr(feature = "serde", serde(skip))]
    Custom(fn(i32, i32) -> i32),
}

impl Heuristic {
    /// The heuristic used when the caller does not pick one: Manhattan for
    /// 4-connected movement, Octile as soon as any diagonal is allowed.
    pub fn default_for(policy: DiagonalMovement) -> Self {
        if policy.allows_diagonal() {
            Self::Octile
        } else {
            Self::Manhattan
        }
    }

    /// Estimate for the absolute deltas `(dx, dy)`.
    #[inline]
    pub fn estimate(self, dx: i32, dy: i32) -> i32 {
        match self {
            Self::Manhattan => manhattan(dx, dy),
            Self::Euclidean => euclidean(dx, dy),
            Self::Octile => octile(dx, dy),
            Self::Chebyshev => chebyshev(dx, dy),
            Self::Custom(f) => f(dx, dy).max(0),
        }
    }

    /// Estimate between two points.
    #[inline]
    pub fn between(self, a: Point, b: Point) -> i32 {
        let (dx, dy) = a.abs_delta(b);
        self.estimate(dx, dy)
    }
}

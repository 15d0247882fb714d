//! The [`Grid`] type: a fixed-size occupancy map of walkable / blocked
//! [`Node`]s, plus neighbor enumeration under a [`DiagonalMovement`] policy.
//!
//! A grid holds topology only. Search state (costs, parents) lives in the
//! finders and never touches the grid, so one grid can back any number of
//! searches.

use crate::error::GridError;
use crate::geom::{Point, Range};

// ---------------------------------------------------------------------------
// DiagonalMovement
// ---------------------------------------------------------------------------

/// Which diagonal moves are legal relative to the two straight cells that
/// flank them.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DiagonalMovement {
    /// Any walkable diagonal, even between two blocked flanks.
    Always,
    /// Straight moves only.
    Never,
    /// At least one flank must be walkable.
    IfAtMostOneObstacle,
    /// Both flanks must be walkable: no corner cutting.
    OnlyWhenNoObstacles,
}

impl DiagonalMovement {
    /// Whether a diagonal move is allowed given the walkability of its two
    /// flanking straight neighbors.
    #[inline]
    pub fn allows(self, flank_a: bool, flank_b: bool) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::IfAtMostOneObstacle => flank_a || flank_b,
            Self::OnlyWhenNoObstacles => flank_a && flank_b,
        }
    }

    /// Whether this policy permits diagonal movement at all.
    #[inline]
    pub fn allows_diagonal(self) -> bool {
        self != Self::Never
    }
}

// ---------------------------------------------------------------------------
// Node
// ---------------------------------------------------------------------------

/// A grid cell: its coordinate and whether it can be traversed.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Node {
    pub pos: Point,
    pub walkable: bool,
}

// ---------------------------------------------------------------------------
// Grid
// ---------------------------------------------------------------------------

// Straight offsets in N, E, S, W order.
const STRAIGHT: [Point; 4] = [
    Point::new(0, -1),
    Point::new(1, 0),
    Point::new(0, 1),
    Point::new(-1, 0),
];

// Diagonals in NW, NE, SE, SW order. Diagonal `i` is flanked by straight
// offsets `(i + 3) % 4` and `i`.
const DIAGONAL: [Point; 4] = [
    Point::new(-1, -1),
    Point::new(1, -1),
    Point::new(1, 1),
    Point::new(-1, 1),
];

/// A rectangular occupancy grid.
///
/// Dimensions are fixed at construction. Cloning yields a fully independent
/// copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: i32,
    height: i32,
    nodes: Vec<Node>,
}

impl Grid {
    /// Create a fully walkable grid of the given dimensions. Negative
    /// dimensions are clamped to zero.
    pub fn new(width: i32, height: i32) -> Self {
        let width = width.max(0);
        let height = height.max(0);
        let nodes = Range::new(0, 0, width, height)
            .iter()
            .map(|pos| Node {
                pos,
                walkable: true,
            })
            .collect();
        Self {
            width,
            height,
            nodes,
        }
    }

    /// Create a grid from a row-major occupancy matrix: zero is walkable,
    /// anything else is blocked.
    ///
    /// Fails with [`GridError::DimensionMismatch`] if the matrix does not
    /// have exactly `height` rows of `width` columns.
    pub fn from_matrix<R: AsRef<[i32]>>(
        width: i32,
        height: i32,
        matrix: &[R],
    ) -> Result<Self, GridError> {
        let mismatch = |bad_row| GridError::DimensionMismatch {
            width,
            height,
            rows: matrix.len(),
            bad_row,
        };
        if width < 0 || height < 0 || matrix.len() != height as usize {
            return Err(mismatch(None));
        }
        if let Some((i, row)) = matrix
            .iter()
            .enumerate()
            .find(|(_, row)| row.as_ref().len() != width as usize)
        {
            return Err(mismatch(Some((i, row.as_ref().len()))));
        }

        let mut grid = Self::new(width, height);
        for (node, v) in grid
            .nodes
            .iter_mut()
            .zip(matrix.iter().flat_map(|row| row.as_ref().iter()))
        {
            node.walkable = *v == 0;
        }
        Ok(grid)
    }

    /// Create a grid from a rectangular matrix, taking the dimensions from
    /// the matrix itself.
    pub fn from_rows<R: AsRef<[i32]>>(matrix: &[R]) -> Result<Self, GridError> {
        let height = matrix.len() as i32;
        let width = matrix.first().map_or(0, |row| row.as_ref().len()) as i32;
        Self::from_matrix(width, height, matrix)
    }

    /// Parse an ASCII map where `.` is walkable and `#` is blocked.
    ///
    /// Leading and trailing blank lines are ignored; all remaining lines
    /// must have the same length.
    pub fn parse(map: &str) -> Result<Self, GridError> {
        let lines: Vec<&str> = map
            .trim_matches('\n')
            .lines()
            .map(|l| l.trim_end_matches('\r'))
            .collect();
        let mut matrix = Vec::with_capacity(lines.len());
        for (y, line) in lines.iter().enumerate() {
            let mut row = Vec::with_capacity(line.len());
            for (x, ch) in line.chars().enumerate() {
                row.push(match ch {
                    '.' => 0,
                    '#' => 1,
                    _ => {
                        return Err(GridError::InvalidTile {
                            ch,
                            pos: Point::new(x as i32, y as i32),
                        });
                    }
                });
            }
            matrix.push(row);
        }
        Self::from_rows(&matrix)
    }

    /// Width in cells.
    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Height in cells.
    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// The grid extent as a range.
    #[inline]
    pub fn bounds(&self) -> Range {
        Range::new(0, 0, self.width, self.height)
    }

    /// Total number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the grid has no cells.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Whether `p` lies inside the grid.
    #[inline]
    pub fn is_inside(&self, p: Point) -> bool {
        self.bounds().contains(p)
    }

    /// Whether `p` is inside the grid and walkable.
    #[inline]
    pub fn is_walkable_at(&self, p: Point) -> bool {
        self.index(p).is_some_and(|i| self.nodes[i].walkable)
    }

    /// Flat row-major index of `p`, or `None` outside the grid.
    #[inline]
    pub fn index(&self, p: Point) -> Option<usize> {
        if !self.is_inside(p) {
            return None;
        }
        Some(p.y as usize * self.width as usize + p.x as usize)
    }

    /// Inverse of [`index`](Self::index).
    #[inline]
    pub fn point(&self, idx: usize) -> Point {
        let w = self.width as usize;
        Point::new((idx % w) as i32, (idx / w) as i32)
    }

    /// The node at `p`.
    pub fn node_at(&self, p: Point) -> Result<&Node, GridError> {
        let i = self.checked_index(p)?;
        Ok(&self.nodes[i])
    }

    /// Mark the node at `p` walkable or blocked.
    pub fn set_walkable_at(&mut self, p: Point, walkable: bool) -> Result<(), GridError> {
        let i = self.checked_index(p)?;
        self.nodes[i].walkable = walkable;
        Ok(())
    }

    /// Like [`index`](Self::index) but reports out-of-bounds positions as an
    /// error.
    pub fn checked_index(&self, p: Point) -> Result<usize, GridError> {
        self.index(p).ok_or(GridError::OutOfBounds {
            pos: p,
            width: self.width,
            height: self.height,
        })
    }

    /// Iterate over all nodes in row-major order.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter()
    }

    /// Export the occupancy matrix (0 walkable, 1 blocked).
    pub fn to_matrix(&self) -> Vec<Vec<i32>> {
        if self.width == 0 {
            return vec![Vec::new(); self.height as usize];
        }
        self.nodes
            .chunks(self.width as usize)
            .map(|row| row.iter().map(|n| i32::from(!n.walkable)).collect())
            .collect()
    }

    /// Append the walkable neighbors of `p` to `buf`, in N, E, S, W, NW, NE,
    /// SE, SW order. The caller clears `buf` before calling.
    ///
    /// Straight neighbors are always considered; diagonals are filtered by
    /// `policy` using the two straight cells flanking each of them.
    pub fn neighbors(&self, p: Point, policy: DiagonalMovement, buf: &mut Vec<Point>) {
        let mut straight = [false; 4];
        for (i, d) in STRAIGHT.iter().enumerate() {
            let n = p + *d;
            if self.is_walkable_at(n) {
                straight[i] = true;
                buf.push(n);
            }
        }

        if policy == DiagonalMovement::Never {
            return;
        }

        for (i, d) in DIAGONAL.iter().enumerate() {
            let n = p + *d;
            if policy.allows(straight[(i + 3) % 4], straight[i]) && self.is_walkable_at(n) {
                buf.push(n);
            }
        }
    }

    /// Whether moving from `from` to the cell `to` is a single legal step
    /// under `policy`.
    pub fn is_neighbor(&self, from: Point, to: Point, policy: DiagonalMovement) -> bool {
        let d = to - from;
        if d == Point::ZERO || d.x.abs() > 1 || d.y.abs() > 1 || !self.is_walkable_at(to) {
            return false;
        }
        if !from.is_diagonal_to(to) {
            return true;
        }
        policy.allows(
            self.is_walkable_at(from.shift(d.x, 0)),
            self.is_walkable_at(from.shift(0, d.y)),
        )
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct GridRepr {
    width: i32,
    height: i32,
    matrix: Vec<Vec<i32>>,
}

#[cfg(feature = "serde")]
impl serde::Serialize for Grid {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        GridRepr {
            width: self.width,
            height: self.height,
            matrix: self.to_matrix(),
        }
        .serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Grid {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let repr = GridRepr::deserialize(deserializer)?;
        Grid::from_matrix(repr.width, repr.height, &repr.matrix).map_err(serde::de::Error::custom)
    }
}

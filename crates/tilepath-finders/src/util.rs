//! Path post-processing: length, line rasterization, expansion, smoothing
//! and compression.
//!
//! None of these are needed for correctness of the searches; they reshape a
//! finished path. Smoothed and compressed paths are no longer made of
//! adjacent steps; [`expand_path`] turns them back into cell-by-cell paths.

use tilepath_core::{DiagonalMovement, Grid, Point};

use crate::heuristic;

/// Length of `path`: the sum of the Euclidean length of each segment,
/// rounded up per segment.
pub fn path_length(path: &[Point]) -> i32 {
    path.windows(2)
        .map(|w| {
            let (dx, dy) = w[0].abs_delta(w[1]);
            heuristic::euclidean(dx, dy)
        })
        .sum()
}

/// Every cell on the Bresenham line from `from` to `to`, both inclusive.
pub fn interpolate(from: Point, to: Point) -> Vec<Point> {
    let (dx, dy) = from.abs_delta(to);
    let sx = if from.x < to.x { 1 } else { -1 };
    let sy = if from.y < to.y { 1 } else { -1 };
    let mut err = dx - dy;
    let mut cur = from;
    let mut line = Vec::with_capacity(dx.max(dy) as usize + 1);

    loop {
        line.push(cur);
        if cur == to {
            break;
        }
        let e2 = 2 * err;
        if e2 > -dy {
            err -= dy;
            cur.x += sx;
        }
        if e2 < dx {
            err += dx;
            cur.y += sy;
        }
    }
    line
}

/// Replace every segment of a compressed path by the cells of its line.
///
/// Paths with fewer than two points are returned unchanged.
pub fn expand_path(path: &[Point]) -> Vec<Point> {
    let (Some(&last), true) = (path.last(), path.len() >= 2) else {
        return path.to_vec();
    };
    let mut expanded = Vec::with_capacity(path_length(path) as usize + 1);
    for w in path.windows(2) {
        let line = interpolate(w[0], w[1]);
        expanded.extend_from_slice(&line[..line.len() - 1]);
    }
    expanded.push(last);
    expanded
}

/// Shorten `path` by cutting straight across open ground.
///
/// Starting from the first point, the anchor keeps looking further along
/// the path while the straight line to the candidate crosses only walkable
/// cells. When a line is blocked, the previous point becomes the new anchor.
/// The result is a subsequence of `path` with the same endpoints.
pub fn smoothen_path(grid: &Grid, path: &[Point]) -> Vec<Point> {
    if path.len() < 3 {
        return path.to_vec();
    }
    let mut anchor = path[0];
    let mut smoothed = vec![anchor];

    for i in 2..path.len() {
        let blocked = interpolate(anchor, path[i])
            .iter()
            .skip(1)
            .any(|&p| !grid.is_walkable_at(p));
        if blocked {
            anchor = path[i - 1];
            smoothed.push(anchor);
        }
    }

    smoothed.push(path[path.len() - 1]);
    smoothed
}

/// Drop interior points that continue in the same direction as the segment
/// before them.
///
/// Paths with fewer than three points are returned unchanged.
pub fn compress_path(path: &[Point]) -> Vec<Point> {
    if path.len() < 3 {
        return path.to_vec();
    }
    let mut compressed = vec![path[0]];
    for w in path.windows(3) {
        if direction(w[0], w[1]) != direction(w[1], w[2]) {
            compressed.push(w[1]);
        }
    }
    compressed.push(path[path.len() - 1]);
    compressed
}

/// Whether `path` is a walkable sequence of legal single moves under
/// `policy`. Empty paths are trivially valid.
pub fn is_valid_path(grid: &Grid, path: &[Point], policy: DiagonalMovement) -> bool {
    path.first().is_none_or(|&p| grid.is_walkable_at(p))
        && path.windows(2).all(|w| grid.is_neighbor(w[0], w[1], policy))
}

// Segment direction reduced to lowest terms.
fn direction(from: Point, to: Point) -> Point {
    let d = to - from;
    let g = gcd(d.x.abs(), d.y.abs());
    if g == 0 {
        d
    } else {
        Point::new(d.x / g, d.y / g)
    }
}

fn gcd(mut a: i32, mut b: i32) -> i32 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

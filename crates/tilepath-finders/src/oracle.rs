//! Reference searches and fixtures used by the finder tests.
//!
//! The breadth-first and Dijkstra searches here walk the grid with their own
//! queues so that the finders can be checked against an independent answer.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, VecDeque};

use rand::Rng;
use tilepath_core::{DiagonalMovement, Grid, Point};

use crate::search::step_cost;

pub(crate) const POLICIES: [DiagonalMovement; 4] = [
    DiagonalMovement::Always,
    DiagonalMovement::Never,
    DiagonalMovement::IfAtMostOneObstacle,
    DiagonalMovement::OnlyWhenNoObstacles,
];

pub(crate) struct Fixture {
    pub(crate) grid: Grid,
    pub(crate) start: Point,
    pub(crate) end: Point,
}

fn fixture(rows: &[&[i32]], start: (i32, i32), end: (i32, i32)) -> Fixture {
    Fixture {
        grid: Grid::from_rows(rows).unwrap(),
        start: start.into(),
        end: end.into(),
    }
}

/// The reference maps with their expected path lengths (in cells) when
/// diagonal moves are forbidden.
pub(crate) fn fixtures() -> Vec<(Fixture, usize)> {
    vec![
        (fixture(&[&[0, 0], &[1, 0]], (0, 0), (1, 1)), 3),
        (
            fixture(&[&[0, 0, 0], &[1, 1, 0], &[0, 0, 0]], (0, 0), (2, 2)),
            5,
        ),
        (
            fixture(
                &[
                    &[0, 0, 0, 0, 0],
                    &[1, 0, 1, 1, 0],
                    &[1, 0, 1, 0, 0],
                    &[0, 1, 0, 0, 0],
                    &[1, 0, 1, 1, 0],
                    &[0, 0, 1, 0, 0],
                ],
                (1, 1),
                (4, 4),
            ),
            9,
        ),
        (
            fixture(
                &[
                    &[0, 0, 0, 0, 0],
                    &[0, 0, 1, 1, 0],
                    &[0, 0, 1, 0, 0],
                    &[0, 0, 1, 0, 0],
                    &[1, 0, 1, 1, 0],
                    &[0, 0, 0, 0, 0],
                ],
                (0, 3),
                (3, 3),
            ),
            10,
        ),
    ]
}

/// Whether every step of `path` is a legal single move under `policy`.
pub(crate) fn is_connected(grid: &Grid, path: &[Point], policy: DiagonalMovement) -> bool {
    if path.iter().any(|&p| !grid.is_walkable_at(p)) {
        return false;
    }
    path.windows(2).all(|w| {
        let (a, b) = (w[0], w[1]);
        let (dx, dy) = a.abs_delta(b);
        match (dx, dy) {
            (1, 0) | (0, 1) => true,
            (1, 1) => policy.allows(
                grid.is_walkable_at(Point::new(b.x, a.y)),
                grid.is_walkable_at(Point::new(a.x, b.y)),
            ),
            _ => false,
        }
    })
}

/// A random grid where each cell is blocked with probability `density`.
/// The origin is always walkable.
pub(crate) fn random_grid(rng: &mut impl Rng, width: i32, height: i32, density: f64) -> Grid {
    let mut grid = Grid::new(width, height);
    for p in grid.bounds() {
        if p != Point::ZERO && rng.random_bool(density) {
            grid.set_walkable_at(p, false).unwrap();
        }
    }
    grid
}

/// Two walkable cells picked at random, possibly the same.
pub(crate) fn random_endpoints(rng: &mut impl Rng, grid: &Grid) -> (Point, Point) {
    let open: Vec<Point> = grid
        .nodes()
        .filter(|n| n.walkable)
        .map(|n| n.pos)
        .collect();
    let start = open[rng.random_range(0..open.len())];
    let end = open[rng.random_range(0..open.len())];
    (start, end)
}

/// Fewest-cells path by breadth-first search.
pub(crate) fn bfs_path(
    grid: &Grid,
    start: Point,
    end: Point,
    policy: DiagonalMovement,
) -> Option<Vec<Point>> {
    let si = grid.index(start)?;
    let ei = grid.index(end)?;
    let mut parent: Vec<Option<usize>> = vec![None; grid.len()];
    let mut seen = vec![false; grid.len()];
    let mut queue = VecDeque::new();
    let mut nbuf = Vec::with_capacity(8);

    seen[si] = true;
    queue.push_back(si);
    while let Some(ci) = queue.pop_front() {
        if ci == ei {
            let mut path = vec![grid.point(ci)];
            let mut cur = ci;
            while let Some(p) = parent[cur] {
                path.push(grid.point(p));
                cur = p;
            }
            path.reverse();
            return Some(path);
        }
        nbuf.clear();
        grid.neighbors(grid.point(ci), policy, &mut nbuf);
        for &np in nbuf.iter() {
            let Some(ni) = grid.index(np) else {
                continue;
            };
            if seen[ni] {
                continue;
            }
            seen[ni] = true;
            parent[ni] = Some(ci);
            queue.push_back(ni);
        }
    }
    None
}

// Min-heap entry.
#[derive(PartialEq)]
struct Entry {
    cost: f64,
    idx: usize,
}

impl Eq for Entry {}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        other.cost.total_cmp(&self.cost)
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Cost of the cheapest path with unit straight and √2 diagonal steps.
pub(crate) fn dijkstra_cost(
    grid: &Grid,
    start: Point,
    end: Point,
    policy: DiagonalMovement,
) -> Option<f64> {
    let si = grid.index(start)?;
    let ei = grid.index(end)?;
    let mut dist = vec![f64::INFINITY; grid.len()];
    let mut heap = BinaryHeap::new();
    let mut nbuf = Vec::with_capacity(8);

    dist[si] = 0.0;
    heap.push(Entry { cost: 0.0, idx: si });
    while let Some(Entry { cost, idx }) = heap.pop() {
        if idx == ei {
            return Some(cost);
        }
        if cost > dist[idx] {
            continue;
        }
        let cp = grid.point(idx);
        nbuf.clear();
        grid.neighbors(cp, policy, &mut nbuf);
        for &np in nbuf.iter() {
            let Some(ni) = grid.index(np) else {
                continue;
            };
            let nc = cost + step_cost(cp, np);
            if nc < dist[ni] {
                dist[ni] = nc;
                heap.push(Entry { cost: nc, idx: ni });
            }
        }
    }
    None
}

/// Cost of `path` with unit straight and √2 diagonal steps.
pub(crate) fn path_cost(path: &[Point]) -> f64 {
    path.windows(2).map(|w| step_cost(w[0], w[1])).sum()
}

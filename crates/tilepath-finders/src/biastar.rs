//! Bidirectional A*.
//!
//! One search grows from the start towards the end, another from the end
//! towards the start, each advancing a single node per turn. Whenever a
//! search touches a cell already discovered by the other one, the joined
//! route is recorded as a meeting. The cheapest meeting is returned once its
//! cost is no larger than the lowest `f` on either frontier, or when one
//! frontier runs dry.

use tilepath_core::{Grid, Point};

use crate::error::FindError;
use crate::frontier::Frontier;
use crate::options::{FinderConfig, FinderOptions};
use crate::search::{self, SearchSpace, Side};
use crate::traits::Finder;

/// Bidirectional A* search.
#[derive(Debug, Clone, Copy, Default)]
pub struct BiAStarFinder {
    config: FinderConfig,
}

/// One of the two searches.
struct Wave {
    space: SearchSpace,
    open: Frontier,
    /// Seed of the opposite search, used for the heuristic.
    target: Point,
    expanded: usize,
}

impl Wave {
    fn new(side: Side, grid: &Grid, config: &FinderConfig, seed: Point, target: Point) -> Self {
        let mut space = SearchSpace::new(side, grid.len(), config.weight());
        let mut open = Frontier::new(grid.len());
        if let Some(i) = grid.index(seed) {
            space.seed(&mut open, i, config.estimate(seed, target));
        }
        Self {
            space,
            open,
            target,
            expanded: 0,
        }
    }
}

/// A point where the two searches touch: `near` belongs to the search on
/// `side`, `far` to the other one. They are equal or adjacent.
#[derive(Clone, Copy, Debug)]
struct Meeting {
    side: Side,
    near: usize,
    far: usize,
    cost: f64,
}

fn record(best: &mut Option<Meeting>, m: Meeting) {
    if best.is_none_or(|b| m.cost < b.cost) {
        log::trace!(
            "biastar: meeting ({:?}) {} <-> {} at cost {:.3}",
            m.side,
            m.near,
            m.far,
            m.cost
        );
        *best = Some(m);
    }
}

impl BiAStarFinder {
    /// Create a finder, resolving `options` once.
    pub fn new(options: FinderOptions) -> Result<Self, FindError> {
        Ok(Self {
            config: options.resolve()?,
        })
    }

    /// The resolved configuration.
    pub fn config(&self) -> &FinderConfig {
        &self.config
    }

    /// Advance `wave` by one node. Returns `false` once the search is over.
    fn advance(
        &self,
        grid: &Grid,
        wave: &mut Wave,
        other: &Wave,
        best: &mut Option<Meeting>,
        nbuf: &mut Vec<Point>,
    ) -> bool {
        if let Some(m) = best {
            if wave.open.peek().is_none_or(|(_, f)| m.cost <= f) {
                return false;
            }
        }
        let Some(ci) = wave.open.pop() else {
            return false;
        };
        wave.space.settle(ci);
        wave.expanded += 1;

        let side = wave.space.side;
        let g = wave.space.state(ci).g;
        if other.space.is_discovered(ci) {
            record(
                best,
                Meeting {
                    side,
                    near: ci,
                    far: ci,
                    cost: g + other.space.state(ci).g,
                },
            );
        }

        let cp = grid.point(ci);
        let target = wave.target;
        nbuf.clear();
        grid.neighbors(cp, self.config.diagonal_movement(), nbuf);

        for &np in nbuf.iter() {
            let Some(ni) = grid.index(np) else {
                continue;
            };
            let step = search::step_cost(cp, np);
            // The meeting is stitched through `ci`, so `ni`'s own state on
            // this side never ends up in the path.
            if other.space.is_discovered(ni) {
                record(
                    best,
                    Meeting {
                        side,
                        near: ci,
                        far: ni,
                        cost: g + step + other.space.state(ni).g,
                    },
                );
            }
            if wave.space.is_settled(ni) {
                continue;
            }
            wave.space
                .relax(&mut wave.open, ci, ni, step, || self.config.estimate(np, target));
        }
        true
    }
}

impl From<FinderConfig> for BiAStarFinder {
    fn from(config: FinderConfig) -> Self {
        Self { config }
    }
}

impl Finder for BiAStarFinder {
    fn find_path(&self, start: Point, end: Point, grid: &Grid) -> Result<Vec<Point>, FindError> {
        let (start_idx, end_idx) = search::endpoints(grid, start, end)?;
        if start_idx == end_idx {
            return Ok(vec![start]);
        }
        if grid.is_neighbor(start, end, self.config.diagonal_movement()) {
            return Ok(vec![start, end]);
        }

        let mut fwd = Wave::new(Side::FromStart, grid, &self.config, start, end);
        let mut bwd = Wave::new(Side::FromEnd, grid, &self.config, end, start);
        let mut best = None;
        let mut nbuf = Vec::with_capacity(8);

        while self.advance(grid, &mut fwd, &bwd, &mut best, &mut nbuf)
            && self.advance(grid, &mut bwd, &fwd, &mut best, &mut nbuf)
        {}

        let expanded = fwd.expanded + bwd.expanded;
        let Some(m) = best else {
            log::debug!("biastar: {start} -> {end}: no path, {expanded} nodes expanded");
            return Ok(Vec::new());
        };

        let (head, tail) = match m.side {
            Side::FromStart => (
                fwd.space.backtrace(grid, m.near),
                bwd.space.backtrace(grid, m.far),
            ),
            Side::FromEnd => (
                fwd.space.backtrace(grid, m.far),
                bwd.space.backtrace(grid, m.near),
            ),
        };
        let path = search::bi_backtrace(head, tail);
        log::debug!(
            "biastar: {start} -> {end}: {} cells, cost {:.3}, {expanded} nodes expanded",
            path.len(),
            m.cost
        );
        Ok(path)
    }
}

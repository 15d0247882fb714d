use tilepath_core::{Grid, Point};

use crate::error::FindError;
use crate::frontier::Frontier;
use crate::options::{FinderConfig, FinderOptions};
use crate::search::{self, SearchSpace, Side};
use crate::traits::Finder;

/// Single-frontier A* search.
#[derive(Debug, Clone, Copy, Default)]
pub struct AStarFinder {
    config: FinderConfig,
}

impl AStarFinder {
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
}

impl From<FinderConfig> for AStarFinder {
    fn from(config: FinderConfig) -> Self {
        Self { config }
    }
}

impl Finder for AStarFinder {
    fn find_path(&self, start: Point, end: Point, grid: &Grid) -> Result<Vec<Point>, FindError> {
        let (start_idx, goal_idx) = search::endpoints(grid, start, end)?;
        if start_idx == goal_idx {
            return Ok(vec![start]);
        }

        let policy = self.config.diagonal_movement();
        let mut space = SearchSpace::new(Side::FromStart, grid.len(), self.config.weight());
        let mut open = Frontier::new(grid.len());
        space.seed(&mut open, start_idx, self.config.estimate(start, end));

        let mut nbuf = Vec::with_capacity(8);
        let mut expanded = 0usize;

        while let Some(ci) = open.pop() {
            space.settle(ci);
            expanded += 1;

            if ci == goal_idx {
                let path = space.backtrace(grid, ci);
                log::debug!(
                    "astar: {start} -> {end}: {} cells, cost {:.3}, {expanded} nodes expanded",
                    path.len(),
                    space.state(ci).g
                );
                return Ok(path);
            }

            let cp = grid.point(ci);
            nbuf.clear();
            grid.neighbors(cp, policy, &mut nbuf);

            for &np in nbuf.iter() {
                let Some(ni) = grid.index(np) else {
                    continue;
                };
                if space.is_settled(ni) {
                    continue;
                }
                space.relax(&mut open, ci, ni, search::step_cost(cp, np), || {
                    self.config.estimate(np, end)
                });
            }
        }

        log::debug!("astar: {start} -> {end}: no path, {expanded} nodes expanded");
        Ok(Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::heuristic::Heuristic;
    use crate::oracle;
    use crate::util::path_length;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use tilepath_core::{DiagonalMovement, GridError};

    fn finder(policy: DiagonalMovement) -> AStarFinder {
        AStarFinder::new(FinderOptions::with_policy(policy)).unwrap()
    }

    fn pts(v: &[(i32, i32)]) -> Vec<Point> {
        v.iter().map(|&p| Point::from(p)).collect()
    }

    #[test]
    fn small_corner_without_diagonals() {
        let grid = Grid::from_rows(&[[0, 0], [1, 0]]).unwrap();
        let path = finder(DiagonalMovement::Never)
            .find_path(Point::new(0, 0), Point::new(1, 1), &grid)
            .unwrap();
        assert_eq!(path, pts(&[(0, 0), (1, 0), (1, 1)]));
    }

    #[test]
    fn single_diagonal_hop_past_wall() {
        let grid = Grid::from_rows(&[[0, 0, 0], [1, 1, 0], [0, 0, 0]]).unwrap();
        let path = finder(DiagonalMovement::Always)
            .find_path(Point::new(0, 0), Point::new(2, 2), &grid)
            .unwrap();
        assert_eq!(path, pts(&[(0, 0), (1, 0), (2, 1), (2, 2)]));
        let diagonals = path
            .windows(2)
            .filter(|w| w[0].is_diagonal_to(w[1]))
            .count();
        assert_eq!(diagonals, 1);
    }

    #[test]
    fn fixture_maps_without_diagonals() {
        for (fx, expected) in oracle::fixtures() {
            let path = finder(DiagonalMovement::Never)
                .find_path(fx.start, fx.end, &fx.grid)
                .unwrap();
            assert_eq!(path.len(), expected, "{} -> {}", fx.start, fx.end);
            assert!(oracle::is_connected(&fx.grid, &path, DiagonalMovement::Never));
        }
    }

    #[test]
    fn enclosed_start_yields_empty_path() {
        let grid = Grid::parse(
            "
.....
.###.
.#.#.
.###.
.....",
        )
        .unwrap();
        for policy in oracle::POLICIES {
            let path = finder(policy)
                .find_path(Point::new(2, 2), Point::new(0, 0), &grid)
                .unwrap();
            assert!(path.is_empty(), "{policy:?}");
        }
    }

    #[test]
    fn only_always_squeezes_between_blocked_flanks() {
        let grid = Grid::parse(
            "
.#...
#....
.....",
        )
        .unwrap();
        for policy in [
            DiagonalMovement::Never,
            DiagonalMovement::IfAtMostOneObstacle,
            DiagonalMovement::OnlyWhenNoObstacles,
        ] {
            let path = finder(policy)
                .find_path(Point::new(0, 0), Point::new(4, 2), &grid)
                .unwrap();
            assert!(path.is_empty(), "{policy:?}");
        }
        let path = finder(DiagonalMovement::Always)
            .find_path(Point::new(0, 0), Point::new(4, 2), &grid)
            .unwrap();
        assert_eq!(path[1], Point::new(1, 1));
    }

    #[test]
    fn start_equals_end() {
        let grid = Grid::new(3, 3);
        let path = finder(DiagonalMovement::Always)
            .find_path(Point::new(1, 1), Point::new(1, 1), &grid)
            .unwrap();
        assert_eq!(path, vec![Point::new(1, 1)]);
    }

    #[test]
    fn invalid_endpoints_are_errors() {
        let grid = Grid::from_rows(&[[0, 1], [0, 0]]).unwrap();
        let f = AStarFinder::default();
        assert_eq!(
            f.find_path(Point::new(0, 0), Point::new(1, 0), &grid),
            Err(FindError::BlockedEndpoint {
                pos: Point::new(1, 0)
            })
        );
        assert!(matches!(
            f.find_path(Point::new(0, 0), Point::new(0, 5), &grid),
            Err(FindError::Grid(GridError::OutOfBounds { .. }))
        ));
    }

    #[test]
    fn grid_is_reusable_across_searches() {
        let grid = Grid::parse(
            "
.....
.###.
.....",
        )
        .unwrap();
        let f = finder(DiagonalMovement::Never);
        let a = f.find_path(Point::new(0, 1), Point::new(4, 1), &grid).unwrap();
        let b = f.find_path(Point::new(4, 1), Point::new(0, 1), &grid).unwrap();
        let a2 = f.find_path(Point::new(0, 1), Point::new(4, 1), &grid).unwrap();
        assert_eq!(a, a2);
        assert_eq!(a.len(), b.len());
        assert_eq!(a.len(), 7);
    }

    #[test]
    fn parallel_searches_share_one_grid() {
        let grid = Grid::parse(
            "
......
.####.
......",
        )
        .unwrap();
        let f = finder(DiagonalMovement::Never);
        let paths: Vec<Vec<Point>> = std::thread::scope(|s| {
            let handles: Vec<_> = (0..4)
                .map(|_| s.spawn(|| f.find_path(Point::new(0, 1), Point::new(5, 1), &grid)))
                .collect();
            handles
                .into_iter()
                .map(|h| h.join().unwrap().unwrap())
                .collect()
        });
        assert!(paths.iter().all(|p| p.len() == 8 && *p == paths[0]));
    }

    #[test]
    fn weighted_search_still_finds_a_path() {
        let grid = Grid::parse(
            "
........
.######.
......#.
.####.#.
........",
        )
        .unwrap();
        let f = AStarFinder::new(
            FinderOptions::with_policy(DiagonalMovement::OnlyWhenNoObstacles).weight(3.0),
        )
        .unwrap();
        let path = f.find_path(Point::new(0, 0), Point::new(7, 4), &grid).unwrap();
        assert_eq!(path.first(), Some(&Point::new(0, 0)));
        assert_eq!(path.last(), Some(&Point::new(7, 4)));
        assert!(oracle::is_connected(
            &grid,
            &path,
            DiagonalMovement::OnlyWhenNoObstacles
        ));
    }

    #[test]
    fn never_longer_than_breadth_first() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..150 {
            let grid = oracle::random_grid(&mut rng, 12, 9, 0.3);
            let (start, end) = oracle::random_endpoints(&mut rng, &grid);
            for (policy, heuristic) in [
                (DiagonalMovement::Never, Heuristic::Manhattan),
                (DiagonalMovement::Always, Heuristic::Chebyshev),
                (DiagonalMovement::IfAtMostOneObstacle, Heuristic::Chebyshev),
                (DiagonalMovement::OnlyWhenNoObstacles, Heuristic::Chebyshev),
            ] {
                let f =
                    AStarFinder::new(FinderOptions::with_policy(policy).heuristic(heuristic))
                        .unwrap();
                let path = f.find_path(start, end, &grid).unwrap();
                let bfs = oracle::bfs_path(&grid, start, end, policy);
                match bfs {
                    None => assert!(path.is_empty()),
                    Some(bfs) => {
                        assert_eq!(path.first(), Some(&start));
                        assert_eq!(path.last(), Some(&end));
                        assert!(oracle::is_connected(&grid, &path, policy));
                        assert!(path_length(&path) <= path_length(&bfs));
                        let best = oracle::dijkstra_cost(&grid, start, end, policy).unwrap();
                        assert!((oracle::path_cost(&path) - best).abs() < 1e-9);
                    }
                }
            }
        }
    }

    #[test]
    fn default_heuristics_keep_paths_connected() {
        let mut rng = StdRng::seed_from_u64(5);
        for _ in 0..100 {
            let grid = oracle::random_grid(&mut rng, 10, 10, 0.25);
            let (start, end) = oracle::random_endpoints(&mut rng, &grid);
            for policy in oracle::POLICIES {
                let path = finder(policy).find_path(start, end, &grid).unwrap();
                let reachable = oracle::bfs_path(&grid, start, end, policy).is_some();
                assert_eq!(!path.is_empty(), reachable);
                assert!(oracle::is_connected(&grid, &path, policy));
            }
        }
    }
}

//! Scenario runner shared by the `tilepath-demo` binary.
//!
//! Each [`Scenario`] is searched with both finders under every diagonal
//! policy. The resulting [`Report`]s carry path sizes before and after
//! post-processing together with the search time.

use std::time::{Duration, Instant};

use tilepath_core::{DiagonalMovement, Grid, GridError, Point};
use tilepath_finders::{
    AStarFinder, BiAStarFinder, FindError, Finder, FinderOptions, compress_path, path_length,
    smoothen_path,
};

pub const POLICIES: [DiagonalMovement; 4] = [
    DiagonalMovement::Never,
    DiagonalMovement::OnlyWhenNoObstacles,
    DiagonalMovement::IfAtMostOneObstacle,
    DiagonalMovement::Always,
];

const MAZE: &str = "
....................
.#######.##########.
.#.....#.#........#.
.#.###.#.#.######.#.
.#.#...#...#....#.#.
.#.#.#######.##.#.#.
.#.#.........#..#...
.#.###########.####.
.#..................
.##################.
....................";

/// A map with its endpoints.
pub struct Scenario {
    pub name: &'static str,
    pub grid: Grid,
    pub start: Point,
    pub end: Point,
    /// Expected path length in cells with diagonals forbidden, if known.
    pub expected_cells: Option<usize>,
}

/// All built-in scenarios.
pub fn scenarios() -> Result<Vec<Scenario>, GridError> {
    Ok(vec![
        Scenario {
            name: "corner",
            grid: Grid::from_matrix(2, 2, &[[0, 0], [1, 0]])?,
            start: Point::new(0, 0),
            end: Point::new(1, 1),
            expected_cells: Some(3),
        },
        Scenario {
            name: "wall",
            grid: Grid::from_matrix(3, 3, &[[0, 0, 0], [1, 1, 0], [0, 0, 0]])?,
            start: Point::new(0, 0),
            end: Point::new(2, 2),
            expected_cells: Some(5),
        },
        Scenario {
            name: "cave",
            grid: Grid::from_matrix(
                5,
                6,
                &[
                    [0, 0, 0, 0, 0],
                    [1, 0, 1, 1, 0],
                    [1, 0, 1, 0, 0],
                    [0, 1, 0, 0, 0],
                    [1, 0, 1, 1, 0],
                    [0, 0, 1, 0, 0],
                ],
            )?,
            start: Point::new(1, 1),
            end: Point::new(4, 4),
            expected_cells: Some(9),
        },
        Scenario {
            name: "pillar",
            grid: Grid::from_matrix(
                5,
                6,
                &[
                    [0, 0, 0, 0, 0],
                    [0, 0, 1, 1, 0],
                    [0, 0, 1, 0, 0],
                    [0, 0, 1, 0, 0],
                    [1, 0, 1, 1, 0],
                    [0, 0, 0, 0, 0],
                ],
            )?,
            start: Point::new(0, 3),
            end: Point::new(3, 3),
            expected_cells: Some(10),
        },
        Scenario {
            name: "maze",
            grid: Grid::parse(MAZE)?,
            start: Point::new(2, 2),
            end: Point::new(19, 10),
            expected_cells: None,
        },
    ])
}

/// Outcome of one search.
#[derive(Debug, Clone)]
pub struct Report {
    pub finder: &'static str,
    pub policy: DiagonalMovement,
    pub path: Vec<Point>,
    pub length: i32,
    pub smoothed_cells: usize,
    pub compressed_cells: usize,
    pub elapsed: Duration,
}

fn search(
    name: &'static str,
    finder: &dyn Finder,
    scenario: &Scenario,
    policy: DiagonalMovement,
) -> Result<Report, FindError> {
    let now = Instant::now();
    let path = finder.find_path(scenario.start, scenario.end, &scenario.grid)?;
    let elapsed = now.elapsed();
    Ok(Report {
        finder: name,
        policy,
        length: path_length(&path),
        smoothed_cells: smoothen_path(&scenario.grid, &path).len(),
        compressed_cells: compress_path(&path).len(),
        path,
        elapsed,
    })
}

/// Search `scenario` with both finders under `policy`.
pub fn run(scenario: &Scenario, policy: DiagonalMovement) -> Result<[Report; 2], FindError> {
    let options = FinderOptions::with_policy(policy);
    let astar = AStarFinder::new(options)?;
    let biastar = BiAStarFinder::new(options)?;
    Ok([
        search("astar", &astar, scenario, policy)?,
        search("biastar", &biastar, scenario, policy)?,
    ])
}

/// Draw `grid` as ASCII with `path` overlaid: `S` and `E` mark the
/// endpoints, `*` the cells in between.
pub fn render(grid: &Grid, path: &[Point]) -> String {
    let mut rows: Vec<Vec<char>> = grid
        .to_matrix()
        .iter()
        .map(|row| row.iter().map(|&v| if v == 0 { '.' } else { '#' }).collect())
        .collect();
    let mut mark = |p: Point, ch: char| {
        if let Some(c) = rows
            .get_mut(p.y as usize)
            .and_then(|row| row.get_mut(p.x as usize))
        {
            *c = ch;
        }
    };
    for &p in path {
        mark(p, '*');
    }
    if let (Some(&first), Some(&last)) = (path.first(), path.last()) {
        mark(first, 'S');
        mark(last, 'E');
    }
    rows.into_iter()
        .map(|row| row.into_iter().collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

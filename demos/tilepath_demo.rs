//! Runs the built-in scenarios through both finders and logs the results.
//!
//! Run: RUST_LOG=info cargo run --bin tilepath-demo

use tilepath_core::DiagonalMovement;
use tilepath_demos::{POLICIES, render, run, scenarios};

fn main() {
    env_logger::init();

    let scenarios = match scenarios() {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    for scenario in &scenarios {
        log::info!(
            "{}: {}x{} grid, {} -> {}",
            scenario.name,
            scenario.grid.width(),
            scenario.grid.height(),
            scenario.start,
            scenario.end
        );
        for policy in POLICIES {
            let reports = match run(scenario, policy) {
                Ok(r) => r,
                Err(e) => {
                    log::warn!("{} {policy:?}: {e}", scenario.name);
                    continue;
                }
            };
            for r in &reports {
                log::info!(
                    "  {:<8} {:<20} {:>3} cells, length {:>3}, smoothed {:>3}, compressed {:>3}, {:?}",
                    r.finder,
                    format!("{:?}", r.policy),
                    r.path.len(),
                    r.length,
                    r.smoothed_cells,
                    r.compressed_cells,
                    r.elapsed
                );
            }
            if let Some(expected) = scenario.expected_cells {
                if policy == DiagonalMovement::Never
                    && reports.iter().any(|r| r.path.len() != expected)
                {
                    log::warn!("{}: expected {expected} cells", scenario.name);
                }
            }
        }
        if let Ok([best, _]) = run(scenario, DiagonalMovement::OnlyWhenNoObstacles) {
            println!("{}:\n{}\n", scenario.name, render(&scenario.grid, &best.path));
        }
    }
}

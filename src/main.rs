//! Headless Swiftris runner (default binary).
//!
//! Plays one seeded game with a random placement policy and prints a summary,
//! or the final snapshot as JSON with `--json`.

use anyhow::Result;
use tracing::Level;
use tracing_subscriber::prelude::*;

use swiftris::sim::{parse_sim_args, run_sim};

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = parse_sim_args(&args)?;

    let level = match config.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .with(tracing_subscriber::filter::LevelFilter::from_level(level))
        .init();

    let summary = run_sim(&config);

    if config.json {
        println!("{}", serde_json::to_string(&summary.snapshot)?);
    } else {
        println!(
            "seed={} pieces={} lines={} score={} level={} game_over={}",
            summary.seed,
            summary.pieces_landed,
            summary.lines_cleared,
            summary.final_score,
            summary.final_level,
            summary.game_over
        );
    }
    Ok(())
}

use std::time::Instant;

use colored::Colorize;
use serde::Serialize;
use tracing::info;

use rsb_engine::{Estimator, EstimatorConfig, RaceState, StreakTracker};

use super::{HorseReport, render_table, rows_from_tally};

#[derive(Serialize)]
struct SimulationReport {
    races: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    seed: Option<u64>,
    horses: Vec<HorseReport>,
}

pub fn run(races: usize, seed: Option<u64>, sequential: bool, json: bool) -> Result<(), String> {
    let mut config = EstimatorConfig::default().with_parallel(!sequential);
    if let Some(seed) = seed {
        config = config.with_seed(seed);
    }
    let mut estimator = Estimator::new(config);

    let started = Instant::now();
    let tally = estimator.tally_from(races, RaceState::new(), StreakTracker::new());
    let elapsed = started.elapsed().as_secs_f64();
    info!(races, elapsed_s = elapsed, "simulation finished");

    let rows = rows_from_tally(&tally);

    if json {
        let report = SimulationReport {
            races: tally.trials(),
            seed,
            horses: rows,
        };
        let out = serde_json::to_string_pretty(&report)
            .map_err(|e| format!("failed to serialize report: {e}"))?;
        println!("{out}");
        return Ok(());
    }

    let seed_label = seed.map_or_else(|| "random".to_string(), |s| s.to_string());
    println!(
        "  {} {}",
        "Simulation".bold(),
        format!("({races} races, seed={seed_label})").dimmed()
    );
    println!();

    let favorite = tally.probabilities().favorite();
    println!("{}", render_table(&rows, favorite));
    println!();
    if let Some(favorite) = favorite {
        println!("  Most wins: {}", favorite.label().green().bold());
    }
    println!("  Simulation time: {elapsed:.2}s");

    Ok(())
}

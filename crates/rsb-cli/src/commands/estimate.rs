use colored::Colorize;
use serde::Serialize;

use rsb_engine::{Dice, Estimator, EstimatorConfig, RaceSession, RaceState, parse_position};

use super::{HorseReport, render_table, rows_from_probabilities};

#[derive(Serialize)]
struct EstimateReport {
    trials: i64,
    positions: Vec<(rsb_engine::Horse, u32)>,
    #[serde(skip_serializing_if = "Option::is_none")]
    winner: Option<rsb_engine::Horse>,
    horses: Vec<HorseReport>,
}

pub fn run(trials: i64, positions: &[String], seed: Option<u64>, json: bool) -> Result<(), String> {
    let mut state = RaceState::new();
    for text in positions {
        let (horse, position) = parse_position(text).map_err(|e| e.to_string())?;
        state = state
            .with_position(horse, position)
            .map_err(|e| e.to_string())?;
    }

    let mut config = EstimatorConfig::default();
    if let Some(seed) = seed {
        config = config.with_seed(seed);
    }
    let mut estimator = Estimator::new(config);

    // The estimator only reads the snapshot; these dice are never rolled.
    let session = RaceSession::from_state(state, Dice::seeded(0));
    let probabilities = estimator
        .estimate(trials, &session)
        .map_err(|e| e.to_string())?;
    let rows = rows_from_probabilities(&probabilities);

    if json {
        let report = EstimateReport {
            trials,
            positions: rsb_engine::Horse::ALL
                .iter()
                .map(|&h| (h, state.position(h)))
                .filter(|&(_, p)| p > 0)
                .collect(),
            winner: state.winner(),
            horses: rows,
        };
        let out = serde_json::to_string_pretty(&report)
            .map_err(|e| format!("failed to serialize report: {e}"))?;
        println!("{out}");
        return Ok(());
    }

    println!(
        "  {} {}",
        "Win probabilities".bold(),
        format!("({trials} trials)").dimmed()
    );
    if let Some(winner) = state.winner() {
        println!("  Race already won by {}", winner.label().green().bold());
    }
    println!();
    println!("{}", render_table(&rows, probabilities.favorite()));

    Ok(())
}

pub mod estimate;
pub mod race;
pub mod simulate;

use colored::Colorize;
use comfy_table::{ContentArrangement, Table};
use serde::Serialize;

use rsb_engine::{Horse, WinProbabilities, WinTally};

/// One horse's line in a report.
#[derive(Debug, Serialize)]
pub struct HorseReport {
    pub horse: Horse,
    pub label: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wins: Option<u64>,
    pub probability: f64,
}

/// Build report rows from a tally, with win counts.
fn rows_from_tally(tally: &WinTally) -> Vec<HorseReport> {
    tally
        .probabilities()
        .iter()
        .map(|(horse, probability)| HorseReport {
            horse,
            label: horse.label(),
            wins: Some(tally.wins(horse)),
            probability,
        })
        .collect()
}

/// Build report rows from probabilities alone.
fn rows_from_probabilities(probabilities: &WinProbabilities) -> Vec<HorseReport> {
    probabilities
        .iter()
        .map(|(horse, probability)| HorseReport {
            horse,
            label: horse.label(),
            wins: None,
            probability,
        })
        .collect()
}

/// Render report rows as a table, highlighting the favorite.
fn render_table(rows: &[HorseReport], favorite: Option<Horse>) -> Table {
    let with_wins = rows.iter().any(|r| r.wins.is_some());

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    let mut header = vec!["Horse"];
    if with_wins {
        header.push("Wins");
    }
    header.extend(["P(Win)", "Roll chance", "Bonus"]);
    table.set_header(header);

    for row in rows {
        let label = if Some(row.horse) == favorite {
            row.label.green().bold().to_string()
        } else {
            row.label.to_string()
        };
        let mut cells = vec![label];
        if let Some(wins) = row.wins {
            cells.push(wins.to_string());
        }
        cells.push(format_probability_bar(row.probability));
        cells.push(format!("{}/36", row.horse.combinations()));
        cells.push(format!("+{}", row.horse.bonus_advance()));
        table.add_row(cells);
    }
    table
}

/// A ten-segment bar followed by the percentage.
fn format_probability_bar(p: f64) -> String {
    let filled = (p * 10.0).round().clamp(0.0, 10.0) as usize;
    let empty = 10 - filled;
    let bar = format!("{}{}", "#".repeat(filled), "-".repeat(empty));
    format!("[{}] {:>6.2}%", bar.cyan(), p * 100.0)
}

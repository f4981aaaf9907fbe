//! Command-line frontend for the Ready Set Bet race engine.

mod commands;
mod tui;

use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Environment variable holding the log filter, e.g. `RSB_LOG=rsb_engine=debug`.
const LOG_ENV: &str = "RSB_LOG";

#[derive(Parser)]
#[command(
    name = "rsb",
    about = "Ready Set Bet horse race simulator",
    version,
    propagate_version = true
)]
struct Cli {
    /// Log engine activity to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play many races from the start and report how often each horse wins
    Simulate {
        /// Number of races to play
        #[arg(short = 'n', long, default_value = "20000")]
        races: usize,

        /// RNG seed for reproducible results
        #[arg(short, long)]
        seed: Option<u64>,

        /// Run all races on one thread
        #[arg(long)]
        sequential: bool,

        /// Print the tally as JSON
        #[arg(long)]
        json: bool,
    },

    /// Estimate win probabilities from a race in progress
    Estimate {
        /// Number of Monte-Carlo trials
        #[arg(short = 'n', long, default_value = "1000", allow_negative_numbers = true)]
        trials: i64,

        /// Starting position as HORSE=POSITION (repeatable), e.g. -p 7=10
        #[arg(short, long = "position")]
        positions: Vec<String>,

        /// RNG seed for reproducible results
        #[arg(short, long)]
        seed: Option<u64>,

        /// Print the probabilities as JSON
        #[arg(long)]
        json: bool,
    },

    /// Animate a single race with live win probabilities
    Race {
        /// Seconds between rolls
        #[arg(long, default_value = "0.95")]
        speed: f64,

        /// Monte-Carlo trials per frame
        #[arg(short = 'n', long, default_value = "1000")]
        trials: i64,

        /// RNG seed for the race and its estimates
        #[arg(short, long)]
        seed: Option<u64>,
    },
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Simulate {
            races,
            seed,
            sequential,
            json,
        } => commands::simulate::run(races, seed, sequential, json),
        Commands::Estimate {
            trials,
            positions,
            seed,
            json,
        } => commands::estimate::run(trials, &positions, seed, json),
        Commands::Race {
            speed,
            trials,
            seed,
        } => commands::race::run(speed, trials, seed),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}

/// Install the stderr log subscriber. `RSB_LOG` overrides the default level.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

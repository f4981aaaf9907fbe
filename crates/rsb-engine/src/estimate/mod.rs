//! Monte-Carlo win-probability estimation.
//!
//! Every trial copies the starting positions and streak state by value and
//! plays them out with its own RNG. Trial RNGs are seeded from a per-call base
//! seed plus the trial index, so results do not depend on how trials are
//! split across threads, and no trial shares draws with another or with the
//! session being estimated.

pub mod tally;

pub use tally::{WinProbabilities, WinTally};

use std::time::Instant;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use tracing::debug;

use crate::config::EstimatorConfig;
use crate::dice::{Dice, DiceSource};
use crate::error::{RaceError, RaceResult};
use crate::horse::Horse;
use crate::race::RaceState;
use crate::session::RaceSession;
use crate::streak::StreakTracker;

/// Estimates win probabilities by playing many independent races.
///
/// Holds a master RNG that hands out one base seed per batch. It is separate
/// from any session's dice, so estimating never disturbs the live race.
#[derive(Debug, Clone)]
pub struct Estimator {
    config: EstimatorConfig,
    rng: StdRng,
}

impl Default for Estimator {
    fn default() -> Self {
        Self::new(EstimatorConfig::default())
    }
}

impl Estimator {
    /// Create an estimator from its configuration.
    pub fn new(config: EstimatorConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self { config, rng }
    }

    /// Estimate each horse's chance of winning from the session's current
    /// state.
    ///
    /// All nine horses are present in the result. `trials == 0` yields all
    /// zeros; a negative count is rejected. The session is not modified.
    pub fn estimate<D: DiceSource>(
        &mut self,
        trials: i64,
        session: &RaceSession<D>,
    ) -> RaceResult<WinProbabilities> {
        let trials = usize::try_from(trials).map_err(|_| RaceError::InvalidTrialCount(trials))?;
        Ok(self.tally(trials, session).probabilities())
    }

    /// Play `trials` races from the session's current state and count wins.
    pub fn tally<D: DiceSource>(&mut self, trials: usize, session: &RaceSession<D>) -> WinTally {
        self.tally_from(trials, *session.state(), *session.streak())
    }

    /// Play `trials` races from an explicit snapshot and count wins.
    pub fn tally_from(&mut self, trials: usize, state: RaceState, streak: StreakTracker) -> WinTally {
        let base_seed: u64 = self.rng.random();
        let parallel = self.config.runs_parallel(trials);
        let started = Instant::now();

        let tally = if parallel {
            (0..trials)
                .into_par_iter()
                .fold(WinTally::new, |mut tally, trial| {
                    tally.record(playout(state, streak, trial_seed(base_seed, trial)));
                    tally
                })
                .reduce(WinTally::new, WinTally::merge)
        } else {
            (0..trials).fold(WinTally::new(), |mut tally, trial| {
                tally.record(playout(state, streak, trial_seed(base_seed, trial)));
                tally
            })
        };

        debug!(
            trials,
            parallel,
            elapsed_ms = started.elapsed().as_secs_f64() * 1e3,
            "monte-carlo batch complete"
        );
        tally
    }
}

fn trial_seed(base_seed: u64, trial: usize) -> u64 {
    base_seed.wrapping_add(trial as u64)
}

/// Play one race from a snapshot to completion.
fn playout(state: RaceState, streak: StreakTracker, seed: u64) -> Horse {
    if let Some(winner) = state.winner() {
        return winner;
    }
    RaceSession::resume(state, streak, Dice::seeded(seed)).run_to_finish()
}

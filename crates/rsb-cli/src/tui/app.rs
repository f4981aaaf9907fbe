//! State for the animated race.

use rsb_engine::{Estimator, EstimatorConfig, RaceSession, WinProbabilities};

/// The live race plus the probabilities shown beside it.
pub struct RaceApp {
    /// The race being animated.
    pub session: RaceSession,
    /// Win probabilities estimated just before the latest roll.
    pub probabilities: WinProbabilities,
    /// Whether the user quit before the race finished.
    pub interrupted: bool,
    estimator: Estimator,
    trials: i64,
}

impl RaceApp {
    /// Create a race. With a seed, the race dice and the estimator get
    /// distinct seeds derived from it; without one both come from the OS.
    pub fn new(seed: Option<u64>, trials: i64) -> Self {
        let (session, config) = match seed {
            Some(seed) => (
                RaceSession::seeded(seed),
                EstimatorConfig::default().with_seed(seed.wrapping_add(1)),
            ),
            None => (RaceSession::from_entropy(), EstimatorConfig::default()),
        };
        Self {
            session,
            probabilities: WinProbabilities::default(),
            interrupted: false,
            estimator: Estimator::new(config),
            trials,
        }
    }

    /// Estimate from the current position, then roll once.
    pub fn advance(&mut self) -> Result<(), String> {
        self.probabilities = self
            .estimator
            .estimate(self.trials, &self.session)
            .map_err(|e| format!("estimate failed: {e}"))?;
        self.session
            .step()
            .map_err(|e| format!("step failed: {e}"))?;
        Ok(())
    }

    /// Whether the animation has nothing left to show.
    pub fn is_done(&self) -> bool {
        self.interrupted || self.session.is_over()
    }
}

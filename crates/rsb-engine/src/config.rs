//! Configuration for Monte-Carlo estimation.

/// Trial count below which estimation stays on the calling thread.
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 2_000;

/// Configuration for an [`Estimator`](crate::Estimator).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EstimatorConfig {
    /// Seed for the estimator's master RNG. `None` seeds from the OS.
    pub seed: Option<u64>,
    /// Whether large batches are spread across the rayon thread pool.
    pub parallel: bool,
    /// Minimum trial count before going parallel.
    pub parallel_threshold: usize,
}

impl Default for EstimatorConfig {
    fn default() -> Self {
        Self {
            seed: None,
            parallel: true,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }
}

impl EstimatorConfig {
    /// Set the master RNG seed for reproducible estimates.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Enable or disable parallel trials.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Set the trial count at which estimation goes parallel.
    pub fn with_parallel_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold;
        self
    }

    /// Whether a batch of `trials` should run in parallel.
    pub fn runs_parallel(&self, trials: usize) -> bool {
        self.parallel && trials >= self.parallel_threshold
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_default_values() {
        let config = EstimatorConfig::default();
        assert_eq!(config.seed, None);
        assert!(config.parallel);
        assert_eq!(config.parallel_threshold, DEFAULT_PARALLEL_THRESHOLD);
    }

    #[test]
    fn config_builder_chain() {
        let config = EstimatorConfig::default()
            .with_seed(123)
            .with_parallel(false)
            .with_parallel_threshold(10);
        assert_eq!(config.seed, Some(123));
        assert!(!config.parallel);
        assert_eq!(config.parallel_threshold, 10);
    }

    #[test]
    fn parallel_gate() {
        let config = EstimatorConfig::default().with_parallel_threshold(100);
        assert!(!config.runs_parallel(99));
        assert!(config.runs_parallel(100));
        assert!(!config.with_parallel(false).runs_parallel(1_000_000));
    }
}

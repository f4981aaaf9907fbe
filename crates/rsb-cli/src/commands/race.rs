use std::time::Duration;

use crate::tui::{self, RaceApp};

/// Run the animated race.
pub fn run(speed: f64, trials: i64, seed: Option<u64>) -> Result<(), String> {
    if !speed.is_finite() || speed < 0.0 {
        return Err(format!("invalid speed {speed}: must be a non-negative number of seconds"));
    }
    if trials < 0 {
        return Err(format!("invalid trial count {trials}: must not be negative"));
    }
    let app = RaceApp::new(seed, trials);
    tui::run(app, Duration::from_secs_f64(speed))
}

//! Win counts and the probabilities derived from them.

use serde::{Deserialize, Serialize};

use crate::horse::{HORSE_COUNT, Horse};

/// Wins per horse over a batch of races.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WinTally {
    wins: [u64; HORSE_COUNT],
    trials: u64,
}

impl WinTally {
    /// An empty tally.
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one finished race.
    pub fn record(&mut self, winner: Horse) {
        self.wins[winner.index()] += 1;
        self.trials += 1;
    }

    /// Combine two tallies.
    pub fn merge(mut self, other: Self) -> Self {
        for (mine, theirs) in self.wins.iter_mut().zip(other.wins) {
            *mine += theirs;
        }
        self.trials += other.trials;
        self
    }

    /// Wins recorded for one horse.
    pub fn wins(&self, horse: Horse) -> u64 {
        self.wins[horse.index()]
    }

    /// Races recorded.
    pub fn trials(&self) -> u64 {
        self.trials
    }

    /// Relative win frequency per horse. All zero when nothing was recorded.
    pub fn probabilities(&self) -> WinProbabilities {
        let mut probabilities = [0.0; HORSE_COUNT];
        if self.trials > 0 {
            let n = self.trials as f64;
            for (p, &w) in probabilities.iter_mut().zip(&self.wins) {
                *p = w as f64 / n;
            }
        }
        WinProbabilities { probabilities }
    }
}

/// Estimated chance of winning for each of the nine horses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct WinProbabilities {
    probabilities: [f64; HORSE_COUNT],
}

impl WinProbabilities {
    /// Win probability for one horse.
    pub fn get(&self, horse: Horse) -> f64 {
        self.probabilities[horse.index()]
    }

    /// Every horse with its probability, in lane order.
    pub fn iter(&self) -> impl Iterator<Item = (Horse, f64)> + '_ {
        Horse::ALL.iter().map(|&h| (h, self.get(h)))
    }

    /// Sum over all horses: 1.0 for a non-empty sample, 0.0 otherwise.
    pub fn total(&self) -> f64 {
        self.probabilities.iter().sum()
    }

    /// The most likely winner, ties going to the lower lane.
    /// `None` when every probability is zero.
    pub fn favorite(&self) -> Option<Horse> {
        self.iter()
            .filter(|&(_, p)| p > 0.0)
            .fold(None, |best: Option<(Horse, f64)>, (h, p)| match best {
                Some((_, bp)) if bp >= p => best,
                _ => Some((h, p)),
            })
            .map(|(h, _)| h)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_and_read_back() {
        let mut tally = WinTally::new();
        tally.record(Horse::H7);
        tally.record(Horse::H7);
        tally.record(Horse::H2_3);
        assert_eq!(tally.trials(), 3);
        assert_eq!(tally.wins(Horse::H7), 2);
        assert_eq!(tally.wins(Horse::H2_3), 1);
        assert_eq!(tally.wins(Horse::H9), 0);
    }

    #[test]
    fn merge_adds_counts() {
        let mut a = WinTally::new();
        a.record(Horse::H6);
        let mut b = WinTally::new();
        b.record(Horse::H6);
        b.record(Horse::H8);
        let merged = a.merge(b);
        assert_eq!(merged.trials(), 3);
        assert_eq!(merged.wins(Horse::H6), 2);
        assert_eq!(merged.wins(Horse::H8), 1);
    }

    #[test]
    fn empty_tally_gives_all_zero_probabilities() {
        let probabilities = WinTally::new().probabilities();
        assert_eq!(probabilities.iter().count(), HORSE_COUNT);
        assert!(probabilities.iter().all(|(_, p)| p == 0.0));
        assert_eq!(probabilities.favorite(), None);
    }

    #[test]
    fn probabilities_are_relative_frequencies() {
        let mut tally = WinTally::new();
        for _ in 0..3 {
            tally.record(Horse::H5);
        }
        tally.record(Horse::H11_12);
        let probabilities = tally.probabilities();
        assert!((probabilities.get(Horse::H5) - 0.75).abs() < 1e-12);
        assert!((probabilities.get(Horse::H11_12) - 0.25).abs() < 1e-12);
        assert!((probabilities.total() - 1.0).abs() < 1e-12);
        assert_eq!(probabilities.favorite(), Some(Horse::H5));
    }

    #[test]
    fn favorite_ties_go_to_lower_lane() {
        let mut tally = WinTally::new();
        tally.record(Horse::H9);
        tally.record(Horse::H4);
        assert_eq!(tally.probabilities().favorite(), Some(Horse::H4));
    }

    #[test]
    fn tally_serializes() {
        let mut tally = WinTally::new();
        tally.record(Horse::H7);
        let json = serde_json::to_value(tally).unwrap();
        assert_eq!(json["trials"], 1);
        assert_eq!(json["wins"][Horse::H7.index()], 1);
    }
}

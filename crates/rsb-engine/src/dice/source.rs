//! Where a session's rolls come from.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::{RaceError, RaceResult};
use crate::horse::Horse;

/// A source of folded roll outcomes owned by a race session.
pub trait DiceSource {
    /// Produce the next roll.
    fn roll(&mut self) -> Horse;
}

/// Fair random dice backed by an owned RNG.
#[derive(Debug, Clone)]
pub struct Dice<R = StdRng> {
    rng: R,
}

impl<R: Rng> Dice<R> {
    /// Wrap an existing RNG.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl Dice<StdRng> {
    /// Dice with a fixed seed, for reproducible races.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// Dice seeded from the operating system.
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_os_rng())
    }
}

impl<R: Rng> DiceSource for Dice<R> {
    fn roll(&mut self) -> Horse {
        super::roll(&mut self.rng)
    }
}

/// A scripted roll sequence that repeats once exhausted.
///
/// Used to replay a known race exactly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedDice {
    rolls: Vec<Horse>,
    next: usize,
}

impl LoadedDice {
    /// Script the given rolls. At least one roll is required.
    pub fn new(rolls: Vec<Horse>) -> RaceResult<Self> {
        if rolls.is_empty() {
            return Err(RaceError::EmptyDiceScript);
        }
        Ok(Self { rolls, next: 0 })
    }

    /// Script rolls from raw outcomes, rejecting anything outside 3 to 11.
    pub fn from_outcomes(outcomes: &[u8]) -> RaceResult<Self> {
        let rolls = outcomes
            .iter()
            .map(|&o| Horse::from_outcome(o))
            .collect::<RaceResult<Vec<_>>>()?;
        Self::new(rolls)
    }

    /// How many rolls have been handed out so far.
    pub fn rolled(&self) -> usize {
        self.next
    }
}

impl DiceSource for LoadedDice {
    fn roll(&mut self) -> Horse {
        let horse = self.rolls[self.next % self.rolls.len()];
        self.next += 1;
        horse
    }
}

//! Two-dice roll model.
//!
//! A roll is the sum of two six-sided dice, folded onto the nine lanes:
//! 2 counts as 3 and 12 counts as 11. Everything else maps to itself.

pub mod source;

pub use source::{Dice, DiceSource, LoadedDice};

use rand::Rng;

use crate::error::{RaceError, RaceResult};
use crate::horse::Horse;

/// Sides on each die.
const DIE_SIDES: u8 = 6;

/// Fold a raw two-dice sum onto its lane.
pub fn fold_sum(sum: u8) -> RaceResult<Horse> {
    if !(2..=12).contains(&sum) {
        return Err(RaceError::InvalidDiceSum(sum));
    }
    Ok(fold(sum))
}

/// Clamp into the lane domain. Callers guarantee `sum` is a real dice sum.
fn fold(sum: u8) -> Horse {
    Horse::ALL[usize::from(sum.clamp(3, 11) - 3)]
}

/// Roll two dice and return their raw sum (2 to 12).
pub fn roll_sum<R: Rng>(rng: &mut R) -> u8 {
    rng.random_range(1..=DIE_SIDES) + rng.random_range(1..=DIE_SIDES)
}

/// Roll two dice and return the horse that advances.
pub fn roll<R: Rng>(rng: &mut R) -> Horse {
    fold(roll_sum(rng))
}

//! The nine horses on the track.
//!
//! Each horse is identified by the folded dice outcome that advances it.
//! The outer lanes absorb two raw sums each: the `H2_3` horse moves on a
//! 2 or a 3, the `H11_12` horse on an 11 or a 12.

use serde::{Deserialize, Serialize};

use crate::bonus::BONUS_ADVANCE;
use crate::error::{RaceError, RaceResult};

/// Number of lanes on the track.
pub const HORSE_COUNT: usize = 9;

/// Number of equally likely two-dice combinations.
pub const DICE_COMBINATIONS: u32 = 36;

/// A track lane, keyed by its dice outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
#[repr(u8)]
pub enum Horse {
    /// Advances on a roll of 2 or 3.
    H2_3 = 3,
    /// Advances on a roll of 4.
    H4 = 4,
    /// Advances on a roll of 5.
    H5 = 5,
    /// Advances on a roll of 6.
    H6 = 6,
    /// Advances on a roll of 7.
    H7 = 7,
    /// Advances on a roll of 8.
    H8 = 8,
    /// Advances on a roll of 9.
    H9 = 9,
    /// Advances on a roll of 10.
    H10 = 10,
    /// Advances on a roll of 11 or 12.
    H11_12 = 11,
}

impl Horse {
    /// All horses in lane order.
    pub const ALL: [Horse; HORSE_COUNT] = [
        Horse::H2_3,
        Horse::H4,
        Horse::H5,
        Horse::H6,
        Horse::H7,
        Horse::H8,
        Horse::H9,
        Horse::H10,
        Horse::H11_12,
    ];

    /// Look up the horse for a folded roll outcome (3 through 11).
    pub fn from_outcome(outcome: u8) -> RaceResult<Self> {
        match outcome {
            3 => Ok(Self::H2_3),
            4 => Ok(Self::H4),
            5 => Ok(Self::H5),
            6 => Ok(Self::H6),
            7 => Ok(Self::H7),
            8 => Ok(Self::H8),
            9 => Ok(Self::H9),
            10 => Ok(Self::H10),
            11 => Ok(Self::H11_12),
            other => Err(RaceError::InvalidOutcome(other)),
        }
    }

    /// The folded roll outcome that advances this horse.
    pub fn outcome(self) -> u8 {
        self as u8
    }

    /// Zero-based lane index, 0 for `H2_3` through 8 for `H11_12`.
    pub fn index(self) -> usize {
        usize::from(self.outcome() - 3)
    }

    /// Extra steps granted when this horse moves on a back-to-back roll.
    pub fn bonus_advance(self) -> u32 {
        BONUS_ADVANCE[self.index()]
    }

    /// How many of the 36 two-dice combinations advance this horse.
    pub fn combinations(self) -> u32 {
        match self {
            Self::H2_3 | Self::H4 | Self::H10 | Self::H11_12 => 3,
            Self::H5 | Self::H9 => 4,
            Self::H6 | Self::H8 => 5,
            Self::H7 => 6,
        }
    }

    /// Exact probability that a single roll advances this horse.
    pub fn roll_probability(self) -> f64 {
        f64::from(self.combinations()) / f64::from(DICE_COMBINATIONS)
    }

    /// Short label used on the track, e.g. `H2/3` or `H7`.
    pub fn label(self) -> &'static str {
        match self {
            Self::H2_3 => "H2/3",
            Self::H4 => "H4",
            Self::H5 => "H5",
            Self::H6 => "H6",
            Self::H7 => "H7",
            Self::H8 => "H8",
            Self::H9 => "H9",
            Self::H10 => "H10",
            Self::H11_12 => "H11/12",
        }
    }
}

impl TryFrom<u8> for Horse {
    type Error = RaceError;

    fn try_from(outcome: u8) -> RaceResult<Self> {
        Self::from_outcome(outcome)
    }
}

impl From<Horse> for u8 {
    fn from(horse: Horse) -> u8 {
        horse.outcome()
    }
}

impl std::fmt::Display for Horse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

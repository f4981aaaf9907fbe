//! Error types for the race engine.

use crate::horse::Horse;

/// Errors that can occur while driving or querying a race.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RaceError {
    /// A roll outcome outside the nine legal lanes (3 through 11).
    #[error("invalid roll outcome {0}: expected a value from 3 to 11")]
    InvalidOutcome(u8),

    /// A two-dice sum outside 2 through 12.
    #[error("invalid dice sum {0}: expected a value from 2 to 12")]
    InvalidDiceSum(u8),

    /// A negative number of Monte-Carlo trials was requested.
    #[error("invalid trial count {0}: must not be negative")]
    InvalidTrialCount(i64),

    /// A scripted dice sequence was built with no rolls.
    #[error("loaded dice need at least one roll")]
    EmptyDiceScript,

    /// `step()` was called on a session that already has a winner.
    #[error("race is already finished")]
    RaceFinished,

    /// A builder tried to move a horse backwards.
    #[error("cannot move {horse} back from {current} to {requested}")]
    PositionDecrease {
        /// The horse being placed.
        horse: Horse,
        /// Its position before the move.
        current: u32,
        /// The lower position that was requested.
        requested: u32,
    },

    /// A starting position could not be parsed from `HORSE=POSITION`.
    #[error("invalid position '{0}': expected HORSE=POSITION, e.g. 7=10")]
    InvalidPositionSpec(String),
}

/// Convenience result type for race operations.
pub type RaceResult<T> = Result<T, RaceError>;

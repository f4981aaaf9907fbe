//! Race simulation engine for Ready Set Bet.
//!
//! Two dice pick a horse, the horse moves one step, and back-to-back rolls
//! earn a bonus that grows with how unlikely the roll was. The first horse to
//! reach [`FINISH_LINE`] wins. On top of the single race sits an [`Estimator`]
//! that plays thousands of independent copies of a race in progress to
//! estimate each horse's chance of winning.
//!
//! Randomness is always passed in explicitly: a session owns its dice, and
//! each Monte-Carlo trial owns its own seeded RNG.

pub mod bonus;
pub mod config;
pub mod dice;
pub mod error;
pub mod estimate;
pub mod horse;
pub mod race;
pub mod session;
pub mod streak;

pub use bonus::bonus_for;
pub use config::EstimatorConfig;
pub use dice::{Dice, DiceSource, LoadedDice};
pub use error::{RaceError, RaceResult};
pub use estimate::{Estimator, WinProbabilities, WinTally};
pub use horse::{HORSE_COUNT, Horse};
pub use race::{FINISH_LINE, RaceState, parse_position};
pub use session::{RaceSession, Roll};
pub use streak::StreakTracker;

//! Bonus advance table.
//!
//! Less likely outcomes move further on a back-to-back roll. The table is
//! symmetric around 7, which never earns extra steps.

use crate::error::RaceResult;
use crate::horse::{HORSE_COUNT, Horse};

/// Bonus steps per lane, indexed by [`Horse::index`].
pub const BONUS_ADVANCE: [u32; HORSE_COUNT] = [3, 3, 2, 1, 0, 1, 2, 3, 3];

/// Bonus steps for a raw roll outcome.
///
/// Fails with [`RaceError::InvalidOutcome`](crate::RaceError::InvalidOutcome)
/// for anything outside 3 through 11.
pub fn bonus_for(outcome: u8) -> RaceResult<u32> {
    Horse::from_outcome(outcome).map(Horse::bonus_advance)
}

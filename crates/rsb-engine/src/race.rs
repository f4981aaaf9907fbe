//! Horse positions and the finish line.

use crate::error::{RaceError, RaceResult};
use crate::horse::{HORSE_COUNT, Horse};

/// Position a horse must reach to win.
pub const FINISH_LINE: u32 = 15;

/// Every horse's track position plus the winner, once there is one.
///
/// Positions only ever grow. The winner is fixed the first time a horse
/// reaches [`FINISH_LINE`] and never changes afterwards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RaceState {
    positions: [u32; HORSE_COUNT],
    winner: Option<Horse>,
}

impl RaceState {
    /// All horses at the start line.
    pub fn new() -> Self {
        Self::default()
    }

    /// A state with the given positions, indexed by [`Horse::index`].
    ///
    /// If one or more horses already stand at or past the finish line the
    /// state is terminal. The winner is the furthest of them, with ties going
    /// to the lower lane.
    pub fn from_positions(positions: [u32; HORSE_COUNT]) -> Self {
        let winner = Horse::ALL
            .iter()
            .copied()
            .filter(|h| positions[h.index()] >= FINISH_LINE)
            .fold(None, |best: Option<Horse>, h| match best {
                Some(b) if positions[b.index()] >= positions[h.index()] => Some(b),
                _ => Some(h),
            });
        Self { positions, winner }
    }

    /// Builder: move one horse up to `position`.
    ///
    /// Fails if that would move the horse backwards. A winner already
    /// recorded is kept; otherwise the horse wins if it lands on or past the
    /// finish line.
    pub fn with_position(mut self, horse: Horse, position: u32) -> RaceResult<Self> {
        let current = self.position(horse);
        if position < current {
            return Err(RaceError::PositionDecrease {
                horse,
                current,
                requested: position,
            });
        }
        self.positions[horse.index()] = position;
        if self.winner.is_none() && position >= FINISH_LINE {
            self.winner = Some(horse);
        }
        Ok(self)
    }

    /// Move a horse forward by `steps`.
    ///
    /// Positions saturate rather than wrap. Moving a horse after the race is
    /// decided leaves the winner untouched; guarding against that is the
    /// session's job.
    pub fn advance(&mut self, horse: Horse, steps: u32) {
        debug_assert!(steps >= 1, "a moving horse advances at least one step");
        let position = &mut self.positions[horse.index()];
        *position = position.saturating_add(steps);
        if self.winner.is_none() && *position >= FINISH_LINE {
            self.winner = Some(horse);
        }
    }

    /// The horse that crossed the finish line, if any.
    pub fn winner(&self) -> Option<Horse> {
        self.winner
    }

    /// Whether a horse has crossed the finish line.
    pub fn is_over(&self) -> bool {
        self.winner.is_some()
    }

    /// Current position of one horse.
    pub fn position(&self, horse: Horse) -> u32 {
        self.positions[horse.index()]
    }

    /// All positions, indexed by [`Horse::index`].
    pub fn positions(&self) -> &[u32; HORSE_COUNT] {
        &self.positions
    }
}

/// Parse a starting position written as `HORSE=POSITION`, e.g. `7=10`.
///
/// `HORSE` is the lane's roll outcome (3 through 11).
pub fn parse_position(text: &str) -> RaceResult<(Horse, u32)> {
    let invalid = || RaceError::InvalidPositionSpec(text.to_string());
    let (horse, position) = text.split_once('=').ok_or_else(invalid)?;
    let outcome: u8 = horse.trim().parse().map_err(|_| invalid())?;
    let position: u32 = position.trim().parse().map_err(|_| invalid())?;
    Ok((Horse::from_outcome(outcome)?, position))
}

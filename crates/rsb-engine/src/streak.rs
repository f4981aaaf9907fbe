//! Back-to-back roll tracking.
//!
//! Two identical rolls in a row earn a bonus on the second. The bonus then
//! consumes the streak: a third identical roll earns nothing, a fourth earns
//! the bonus again, and so on. Every other duplicate pays out, not every one.

use crate::horse::Horse;

/// Remembers the previous roll and whether it already paid a streak bonus.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StreakTracker {
    last_roll: Option<Horse>,
    was_streak: bool,
}

impl StreakTracker {
    /// A tracker that has seen no rolls.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a roll and return whether it earns the bonus.
    pub fn update(&mut self, roll: Horse) -> bool {
        let bonus = self.last_roll == Some(roll) && !self.was_streak;
        self.was_streak = bonus;
        self.last_roll = Some(roll);
        bonus
    }

    /// Whether the most recent roll earned the bonus.
    pub fn is_active(&self) -> bool {
        self.was_streak
    }

    /// The most recent roll, if any.
    pub fn last_roll(&self) -> Option<Horse> {
        self.last_roll
    }
}

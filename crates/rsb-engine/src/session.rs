//! A single race driven one roll at a time.

use rand::rngs::StdRng;
use tracing::{debug, trace};

use crate::dice::{Dice, DiceSource};
use crate::error::{RaceError, RaceResult};
use crate::horse::Horse;
use crate::race::RaceState;
use crate::streak::StreakTracker;

/// What happened on one step of the race.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Roll {
    /// The horse that moved.
    pub horse: Horse,
    /// Whether the back-to-back bonus applied.
    pub bonus_applied: bool,
    /// Total steps moved, one plus any bonus.
    pub steps: u32,
}

impl Roll {
    /// Bonus steps included in this move.
    pub fn bonus(&self) -> u32 {
        self.steps - 1
    }
}

/// A race in progress: positions, streak state, and the dice that drive it.
///
/// The session is `Active` until some horse crosses the finish line and
/// `Finished` afterwards. Stepping a finished session is an error.
#[derive(Debug, Clone)]
pub struct RaceSession<D = Dice<StdRng>> {
    state: RaceState,
    streak: StreakTracker,
    last_roll: Option<Roll>,
    steps_taken: u32,
    dice: D,
}

impl RaceSession<Dice<StdRng>> {
    /// A fresh race with seeded dice.
    pub fn seeded(seed: u64) -> Self {
        Self::new(Dice::seeded(seed))
    }

    /// A fresh race with dice seeded from the operating system.
    pub fn from_entropy() -> Self {
        Self::new(Dice::from_entropy())
    }
}

impl<D: DiceSource> RaceSession<D> {
    /// A fresh race: every horse at the start, no streak.
    pub fn new(dice: D) -> Self {
        Self::from_state(RaceState::new(), dice)
    }

    /// Continue from an existing snapshot of positions, with no streak.
    pub fn from_state(state: RaceState, dice: D) -> Self {
        Self::resume(state, StreakTracker::new(), dice)
    }

    /// Continue from a snapshot of both positions and streak state.
    pub fn resume(state: RaceState, streak: StreakTracker, dice: D) -> Self {
        Self {
            state,
            streak,
            last_roll: None,
            steps_taken: 0,
            dice,
        }
    }

    /// Roll once and move the rolled horse.
    pub fn step(&mut self) -> RaceResult<Roll> {
        if self.state.is_over() {
            return Err(RaceError::RaceFinished);
        }

        Ok(self.roll_once())
    }

    /// Step until a horse wins and return the winner.
    pub fn run_to_finish(&mut self) -> Horse {
        loop {
            if let Some(winner) = self.state.winner() {
                return winner;
            }
            self.roll_once();
        }
    }

    fn roll_once(&mut self) -> Roll {
        let horse = self.dice.roll();
        let bonus_applied = self.streak.update(horse);
        let bonus = if bonus_applied { horse.bonus_advance() } else { 0 };
        let steps = 1 + bonus;
        self.state.advance(horse, steps);

        let roll = Roll {
            horse,
            bonus_applied,
            steps,
        };
        self.last_roll = Some(roll);
        self.steps_taken += 1;

        trace!(horse = %horse, steps, bonus_applied, "rolled");
        if let Some(winner) = self.state.winner() {
            debug!(winner = %winner, steps = self.steps_taken, "race finished");
        }
        roll
    }

    /// Whether the race has a winner.
    pub fn is_over(&self) -> bool {
        self.state.is_over()
    }

    /// The winning horse, once the race is over.
    pub fn winner(&self) -> Option<Horse> {
        self.state.winner()
    }

    /// Current positions.
    pub fn state(&self) -> &RaceState {
        &self.state
    }

    /// Current streak state.
    pub fn streak(&self) -> &StreakTracker {
        &self.streak
    }

    /// The most recent step, if any.
    pub fn last_roll(&self) -> Option<Roll> {
        self.last_roll
    }

    /// Whether the most recent roll earned the bonus.
    pub fn bonus_active(&self) -> bool {
        self.streak.is_active()
    }

    /// Number of successful steps since the session was created.
    pub fn steps_taken(&self) -> u32 {
        self.steps_taken
    }

    /// The dice driving this session.
    pub fn dice(&self) -> &D {
        &self.dice
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dice::LoadedDice;
    use crate::race::FINISH_LINE;

    fn loaded(outcomes: &[u8]) -> RaceSession<LoadedDice> {
        RaceSession::new(LoadedDice::from_outcomes(outcomes).unwrap())
    }

    #[test]
    fn scripted_rolls_produce_exact_positions() {
        let mut session = loaded(&[7, 7, 3, 3, 3]);
        let mut trail = Vec::new();
        for _ in 0..5 {
            let roll = session.step().unwrap();
            trail.push((roll.horse, session.state().position(roll.horse)));
        }
        assert_eq!(
            trail,
            vec![
                (Horse::H7, 1),
                (Horse::H7, 2),
                (Horse::H2_3, 1),
                (Horse::H2_3, 5),
                (Horse::H2_3, 6),
            ]
        );
    }

    #[test]
    fn last_roll_reports_bonus() {
        let mut session = loaded(&[10, 10]);
        assert_eq!(session.last_roll(), None);
        session.step().unwrap();
        assert!(!session.bonus_active());
        let roll = session.step().unwrap();
        assert!(roll.bonus_applied);
        assert_eq!(roll.bonus(), 3);
        assert_eq!(session.last_roll(), Some(roll));
        assert!(session.bonus_active());
        assert_eq!(session.state().position(Horse::H10), 5);
    }

    #[test]
    fn horse_at_fourteen_wins_on_next_roll() {
        let state = RaceState::new().with_position(Horse::H8, FINISH_LINE - 1).unwrap();
        let mut session = RaceSession::from_state(state, LoadedDice::from_outcomes(&[8]).unwrap());
        session.step().unwrap();
        assert!(session.is_over());
        assert_eq!(session.winner(), Some(Horse::H8));
    }

    #[test]
    fn stepping_finished_race_is_an_error() {
        let state = RaceState::new().with_position(Horse::H5, FINISH_LINE).unwrap();
        let mut session = RaceSession::from_state(state, LoadedDice::from_outcomes(&[5]).unwrap());
        assert!(session.is_over());
        assert_eq!(session.step(), Err(RaceError::RaceFinished));
        assert_eq!(session.steps_taken(), 0);
        assert_eq!(session.dice().rolled(), 0);
    }

    #[test]
    fn resume_keeps_streak() {
        let mut streak = StreakTracker::new();
        streak.update(Horse::H4);
        let mut session =
            RaceSession::resume(RaceState::new(), streak, LoadedDice::from_outcomes(&[4]).unwrap());
        let roll = session.step().unwrap();
        assert!(roll.bonus_applied);
        assert_eq!(session.state().position(Horse::H4), 4);
    }

    #[test]
    fn every_seed_finishes_within_cap() {
        for seed in 0..200 {
            let mut session = RaceSession::seeded(seed);
            let mut steps = 0;
            while !session.is_over() {
                session.step().unwrap();
                steps += 1;
                assert!(steps <= 500, "seed {seed} did not finish in 500 steps");
            }
            assert!(session.winner().is_some());
        }
    }

    #[test]
    fn run_to_finish_reports_winner() {
        let mut session = RaceSession::seeded(3);
        let winner = session.run_to_finish();
        assert_eq!(session.winner(), Some(winner));
        assert!(session.state().position(winner) >= FINISH_LINE);
        assert_eq!(session.run_to_finish(), winner);
    }

    #[test]
    fn run_to_finish_counts_every_roll() {
        let mut session = loaded(&[6]);
        assert_eq!(session.run_to_finish(), Horse::H6);
        // Alternating 1 and 2 steps: ten rolls land exactly on the line.
        assert_eq!(session.steps_taken(), 10);
        assert_eq!(session.dice().rolled(), 10);
        assert_eq!(session.state().position(Horse::H6), FINISH_LINE);

        let state = RaceState::new().with_position(Horse::H10, FINISH_LINE).unwrap();
        let mut finished = RaceSession::from_state(state, LoadedDice::from_outcomes(&[10]).unwrap());
        assert_eq!(finished.run_to_finish(), Horse::H10);
        assert_eq!(finished.dice().rolled(), 0);
        assert_eq!(finished.steps_taken(), 0);
    }
}

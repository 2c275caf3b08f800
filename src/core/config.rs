//! Game configuration.
//!
//! The defaults reproduce the classic drill: ten rounds, +10 for a correct
//! choice, -5 for a wrong one. Front ends may shorten or lengthen the game
//! or change the stakes via the builder methods.

use serde::{Deserialize, Serialize};

/// Default number of rounds in a game.
pub const DEFAULT_ROUNDS: u32 = 10;

/// Default points added for a correct choice.
pub const DEFAULT_REWARD: u32 = 10;

/// Default points subtracted for a wrong choice.
pub const DEFAULT_PENALTY: u32 = 5;

/// Complete game configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Rounds per game (at least 1).
    pub rounds: u32,

    /// Points added when the choice meets the objective.
    pub reward: u32,

    /// Points subtracted when it doesn't.
    pub penalty: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            rounds: DEFAULT_ROUNDS,
            reward: DEFAULT_REWARD,
            penalty: DEFAULT_PENALTY,
        }
    }
}

impl GameConfig {
    /// Create the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of rounds.
    #[must_use]
    pub fn with_rounds(mut self, rounds: u32) -> Self {
        assert!(rounds > 0, "Must have at least 1 round");
        self.rounds = rounds;
        self
    }

    /// Set the reward for a correct choice.
    #[must_use]
    pub fn with_reward(mut self, reward: u32) -> Self {
        self.reward = reward;
        self
    }

    /// Set the penalty for a wrong choice (subtracted from the score).
    #[must_use]
    pub fn with_penalty(mut self, penalty: u32) -> Self {
        self.penalty = penalty;
        self
    }

    /// Best possible final score, saturating at `i64::MAX`.
    #[must_use]
    pub fn max_score(&self) -> i64 {
        i64::from(self.reward).saturating_mul(i64::from(self.rounds))
    }

    /// Worst possible final score, saturating at `i64::MIN`.
    #[must_use]
    pub fn min_score(&self) -> i64 {
        (-i64::from(self.penalty)).saturating_mul(i64::from(self.rounds))
    }
}

//! Per-round results: score deltas and history records.

use serde::{Deserialize, Serialize};

use super::config::GameConfig;
use super::gesture::{Gesture, Objective};

/// Whether a choice met the round's objective.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoundOutcome {
    /// Objective met; the reward was added.
    Hit,
    /// Objective missed; the penalty was subtracted.
    Miss,
}

/// Score change applied by one choice.
///
/// With the default configuration `points` is always +10 or -5.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScoreDelta {
    pub outcome: RoundOutcome,
    pub points: i64,
}

impl ScoreDelta {
    /// Delta for a hit under `config`.
    #[must_use]
    pub fn hit(config: &GameConfig) -> Self {
        Self {
            outcome: RoundOutcome::Hit,
            points: i64::from(config.reward),
        }
    }

    /// Delta for a miss under `config`.
    #[must_use]
    pub fn miss(config: &GameConfig) -> Self {
        Self {
            outcome: RoundOutcome::Miss,
            points: -i64::from(config.penalty),
        }
    }

    #[must_use]
    pub fn is_hit(&self) -> bool {
        self.outcome == RoundOutcome::Hit
    }
}

/// A scored round, kept in the engine's history.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundRecord {
    /// Round number (starts at 1).
    pub round: u32,

    /// The opponent's gesture for this round.
    pub opponent: Gesture,

    /// The objective for this round.
    pub objective: Objective,

    /// What the player picked.
    pub choice: Gesture,

    /// Score change applied.
    pub delta: ScoreDelta,

    /// Running score after this round.
    pub score_after: i64,
}

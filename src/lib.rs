//! # rps-trainer
//!
//! A ten-round rock/paper/scissors drill. Each round the game shows a
//! gesture and tells the player to either beat it or lose to it on purpose;
//! correct choices score +10, wrong ones -5.
//!
//! ## Design Principles
//!
//! 1. **Owned State**: One `RoundEngine` value holds everything. Front ends
//!    borrow it to render and call its two mutators.
//!
//! 2. **Injected Randomness**: Draws come from a seedable `GameRng`, so any
//!    game can be replayed exactly from its seed.
//!
//! 3. **No Presentation in the Engine**: Display text lives in `view`.
//!
//! ## Modules
//!
//! - `core`: Gestures, objectives, RNG, configuration, round records
//! - `rules`: `RoundEngine` and the scoring rule
//! - `view`: Display strings for front ends
//! - `python`: PyO3 bindings (feature `python`)

pub mod core;
pub mod rules;
pub mod view;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    Gesture, Objective, ParseGestureError,
    GameRng,
    GameConfig,
    RoundOutcome, RoundRecord, ScoreDelta,
};

pub use crate::rules::{score_choice, GameSummary, Phase, RoundEngine};

//! Round scoring and game lifecycle.
//!
//! `RoundEngine` owns all game state. Front ends read from it and call
//! `submit_choice` / `new_game`; nothing else mutates it.

pub mod engine;

pub use engine::{score_choice, GameSummary, Phase, RoundEngine};

//! Core value types: gestures, objectives, RNG, configuration, round records.
//!
//! Nothing here holds game state; the `rules` module owns that.

pub mod gesture;
pub mod rng;
pub mod config;
pub mod record;

pub use gesture::{Gesture, Objective, ParseGestureError};
pub use rng::GameRng;
pub use config::GameConfig;
pub use record::{RoundOutcome, RoundRecord, ScoreDelta};

//! Gestures and per-round objectives.
//!
//! ## Gesture
//!
//! The three hand gestures, ordered cyclically so each one beats the
//! gesture before it: Rock → Paper → Scissors → Rock.
//!
//! ## Objective
//!
//! Whether the current round rewards beating the opponent or losing to it.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// One of the three hand gestures.
///
/// Discriminants follow the cyclic order, so `(index + 1) % 3` is the
/// gesture that beats `index`.
///
/// ```
/// use rps_trainer::core::Gesture;
///
/// assert_eq!(Gesture::Rock.beaten_by(), Gesture::Paper);
/// assert!(Gesture::Scissors.beats(Gesture::Paper));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Gesture {
    Rock = 0,
    Paper = 1,
    Scissors = 2,
}

impl Gesture {
    /// All gestures in cyclic order.
    pub const ALL: [Gesture; 3] = [Gesture::Rock, Gesture::Paper, Gesture::Scissors];

    /// Number of gestures.
    pub const COUNT: usize = 3;

    /// Get the gesture at a 0-based index.
    ///
    /// Returns `None` for anything outside `0..3`.
    #[must_use]
    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Gesture::Rock),
            1 => Some(Gesture::Paper),
            2 => Some(Gesture::Scissors),
            _ => None,
        }
    }

    /// Get the 0-based index of this gesture.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// The gesture that beats this one (the next one in the cycle).
    #[must_use]
    pub const fn beaten_by(self) -> Self {
        match self {
            Gesture::Rock => Gesture::Paper,
            Gesture::Paper => Gesture::Scissors,
            Gesture::Scissors => Gesture::Rock,
        }
    }

    /// Check if this gesture beats `other`.
    #[must_use]
    pub fn beats(self, other: Gesture) -> bool {
        other.beaten_by() == self
    }

    /// Lowercase name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Gesture::Rock => "rock",
            Gesture::Paper => "paper",
            Gesture::Scissors => "scissors",
        }
    }

    /// Hand glyph shown on the gesture buttons.
    #[must_use]
    pub const fn glyph(self) -> &'static str {
        match self {
            Gesture::Rock => "👊",
            Gesture::Paper => "✋",
            Gesture::Scissors => "✌️",
        }
    }
}

impl std::fmt::Display for Gesture {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Gesture::Rock => "Rock",
            Gesture::Paper => "Paper",
            Gesture::Scissors => "Scissors",
        };
        f.write_str(name)
    }
}

/// Error returned when a string names no gesture.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseGestureError {
    input: String,
}

impl ParseGestureError {
    /// The rejected input.
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }
}

impl std::fmt::Display for ParseGestureError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown gesture {:?} (expected rock, paper or scissors)", self.input)
    }
}

impl std::error::Error for ParseGestureError {}

impl FromStr for Gesture {
    type Err = ParseGestureError;

    /// Accepts full names or their first letter, case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "rock" | "r" => Ok(Gesture::Rock),
            "paper" | "p" => Ok(Gesture::Paper),
            "scissors" | "s" => Ok(Gesture::Scissors),
            _ => Err(ParseGestureError { input: s.to_string() }),
        }
    }
}

/// What the player is asked to do this round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Objective {
    /// Pick the gesture that beats the opponent.
    Win,
    /// Pick anything except the gesture that beats the opponent.
    Lose,
}

impl Objective {
    /// Map a coin flip to an objective (`true` is `Win`).
    #[must_use]
    pub const fn from_flag(should_win: bool) -> Self {
        if should_win {
            Objective::Win
        } else {
            Objective::Lose
        }
    }

    #[must_use]
    pub const fn is_win(self) -> bool {
        matches!(self, Objective::Win)
    }
}

impl std::fmt::Display for Objective {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Objective::Win => f.write_str("Win"),
            Objective::Lose => f.write_str("Lose"),
        }
    }
}

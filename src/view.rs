//! Display strings for front ends.
//!
//! Pure mappings from engine state to the text the game screen shows.
//! The engine itself never formats anything for the player.

use crate::core::{Objective, ScoreDelta};
use crate::rules::RoundEngine;

/// Title shown above the board.
pub const TITLE: &str = "Rock 👊 Paper ✋ Scissors ✌️";

/// "win" or "lose".
#[must_use]
pub fn objective_word(objective: Objective) -> &'static str {
    match objective {
        Objective::Win => "win",
        Objective::Lose => "lose",
    }
}

/// Instruction for the current round.
#[must_use]
pub fn prompt(engine: &RoundEngine) -> String {
    format!("Make a choice that will {}", objective_word(engine.objective()))
}

/// The opponent's gesture line.
#[must_use]
pub fn opponent_line(engine: &RoundEngine) -> String {
    format!("Game has chosen: {}", engine.opponent_gesture().glyph())
}

#[must_use]
pub fn round_line(engine: &RoundEngine) -> String {
    format!("Round {} of {}", engine.round(), engine.rounds())
}

#[must_use]
pub fn score_line(engine: &RoundEngine) -> String {
    format!("Score: {}", engine.score())
}

/// Body of the end-of-game notification.
#[must_use]
pub fn game_over_message(engine: &RoundEngine) -> String {
    format!("Final score is {}", engine.score())
}

/// Seed line, so a game can be replayed with `--seed`.
#[must_use]
pub fn seed_line(seed: u64) -> String {
    format!("Seed: {}", seed)
}

/// Short feedback for a scored choice, e.g. "+10" or "-5".
#[must_use]
pub fn delta_feedback(delta: ScoreDelta) -> String {
    format!("{:+}", delta.points)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GameConfig, GameRng, Gesture};

    fn engine(opponent: Gesture, objective: Objective) -> RoundEngine {
        RoundEngine::from_parts(GameConfig::default(), GameRng::new(1), opponent, objective)
    }

    #[test]
    fn test_prompt() {
        assert_eq!(prompt(&engine(Gesture::Rock, Objective::Win)), "Make a choice that will win");
        assert_eq!(prompt(&engine(Gesture::Rock, Objective::Lose)), "Make a choice that will lose");
    }

    #[test]
    fn test_board_lines() {
        let e = engine(Gesture::Paper, Objective::Win);
        assert_eq!(opponent_line(&e), "Game has chosen: ✋");
        assert_eq!(round_line(&e), "Round 1 of 10");
        assert_eq!(score_line(&e), "Score: 0");
    }

    #[test]
    fn test_game_over_message() {
        let mut e = engine(Gesture::Rock, Objective::Lose);
        e.submit_choice(Gesture::Paper);
        assert_eq!(game_over_message(&e), "Final score is -5");
    }

    #[test]
    fn test_seed_line() {
        let e = RoundEngine::new(1234);
        assert_eq!(seed_line(e.rng().seed()), "Seed: 1234");
    }

    #[test]
    fn test_delta_feedback() {
        let config = GameConfig::default();
        assert_eq!(delta_feedback(ScoreDelta::hit(&config)), "+10");
        assert_eq!(delta_feedback(ScoreDelta::miss(&config)), "-5");
    }
}

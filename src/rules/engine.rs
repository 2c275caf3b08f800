//! The round engine: authoritative state for one game session.
//!
//! A game is a fixed number of rounds. Each round the engine draws an
//! opponent gesture and an objective; the player answers with a gesture
//! and `submit_choice` scores it, then either advances to a fresh round or
//! ends the game.
//!
//! ## Scoring
//!
//! Let `winning` be the gesture that beats the opponent's.
//!
//! - Objective `Win`: picking `winning` is a hit.
//! - Objective `Lose`: picking anything but `winning` is a hit.
//!
//! A hit adds the reward, a miss subtracts the penalty. There is no
//! separate tie outcome.

use im::Vector;
use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::core::{GameConfig, GameRng, Gesture, Objective, RoundRecord, ScoreDelta};

/// Lifecycle state of a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Rounds remain. Initial state.
    Playing,
    /// The final round has been scored. Only `new_game` leaves this.
    GameOver,
}

/// Score a single choice. Pure; does not touch any engine.
#[must_use]
pub fn score_choice(
    opponent: Gesture,
    objective: Objective,
    choice: Gesture,
    config: &GameConfig,
) -> ScoreDelta {
    let winning = opponent.beaten_by();
    let hit = match objective {
        Objective::Win => choice == winning,
        Objective::Lose => choice != winning,
    };

    if hit {
        ScoreDelta::hit(config)
    } else {
        ScoreDelta::miss(config)
    }
}

/// Final tally of a game, for reporting.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSummary {
    pub score: i64,
    pub rounds_played: u32,
    pub rounds: u32,
    pub hits: u32,
    pub misses: u32,
    /// Best score the configuration allows.
    pub max_score: i64,
    pub finished: bool,
}

/// Authoritative state for one game session.
///
/// Cloning is cheap: history is an `im::Vector`.
#[derive(Clone, Debug)]
pub struct RoundEngine {
    config: GameConfig,
    rng: GameRng,
    opponent_gesture: Gesture,
    objective: Objective,
    score: i64,
    round: u32,
    phase: Phase,
    history: Vector<RoundRecord>,
}

impl RoundEngine {
    /// Create an engine with the default configuration, ready to play.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::with_config(GameConfig::default(), GameRng::new(seed))
    }

    /// Create an engine with a custom configuration and random source.
    ///
    /// The first round is drawn from `rng` immediately.
    #[must_use]
    pub fn with_config(config: GameConfig, rng: GameRng) -> Self {
        let mut engine = Self::from_parts(config, rng, Gesture::Rock, Objective::Win);
        engine.new_game();
        engine
    }

    /// Create an engine whose first round is fixed.
    ///
    /// Later rounds are drawn from `rng` as usual.
    #[must_use]
    pub fn from_parts(
        config: GameConfig,
        rng: GameRng,
        opponent_gesture: Gesture,
        objective: Objective,
    ) -> Self {
        assert!(config.rounds > 0, "Must have at least 1 round");

        Self {
            config,
            rng,
            opponent_gesture,
            objective,
            score: 0,
            round: 1,
            phase: Phase::Playing,
            history: Vector::new(),
        }
    }

    /// Reset to round 1 with a zero score and draw a fresh round.
    pub fn new_game(&mut self) {
        self.score = 0;
        self.round = 1;
        self.phase = Phase::Playing;
        self.history.clear();
        self.reroll();
        debug!(
            "new game: {} rounds, opponent {}, objective {}",
            self.config.rounds, self.opponent_gesture, self.objective
        );
    }

    /// Score the player's gesture for the current round and advance.
    ///
    /// Panics if the game is already over; call `new_game` first.
    pub fn submit_choice(&mut self, choice: Gesture) -> ScoreDelta {
        match self.try_submit_choice(choice) {
            Some(delta) => delta,
            None => panic!("submit_choice called after game over"),
        }
    }

    /// Like `submit_choice`, but returns `None` instead of panicking
    /// once the game is over.
    pub fn try_submit_choice(&mut self, choice: Gesture) -> Option<ScoreDelta> {
        if self.phase == Phase::GameOver {
            return None;
        }

        let delta = score_choice(self.opponent_gesture, self.objective, choice, &self.config);
        self.score = self.score.saturating_add(delta.points);

        self.history.push_back(RoundRecord {
            round: self.round,
            opponent: self.opponent_gesture,
            objective: self.objective,
            choice,
            delta,
            score_after: self.score,
        });

        debug!(
            "round {}: opponent {} objective {} choice {} -> {:+} (score {})",
            self.round, self.opponent_gesture, self.objective, choice, delta.points, self.score
        );

        if self.round < self.config.rounds {
            self.round += 1;
            self.reroll();
        } else {
            self.phase = Phase::GameOver;
            info!("game over: final score {}", self.score);
        }

        Some(delta)
    }

    /// Draw the opponent gesture, then the objective.
    fn reroll(&mut self) {
        let index = self.rng.gen_index(Gesture::COUNT);
        self.opponent_gesture = Gesture::ALL[index];
        self.objective = Objective::from_flag(self.rng.gen_bool(0.5));
    }

    // === Accessors ===

    #[must_use]
    pub fn opponent_gesture(&self) -> Gesture {
        self.opponent_gesture
    }

    #[must_use]
    pub fn objective(&self) -> Objective {
        self.objective
    }

    /// The gesture that beats the opponent this round.
    #[must_use]
    pub fn winning_gesture(&self) -> Gesture {
        self.opponent_gesture.beaten_by()
    }

    #[must_use]
    pub fn score(&self) -> i64 {
        self.score
    }

    /// Current round number, 1-based.
    #[must_use]
    pub fn round(&self) -> u32 {
        self.round
    }

    /// Total rounds per game.
    #[must_use]
    pub fn rounds(&self) -> u32 {
        self.config.rounds
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    /// Rounds scored so far in this game, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<RoundRecord> {
        &self.history
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// The random source, e.g. to read its seed for a replay.
    #[must_use]
    pub fn rng(&self) -> &GameRng {
        &self.rng
    }

    /// Tally of the game so far.
    #[must_use]
    pub fn summary(&self) -> GameSummary {
        let hits = self.history.iter().filter(|r| r.delta.is_hit()).count() as u32;
        let rounds_played = self.history.len() as u32;

        GameSummary {
            score: self.score,
            rounds_played,
            rounds: self.config.rounds,
            hits,
            misses: rounds_played - hits,
            max_score: self.config.max_score(),
            finished: self.is_game_over(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixed(opponent: Gesture, objective: Objective) -> RoundEngine {
        RoundEngine::from_parts(GameConfig::default(), GameRng::new(42), opponent, objective)
    }

    #[test]
    fn test_new_engine_is_fresh() {
        let engine = RoundEngine::new(42);
        assert_eq!(engine.round(), 1);
        assert_eq!(engine.score(), 0);
        assert!(!engine.is_game_over());
        assert_eq!(engine.phase(), Phase::Playing);
        assert!(engine.history().is_empty());
    }

    #[test]
    fn test_win_objective_hit() {
        let mut engine = fixed(Gesture::Rock, Objective::Win);
        let delta = engine.submit_choice(Gesture::Paper);
        assert!(delta.is_hit());
        assert_eq!(engine.score(), 10);
    }

    #[test]
    fn test_lose_objective_picking_winner_misses() {
        let mut engine = fixed(Gesture::Rock, Objective::Lose);
        let delta = engine.submit_choice(Gesture::Paper);
        assert!(!delta.is_hit());
        assert_eq!(engine.score(), -5);
    }

    #[test]
    fn test_lose_objective_avoiding_winner_hits() {
        let mut engine = fixed(Gesture::Scissors, Objective::Lose);
        assert_eq!(engine.winning_gesture(), Gesture::Rock);
        engine.submit_choice(Gesture::Paper);
        assert_eq!(engine.score(), 10);
    }

    #[test]
    fn test_tie_is_not_special() {
        // Same gesture as the opponent: under Win it's a miss, under Lose a hit.
        let config = GameConfig::default();
        assert_eq!(score_choice(Gesture::Rock, Objective::Win, Gesture::Rock, &config).points, -5);
        assert_eq!(score_choice(Gesture::Rock, Objective::Lose, Gesture::Rock, &config).points, 10);
    }

    #[test]
    fn test_hit_counts_per_objective() {
        let config = GameConfig::default();
        for opponent in Gesture::ALL {
            let win_hits = Gesture::ALL
                .iter()
                .filter(|&&g| score_choice(opponent, Objective::Win, g, &config).is_hit())
                .count();
            let lose_hits = Gesture::ALL
                .iter()
                .filter(|&&g| score_choice(opponent, Objective::Lose, g, &config).is_hit())
                .count();
            assert_eq!(win_hits, 1);
            assert_eq!(lose_hits, 2);
        }
    }

    #[test]
    fn test_round_advances_and_records() {
        let mut engine = fixed(Gesture::Rock, Objective::Win);
        engine.submit_choice(Gesture::Paper);

        assert_eq!(engine.round(), 2);
        assert_eq!(engine.history().len(), 1);

        let record = &engine.history()[0];
        assert_eq!(record.round, 1);
        assert_eq!(record.opponent, Gesture::Rock);
        assert_eq!(record.objective, Objective::Win);
        assert_eq!(record.choice, Gesture::Paper);
        assert_eq!(record.score_after, 10);
    }

    #[test]
    fn test_final_round_ends_game_without_reroll() {
        let mut engine = RoundEngine::new(9);
        for _ in 0..9 {
            engine.submit_choice(Gesture::Rock);
        }
        assert_eq!(engine.round(), 10);

        let opponent = engine.opponent_gesture();
        let objective = engine.objective();
        engine.submit_choice(Gesture::Scissors);

        assert!(engine.is_game_over());
        assert_eq!(engine.round(), 10);
        assert_eq!(engine.opponent_gesture(), opponent);
        assert_eq!(engine.objective(), objective);
    }

    #[test]
    fn test_try_submit_after_game_over() {
        let config = GameConfig::new().with_rounds(1);
        let mut engine = RoundEngine::with_config(config, GameRng::new(1));

        assert!(engine.try_submit_choice(Gesture::Rock).is_some());
        assert!(engine.is_game_over());

        let score = engine.score();
        assert_eq!(engine.try_submit_choice(Gesture::Rock), None);
        assert_eq!(engine.score(), score);
        assert_eq!(engine.history().len(), 1);
    }

    #[test]
    #[should_panic(expected = "submit_choice called after game over")]
    fn test_submit_after_game_over_panics() {
        let config = GameConfig::new().with_rounds(1);
        let mut engine = RoundEngine::with_config(config, GameRng::new(1));
        engine.submit_choice(Gesture::Rock);
        engine.submit_choice(Gesture::Rock);
    }

    #[test]
    fn test_new_game_resets() {
        let mut engine = RoundEngine::new(3);
        for _ in 0..10 {
            engine.submit_choice(Gesture::Paper);
        }
        assert!(engine.is_game_over());

        engine.new_game();
        assert_eq!(engine.score(), 0);
        assert_eq!(engine.round(), 1);
        assert!(!engine.is_game_over());
        assert!(engine.history().is_empty());
    }

    #[test]
    fn test_custom_stakes() {
        let config = GameConfig::new().with_reward(3).with_penalty(1);
        let mut engine = RoundEngine::from_parts(config, GameRng::new(0), Gesture::Paper, Objective::Win);

        assert_eq!(engine.submit_choice(Gesture::Scissors).points, 3);
        assert_eq!(engine.score(), 3);
    }

    #[test]
    fn test_large_stakes_score_without_overflow() {
        let config = GameConfig::new()
            .with_rounds(3)
            .with_reward(u32::MAX)
            .with_penalty(u32::MAX);
        let mut engine = RoundEngine::from_parts(config, GameRng::new(0), Gesture::Rock, Objective::Lose);

        // Picking the winner under Lose is a miss: the penalty still subtracts.
        assert_eq!(engine.submit_choice(Gesture::Paper).points, -i64::from(u32::MAX));
        assert_eq!(engine.score(), -i64::from(u32::MAX));

        while !engine.is_game_over() {
            let choice = match engine.objective() {
                Objective::Win => engine.winning_gesture(),
                Objective::Lose => engine.opponent_gesture(),
            };
            assert!(engine.submit_choice(choice).is_hit());
        }
        assert_eq!(engine.score(), i64::from(u32::MAX));
        assert!(engine.score() <= engine.config().max_score());
    }

    #[test]
    fn test_summary() {
        let mut engine = fixed(Gesture::Rock, Objective::Win);
        engine.submit_choice(Gesture::Paper);

        let summary = engine.summary();
        assert_eq!(summary.score, engine.score());
        assert_eq!(summary.rounds_played, 1);
        assert_eq!(summary.rounds, 10);
        assert_eq!(summary.hits, 1);
        assert_eq!(summary.misses, 0);
        assert_eq!(summary.max_score, 100);
        assert!(!summary.finished);
    }

    #[test]
    fn test_clone_is_independent() {
        let mut engine = RoundEngine::new(5);
        let snapshot = engine.clone();

        engine.submit_choice(Gesture::Rock);
        assert_eq!(snapshot.round(), 1);
        assert!(snapshot.history().is_empty());
    }
}

//! RoundEngine bindings for Python.

use pyo3::exceptions::{PyRuntimeError, PyValueError};
use pyo3::prelude::*;

use crate::core::{GameConfig, GameRng};
use crate::rules::RoundEngine;
use crate::view;

use super::py_core::{extract_gesture, PyGesture};

/// Python wrapper for RoundEngine.
#[pyclass(name = "RoundEngine")]
pub struct PyRoundEngine {
    engine: RoundEngine,
}

#[pymethods]
impl PyRoundEngine {
    /// Create a new engine, ready to play.
    ///
    /// # Arguments
    /// - seed: RNG seed; omit for a random one
    /// - rounds: rounds per game
    /// - reward: points for a correct choice
    /// - penalty: points lost for a wrong choice
    #[new]
    #[pyo3(signature = (seed = None, rounds = 10, reward = 10, penalty = 5))]
    fn new(seed: Option<u64>, rounds: i64, reward: i64, penalty: i64) -> PyResult<Self> {
        let rounds = match u32::try_from(rounds) {
            Ok(r) if r > 0 => r,
            _ => return Err(PyValueError::new_err(format!("rounds must be in 1..={}", u32::MAX))),
        };
        let config = GameConfig::new()
            .with_rounds(rounds)
            .with_reward(stake("reward", reward)?)
            .with_penalty(stake("penalty", penalty)?);
        let rng = match seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };
        Ok(Self {
            engine: RoundEngine::with_config(config, rng),
        })
    }

    /// Reset score and round, and draw a fresh round.
    fn new_game(&mut self) {
        self.engine.new_game();
    }

    /// Score a gesture (Gesture, index or name). Returns the points applied.
    ///
    /// Raises RuntimeError if the game is over.
    fn submit_choice(&mut self, gesture: &Bound<'_, PyAny>) -> PyResult<i64> {
        let gesture = extract_gesture(gesture)?;
        self.engine
            .try_submit_choice(gesture)
            .map(|delta| delta.points)
            .ok_or_else(|| PyRuntimeError::new_err("game is over; call new_game()"))
    }

    #[getter]
    fn opponent_gesture(&self) -> PyGesture {
        PyGesture(self.engine.opponent_gesture())
    }

    #[getter]
    fn winning_gesture(&self) -> PyGesture {
        PyGesture(self.engine.winning_gesture())
    }

    /// True when the round rewards winning.
    #[getter]
    fn should_win(&self) -> bool {
        self.engine.objective().is_win()
    }

    #[getter]
    fn score(&self) -> i64 {
        self.engine.score()
    }

    #[getter]
    fn round(&self) -> u32 {
        self.engine.round()
    }

    #[getter]
    fn rounds(&self) -> u32 {
        self.engine.rounds()
    }

    #[getter]
    fn is_game_over(&self) -> bool {
        self.engine.is_game_over()
    }

    /// Instruction text for the current round.
    fn prompt(&self) -> String {
        view::prompt(&self.engine)
    }

    /// Game summary as a JSON string.
    fn summary_json(&self) -> PyResult<String> {
        serde_json::to_string(&self.engine.summary())
            .map_err(|e| PyRuntimeError::new_err(e.to_string()))
    }

    fn __repr__(&self) -> String {
        format!(
            "RoundEngine(round={}/{}, score={}, game_over={})",
            self.engine.round(),
            self.engine.rounds(),
            self.engine.score(),
            self.engine.is_game_over()
        )
    }
}

/// Reward and penalty are magnitudes; negative or oversized values are rejected.
fn stake(name: &str, value: i64) -> PyResult<u32> {
    u32::try_from(value)
        .map_err(|_| PyValueError::new_err(format!("{} must be in 0..={}, got {}", name, u32::MAX, value)))
}

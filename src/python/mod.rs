//! Python bindings for the round engine.
//!
//! # Quick Start
//!
//! ```python
//! import rps_trainer as rps
//!
//! engine = rps.RoundEngine(seed=42)
//! while not engine.is_game_over:
//!     print(engine.prompt(), engine.opponent_gesture)
//!     engine.submit_choice("paper")
//! print(engine.score)
//! ```

use pyo3::prelude::*;

mod py_core;
mod py_engine;

pub use py_core::*;
pub use py_engine::*;

/// rps_trainer: the ten-round rock/paper/scissors drill.
#[pymodule]
fn rps_trainer(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyGesture>()?;
    m.add_class::<PyRoundEngine>()?;

    Ok(())
}

//! Core type bindings for Python.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::core::Gesture;

/// Python wrapper for Gesture.
#[pyclass(name = "Gesture")]
#[derive(Clone, Copy, Debug)]
pub struct PyGesture(pub Gesture);

#[pymethods]
impl PyGesture {
    /// Create a gesture from its index (0-2) or name ("rock", "p", ...).
    #[new]
    fn new(value: &Bound<'_, PyAny>) -> PyResult<Self> {
        extract_gesture(value).map(Self)
    }

    /// Index in cyclic order (rock=0, paper=1, scissors=2).
    #[getter]
    fn index(&self) -> usize {
        self.0.index()
    }

    #[getter]
    fn name(&self) -> &'static str {
        self.0.name()
    }

    #[getter]
    fn glyph(&self) -> &'static str {
        self.0.glyph()
    }

    /// The gesture that beats this one.
    fn beaten_by(&self) -> Self {
        Self(self.0.beaten_by())
    }

    fn beats(&self, other: &Self) -> bool {
        self.0.beats(other.0)
    }

    fn __repr__(&self) -> String {
        format!("Gesture.{}", self.0)
    }

    fn __eq__(&self, other: &Self) -> bool {
        self.0 == other.0
    }

    fn __hash__(&self) -> u64 {
        self.0.index() as u64
    }
}

/// Accept a `Gesture`, an index, or a name. Anything else is a `ValueError`.
pub(crate) fn extract_gesture(value: &Bound<'_, PyAny>) -> PyResult<Gesture> {
    if let Ok(g) = value.extract::<PyGesture>() {
        return Ok(g.0);
    }
    if let Ok(index) = value.extract::<usize>() {
        return Gesture::from_index(index)
            .ok_or_else(|| PyValueError::new_err(format!("gesture index {} out of range 0..3", index)));
    }
    if let Ok(name) = value.extract::<String>() {
        return name
            .parse::<Gesture>()
            .map_err(|e| PyValueError::new_err(e.to_string()));
    }
    Err(PyValueError::new_err("expected a Gesture, an index 0-2, or a gesture name"))
}

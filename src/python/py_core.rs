//! Value conversions between Python and the solver types.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::core::{Board, Stone, Topology};
use crate::solver::{Hint, VerdictRecord};

pub(crate) fn value_error(err: impl std::fmt::Display) -> PyErr {
    PyValueError::new_err(err.to_string())
}

/// Board from a flat list of cell values.
pub(crate) fn board_from(topology: Topology, cells: &[i8]) -> PyResult<Board> {
    Board::from_values(topology, cells).map_err(value_error)
}

/// Player from its cell value (1 black, -1 white).
pub(crate) fn player_from(value: i8) -> PyResult<Stone> {
    match Stone::from_i8(value) {
        Some(stone) if stone.is_stone() => Ok(stone),
        _ => Err(value_error(format!("player must be 1 or -1, got {value}"))),
    }
}

/// Python view of a verdict record.
#[pyclass(name = "VerdictRecord")]
#[derive(Clone, Debug)]
pub struct PyVerdictRecord {
    /// "WIN", "LOSS" or "DRAW" for the player to move.
    #[pyo3(get)]
    pub verdict: String,

    /// Moves achieving the verdict.
    #[pyo3(get)]
    pub moves: Vec<usize>,

    /// One hint code per cell.
    #[pyo3(get)]
    pub hints: String,
}

impl PyVerdictRecord {
    pub(crate) fn from_record(record: &VerdictRecord, cell_count: usize) -> Self {
        Self {
            verdict: record.verdict.to_string(),
            moves: record.moves.to_vec(),
            hints: Hint::codes(&record.hints(cell_count)),
        }
    }
}

#[pymethods]
impl PyVerdictRecord {
    fn __repr__(&self) -> String {
        format!(
            "VerdictRecord(verdict={}, moves={:?}, hints={:?})",
            self.verdict, self.moves, self.hints
        )
    }

    fn __eq__(&self, other: &Self) -> bool {
        self.verdict == other.verdict && self.moves == other.moves && self.hints == other.hints
    }
}

//! Solver bindings for Python.

use std::fs::File;
use std::io::BufWriter;

use pyo3::prelude::*;

use super::py_core::{board_from, player_from, value_error, PyVerdictRecord};
use crate::core::Topology;
use crate::solver::{Solver, SolverConfig, TerminationPolicy};

/// Python wrapper for a solver and its table.
///
/// Boards are flat lists of cell values in row-major order.
#[pyclass(name = "Solver")]
pub struct PySolver {
    inner: Solver,
}

impl PySolver {
    fn topology(&self) -> Topology {
        self.inner.topology()
    }
}

#[pymethods]
impl PySolver {
    /// Create a solver for `board_size` ("5" or "3x3").
    #[new]
    #[pyo3(signature = (board_size, policy = "first-capture"))]
    fn new(board_size: &str, policy: &str) -> PyResult<Self> {
        let topology: Topology = board_size.parse().map_err(value_error)?;
        let policy: TerminationPolicy = policy.parse().map_err(value_error)?;
        let config = SolverConfig::new(topology).with_policy(policy);
        let inner = Solver::new(config).map_err(value_error)?;
        Ok(Self { inner })
    }

    /// Number of cells on the board.
    #[getter]
    fn cell_count(&self) -> usize {
        self.topology().cell_count()
    }

    /// Number of solved positions.
    fn __len__(&self) -> usize {
        self.inner.table().len()
    }

    /// Solve a position (empty board if `cells` is omitted).
    #[pyo3(signature = (cells = None, player = 1))]
    fn solve(&mut self, cells: Option<Vec<i8>>, player: i8) -> PyResult<PyVerdictRecord> {
        let topology = self.topology();
        let board = match cells {
            Some(cells) => board_from(topology, &cells)?,
            None => crate::core::Board::empty(topology),
        };
        let record = self
            .inner
            .solve(&board, player_from(player)?)
            .map_err(value_error)?;
        Ok(PyVerdictRecord::from_record(&record, topology.cell_count()))
    }

    /// Look up an already solved position.
    fn lookup(&self, cells: Vec<i8>, player: i8) -> PyResult<Option<PyVerdictRecord>> {
        let topology = self.topology();
        let board = board_from(topology, &cells)?;
        Ok(self
            .inner
            .lookup(&board, player_from(player)?)
            .map(|record| PyVerdictRecord::from_record(&record, topology.cell_count())))
    }

    /// Hint string for a solved position, e.g. "rgr".
    fn hints(&self, cells: Vec<i8>, player: i8) -> PyResult<Option<String>> {
        Ok(self.lookup(cells, player)?.map(|record| record.hints))
    }

    /// Write the CSV export of every solved position.
    fn export_csv(&self, path: &str) -> PyResult<()> {
        let file = File::create(path).map_err(value_error)?;
        let store = self.inner.clone().into_store();
        store
            .write_csv(&mut BufWriter::new(file))
            .map_err(value_error)
    }

    /// Write a bincode snapshot of every solved position.
    fn save(&self, path: &str) -> PyResult<()> {
        let file = File::create(path).map_err(value_error)?;
        let store = self.inner.clone().into_store();
        store.save(BufWriter::new(file)).map_err(value_error)
    }

    fn is_legal_move(&self, cells: Vec<i8>, position: usize, player: i8) -> PyResult<bool> {
        let board = board_from(self.topology(), &cells)?;
        Ok(board.is_legal_move(position, player_from(player)?))
    }

    fn legal_moves(&self, cells: Vec<i8>, player: i8) -> PyResult<Vec<usize>> {
        let board = board_from(self.topology(), &cells)?;
        Ok(board.legal_moves(player_from(player)?).collect())
    }

    /// Play a move. Returns the new cells and the number of stones captured.
    fn apply_move(&self, cells: Vec<i8>, position: usize, player: i8) -> PyResult<(Vec<i8>, usize)> {
        let mut board = board_from(self.topology(), &cells)?;
        let captured = board
            .try_play(position, player_from(player)?)
            .map_err(value_error)?;
        Ok((board.values(), captured))
    }

    fn __repr__(&self) -> String {
        let config = self.inner.config();
        format!(
            "Solver(board_size={:?}, policy={:?}, solved={})",
            config.topology.to_string(),
            config.policy.name(),
            self.inner.table().len()
        )
    }
}

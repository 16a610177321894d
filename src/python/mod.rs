//! Python bindings for the capture solver.
//!
//! # Quick Start
//!
//! ```python
//! import capture_solver as cs
//!
//! solver = cs.Solver("3", policy="first-capture")
//! record = solver.solve()
//! print(record.verdict, record.moves, record.hints)   # WIN [1] rgr
//!
//! solver.legal_moves([0, 1, 0], -1)                   # []
//! solver.apply_move([1, 0, 0], 1, -1)                 # ([0, -1, 0], 1)
//! solver.export_csv("strip3.csv")
//! ```

use pyo3::prelude::*;

mod py_core;
mod py_solver;

pub use py_core::*;
pub use py_solver::*;

/// capture_solver: exhaustive solver for a small-board capture game.
#[pymodule]
fn capture_solver(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PySolver>()?;
    m.add_class::<PyVerdictRecord>()?;
    Ok(())
}

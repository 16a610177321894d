//! # capture-solver
//!
//! Exhaustive solver for a small-board stone-capture game played with Go's
//! capture and liberty rules on a strip or a rectangular grid.
//!
//! ## Design Principles
//!
//! 1. **Exact**: every reachable position is searched. There is no heuristic
//!    evaluation and no depth limit.
//!
//! 2. **Symmetry-Reduced**: positions equal up to a board symmetry share one
//!    table entry. Moves are mapped back to the caller's board on the way out.
//!
//! 3. **Owned State**: the transposition table and the search path belong to
//!    one `Solver`. Independent solvers share nothing.
//!
//! ## Modules
//!
//! - `core`: stones, board topologies, boards and their text encoding
//! - `rules`: groups, liberties, captures, legal moves, trial moves
//! - `canon`: symmetries, canonical keys, Zobrist fingerprints
//! - `solver`: configuration, verdicts, transposition table, search
//! - `store`: read-only results, CSV export, snapshots
//! - `error`: error types

pub mod canon;
pub mod core;
pub mod error;
pub mod rules;
pub mod solver;
pub mod store;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{Board, Stone, Topology};

pub use crate::rules::{Group, Trial};

pub use crate::canon::{CanonicalKey, Canonicalizer, Symmetry};

pub use crate::solver::{
    Hint, SearchStats, Solver, SolverConfig, TerminationPolicy, TranspositionTable, Verdict,
    VerdictRecord,
};

pub use crate::store::{ExportRow, ResultStore};

pub use crate::error::{BoardError, ConfigError, MoveError, StoreError};

//! Memoized exhaustive search.
//!
//! ## Overview
//!
//! [`Solver`] computes, for a board and the side to move, whether that side
//! wins, loses or draws under optimal play, together with every move that
//! achieves it. Results for every position visited are kept in a
//! [`TranspositionTable`] keyed by canonical position.
//!
//! ## Usage
//!
//! ```rust
//! use capture_solver::core::Stone;
//! use capture_solver::solver::{Solver, SolverConfig, TerminationPolicy, Verdict};
//!
//! let config = SolverConfig::strip(3)
//!     .unwrap()
//!     .with_policy(TerminationPolicy::FirstCapture);
//! let mut solver = Solver::new(config).unwrap();
//!
//! let record = solver.solve_empty(Stone::Black).unwrap();
//! assert_eq!(record.verdict, Verdict::Win);
//! assert_eq!(record.moves.as_slice(), &[1]);
//! ```
//!
//! ## Termination
//!
//! Two conventions are supported through [`TerminationPolicy`]: the first
//! capture wins, or a player left without a legal move loses. In both, a
//! line of play that returns to a position already on the search path is a
//! draw.

pub mod config;
pub mod frame;
pub mod search;
pub mod stats;
pub mod table;
pub mod verdict;

pub use config::{SolverConfig, TerminationPolicy};
pub use frame::SearchFrame;
pub use search::Solver;
pub use stats::SearchStats;
pub use table::{TableEntry, TableStats, TranspositionTable};
pub use verdict::{Hint, MoveOutcome, Verdict, VerdictRecord};

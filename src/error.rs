//! Error types.
//!
//! Search itself is infallible: everything here is either a caller error
//! (bad configuration, malformed board, illegal move) or an I/O failure at
//! the export/snapshot boundary.

use std::io;

use crate::core::Topology;

/// Rejected before any search starts.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("board must have at least one cell (got {rows}x{cols})")]
    EmptyBoard { rows: usize, cols: usize },

    #[error("board has {actual} cells but topology {topology} needs {expected}")]
    ShapeMismatch {
        topology: Topology,
        expected: usize,
        actual: usize,
    },

    #[error("board topology {actual} does not match the solver's {expected}")]
    TopologyMismatch { expected: Topology, actual: Topology },

    #[error("unrecognized termination policy: {0:?}")]
    UnknownPolicy(String),

    #[error("board {rows}x{cols} exceeds the {max}-cell limit")]
    TooLarge { rows: usize, cols: usize, max: usize },

    #[error("unrecognized board size: {0:?} (expected N or RxC)")]
    UnknownTopology(String),

    #[error("player to move must be black or white")]
    InvalidPlayer,
}

/// Failure to parse a serialized board.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("invalid cell {value:?} at index {index} (expected 0, 1 or -1)")]
    InvalidCell { index: usize, value: String },

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// A checked move that the rules do not allow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("position {position} is off the board ({cells} cells)")]
    OutOfBounds { position: usize, cells: usize },

    #[error("position {0} is occupied")]
    Occupied(usize),

    #[error("position {0} would be suicide")]
    Suicide(usize),

    #[error("cannot place an empty stone")]
    NotAStone,
}

/// Failure at the export/snapshot boundary.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("snapshot encoding error: {0}")]
    Encoding(#[from] bincode::Error),

    #[error("snapshot is inconsistent: {0}")]
    Config(#[from] ConfigError),

    #[error("snapshot entry {index} is invalid: {reason}")]
    InvalidEntry { index: usize, reason: &'static str },
}

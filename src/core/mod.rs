//! Core value types: stones, board topology, board cells.

pub mod board;
pub mod stone;
pub mod topology;

pub use board::Board;
pub use stone::Stone;
pub use topology::{Neighbors, Topology};

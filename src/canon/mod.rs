//! Symmetry reduction of positions.
//!
//! Positions related by a board symmetry have the same game value, so the
//! solver stores one entry per equivalence class. The canonicalizer picks the
//! representative, remembers which transform reached it, and fingerprints it
//! for hashing.
//!
//! Moves found on a representative are mapped back to the caller's board with
//! `Symmetry::inverse`.

pub mod key;
pub mod symmetry;
pub mod zobrist;

pub use key::{CanonicalKey, Canonicalizer};
pub use symmetry::Symmetry;
pub use zobrist::ZobristKeys;

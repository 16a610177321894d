//! Board mechanics for the capture game.
//!
//! The rule engine is pure: it answers questions about a `Board` and applies
//! moves, and knows nothing about search or termination policies.
//!
//! - `engine`: groups, liberties, captures, legality, move enumeration
//! - `trial`: scoped trial moves on a copy of the board

pub mod engine;
pub mod trial;

pub use engine::{Group, LegalMoves};
pub use trial::Trial;

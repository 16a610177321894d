//! Canonical keys.
//!
//! Every symmetric variant of a board is generated and the one with the
//! lexicographically smallest cells (white < empty < black) is kept as the
//! representative. Ties go to the earlier transform in the group, so a board
//! that is already canonical always comes back with `Symmetry::Identity`.

use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use super::symmetry::Symmetry;
use super::zobrist::ZobristKeys;
use crate::core::{Board, Stone, Topology};

/// Symmetry-normalized (board, side to move) pair.
///
/// Hashes by its Zobrist fingerprint; equality compares the full cells.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanonicalKey {
    cells: Box<[Stone]>,
    to_move: Stone,
    fingerprint: u64,
}

impl CanonicalKey {
    /// Representative cells.
    #[inline]
    #[must_use]
    pub fn cells(&self) -> &[Stone] {
        &self.cells
    }

    #[inline]
    #[must_use]
    pub fn to_move(&self) -> Stone {
        self.to_move
    }

    #[inline]
    #[must_use]
    pub fn fingerprint(&self) -> u64 {
        self.fingerprint
    }

    /// Rebuild the representative board.
    #[must_use]
    pub fn board(&self, topology: Topology) -> Board {
        let mut board = Board::empty(topology);
        for (position, &stone) in self.cells.iter().enumerate() {
            board.set(position, stone);
        }
        board
    }
}

impl Hash for CanonicalKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.fingerprint);
    }
}

/// Maps positions of one topology to canonical keys.
#[derive(Clone, Debug)]
pub struct Canonicalizer {
    topology: Topology,
    group: &'static [Symmetry],
    zobrist: ZobristKeys,
}

impl Canonicalizer {
    #[must_use]
    pub fn new(topology: Topology, zobrist_seed: u64) -> Self {
        Self {
            topology,
            group: Symmetry::group(topology),
            zobrist: ZobristKeys::new(topology.cell_count(), zobrist_seed),
        }
    }

    #[must_use]
    pub fn topology(&self) -> Topology {
        self.topology
    }

    /// Symmetries considered, identity first.
    #[must_use]
    pub fn symmetries(&self) -> &'static [Symmetry] {
        self.group
    }

    /// Representative board and the transform that produced it from `board`.
    #[must_use]
    pub fn canonicalize(&self, board: &Board) -> (Board, Symmetry) {
        debug_assert_eq!(board.topology(), self.topology);
        let mut best = board.clone();
        let mut best_sym = Symmetry::Identity;

        for &sym in &self.group[1..] {
            let candidate = sym.transform(board);
            if candidate.cells() < best.cells() {
                best = candidate;
                best_sym = sym;
            }
        }
        (best, best_sym)
    }

    /// Canonical key of `board` with `to_move` to play, plus the transform
    /// from `board` to the representative.
    #[must_use]
    pub fn key(&self, board: &Board, to_move: Stone) -> (CanonicalKey, Symmetry) {
        let (representative, sym) = self.canonicalize(board);
        (self.key_of_canonical(&representative, to_move), sym)
    }

    /// Key of a board already known to be canonical.
    #[must_use]
    pub fn key_of_canonical(&self, representative: &Board, to_move: Stone) -> CanonicalKey {
        let cells: Box<[Stone]> = representative.cells().into();
        let fingerprint = self.zobrist.fingerprint(&cells, to_move);
        CanonicalKey {
            cells,
            to_move,
            fingerprint,
        }
    }
}

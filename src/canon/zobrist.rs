//! Zobrist fingerprints for canonical positions.
//!
//! Each (cell, color) pair and each side to move gets a random 64-bit key;
//! a position's fingerprint is the XOR of the keys that apply. Keys come from
//! a seeded `ChaCha8Rng`, so the same seed always gives the same table.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::core::Stone;

/// Random keys for one board size.
#[derive(Clone, Debug)]
pub struct ZobristKeys {
    /// `[black, white]` key per cell.
    cells: Vec<[u64; 2]>,
    /// `[black to move, white to move]`.
    side: [u64; 2],
}

#[inline]
fn color_index(stone: Stone) -> Option<usize> {
    match stone {
        Stone::Black => Some(0),
        Stone::White => Some(1),
        Stone::Empty => None,
    }
}

impl ZobristKeys {
    /// Draw keys for `cell_count` cells from `seed`.
    #[must_use]
    pub fn new(cell_count: usize, seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let cells = (0..cell_count).map(|_| [rng.gen(), rng.gen()]).collect();
        let side = [rng.gen(), rng.gen()];
        Self { cells, side }
    }

    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Fingerprint of `cells` with `to_move` to play.
    #[must_use]
    pub fn fingerprint(&self, cells: &[Stone], to_move: Stone) -> u64 {
        debug_assert_eq!(cells.len(), self.cells.len());
        let mut h = 0u64;
        for (keys, &stone) in self.cells.iter().zip(cells) {
            if let Some(i) = color_index(stone) {
                h ^= keys[i];
            }
        }
        if let Some(i) = color_index(to_move) {
            h ^= self.side[i];
        }
        h
    }
}

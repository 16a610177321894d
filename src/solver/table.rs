//! Arena-backed transposition table.
//!
//! Records live in a flat `Vec` in insertion order and are found through an
//! `FxHashMap` from canonical key to arena index. Insertion order is the
//! order in which the search finished each position, which makes iteration
//! (and therefore export) deterministic.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::verdict::{Verdict, VerdictRecord};
use crate::canon::{CanonicalKey, Canonicalizer};
use crate::core::{Board, Stone};

/// One solved position.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableEntry {
    pub key: CanonicalKey,
    pub record: VerdictRecord,
}

/// Memo of solved canonical positions. Owned by one solver.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(from = "Vec<TableEntry>", into = "Vec<TableEntry>")]
pub struct TranspositionTable {
    entries: Vec<TableEntry>,
    index: FxHashMap<CanonicalKey, usize>,
}

impl TranspositionTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a solved position.
    #[inline]
    #[must_use]
    pub fn get(&self, key: &CanonicalKey) -> Option<&VerdictRecord> {
        self.index.get(key).map(|&i| &self.entries[i].record)
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, key: &CanonicalKey) -> bool {
        self.index.contains_key(key)
    }

    /// Store a record. A key is only ever solved once; a second insert for
    /// the same key keeps the first record.
    pub fn insert(&mut self, key: CanonicalKey, record: VerdictRecord) {
        if self.index.contains_key(&key) {
            return;
        }
        self.index.insert(key.clone(), self.entries.len());
        self.entries.push(TableEntry { key, record });
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Record for `board` with `to_move` to play, in `board`'s own frame.
    ///
    /// Boards of another shape and non-stone players find nothing.
    #[must_use]
    pub fn lookup(
        &self,
        canon: &Canonicalizer,
        board: &Board,
        to_move: Stone,
    ) -> Option<VerdictRecord> {
        if board.topology() != canon.topology() || !to_move.is_stone() {
            return None;
        }
        let (key, sym) = canon.key(board, to_move);
        self.get(&key)
            .map(|record| record.transformed(sym.inverse(), canon.topology()))
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &TableEntry> {
        self.entries.iter()
    }

    /// Entry counts by verdict.
    #[must_use]
    pub fn stats(&self) -> TableStats {
        let mut stats = TableStats {
            entries: self.entries.len(),
            ..TableStats::default()
        };
        for entry in &self.entries {
            match entry.record.verdict {
                Verdict::Win => stats.wins += 1,
                Verdict::Loss => stats.losses += 1,
                Verdict::Draw => stats.draws += 1,
            }
        }
        stats
    }
}

impl From<Vec<TableEntry>> for TranspositionTable {
    fn from(entries: Vec<TableEntry>) -> Self {
        let mut table = TranspositionTable::new();
        for entry in entries {
            table.insert(entry.key, entry.record);
        }
        table
    }
}

impl From<TranspositionTable> for Vec<TableEntry> {
    fn from(table: TranspositionTable) -> Self {
        table.entries
    }
}

/// Summary of a transposition table.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableStats {
    /// Total positions stored.
    pub entries: usize,
    /// Positions won by the player to move.
    pub wins: usize,
    /// Positions lost by the player to move.
    pub losses: usize,
    /// Drawn positions.
    pub draws: usize,
}

impl TableStats {
    /// Fraction of positions that are wins for the side to move.
    #[must_use]
    pub fn win_ratio(&self) -> f64 {
        if self.entries == 0 {
            0.0
        } else {
            self.wins as f64 / self.entries as f64
        }
    }
}

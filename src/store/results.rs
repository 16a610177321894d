//! Read-only view over a finished solve.

use std::io::{Read, Write};

use serde::{Deserialize, Serialize};

use super::export::{self, ExportRow};
use crate::canon::{Canonicalizer, Symmetry};
use crate::core::{Board, Stone};
use crate::error::{ConfigError, StoreError};
use crate::solver::{Hint, SolverConfig, TableStats, TranspositionTable, VerdictRecord};

/// On-disk form of a store.
#[derive(Serialize, Deserialize)]
struct Snapshot {
    config: SolverConfig,
    table: TranspositionTable,
}

/// Solved positions for one configuration.
///
/// Queries accept any board of the configured shape; the position is reduced
/// the same way the solver reduced it, and moves come back in the caller's
/// frame.
#[derive(Clone, Debug)]
pub struct ResultStore {
    config: SolverConfig,
    canon: Canonicalizer,
    table: TranspositionTable,
}

impl ResultStore {
    /// Wrap a table the solver built under `config`.
    #[must_use]
    pub(crate) fn new(config: SolverConfig, table: TranspositionTable) -> Self {
        let canon = Canonicalizer::new(config.topology, config.zobrist_seed);
        Self {
            config,
            canon,
            table,
        }
    }

    #[must_use]
    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    #[must_use]
    pub fn table(&self) -> &TranspositionTable {
        &self.table
    }

    /// Verdict and optimal moves for a position, if it was solved.
    #[must_use]
    pub fn lookup(&self, board: &Board, to_move: Stone) -> Option<VerdictRecord> {
        self.table.lookup(&self.canon, board, to_move)
    }

    /// Per-cell hints for a position, if it was solved.
    #[must_use]
    pub fn hints(&self, board: &Board, to_move: Stone) -> Option<Vec<Hint>> {
        self.lookup(board, to_move)
            .map(|record| record.hints(board.len()))
    }

    /// Export rows in table order.
    pub fn rows(&self) -> impl Iterator<Item = ExportRow> + '_ {
        self.table.iter().map(ExportRow::from_entry)
    }

    /// Write the CSV export.
    pub fn write_csv<W: Write>(&self, out: &mut W) -> Result<(), StoreError> {
        let rows: Vec<ExportRow> = self.rows().collect();
        export::write_csv(out, &rows)?;
        Ok(())
    }

    /// Write a bincode snapshot.
    pub fn save<W: Write>(&self, out: W) -> Result<(), StoreError> {
        let snapshot = Snapshot {
            config: self.config.clone(),
            table: self.table.clone(),
        };
        bincode::serialize_into(out, &snapshot)?;
        Ok(())
    }

    /// Read a snapshot written by [`ResultStore::save`].
    pub fn load<R: Read>(input: R) -> Result<Self, StoreError> {
        let Snapshot { config, table } = bincode::deserialize_from(input)?;
        Self::from_table(config, table)
    }

    /// Build a store from a table of unknown origin.
    ///
    /// Every entry must be a canonical position of the configured shape with
    /// a stone to move, and its moves must lie on the board. Keys are rebuilt
    /// under the config's seed, so stored fingerprints are never trusted.
    pub fn from_table(
        config: SolverConfig,
        table: TranspositionTable,
    ) -> Result<Self, StoreError> {
        config.validate()?;
        let topology = config.topology;
        let canon = Canonicalizer::new(topology, config.zobrist_seed);
        let expected = topology.cell_count();

        let mut rebuilt = TranspositionTable::new();
        for (index, entry) in table.iter().enumerate() {
            let cells = entry.key.cells().len();
            if cells != expected {
                return Err(ConfigError::ShapeMismatch {
                    topology,
                    expected,
                    actual: cells,
                }
                .into());
            }
            let invalid = |reason| StoreError::InvalidEntry { index, reason };

            let to_move = entry.key.to_move();
            if !to_move.is_stone() {
                return Err(invalid("no player to move"));
            }
            let board = entry.key.board(topology);
            if canon.canonicalize(&board).1 != Symmetry::Identity {
                return Err(invalid("position is not canonical"));
            }

            let record = &entry.record;
            if record.outcomes.iter().any(|o| o.position >= expected) {
                return Err(invalid("move lies off the board"));
            }
            if !record
                .moves
                .iter()
                .all(|m| record.outcomes.iter().any(|o| o.position == *m))
            {
                return Err(invalid("optimal move was never evaluated"));
            }

            rebuilt.insert(canon.key_of_canonical(&board, to_move), record.clone());
        }

        Ok(Self {
            config,
            canon,
            table: rebuilt,
        })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.table.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    #[must_use]
    pub fn stats(&self) -> TableStats {
        self.table.stats()
    }
}

//! Board cells over a fixed topology.
//!
//! The topology is fixed when a `Board` is created; only cell contents
//! change afterwards. Rule mechanics (groups, captures, legality) live in
//! `crate::rules` as further `impl Board` blocks.

use serde::{Deserialize, Serialize};

use super::stone::Stone;
use super::topology::Topology;
use crate::error::{BoardError, ConfigError};

/// Cells of one position.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawBoard")]
pub struct Board {
    topology: Topology,
    cells: Vec<Stone>,
}

/// Unchecked serde form of a `Board`.
#[derive(Deserialize)]
struct RawBoard {
    topology: Topology,
    cells: Vec<Stone>,
}

impl TryFrom<RawBoard> for Board {
    type Error = ConfigError;

    fn try_from(raw: RawBoard) -> Result<Self, Self::Error> {
        Board::from_cells(raw.topology, raw.cells)
    }
}

impl Board {
    /// Create an empty board.
    ///
    /// The topology must already be valid (see `Topology::validate`).
    #[must_use]
    pub fn empty(topology: Topology) -> Self {
        debug_assert!(topology.validate().is_ok());
        Self {
            topology,
            cells: vec![Stone::Empty; topology.cell_count()],
        }
    }

    /// Create a board from explicit cells.
    pub fn from_cells(topology: Topology, cells: Vec<Stone>) -> Result<Self, ConfigError> {
        topology.validate()?;
        if cells.len() != topology.cell_count() {
            return Err(ConfigError::ShapeMismatch {
                topology,
                expected: topology.cell_count(),
                actual: cells.len(),
            });
        }
        Ok(Self { topology, cells })
    }

    /// Create a board from the integer encoding (`0`, `1`, `-1`).
    pub fn from_values(topology: Topology, values: &[i8]) -> Result<Self, BoardError> {
        let cells = values
            .iter()
            .enumerate()
            .map(|(index, &v)| {
                Stone::from_i8(v).ok_or(BoardError::InvalidCell {
                    index,
                    value: v.to_string(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::from_cells(topology, cells)?)
    }

    /// Parse the comma-separated boundary format, e.g. `"0,1,-1"`.
    pub fn parse(topology: Topology, text: &str) -> Result<Self, BoardError> {
        let cells = text
            .trim()
            .trim_matches('"')
            .split(',')
            .enumerate()
            .map(|(index, raw)| {
                let raw = raw.trim();
                raw.parse::<i8>()
                    .ok()
                    .and_then(Stone::from_i8)
                    .ok_or_else(|| BoardError::InvalidCell {
                        index,
                        value: raw.to_string(),
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::from_cells(topology, cells)?)
    }

    /// Comma-separated boundary format.
    #[must_use]
    pub fn serialize(&self) -> String {
        self.cells
            .iter()
            .map(|c| c.to_i8().to_string())
            .collect::<Vec<_>>()
            .join(",")
    }

    #[inline]
    #[must_use]
    pub fn topology(&self) -> Topology {
        self.topology
    }

    /// Number of cells.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Boards always have at least one cell.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn get(&self, position: usize) -> Stone {
        self.cells[position]
    }

    #[inline]
    pub fn set(&mut self, position: usize, stone: Stone) {
        self.cells[position] = stone;
    }

    #[inline]
    #[must_use]
    pub fn cells(&self) -> &[Stone] {
        &self.cells
    }

    /// Cells in the integer encoding.
    #[must_use]
    pub fn values(&self) -> Vec<i8> {
        self.cells.iter().map(|c| c.to_i8()).collect()
    }

    /// Indices of empty cells in increasing order.
    pub fn empty_cells(&self) -> impl Iterator<Item = usize> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, c)| **c == Stone::Empty)
            .map(|(i, _)| i)
    }

    /// Number of stones of the given color.
    #[must_use]
    pub fn count(&self, stone: Stone) -> usize {
        self.cells.iter().filter(|c| **c == stone).count()
    }

    /// True when no cell is empty.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.empty_cells().next().is_none()
    }
}

impl std::fmt::Display for Board {
    /// One text row per board row, cells separated by spaces.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (r, row) in self.cells.chunks(self.topology.cols()).enumerate() {
            if r > 0 {
                writeln!(f)?;
            }
            for (c, cell) in row.iter().enumerate() {
                if c > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", cell.glyph())?;
            }
        }
        Ok(())
    }
}

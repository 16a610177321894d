//! Board shape and adjacency.
//!
//! A `Strip` is a single row of cells; a `Grid` is `rows x cols`. Both use
//! row-major indices and orthogonal adjacency, so a strip of length `n`
//! behaves exactly like a `1 x n` grid.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::error::ConfigError;

/// Largest board accepted. Exhaustive search is hopeless long before this.
pub const MAX_CELLS: usize = 4096;

/// Neighbor list. Never more than four entries.
pub type Neighbors = SmallVec<[usize; 4]>;

/// Fixed board shape.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Topology {
    /// One-dimensional strip of `len` cells.
    Strip { len: usize },
    /// Two-dimensional grid.
    Grid { rows: usize, cols: usize },
}

impl Topology {
    /// Create a validated strip.
    pub fn strip(len: usize) -> Result<Self, ConfigError> {
        let topology = Topology::Strip { len };
        topology.validate()?;
        Ok(topology)
    }

    /// Create a validated grid. A single row is a strip.
    pub fn grid(rows: usize, cols: usize) -> Result<Self, ConfigError> {
        if rows == 1 {
            return Topology::strip(cols);
        }
        let topology = Topology::Grid { rows, cols };
        topology.validate()?;
        Ok(topology)
    }

    /// Reject shapes with no cells or more than [`MAX_CELLS`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        let (rows, cols) = (self.rows(), self.cols());
        match rows.checked_mul(cols) {
            Some(0) => Err(ConfigError::EmptyBoard { rows, cols }),
            Some(cells) if cells <= MAX_CELLS => Ok(()),
            _ => Err(ConfigError::TooLarge {
                rows,
                cols,
                max: MAX_CELLS,
            }),
        }
    }

    #[inline]
    #[must_use]
    pub const fn rows(&self) -> usize {
        match *self {
            Topology::Strip { .. } => 1,
            Topology::Grid { rows, .. } => rows,
        }
    }

    #[inline]
    #[must_use]
    pub const fn cols(&self) -> usize {
        match *self {
            Topology::Strip { len } => len,
            Topology::Grid { cols, .. } => cols,
        }
    }

    #[inline]
    #[must_use]
    pub const fn cell_count(&self) -> usize {
        self.rows() * self.cols()
    }

    /// True when the grid admits the full dihedral group.
    #[must_use]
    pub const fn is_square(&self) -> bool {
        matches!(*self, Topology::Grid { rows, cols } if rows == cols && rows > 1)
    }

    /// `(row, col)` of a cell index.
    #[inline]
    #[must_use]
    pub const fn coords(&self, position: usize) -> (usize, usize) {
        (position / self.cols(), position % self.cols())
    }

    /// Cell index of `(row, col)`.
    #[inline]
    #[must_use]
    pub const fn index(&self, row: usize, col: usize) -> usize {
        row * self.cols() + col
    }

    /// Orthogonally adjacent cells in the order up, down, left, right.
    #[must_use]
    pub fn neighbors(&self, position: usize) -> Neighbors {
        debug_assert!(position < self.cell_count());
        let (row, col) = self.coords(position);
        let mut out = Neighbors::new();
        if row > 0 {
            out.push(self.index(row - 1, col));
        }
        if row + 1 < self.rows() {
            out.push(self.index(row + 1, col));
        }
        if col > 0 {
            out.push(position - 1);
        }
        if col + 1 < self.cols() {
            out.push(position + 1);
        }
        out
    }
}

impl std::fmt::Display for Topology {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.rows(), self.cols())
    }
}

impl std::str::FromStr for Topology {
    type Err = ConfigError;

    /// `"5"` is a strip of five cells; `"3x3"` is a grid. `"1x5"` is a strip.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let unknown = || ConfigError::UnknownTopology(s.to_string());
        let trimmed = s.trim().to_ascii_lowercase();

        match trimmed.split_once('x') {
            None => {
                let len = trimmed.parse().map_err(|_| unknown())?;
                Topology::strip(len)
            }
            Some((rows, cols)) => {
                let rows: usize = rows.trim().parse().map_err(|_| unknown())?;
                let cols: usize = cols.trim().parse().map_err(|_| unknown())?;
                Topology::grid(rows, cols)
            }
        }
    }
}

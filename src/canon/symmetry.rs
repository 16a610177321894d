//! Board symmetries.
//!
//! A strip has two symmetries (identity and mirror). A square grid has the
//! eight elements of the dihedral group. A rectangular grid keeps only the
//! shape-preserving four: identity, both mirrors and the half turn.

use serde::{Deserialize, Serialize};

use crate::core::{Board, Topology};

/// A board automorphism, identified by how it moves cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Symmetry {
    Identity,
    /// Quarter turn clockwise.
    Rot90,
    Rot180,
    /// Quarter turn counter-clockwise.
    Rot270,
    /// Mirror left-right. The only non-trivial symmetry of a strip.
    FlipH,
    /// Mirror top-bottom.
    FlipV,
    /// Reflect across the main diagonal.
    Transpose,
    /// Reflect across the anti-diagonal.
    AntiTranspose,
}

const DIHEDRAL: [Symmetry; 8] = [
    Symmetry::Identity,
    Symmetry::Rot90,
    Symmetry::Rot180,
    Symmetry::Rot270,
    Symmetry::FlipH,
    Symmetry::FlipV,
    Symmetry::Transpose,
    Symmetry::AntiTranspose,
];

const RECTANGLE: [Symmetry; 4] = [
    Symmetry::Identity,
    Symmetry::FlipH,
    Symmetry::FlipV,
    Symmetry::Rot180,
];

const ROW: [Symmetry; 2] = [Symmetry::Identity, Symmetry::FlipH];

const COLUMN: [Symmetry; 2] = [Symmetry::Identity, Symmetry::FlipV];

impl Symmetry {
    /// Symmetry group of a topology, identity first.
    #[must_use]
    pub fn group(topology: Topology) -> &'static [Symmetry] {
        if topology.is_square() {
            &DIHEDRAL
        } else if topology.rows() == 1 {
            &ROW
        } else if topology.cols() == 1 {
            &COLUMN
        } else {
            &RECTANGLE
        }
    }

    /// The transform undoing this one.
    #[must_use]
    pub const fn inverse(self) -> Symmetry {
        match self {
            Symmetry::Rot90 => Symmetry::Rot270,
            Symmetry::Rot270 => Symmetry::Rot90,
            other => other,
        }
    }

    /// Where the cell at `position` lands after the transform.
    #[must_use]
    pub fn apply(self, topology: Topology, position: usize) -> usize {
        let (rows, cols) = (topology.rows(), topology.cols());
        let (r, c) = topology.coords(position);
        let last_r = rows - 1;
        let last_c = cols - 1;

        let (nr, nc) = match self {
            Symmetry::Identity => (r, c),
            Symmetry::FlipH => (r, last_c - c),
            Symmetry::FlipV => (last_r - r, c),
            Symmetry::Rot180 => (last_r - r, last_c - c),
            // The remaining transforms exist only on square boards.
            Symmetry::Rot90 => (c, last_r - r),
            Symmetry::Rot270 => (last_c - c, r),
            Symmetry::Transpose => (c, r),
            Symmetry::AntiTranspose => (last_c - c, last_r - r),
        };
        debug_assert!(nr < rows && nc < cols, "{self:?} does not preserve {topology}");
        topology.index(nr, nc)
    }

    /// Transform a whole board.
    #[must_use]
    pub fn transform(self, board: &Board) -> Board {
        let topology = board.topology();
        let mut out = board.clone();
        for (position, &stone) in board.cells().iter().enumerate() {
            out.set(self.apply(topology, position), stone);
        }
        out
    }
}

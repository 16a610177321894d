//! Verdicts and per-position records.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::canon::Symmetry;
use crate::core::{Stone, Topology};

/// Game value for the player to move under optimal play.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Verdict {
    Win,
    Loss,
    Draw,
}

impl Verdict {
    /// The same outcome seen from the other side.
    #[inline]
    #[must_use]
    pub const fn negate(self) -> Verdict {
        match self {
            Verdict::Win => Verdict::Loss,
            Verdict::Loss => Verdict::Win,
            Verdict::Draw => Verdict::Draw,
        }
    }

    /// The winning color when `to_move` is on move, or `Empty` for a draw.
    #[must_use]
    pub const fn winner(self, to_move: Stone) -> Stone {
        match self {
            Verdict::Win => to_move,
            Verdict::Loss => to_move.opponent(),
            Verdict::Draw => Stone::Empty,
        }
    }

    /// Export hint for a move with this value.
    #[must_use]
    pub const fn hint(self) -> Hint {
        match self {
            Verdict::Win => Hint::Win,
            Verdict::Loss => Hint::Loss,
            Verdict::Draw => Hint::Draw,
        }
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Verdict::Win => write!(f, "WIN"),
            Verdict::Loss => write!(f, "LOSS"),
            Verdict::Draw => write!(f, "DRAW"),
        }
    }
}

/// Per-cell code in the export table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Hint {
    Win,
    Loss,
    Draw,
    /// Occupied or suicide.
    Illegal,
}

impl Hint {
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Hint::Win => 'g',
            Hint::Loss => 'r',
            Hint::Draw => 'y',
            Hint::Illegal => 'x',
        }
    }

    /// Join hints into the export string, e.g. `"rgr"`.
    #[must_use]
    pub fn codes(hints: &[Hint]) -> String {
        hints.iter().map(|h| h.code()).collect()
    }
}

/// Value of one legal move at a node.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveOutcome {
    pub position: usize,
    pub verdict: Verdict,
}

/// Result for one position.
///
/// Inside the transposition table, positions refer to the canonical
/// representative. Records handed to callers are mapped back to the
/// caller's board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerdictRecord {
    /// Value for the player to move.
    pub verdict: Verdict,

    /// Moves achieving the verdict, in increasing order. For a loss this is
    /// every legal move; with no legal move it is empty.
    pub moves: SmallVec<[usize; 8]>,

    /// Every legal move with its value, in increasing order.
    pub outcomes: SmallVec<[MoveOutcome; 8]>,
}

impl VerdictRecord {
    /// Aggregate move outcomes: any win wins, else any draw draws, else loss.
    #[must_use]
    pub fn from_outcomes(outcomes: SmallVec<[MoveOutcome; 8]>) -> Self {
        let verdict = if outcomes.iter().any(|o| o.verdict == Verdict::Win) {
            Verdict::Win
        } else if outcomes.iter().any(|o| o.verdict == Verdict::Draw) {
            Verdict::Draw
        } else {
            Verdict::Loss
        };

        let moves = outcomes
            .iter()
            .filter(|o| verdict == Verdict::Loss || o.verdict == verdict)
            .map(|o| o.position)
            .collect();

        Self {
            verdict,
            moves,
            outcomes,
        }
    }

    /// Record for a player with no legal move.
    #[must_use]
    pub fn no_moves() -> Self {
        Self {
            verdict: Verdict::Loss,
            moves: SmallVec::new(),
            outcomes: SmallVec::new(),
        }
    }

    /// Apply a symmetry to every position, restoring increasing order.
    #[must_use]
    pub fn transformed(&self, sym: Symmetry, topology: Topology) -> Self {
        if sym == Symmetry::Identity {
            return self.clone();
        }
        let mut moves: SmallVec<[usize; 8]> =
            self.moves.iter().map(|&p| sym.apply(topology, p)).collect();
        moves.sort_unstable();

        let mut outcomes: SmallVec<[MoveOutcome; 8]> = self
            .outcomes
            .iter()
            .map(|o| MoveOutcome {
                position: sym.apply(topology, o.position),
                verdict: o.verdict,
            })
            .collect();
        outcomes.sort_unstable_by_key(|o| o.position);

        Self {
            verdict: self.verdict,
            moves,
            outcomes,
        }
    }

    /// Per-cell hints for a board of `cell_count` cells. Outcomes off the
    /// board are ignored.
    #[must_use]
    pub fn hints(&self, cell_count: usize) -> Vec<Hint> {
        let mut hints = vec![Hint::Illegal; cell_count];
        for o in &self.outcomes {
            if let Some(hint) = hints.get_mut(o.position) {
                *hint = o.verdict.hint();
            }
        }
        hints
    }
}

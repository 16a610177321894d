//! Scoped trial moves.
//!
//! Search never mutates the position it is evaluating. A `Trial` clones the
//! board, plays one move on the clone, and hands back the result by value.

use crate::core::{Board, Stone};

/// Outcome of playing one move on a copy of a board.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Trial {
    /// Cell that was played.
    pub position: usize,
    /// Color that moved.
    pub color: Stone,
    /// Opponent stones removed by the move.
    pub captured: usize,
    /// Position after the move.
    pub board: Board,
}

impl Trial {
    /// Play `color` at `position` on a copy of `board`.
    ///
    /// The move must be legal for `color`.
    #[must_use]
    pub fn play(board: &Board, position: usize, color: Stone) -> Self {
        debug_assert!(board.is_legal_move(position, color));
        let mut board = board.clone();
        let captured = board.apply_move(position, color);
        Self {
            position,
            color,
            captured,
            board,
        }
    }

    /// True if the move removed at least one opponent stone.
    #[inline]
    #[must_use]
    pub fn is_capture(&self) -> bool {
        self.captured > 0
    }

    /// Side to move after the trial.
    #[inline]
    #[must_use]
    pub fn next_to_move(&self) -> Stone {
        self.color.opponent()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Topology;

    #[test]
    fn test_trial_leaves_source_untouched() {
        let board = Board::from_values(Topology::strip(2).unwrap(), &[1, 0]).unwrap();
        let trial = Trial::play(&board, 1, Stone::White);

        assert!(trial.is_capture());
        assert_eq!(trial.captured, 1);
        assert_eq!(trial.board.values(), vec![0, -1]);
        assert_eq!(trial.next_to_move(), Stone::Black);
        assert_eq!(board.values(), vec![1, 0]);
    }

    #[test]
    fn test_trial_without_capture() {
        let board = Board::empty(Topology::strip(3).unwrap());
        let trial = Trial::play(&board, 1, Stone::Black);
        assert!(!trial.is_capture());
        assert_eq!(trial.board.values(), vec![0, 1, 0]);
    }
}

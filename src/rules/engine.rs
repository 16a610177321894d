//! Capture rules: groups, liberties, captures, suicide.
//!
//! - A group is a maximal orthogonally connected set of same-colored stones.
//! - Its liberties are the distinct empty cells adjacent to any member.
//! - Placing a stone first removes every adjacent opponent group left with
//!   no liberties. Only then is the mover's own group checked: a move that
//!   captured nothing and leaves its own group without liberties is suicide
//!   and is illegal.

use std::collections::VecDeque;

use crate::core::{Board, Neighbors, Stone};
use crate::error::MoveError;

/// A group found by flood fill.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Group {
    /// Color of the group (`Empty` for the empty group).
    pub color: Stone,
    /// Member cells in increasing order.
    pub stones: Vec<usize>,
    /// Number of distinct adjacent empty cells.
    pub liberties: usize,
}

impl Group {
    /// Number of stones in the group.
    #[must_use]
    pub fn len(&self) -> usize {
        self.stones.len()
    }

    /// True for the empty group returned on an empty cell.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stones.is_empty()
    }

    #[must_use]
    pub fn contains(&self, position: usize) -> bool {
        self.stones.binary_search(&position).is_ok()
    }
}

impl Board {
    /// Orthogonal neighbors of a cell.
    #[inline]
    #[must_use]
    pub fn neighbors(&self, position: usize) -> Neighbors {
        self.topology().neighbors(position)
    }

    /// Flood-fill the group containing `position` and count its liberties.
    ///
    /// An empty cell yields the empty group with zero liberties.
    #[must_use]
    pub fn group_and_liberties(&self, position: usize) -> Group {
        let color = self.get(position);
        if color == Stone::Empty {
            return Group::default();
        }

        let mut in_group = vec![false; self.len()];
        let mut is_liberty = vec![false; self.len()];
        let mut queue = VecDeque::new();
        let mut stones = Vec::new();
        let mut liberties = 0;

        in_group[position] = true;
        queue.push_back(position);

        while let Some(cell) = queue.pop_front() {
            stones.push(cell);
            for next in self.neighbors(cell) {
                let value = self.get(next);
                if value == Stone::Empty {
                    if !is_liberty[next] {
                        is_liberty[next] = true;
                        liberties += 1;
                    }
                } else if value == color && !in_group[next] {
                    in_group[next] = true;
                    queue.push_back(next);
                }
            }
        }

        stones.sort_unstable();
        Group {
            color,
            stones,
            liberties,
        }
    }

    /// Place a stone and resolve captures, returning the number of opponent
    /// stones removed.
    ///
    /// The cell must be empty. Suicide is not resolved here; callers check
    /// `is_legal_move` first.
    pub fn apply_move(&mut self, position: usize, color: Stone) -> usize {
        debug_assert!(color.is_stone());
        debug_assert_eq!(self.get(position), Stone::Empty, "cell {position} is occupied");

        self.set(position, color);
        let opponent = color.opponent();
        let mut captured = 0;

        for next in self.neighbors(position) {
            // A group touching the new stone twice is already gone the second time.
            if self.get(next) != opponent {
                continue;
            }
            let group = self.group_and_liberties(next);
            if group.liberties == 0 {
                for &cell in &group.stones {
                    self.set(cell, Stone::Empty);
                }
                captured += group.len();
            }
        }

        captured
    }

    /// Whether `color` may play at `position`.
    #[must_use]
    pub fn is_legal_move(&self, position: usize, color: Stone) -> bool {
        if !color.is_stone() || position >= self.len() || self.get(position) != Stone::Empty {
            return false;
        }
        let mut trial = self.clone();
        if trial.apply_move(position, color) > 0 {
            return true;
        }
        trial.group_and_liberties(position).liberties > 0
    }

    /// Lazily iterate the legal moves of `color` in increasing order.
    ///
    /// Each call starts a fresh scan.
    #[must_use]
    pub fn legal_moves(&self, color: Stone) -> LegalMoves<'_> {
        LegalMoves {
            board: self,
            color,
            next: 0,
        }
    }

    /// Checked move for interactive callers.
    ///
    /// Leaves the board untouched on error.
    pub fn try_play(&mut self, position: usize, color: Stone) -> Result<usize, MoveError> {
        if !color.is_stone() {
            return Err(MoveError::NotAStone);
        }
        if position >= self.len() {
            return Err(MoveError::OutOfBounds {
                position,
                cells: self.len(),
            });
        }
        if self.get(position) != Stone::Empty {
            return Err(MoveError::Occupied(position));
        }
        if !self.is_legal_move(position, color) {
            return Err(MoveError::Suicide(position));
        }
        Ok(self.apply_move(position, color))
    }
}

/// Iterator returned by [`Board::legal_moves`].
#[derive(Clone, Debug)]
pub struct LegalMoves<'a> {
    board: &'a Board,
    color: Stone,
    next: usize,
}

impl Iterator for LegalMoves<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        while self.next < self.board.len() {
            let position = self.next;
            self.next += 1;
            if self.board.is_legal_move(position, self.color) {
                return Some(position);
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.board.len() - self.next))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Topology;

    fn strip(values: &[i8]) -> Board {
        Board::from_values(Topology::strip(values.len()).unwrap(), values).unwrap()
    }

    fn grid(rows: usize, cols: usize, values: &[i8]) -> Board {
        Board::from_values(Topology::grid(rows, cols).unwrap(), values).unwrap()
    }

    #[test]
    fn test_group_on_empty_cell() {
        let board = strip(&[0, 1, 0]);
        assert_eq!(board.group_and_liberties(0), Group::default());
    }

    #[test]
    fn test_group_on_strip() {
        let board = strip(&[0, 1, 1, -1, 0]);
        let group = board.group_and_liberties(2);
        assert_eq!(group.color, Stone::Black);
        assert_eq!(group.stones, vec![1, 2]);
        assert_eq!(group.liberties, 1);
    }

    #[test]
    fn test_shared_liberty_counted_once() {
        // X X
        // X .
        let board = grid(2, 2, &[1, 1, 1, 0]);
        let group = board.group_and_liberties(0);
        assert_eq!(group.stones, vec![0, 1, 2]);
        assert_eq!(group.liberties, 1);
    }

    #[test]
    fn test_capture_single_stone() {
        let mut board = strip(&[1, 0]);
        let captured = board.apply_move(1, Stone::White);
        assert_eq!(captured, 1);
        assert_eq!(board.values(), vec![0, -1]);
    }

    #[test]
    fn test_capture_two_groups() {
        // O X . X O
        let mut board = strip(&[-1, 1, 0, 1, -1]);
        let captured = board.apply_move(2, Stone::White);
        assert_eq!(captured, 2);
        assert_eq!(board.values(), vec![-1, 0, -1, 0, -1]);
    }

    #[test]
    fn test_group_reached_twice_counted_once() {
        // X X O
        // X . O
        // O O .
        let mut board = grid(3, 3, &[1, 1, -1, 1, 0, -1, -1, -1, 0]);
        let captured = board.apply_move(4, Stone::White);
        assert_eq!(captured, 3);
        assert_eq!(board.count(Stone::Black), 0);
    }

    #[test]
    fn test_no_capture_with_liberty() {
        let mut board = strip(&[1, 0, 0]);
        assert_eq!(board.apply_move(1, Stone::White), 0);
        assert_eq!(board.values(), vec![1, -1, 0]);
    }

    #[test]
    fn test_single_cell_is_suicide() {
        let board = strip(&[0]);
        assert!(!board.is_legal_move(0, Stone::Black));
        assert_eq!(board.legal_moves(Stone::Black).count(), 0);
    }

    #[test]
    fn test_suicide_illegal() {
        // X . X with white to move at 1
        let board = strip(&[1, 0, 1]);
        assert!(!board.is_legal_move(1, Stone::White));
        assert!(board.is_legal_move(1, Stone::Black));
    }

    #[test]
    fn test_capture_legalizes_apparent_suicide() {
        // O X . X O: white at 2 has no liberties but captures both black stones.
        let board = strip(&[-1, 1, 0, 1, -1]);
        assert!(board.is_legal_move(2, Stone::White));
    }

    #[test]
    fn test_occupied_and_out_of_range_are_illegal() {
        let board = strip(&[1, 0]);
        assert!(!board.is_legal_move(0, Stone::White));
        assert!(!board.is_legal_move(5, Stone::White));
        assert!(!board.is_legal_move(1, Stone::Empty));
    }

    #[test]
    fn test_legal_moves_order_and_restart() {
        let board = strip(&[0, 1, 0, 0]);
        let moves = board.legal_moves(Stone::White);
        let first: Vec<_> = moves.clone().collect();
        let second: Vec<_> = moves.collect();
        // White at 0 would be suicide.
        assert_eq!(first, vec![2, 3]);
        assert_eq!(first, second);
        assert_eq!(board.legal_moves(Stone::Black).collect::<Vec<_>>(), vec![0, 2, 3]);
    }

    #[test]
    fn test_try_play() {
        let mut board = strip(&[1, 0, 1]);
        assert_eq!(board.try_play(1, Stone::White), Err(MoveError::Suicide(1)));
        assert_eq!(board.try_play(0, Stone::White), Err(MoveError::Occupied(0)));
        assert_eq!(
            board.try_play(3, Stone::White),
            Err(MoveError::OutOfBounds { position: 3, cells: 3 })
        );
        assert_eq!(board.try_play(1, Stone::Empty), Err(MoveError::NotAStone));
        assert_eq!(board.values(), vec![1, 0, 1]);

        assert_eq!(board.try_play(1, Stone::Black), Ok(0));
        assert_eq!(board.values(), vec![1, 1, 1]);
    }
}

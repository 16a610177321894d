//! Exhaustive minimax over canonical positions.
//!
//! The search is depth-first and runs on an explicit stack of
//! [`Expansion`]s instead of the call stack. Each expansion owns the
//! representative board of one canonical position, its legal moves, and the
//! outcomes gathered so far. A child is either answered immediately (a
//! capture under first-capture rules, a table hit, or a repetition of a
//! position on the current path) or pushed as a new expansion. When an
//! expansion runs out of moves, its record is stored and its verdict is
//! negated into the parent.
//!
//! Every legal move is evaluated, so a stored record lists all optimal moves
//! and a value for every legal move.

use std::time::Instant;

use smallvec::SmallVec;

use crate::canon::{CanonicalKey, Canonicalizer};
use crate::core::{Board, Stone, Topology};
use crate::error::ConfigError;
use crate::rules::Trial;
use crate::store::ResultStore;

use super::config::{SolverConfig, TerminationPolicy};
use super::frame::SearchFrame;
use super::stats::SearchStats;
use super::table::TranspositionTable;
use super::verdict::{MoveOutcome, Verdict, VerdictRecord};

/// One canonical position being expanded.
#[derive(Clone, Debug)]
struct Expansion {
    key: CanonicalKey,
    board: Board,
    to_move: Stone,
    moves: SmallVec<[usize; 16]>,
    next: usize,
    /// Move whose child expansion is still on the stack.
    pending: Option<usize>,
    outcomes: SmallVec<[MoveOutcome; 8]>,
}

impl Expansion {
    fn is_done(&self) -> bool {
        self.pending.is_none() && self.next == self.moves.len()
    }

    fn record(&mut self, position: usize, verdict: Verdict) {
        self.outcomes.push(MoveOutcome { position, verdict });
    }

    /// Take the value of the child reached through the pending move.
    fn resolve(&mut self, child: Verdict) {
        if let Some(position) = self.pending.take() {
            self.record(position, child.negate());
        }
    }

    fn finish(self) -> (CanonicalKey, VerdictRecord) {
        let record = if self.outcomes.is_empty() {
            VerdictRecord::no_moves()
        } else {
            VerdictRecord::from_outcomes(self.outcomes)
        };
        (self.key, record)
    }
}

/// Exact solver for one board topology and termination policy.
///
/// Owns its transposition table, which persists across calls to
/// [`Solver::solve`], so later queries reuse earlier work.
#[derive(Clone, Debug)]
pub struct Solver {
    config: SolverConfig,
    canon: Canonicalizer,
    table: TranspositionTable,
    path: SearchFrame,
    stats: SearchStats,
}

impl Solver {
    /// Create a solver. Fails if the configuration is invalid.
    pub fn new(config: SolverConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let canon = Canonicalizer::new(config.topology, config.zobrist_seed);
        Ok(Self {
            config,
            canon,
            table: TranspositionTable::new(),
            path: SearchFrame::new(),
            stats: SearchStats::default(),
        })
    }

    #[must_use]
    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    #[must_use]
    pub fn topology(&self) -> Topology {
        self.config.topology
    }

    /// Statistics of the last solve.
    #[must_use]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Every position solved so far.
    #[must_use]
    pub fn table(&self) -> &TranspositionTable {
        &self.table
    }

    #[must_use]
    pub fn canonicalizer(&self) -> &Canonicalizer {
        &self.canon
    }

    /// Freeze the solved positions into a read-only store.
    #[must_use]
    pub fn into_store(self) -> ResultStore {
        ResultStore::new(self.config, self.table)
    }

    /// Solve `board` with `to_move` to play.
    ///
    /// The returned record is in `board`'s own frame. Every position reached
    /// by the search is added to the table.
    pub fn solve(&mut self, board: &Board, to_move: Stone) -> Result<VerdictRecord, ConfigError> {
        if board.topology() != self.config.topology {
            return Err(ConfigError::TopologyMismatch {
                expected: self.config.topology,
                actual: board.topology(),
            });
        }
        if !to_move.is_stone() {
            return Err(ConfigError::InvalidPlayer);
        }

        let start = Instant::now();
        self.stats.reset();

        let (representative, sym) = self.canon.canonicalize(board);
        let key = self.canon.key_of_canonical(&representative, to_move);
        let record = match self.table.get(&key) {
            Some(record) => {
                self.stats.memo_hits += 1;
                record.clone()
            }
            None => self.evaluate(key, representative),
        };

        self.stats.time_us = start.elapsed().as_micros() as u64;
        Ok(record.transformed(sym.inverse(), self.config.topology))
    }

    /// Solve the empty board.
    pub fn solve_empty(&mut self, to_move: Stone) -> Result<VerdictRecord, ConfigError> {
        self.solve(&Board::empty(self.config.topology), to_move)
    }

    /// Record for an already solved position, in `board`'s frame.
    #[must_use]
    pub fn lookup(&self, board: &Board, to_move: Stone) -> Option<VerdictRecord> {
        self.table.lookup(&self.canon, board, to_move)
    }

    /// Run the stack machine from an unsolved root.
    fn evaluate(&mut self, root: CanonicalKey, board: Board) -> VerdictRecord {
        let mut stack = vec![self.expand(root, board)];

        loop {
            let Some(top) = stack.last_mut() else {
                // The root always finishes through the branch below.
                return VerdictRecord::no_moves();
            };

            if top.is_done() {
                let Some(done) = stack.pop() else { continue };
                self.path.pop(&done.key);
                let (key, record) = done.finish();
                let verdict = record.verdict;
                self.table.insert(key, record.clone());
                match stack.last_mut() {
                    Some(parent) => parent.resolve(verdict),
                    None => return record,
                }
                continue;
            }

            let position = top.moves[top.next];
            top.next += 1;

            let trial = Trial::play(&top.board, position, top.to_move);
            if self.config.policy == TerminationPolicy::FirstCapture && trial.is_capture() {
                self.stats.immediate_captures += 1;
                top.record(position, Verdict::Win);
                continue;
            }

            let (child, _) = self.canon.key(&trial.board, trial.next_to_move());
            if let Some(record) = self.table.get(&child) {
                self.stats.memo_hits += 1;
                top.record(position, record.verdict.negate());
                continue;
            }
            if self.path.contains(&child) {
                self.stats.cycle_hits += 1;
                top.record(position, Verdict::Draw);
                continue;
            }

            top.pending = Some(position);
            let child_board = child.board(self.config.topology);
            let expansion = self.expand(child, child_board);
            stack.push(expansion);
        }
    }

    /// Put a position on the search path and list its moves.
    fn expand(&mut self, key: CanonicalKey, board: Board) -> Expansion {
        let to_move = key.to_move();
        let moves: SmallVec<[usize; 16]> = board.legal_moves(to_move).collect();

        self.stats.nodes_expanded += 1;
        if moves.is_empty() {
            self.stats.terminal_nodes += 1;
        }
        self.stats.observe_depth(self.path.depth() + 1);
        self.path.push(key.clone());

        Expansion {
            key,
            board,
            to_move,
            moves,
            next: 0,
            pending: None,
            outcomes: SmallVec::new(),
        }
    }
}

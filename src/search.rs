//! Game-tree search with alpha-beta pruning.
//!
//! Scores are always from the point of view of [`PlayerMark::Cross`], so crosses
//! maximize and naughts minimize. The computer opponent plays naughts.

use log::debug;
use serde::Serialize;

use crate::{
    board::{Board, Move},
    core::PlayerMark,
    error::{Error, Result},
    eval::{evaluate, is_full, Score},
};

/// The widest bounds, standing in for minus and plus infinity.
pub const ALPHA_INIT: Score = Score::MIN;
pub const BETA_INIT: Score = Score::MAX;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScoredMove {
    #[serde(flatten)]
    pub mv: Move,
    pub score: Score,
}

/// Every legal move with its value, and the one picked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Analysis {
    pub to_move: PlayerMark,
    pub best_move: Move,
    /// The value of the position with best play from both sides
    pub value: Score,
    pub moves: Vec<ScoredMove>,
}

#[derive(Debug, Default)]
pub struct Searcher {
    /// A performance counter. If we prune well, this number is small
    nodes_visited: usize,
    cutoffs: usize,
}

impl Searcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn nodes_visited(&self) -> usize {
        self.nodes_visited
    }

    pub fn cutoffs(&self) -> usize {
        self.cutoffs
    }

    /// compute the score of a node by use of minimax with alpha-beta pruning
    ///
    /// `maximizing` says whether crosses are to move at this node.
    /// Children are visited in row-major order and each one gets its own copy of the board.
    pub fn search(&mut self, board: &Board, maximizing: bool, alpha: Score, beta: Score) -> Score {
        self.nodes_visited += 1;
        let score = evaluate(board);
        if score != 0 {
            return score;
        }
        if is_full(board) {
            return 0;
        }
        let mut alpha = alpha;
        let mut beta = beta;
        if maximizing {
            let mut best = ALPHA_INIT;
            for mv in board.empty_cells() {
                let child = board.with_mark(mv, PlayerMark::Cross);
                best = best.max(self.search(&child, false, alpha, beta));
                alpha = alpha.max(best);
                if beta <= alpha {
                    self.cutoffs += 1;
                    break;
                }
            }
            best
        } else {
            let mut best = BETA_INIT;
            for mv in board.empty_cells() {
                let child = board.with_mark(mv, PlayerMark::Naught);
                best = best.min(self.search(&child, true, alpha, beta));
                beta = beta.min(best);
                if beta <= alpha {
                    self.cutoffs += 1;
                    break;
                }
            }
            best
        }
    }

    /// Plain minimax without pruning. Always agrees with [`Searcher::search`] on the value,
    /// it just visits more nodes.
    pub fn minimax(&mut self, board: &Board, maximizing: bool) -> Score {
        self.nodes_visited += 1;
        let score = evaluate(board);
        if score != 0 {
            return score;
        }
        if is_full(board) {
            return 0;
        }
        let (mark, next_maximizing) = if maximizing {
            (PlayerMark::Cross, false)
        } else {
            (PlayerMark::Naught, true)
        };
        let values = board
            .empty_cells()
            .map(|mv| board.with_mark(mv, mark))
            .map(|child| self.minimax(&child, next_maximizing))
            .collect::<Vec<_>>();
        let best = if maximizing {
            values.into_iter().max()
        } else {
            values.into_iter().min()
        };
        best.unwrap_or(0)
    }

    /// Score every legal move for `mark` and pick the best one.
    ///
    /// Ties go to the first move in row-major order: a later move only replaces the
    /// current best when it is strictly better.
    pub fn analyze(&mut self, board: &Board, mark: PlayerMark) -> Result<Analysis> {
        let maximizing = mark.is_maximizing();
        let moves: Vec<ScoredMove> = board
            .empty_cells()
            .map(|mv| {
                let child = board.with_mark(mv, mark);
                let score = self.search(&child, !maximizing, ALPHA_INIT, BETA_INIT);
                ScoredMove { mv, score }
            })
            .collect();
        let mut best: Option<ScoredMove> = None;
        for candidate in moves.iter() {
            let improves = match best {
                None => true,
                Some(b) if maximizing => candidate.score > b.score,
                Some(b) => candidate.score < b.score,
            };
            if improves {
                best = Some(*candidate);
            }
        }
        let best = best.ok_or(Error::NoLegalMoves)?;
        debug!(
            "{} picks {} with value {} ({} nodes so far)",
            mark, best.mv, best.score, self.nodes_visited
        );
        Ok(Analysis {
            to_move: mark,
            best_move: best.mv,
            value: best.score,
            moves,
        })
    }

    pub fn best_move_for(&mut self, board: &Board, mark: PlayerMark) -> Result<Move> {
        self.analyze(board, mark).map(|a| a.best_move)
    }
}

impl Drop for Searcher {
    fn drop(&mut self) {
        debug!(
            "Searcher visited {} nodes with {} cutoffs",
            self.nodes_visited, self.cutoffs
        );
    }
}

/// The computer's move: the best cell for naughts.
/// Fails with [`Error::NoLegalMoves`] when the board is full.
pub fn find_best_move(board: &Board) -> Result<Move> {
    best_move_for(board, PlayerMark::Naught)
}

pub fn best_move_for(board: &Board, mark: PlayerMark) -> Result<Move> {
    Searcher::new().best_move_for(board, mark)
}

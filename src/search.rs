//! Exhaustive game-tree search.
//!
//! One recursive core serves both engines:
//! - [`Algorithm::Minimax`] visits every reachable leaf
//! - [`Algorithm::AlphaBeta`] carries an `(alpha, beta)` window and skips
//!   the remaining siblings once `beta <= alpha`
//!
//! Both return the exact game value in `{-1, 0, +1}` from the maximizer's
//! perspective, so they always agree; pruning only changes how many nodes are
//! visited. Children are tried in ascending cell order.
//!
//! The board is mutated in place: each child is entered through a
//! [`Placement`](crate::board::Placement) guard, which clears the cell again
//! when the child returns, whether or not the loop is cut off.

use std::ops::AddAssign;

use tracing::trace;

use crate::board::{Board, Player};
use crate::constants::{CELLS, INFINITY, NEG_INFINITY, Score};
use crate::rules::classify;

/// Which search engine to run.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum Algorithm {
    /// Plain exhaustive minimax.
    Minimax,
    /// Minimax with alpha-beta pruning.
    #[default]
    AlphaBeta,
}

impl Algorithm {
    /// Whether this engine stops iterating siblings on a cutoff.
    #[inline]
    pub fn prunes(self) -> bool {
        matches!(self, Algorithm::AlphaBeta)
    }
}

/// Counters collected during a search.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Positions entered, including the root of each `evaluate` call.
    pub nodes: u64,
    /// Terminal positions scored.
    pub leaves: u64,
    /// Times the remaining siblings were skipped.
    pub cutoffs: u64,
}

impl AddAssign for SearchStats {
    fn add_assign(&mut self, other: Self) {
        self.nodes += other.nodes;
        self.leaves += other.leaves;
        self.cutoffs += other.cutoffs;
    }
}

/// A search engine with its running statistics.
#[derive(Clone, Debug, Default)]
pub struct Searcher {
    algorithm: Algorithm,
    stats: SearchStats,
}

impl Searcher {
    pub fn new(algorithm: Algorithm) -> Self {
        Self {
            algorithm,
            stats: SearchStats::default(),
        }
    }

    pub fn minimax() -> Self {
        Self::new(Algorithm::Minimax)
    }

    pub fn alpha_beta() -> Self {
        Self::new(Algorithm::AlphaBeta)
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Statistics accumulated since creation or the last [`Searcher::reset_stats`].
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    pub fn reset_stats(&mut self) {
        self.stats = SearchStats::default();
    }

    /// Game value of `board` with `to_move` on turn, under optimal play.
    ///
    /// The board is returned to its original contents before this returns.
    pub fn evaluate(&mut self, board: &mut Board, to_move: Player) -> Score {
        self.evaluate_window(board, to_move, NEG_INFINITY, INFINITY)
    }

    /// Same as [`Searcher::evaluate`] with an explicit starting window.
    ///
    /// With the full window the result is exact. A narrower window only
    /// matters for [`Algorithm::AlphaBeta`]; plain minimax ignores it.
    pub fn evaluate_window(
        &mut self,
        board: &mut Board,
        to_move: Player,
        alpha: Score,
        beta: Score,
    ) -> Score {
        self.search(board, to_move, alpha, beta)
    }

    fn search(
        &mut self,
        board: &mut Board,
        to_move: Player,
        mut alpha: Score,
        mut beta: Score,
    ) -> Score {
        self.stats.nodes += 1;

        if let Some(score) = classify(board).score() {
            self.stats.leaves += 1;
            return score;
        }

        // A non-terminal board always has an empty cell, so `best` is replaced
        // by a real game value before it is returned.
        let maximizing = to_move == Player::Maximizer;
        let mut best = if maximizing { NEG_INFINITY } else { INFINITY };

        for index in 0..CELLS {
            if !board.is_empty_at(index) {
                continue;
            }

            let score = {
                let mut placed = board.mark_scoped(index, to_move);
                self.search(&mut placed, to_move.opponent(), alpha, beta)
            };

            if maximizing {
                best = best.max(score);
                alpha = alpha.max(score);
            } else {
                best = best.min(score);
                beta = beta.min(score);
            }

            if self.algorithm.prunes() && beta <= alpha {
                self.stats.cutoffs += 1;
                trace!(index, alpha, beta, ?to_move, "cutoff");
                break;
            }
        }

        best
    }
}

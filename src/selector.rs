//! Root move selection.
//!
//! Tries every empty cell in ascending order, scores the resulting position
//! with a full-window search from the opponent's side, and keeps the first
//! move with the best score. A later move replaces the current choice only on
//! strict improvement, so ties always go to the lowest index.

use tracing::{debug, instrument};

use crate::board::{Board, Player};
use crate::constants::{INFINITY, NEG_INFINITY, Score};
use crate::search::{Algorithm, SearchStats, Searcher};

/// The move chosen at the root, with the work it took to find it.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Selection {
    /// Cell index of the chosen move.
    pub index: usize,
    /// Game value after the move, from the maximizer's perspective.
    pub score: Score,
    /// Totals over all root candidates.
    pub stats: SearchStats,
}

/// Best cell for `to_move`, or `None` if the board is full.
pub fn best_move(board: &Board, to_move: Player, algorithm: Algorithm) -> Option<usize> {
    select(board, to_move, algorithm).map(|s| s.index)
}

/// Pick the best move for `to_move` and report its score and search statistics.
///
/// The caller's board is never touched; the search runs on a private copy.
/// The maximizer keeps the highest score, the minimizer the lowest.
#[instrument(level = "debug", skip(board), fields(position = %board.to_compact()))]
pub fn select(board: &Board, to_move: Player, algorithm: Algorithm) -> Option<Selection> {
    let mut work = *board;
    let mut searcher = Searcher::new(algorithm);
    let maximizing = to_move == Player::Maximizer;

    let mut best: Option<(usize, Score)> = None;
    let mut best_score = if maximizing { NEG_INFINITY } else { INFINITY };

    for index in board.empty_cells() {
        let score = {
            let mut placed = work.mark_scoped(index, to_move);
            searcher.evaluate(&mut placed, to_move.opponent())
        };
        debug!(index, score, "root candidate");

        let improves = if maximizing {
            score > best_score
        } else {
            score < best_score
        };
        if improves {
            best_score = score;
            best = Some((index, score));
        }
    }

    let (index, score) = best?;
    let stats = searcher.stats();
    debug!(
        index,
        score,
        nodes = stats.nodes,
        leaves = stats.leaves,
        cutoffs = stats.cutoffs,
        "selected move"
    );
    Some(Selection {
        index,
        score,
        stats,
    })
}

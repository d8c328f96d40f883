//! Win detection and terminal classification.

use std::fmt;

use crate::board::{Board, Player};
use crate::constants::{SCORE_DRAW, SCORE_LOSS, SCORE_WIN, Score, WIN_LINES};

/// State of a game as seen from the board alone.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Outcome {
    Ongoing,
    Won(Player),
    Draw,
}

impl Outcome {
    pub fn is_terminal(self) -> bool {
        self != Outcome::Ongoing
    }

    /// Leaf score from the maximizer's perspective, or `None` while the game
    /// is still going.
    pub fn score(self) -> Option<Score> {
        match self {
            Outcome::Won(Player::Maximizer) => Some(SCORE_WIN),
            Outcome::Won(Player::Minimizer) => Some(SCORE_LOSS),
            Outcome::Draw => Some(SCORE_DRAW),
            Outcome::Ongoing => None,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Ongoing => write!(f, "ongoing"),
            Outcome::Won(player) => write!(f, "{player} wins"),
            Outcome::Draw => write!(f, "draw"),
        }
    }
}

/// True iff `player` holds all three cells of at least one winning line.
#[inline]
pub fn has_win(board: &Board, player: Player) -> bool {
    winning_line(board, player).is_some()
}

/// The first winning line (in `WIN_LINES` order) completed by `player`.
pub fn winning_line(board: &Board, player: Player) -> Option<[usize; 3]> {
    WIN_LINES
        .iter()
        .copied()
        .find(|line| line.iter().all(|&i| board.get(i) == Some(player)))
}

/// Classify a board.
///
/// The maximizer's win is checked first, so a board where both players have a
/// line (unreachable in real play) reports `Won(Maximizer)`.
pub fn classify(board: &Board) -> Outcome {
    if has_win(board, Player::Maximizer) {
        Outcome::Won(Player::Maximizer)
    } else if has_win(board, Player::Minimizer) {
        Outcome::Won(Player::Minimizer)
    } else if board.is_full() {
        Outcome::Draw
    } else {
        Outcome::Ongoing
    }
}

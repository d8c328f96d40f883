//! Interactive human-vs-engine game.
//!
//! The human plays `X` (the minimizer) and types cell indices 0-8; the engine
//! plays `O` (the maximizer). Input and output are generic so the loop can be
//! driven from a terminal or from a test.
//!
//! ## Example
//!
//! ```no_run
//! use std::io;
//! use tictac_solver::search::Algorithm;
//! use tictac_solver::session::{FirstMover, Session};
//!
//! let mut session = Session::new(Algorithm::AlphaBeta, FirstMover::Human);
//! session.run(io::stdin().lock(), &mut io::stdout()).unwrap();
//! ```

use std::io::{self, BufRead, Write};

use tracing::debug;

use crate::board::{Board, Player};
use crate::error::{Error, Result};
use crate::rules::{Outcome, classify};
use crate::search::Algorithm;
use crate::selector::select;

/// The side typing moves.
pub const HUMAN: Player = Player::Minimizer;

/// The side the engine plays.
pub const ENGINE: Player = Player::Maximizer;

/// Who makes the first move.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum FirstMover {
    #[default]
    Human,
    Engine,
    /// Decided by a coin flip.
    Random,
}

/// Game state owned by the interactive loop.
pub struct Session {
    board: Board,
    algorithm: Algorithm,
    engine_first: bool,
}

impl Session {
    pub fn new(algorithm: Algorithm, first: FirstMover) -> Self {
        Self::with_rng(algorithm, first, &mut fastrand::Rng::new())
    }

    /// Like [`Session::new`], drawing the coin flip for [`FirstMover::Random`] from `rng`.
    pub fn with_rng(algorithm: Algorithm, first: FirstMover, rng: &mut fastrand::Rng) -> Self {
        let engine_first = match first {
            FirstMover::Human => false,
            FirstMover::Engine => true,
            FirstMover::Random => rng.bool(),
        };
        Self {
            board: Board::new(),
            algorithm,
            engine_first,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn engine_first(&self) -> bool {
        self.engine_first
    }

    /// Run the game loop until the game ends, the input ends, or `quit` is read.
    ///
    /// Returns the final outcome, or `None` if the game was abandoned.
    pub fn run<R: BufRead, W: Write>(
        &mut self,
        input: R,
        output: &mut W,
    ) -> io::Result<Option<Outcome>> {
        writeln!(output, "Tic-Tac-Toe (You = {HUMAN}, AI = {ENGINE})")?;

        if self.engine_first {
            if let Some(outcome) = self.engine_turn(output)? {
                return Ok(Some(outcome));
            }
        } else {
            write!(output, "{}", self.board)?;
        }

        let mut lines = input.lines();
        loop {
            write!(output, "Enter your move (0-8): ")?;
            output.flush()?;

            let line = match lines.next() {
                Some(line) => line?,
                None => return Ok(None),
            };
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            if line.eq_ignore_ascii_case("quit") || line.eq_ignore_ascii_case("q") {
                return Ok(None);
            }

            match self.play_human(line) {
                Ok(outcome) => {
                    write!(output, "{}", self.board)?;
                    if outcome.is_terminal() {
                        Self::announce(outcome, output)?;
                        return Ok(Some(outcome));
                    }
                }
                Err(Error::OccupiedCell { .. }) => {
                    writeln!(output, "Invalid move, try again.")?;
                    continue;
                }
                Err(_) => {
                    writeln!(output, "Invalid input. Enter a number between 0 and 8.")?;
                    continue;
                }
            }

            if let Some(outcome) = self.engine_turn(output)? {
                return Ok(Some(outcome));
            }
        }
    }

    /// Apply the human's move typed as `input`.
    pub fn play_human(&mut self, input: &str) -> Result<Outcome> {
        if classify(&self.board).is_terminal() {
            return Err(Error::GameOver);
        }
        let index = input
            .trim()
            .parse::<usize>()
            .map_err(|_| Error::InvalidMoveInput {
                input: input.to_string(),
            })?;
        self.board.place(index, HUMAN)?;
        Ok(classify(&self.board))
    }

    /// Let the engine choose and apply its move.
    pub fn play_engine(&mut self) -> Result<(usize, Outcome)> {
        if classify(&self.board).is_terminal() {
            return Err(Error::GameOver);
        }
        let selection = select(&self.board, ENGINE, self.algorithm).ok_or(Error::GameOver)?;
        self.board.place(selection.index, ENGINE)?;
        debug!(
            index = selection.index,
            score = selection.score,
            nodes = selection.stats.nodes,
            "engine move"
        );
        Ok((selection.index, classify(&self.board)))
    }

    /// Play the engine's move and print it. Returns the outcome if the game ended.
    fn engine_turn<W: Write>(&mut self, output: &mut W) -> io::Result<Option<Outcome>> {
        let outcome = match self.play_engine() {
            Ok((_, outcome)) => outcome,
            Err(_) => return Ok(Some(classify(&self.board))),
        };
        writeln!(output, "\nAI played:")?;
        write!(output, "{}", self.board)?;
        if outcome.is_terminal() {
            Self::announce(outcome, output)?;
            return Ok(Some(outcome));
        }
        Ok(None)
    }

    fn announce<W: Write>(outcome: Outcome, output: &mut W) -> io::Result<()> {
        let message = match outcome {
            Outcome::Won(HUMAN) => "You win!",
            Outcome::Won(ENGINE) => "AI wins!",
            _ => "It's a tie!",
        };
        writeln!(output, "{message}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run(session: &mut Session, input: &str) -> (Option<Outcome>, String) {
        let mut output = Vec::new();
        let outcome = session.run(Cursor::new(input), &mut output).unwrap();
        (outcome, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_quit_abandons_game() {
        let mut session = Session::new(Algorithm::AlphaBeta, FirstMover::Human);
        let (outcome, output) = run(&mut session, "quit\n");
        assert_eq!(outcome, None);
        assert!(output.starts_with("Tic-Tac-Toe (You = X, AI = O)\n"));
        assert_eq!(*session.board(), Board::new());
    }

    #[test]
    fn test_rejects_bad_input() {
        let mut session = Session::new(Algorithm::AlphaBeta, FirstMover::Human);
        let (_, output) = run(&mut session, "abc\n9\n-1\nquit\n");
        assert_eq!(
            output
                .matches("Invalid input. Enter a number between 0 and 8.")
                .count(),
            3
        );
        assert_eq!(*session.board(), Board::new());
    }

    #[test]
    fn test_rejects_occupied_cell() {
        let mut session = Session::new(Algorithm::AlphaBeta, FirstMover::Human);
        let (_, output) = run(&mut session, "4\n4\nquit\n");
        assert!(output.contains("Invalid move, try again."));
        assert!(output.contains("AI played:"));
        assert_eq!(session.board().get(4), Some(HUMAN));
        assert_eq!(session.board().count(ENGINE), 1);
    }

    #[test]
    fn test_engine_moves_first() {
        let mut session = Session::new(Algorithm::Minimax, FirstMover::Engine);
        let (outcome, output) = run(&mut session, "quit\n");
        assert_eq!(outcome, None);
        assert!(session.engine_first());
        assert_eq!(session.board().get(0), Some(ENGINE));
        let played = output.find("AI played:").unwrap();
        let prompt = output.find("Enter your move").unwrap();
        assert!(played < prompt);
    }

    #[test]
    fn test_engine_never_loses_full_game() {
        // Trying every cell in order always finds an empty one on the human's turn.
        let input: String = (0..9).map(|i| format!("{i}\n")).collect();
        for first in [FirstMover::Human, FirstMover::Engine] {
            let mut session = Session::new(Algorithm::AlphaBeta, first);
            let (outcome, output) = run(&mut session, &input);
            let outcome = outcome.expect("game should finish");
            assert_ne!(outcome, Outcome::Won(HUMAN));
            assert!(output.ends_with("AI wins!\n") || output.ends_with("It's a tie!\n"));
        }
    }

    #[test]
    fn test_play_after_game_over() {
        let mut session = Session::new(Algorithm::AlphaBeta, FirstMover::Human);
        session.board = "OOOXX....".parse().unwrap();
        assert_eq!(session.play_human("5"), Err(Error::GameOver));
        assert_eq!(session.play_engine(), Err(Error::GameOver));
    }

    #[test]
    fn test_random_first_mover_is_seeded() {
        let mut a = fastrand::Rng::with_seed(42);
        let mut b = fastrand::Rng::with_seed(42);
        let first = Session::with_rng(Algorithm::AlphaBeta, FirstMover::Random, &mut a);
        let second = Session::with_rng(Algorithm::AlphaBeta, FirstMover::Random, &mut b);
        assert_eq!(first.engine_first(), second.engine_first());
    }
}

//! Engine-vs-random matches.
//!
//! Plays the engine (maximizer) against an opponent that picks uniformly among
//! the empty cells. An exact engine can never lose such a game, so the tally is
//! a cheap end-to-end check of the whole search stack.

use tracing::{debug, info};

use crate::board::{Board, Player};
use crate::error::{Error, Result};
use crate::rules::{Outcome, classify};
use crate::search::Algorithm;
use crate::selector::best_move;

/// Results from the engine's point of view.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Tally {
    pub wins: usize,
    pub draws: usize,
    pub losses: usize,
}

impl Tally {
    pub fn games(&self) -> usize {
        self.wins + self.draws + self.losses
    }

    fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Won(Player::Maximizer) => self.wins += 1,
            Outcome::Won(Player::Minimizer) => self.losses += 1,
            Outcome::Draw | Outcome::Ongoing => self.draws += 1,
        }
    }
}

/// Pick a uniformly random empty cell.
fn random_move(board: &Board, rng: &mut fastrand::Rng) -> Option<usize> {
    let empty: Vec<usize> = board.empty_cells().collect();
    if empty.is_empty() {
        return None;
    }
    Some(empty[rng.usize(..empty.len())])
}

/// Play one game to completion and return its outcome.
pub fn play_random_game(
    rng: &mut fastrand::Rng,
    algorithm: Algorithm,
    engine_first: bool,
) -> Result<Outcome> {
    let mut board = Board::new();
    let mut to_move = if engine_first {
        Player::Maximizer
    } else {
        Player::Minimizer
    };

    loop {
        let outcome = classify(&board);
        if outcome.is_terminal() {
            return Ok(outcome);
        }

        let index = match to_move {
            Player::Maximizer => best_move(&board, to_move, algorithm),
            Player::Minimizer => random_move(&board, rng),
        }
        .ok_or(Error::GameOver)?;

        board.place(index, to_move)?;
        to_move = to_move.opponent();
    }
}

/// Play `games` games with a seeded opponent, alternating who moves first.
pub fn play_random_games(games: usize, seed: u64, algorithm: Algorithm) -> Result<Tally> {
    let mut rng = fastrand::Rng::with_seed(seed);
    let mut tally = Tally::default();

    for game in 0..games {
        let engine_first = game % 2 == 0;
        let outcome = play_random_game(&mut rng, algorithm, engine_first)?;
        debug!(game, engine_first, %outcome, "game finished");
        tally.record(outcome);
    }

    info!(
        games,
        seed,
        ?algorithm,
        wins = tally.wins,
        draws = tally.draws,
        losses = tally.losses,
        "arena finished"
    );
    Ok(tally)
}

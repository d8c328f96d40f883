//! Tictac-Solver: exact game-tree search for 3x3 tic-tac-toe.
//!
//! The engine searches every line of play to the end of the game, so its
//! moves are optimal: it never loses, and it takes every win it can force.
//!
//! ## Modules
//!
//! - [`constants`] - Board geometry, winning lines, and score values
//! - [`board`] - Board state, players, and scoped mark placement
//! - [`rules`] - Win detection and terminal classification
//! - [`search`] - Minimax and alpha-beta sharing one recursive core
//! - [`selector`] - Root move selection with lowest-index tie-break
//! - [`session`] - Interactive human-vs-engine game loop
//! - [`arena`] - Seeded matches against a random opponent
//! - [`error`] - Error type for board construction and move application
//!
//! ## Example
//!
//! ```
//! use tictac_solver::board::{Board, Player};
//! use tictac_solver::rules::{Outcome, classify};
//! use tictac_solver::search::Algorithm;
//! use tictac_solver::selector::best_move;
//!
//! let mut board: Board = "OO.XX....".parse().unwrap();
//! let index = best_move(&board, Player::Maximizer, Algorithm::AlphaBeta).unwrap();
//! assert_eq!(index, 2);
//!
//! board.place(index, Player::Maximizer).unwrap();
//! assert_eq!(classify(&board), Outcome::Won(Player::Maximizer));
//! ```

pub mod arena;
pub mod board;
pub mod constants;
pub mod error;
pub mod rules;
pub mod search;
pub mod selector;
pub mod session;

pub use board::{Board, Cell, Player};
pub use error::{Error, Result};
pub use rules::{Outcome, classify};
pub use search::{Algorithm, SearchStats, Searcher};
pub use selector::{Selection, best_move};

//! Error types for board construction and move application.

use thiserror::Error;

/// Recoverable conditions reported to the immediate caller.
///
/// The search itself never fails on a structurally valid board; every variant
/// here comes from building a board or from the checked mutation primitive.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    #[error("invalid board shape: expected 9 cells, got {got}")]
    InvalidBoardShape { got: usize },

    #[error("cell {index} is already occupied")]
    OccupiedCell { index: usize },

    #[error("cell {index} is out of range (must be 0-8)")]
    OutOfRange { index: usize },

    #[error("invalid character '{character}' at position {position}")]
    InvalidCellCharacter { character: char, position: usize },

    #[error("invalid move input '{input}'")]
    InvalidMoveInput { input: String },

    #[error("game already over")]
    GameOver,
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;

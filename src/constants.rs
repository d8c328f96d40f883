//! Constants for board geometry, winning lines, and search scores.
//!
//! The board is a flat array of `CELLS` entries where index `row * N + col`
//! addresses the cell at `(row, col)`. Nothing here is configurable at runtime:
//! the game is always played on a 3x3 grid.

// =============================================================================
// Board Geometry
// =============================================================================

/// Board side length.
pub const N: usize = 3;

/// Total number of cells on the board.
pub const CELLS: usize = N * N;

/// The eight winning lines: three rows, three columns, two diagonals.
pub const WIN_LINES: [[usize; 3]; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
];

// =============================================================================
// Cell Symbols
// =============================================================================

/// Symbol for the maximizing player (the engine in interactive play).
pub const SYMBOL_MAXIMIZER: char = 'O';

/// Symbol for the minimizing player (the human in interactive play).
pub const SYMBOL_MINIMIZER: char = 'X';

/// Symbol used for empty cells in the compact text form.
pub const SYMBOL_EMPTY: char = '.';

// =============================================================================
// Scores
// =============================================================================

/// Game value from the maximizer's perspective.
pub type Score = i32;

/// Maximizer has three in a row.
pub const SCORE_WIN: Score = 1;

/// Board is full with no winner.
pub const SCORE_DRAW: Score = 0;

/// Minimizer has three in a row.
pub const SCORE_LOSS: Score = -1;

/// Lower bound of the search window. Never returned as a game value.
pub const NEG_INFINITY: Score = Score::MIN;

/// Upper bound of the search window. Never returned as a game value.
pub const INFINITY: Score = Score::MAX;

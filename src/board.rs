//! Board state: a fixed 3x3 grid of cells.
//!
//! Cells are `Option<Player>`: `None` is empty, `Some(player)` holds that
//! player's mark. Index `i` maps to row `i / 3`, column `i % 3`.
//!
//! The search mutates a single owned board in place. [`Placement`] pairs each
//! mark with its removal, so a cell placed during search is cleared on every
//! exit path, including early returns after a pruning cutoff.

use std::fmt;
use std::ops::{Deref, DerefMut};
use std::str::FromStr;

use crate::constants::{CELLS, N, SYMBOL_EMPTY, SYMBOL_MAXIMIZER, SYMBOL_MINIMIZER};
use crate::error::{Error, Result};

/// One of the two players.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Player {
    /// Scores +1 on a win. Plays `O`.
    Maximizer,
    /// Scores -1 on a win. Plays `X`.
    Minimizer,
}

impl Player {
    /// The other player.
    #[inline]
    pub fn opponent(self) -> Self {
        match self {
            Player::Maximizer => Player::Minimizer,
            Player::Minimizer => Player::Maximizer,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Player::Maximizer => SYMBOL_MAXIMIZER,
            Player::Minimizer => SYMBOL_MINIMIZER,
        }
    }

    /// Parse a player from its mark, case-insensitively.
    pub fn from_symbol(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            SYMBOL_MAXIMIZER => Some(Player::Maximizer),
            SYMBOL_MINIMIZER => Some(Player::Minimizer),
            _ => None,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A single board cell. `None` is empty.
pub type Cell = Option<Player>;

/// A 3x3 board.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub struct Board {
    cells: [Cell; CELLS],
}

impl Board {
    /// Create an empty board.
    pub fn new() -> Self {
        Self {
            cells: [None; CELLS],
        }
    }

    /// Build a board from a slice of exactly nine cells.
    pub fn from_cells(cells: &[Cell]) -> Result<Self> {
        let cells: [Cell; CELLS] = cells
            .try_into()
            .map_err(|_| Error::InvalidBoardShape { got: cells.len() })?;
        Ok(Self { cells })
    }

    pub fn cells(&self) -> &[Cell; CELLS] {
        &self.cells
    }

    /// Contents of the cell at `index`. Panics if `index >= 9`.
    #[inline]
    pub fn get(&self, index: usize) -> Cell {
        self.cells[index]
    }

    #[inline]
    pub fn is_empty_at(&self, index: usize) -> bool {
        self.cells[index].is_none()
    }

    /// Indices of empty cells in ascending order.
    pub fn empty_cells(&self) -> impl Iterator<Item = usize> + '_ {
        (0..CELLS).filter(|&i| self.cells[i].is_none())
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Number of marks `player` has on the board.
    pub fn count(&self, player: Player) -> usize {
        self.cells.iter().filter(|&&c| c == Some(player)).count()
    }

    /// Place `player`'s mark on an empty, in-range cell.
    ///
    /// Never overwrites: an occupied target is reported as
    /// [`Error::OccupiedCell`] and the board is left untouched.
    pub fn place(&mut self, index: usize, player: Player) -> Result<()> {
        if index >= CELLS {
            return Err(Error::OutOfRange { index });
        }
        if self.cells[index].is_some() {
            return Err(Error::OccupiedCell { index });
        }
        self.cells[index] = Some(player);
        Ok(())
    }

    /// Like [`Board::place`], but the mark is removed when the returned guard drops.
    pub fn place_scoped(&mut self, index: usize, player: Player) -> Result<Placement<'_>> {
        self.place(index, player)?;
        Ok(Placement { board: self, index })
    }

    /// Reset a cell to empty.
    pub fn clear(&mut self, index: usize) {
        self.cells[index] = None;
    }

    /// Nine-character form accepted by `Board::from_str`, e.g. `"OO.XX...."`.
    pub fn to_compact(&self) -> String {
        self.cells
            .iter()
            .map(|c| c.map_or(SYMBOL_EMPTY, Player::symbol))
            .collect()
    }

    /// Mark a cell known to be empty, returning the guard that clears it.
    pub(crate) fn mark_scoped(&mut self, index: usize, player: Player) -> Placement<'_> {
        debug_assert!(self.cells[index].is_none(), "cell {index} already occupied");
        self.cells[index] = Some(player);
        Placement { board: self, index }
    }
}

/// A mark placed on a borrowed board, removed again on drop.
///
/// Dereferences to the board so the search can recurse through it.
pub struct Placement<'a> {
    board: &'a mut Board,
    index: usize,
}

impl Placement<'_> {
    /// The cell this placement occupies.
    pub fn index(&self) -> usize {
        self.index
    }
}

impl Deref for Placement<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        &*self.board
    }
}

impl DerefMut for Placement<'_> {
    fn deref_mut(&mut self) -> &mut Board {
        &mut *self.board
    }
}

impl Drop for Placement<'_> {
    fn drop(&mut self) {
        self.board.clear(self.index);
    }
}

impl From<[Cell; CELLS]> for Board {
    fn from(cells: [Cell; CELLS]) -> Self {
        Self { cells }
    }
}

impl TryFrom<&[Cell]> for Board {
    type Error = Error;

    fn try_from(cells: &[Cell]) -> Result<Self> {
        Self::from_cells(cells)
    }
}

impl FromStr for Board {
    type Err = Error;

    /// Parse nine cell characters. `O`/`X` (any case) are marks, `.`, `_` and
    /// `-` are empty; whitespace, `|`, `/` and `,` are skipped.
    fn from_str(s: &str) -> Result<Self> {
        let mut cells = Vec::with_capacity(CELLS);
        for (position, character) in s.chars().enumerate() {
            match character {
                c if c.is_whitespace() => continue,
                '|' | '/' | ',' => continue,
                '.' | '_' | '-' => cells.push(None),
                c => match Player::from_symbol(c) {
                    Some(player) => cells.push(Some(player)),
                    None => {
                        return Err(Error::InvalidCellCharacter {
                            character,
                            position,
                        });
                    }
                },
            }
        }
        Self::from_cells(&cells)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..N {
            let line: Vec<String> = (0..N)
                .map(|col| {
                    self.cells[row * N + col]
                        .map_or(' ', Player::symbol)
                        .to_string()
                })
                .collect();
            writeln!(f, "{}", line.join("|"))?;
            if row + 1 < N {
                writeln!(f, "{}", "-".repeat(2 * N - 1))?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        assert_eq!(board.empty_cells().count(), CELLS);
        assert!(!board.is_full());
    }

    #[test]
    fn test_place_rejects_occupied() {
        let mut board = Board::new();
        board.place(4, Player::Maximizer).unwrap();
        assert_eq!(
            board.place(4, Player::Minimizer),
            Err(Error::OccupiedCell { index: 4 })
        );
        assert_eq!(board.get(4), Some(Player::Maximizer));
    }

    #[test]
    fn test_place_rejects_out_of_range() {
        let mut board = Board::new();
        assert_eq!(
            board.place(9, Player::Maximizer),
            Err(Error::OutOfRange { index: 9 })
        );
    }

    #[test]
    fn test_scoped_placement_restores_cell() {
        let mut board = Board::new();
        {
            let placed = board.place_scoped(2, Player::Minimizer).unwrap();
            assert_eq!(placed.get(2), Some(Player::Minimizer));
            assert_eq!(placed.index(), 2);
        }
        assert!(board.is_empty_at(2));
    }

    #[test]
    fn test_from_cells_wrong_length() {
        let cells = [None; 8];
        assert_eq!(
            Board::from_cells(&cells),
            Err(Error::InvalidBoardShape { got: 8 })
        );
        let cells = [None; 10];
        assert_eq!(
            Board::from_cells(&cells),
            Err(Error::InvalidBoardShape { got: 10 })
        );
    }

    #[test]
    fn test_parse_compact_roundtrip() {
        let board: Board = "OO.XX....".parse().unwrap();
        assert_eq!(board.get(0), Some(Player::Maximizer));
        assert_eq!(board.get(3), Some(Player::Minimizer));
        assert!(board.is_empty_at(2));
        assert_eq!(board.to_compact(), "OO.XX....");
    }

    #[test]
    fn test_parse_with_separators() {
        let board: Board = "x|o|_ / _|x|_ / _|_|o".parse().unwrap();
        assert_eq!(board.to_compact(), "XO..X...O");
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            "OOXX".parse::<Board>(),
            Err(Error::InvalidBoardShape { got: 4 })
        );
        assert_eq!(
            "OO?XX....".parse::<Board>(),
            Err(Error::InvalidCellCharacter {
                character: '?',
                position: 2
            })
        );
    }

    #[test]
    fn test_display() {
        let board: Board = "O.X......".parse().unwrap();
        assert_eq!(board.to_string(), "O| |X\n-----\n | | \n-----\n | | \n");
    }
}

//! Core domain types for XO.

use crate::position::{Cell, DIMENSION};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

/// Player in the game.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
pub enum Player {
    /// Player X (mark 1).
    X,
    /// Player O (mark 2).
    O,
}

impl Player {
    /// Numeric mark written into an occupied cell.
    pub fn mark(self) -> u8 {
        match self {
            Player::X => 1,
            Player::O => 2,
        }
    }

    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

/// A square on the board.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    #[default]
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

impl Square {
    /// Numeric mark of the square, 0 when empty.
    pub fn mark(self) -> u8 {
        match self {
            Square::Empty => 0,
            Square::Occupied(player) => player.mark(),
        }
    }
}

/// The 3x3 grid.
///
/// A `Board` only stores occupancy. It never refuses a write; keeping
/// cells write-once is the job of [`GameMechanics::validate_selection`].
///
/// [`GameMechanics::validate_selection`]: crate::GameMechanics::validate_selection
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    grid: [[Square; DIMENSION]; DIMENSION],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Writes the player's mark into the cell.
    ///
    /// Occupancy is not checked. Writing over an occupied square is logged
    /// and then performed anyway.
    #[instrument(skip(self))]
    pub fn add_to_board(&mut self, player: Player, cell: Cell) {
        let (row, column) = (cell.row(), cell.column());
        if let Square::Occupied(owner) = self.grid[row][column] {
            warn!(%owner, "Overwriting an occupied square");
        }
        self.grid[row][column] = Square::Occupied(player);
        debug!(row, column, "Mark placed");
    }

    /// Mark stored at the 1-based index, or 0 when the square is empty
    /// or the index names no cell.
    pub fn at(&self, index: i64) -> u8 {
        Cell::from_index(index).map_or(0, |cell| self.square(cell).mark())
    }

    /// Borrowed view of the whole grid, indexed `[row][column]`.
    pub fn get_board(&self) -> &[[Square; DIMENSION]; DIMENSION] {
        &self.grid
    }

    /// Gets the square at the given cell.
    pub fn square(&self, cell: Cell) -> Square {
        self.grid[cell.row()][cell.column()]
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, cell: Cell) -> bool {
        self.square(cell) == Square::Empty
    }

    /// Empty cells in index order.
    #[instrument(skip(self))]
    pub fn free_cells(&self) -> Vec<Cell> {
        Cell::ALL
            .iter()
            .copied()
            .filter(|cell| self.is_empty(*cell))
            .collect()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (row, squares) in self.grid.iter().enumerate() {
            for (column, square) in squares.iter().enumerate() {
                match square {
                    Square::Empty => write!(f, "{}", row * DIMENSION + column + 1)?,
                    Square::Occupied(player) => write!(f, "{}", player)?,
                }
                if column + 1 < DIMENSION {
                    write!(f, "|")?;
                }
            }
            if row + 1 < DIMENSION {
                write!(f, "\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marks() {
        assert_eq!(Player::X.mark(), 1);
        assert_eq!(Player::O.mark(), 2);
        assert_eq!(Square::Empty.mark(), 0);
        assert_eq!(Square::Occupied(Player::O).mark(), 2);
    }

    #[test]
    fn test_opponent() {
        assert_eq!(Player::X.opponent(), Player::O);
        assert_eq!(Player::O.opponent(), Player::X);
    }

    #[test]
    fn test_add_to_board_writes_row_and_column() {
        let mut board = Board::new();
        board.add_to_board(Player::X, Cell::TopCenter);
        board.add_to_board(Player::O, Cell::MiddleLeft);
        board.add_to_board(Player::X, Cell::BottomRight);

        let grid = board.get_board();
        assert_eq!(grid[0][1], Square::Occupied(Player::X));
        assert_eq!(grid[1][0], Square::Occupied(Player::O));
        assert_eq!(grid[2][2], Square::Occupied(Player::X));
        assert_eq!(grid[0][0], Square::Empty);
    }

    #[test]
    fn test_add_to_board_overwrites_without_validation() {
        let mut board = Board::new();
        board.add_to_board(Player::X, Cell::Center);
        board.add_to_board(Player::O, Cell::Center);
        assert_eq!(board.at(5), Player::O.mark());
    }

    #[test]
    fn test_at_outside_board_is_zero() {
        let mut board = Board::new();
        board.add_to_board(Player::X, Cell::TopLeft);
        assert_eq!(board.at(0), 0);
        assert_eq!(board.at(10), 0);
        assert_eq!(board.at(-3), 0);
    }

    #[test]
    fn test_free_cells() {
        let mut board = Board::new();
        assert_eq!(board.free_cells().len(), 9);

        board.add_to_board(Player::X, Cell::TopLeft);
        board.add_to_board(Player::O, Cell::Center);
        let free = board.free_cells();
        assert_eq!(free.len(), 7);
        assert!(!free.contains(&Cell::TopLeft));
        assert!(!free.contains(&Cell::Center));
        assert!(free.contains(&Cell::BottomRight));
    }

    #[test]
    fn test_display() {
        let mut board = Board::new();
        board.add_to_board(Player::X, Cell::TopLeft);
        board.add_to_board(Player::O, Cell::Center);
        assert_eq!(board.to_string(), "X|2|3\n-+-+-\n4|O|6\n-+-+-\n7|8|9");
    }
}

//! Draw detection logic for XO.

use crate::types::{Board, Square};
use tracing::instrument;

/// Checks if the board is full (all squares occupied).
///
/// This is the whole draw test. It does not look for a winning line, so
/// callers check for a win first.
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board
        .get_board()
        .iter()
        .flatten()
        .all(|square| *square != Square::Empty)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Cell, Player};

    #[test]
    fn test_empty_board_not_full() {
        let board = Board::new();
        assert!(!is_full(&board));
    }

    #[test]
    fn test_partial_board_not_full() {
        let mut board = Board::new();
        board.add_to_board(Player::X, Cell::Center);
        assert!(!is_full(&board));
    }

    #[test]
    fn test_full_board() {
        let mut board = Board::new();
        for cell in Cell::ALL {
            board.add_to_board(Player::X, cell);
        }
        assert!(is_full(&board));
    }
}

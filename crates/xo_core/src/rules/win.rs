//! Win detection logic for XO.

use crate::position::DIMENSION;
use crate::types::{Board, Player, Square};
use tracing::instrument;

/// True iff some row is entirely `player`'s.
#[instrument(skip(board))]
pub fn win_by_rows(board: &Board, player: Player) -> bool {
    let target = Square::Occupied(player);
    board
        .get_board()
        .iter()
        .any(|row| row.iter().all(|square| *square == target))
}

/// True iff some column is entirely `player`'s.
#[instrument(skip(board))]
pub fn win_by_columns(board: &Board, player: Player) -> bool {
    let target = Square::Occupied(player);
    let grid = board.get_board();
    (0..DIMENSION).any(|column| (0..DIMENSION).all(|row| grid[row][column] == target))
}

/// True iff the top-left to bottom-right diagonal is entirely `player`'s.
#[instrument(skip(board))]
pub fn win_by_diagonal(board: &Board, player: Player) -> bool {
    let target = Square::Occupied(player);
    let grid = board.get_board();
    (0..DIMENSION).all(|i| grid[i][i] == target)
}

/// True iff the top-right to bottom-left diagonal is entirely `player`'s.
#[instrument(skip(board))]
pub fn win_by_anti_diagonal(board: &Board, player: Player) -> bool {
    let target = Square::Occupied(player);
    let grid = board.get_board();
    (0..DIMENSION).all(|i| grid[i][DIMENSION - 1 - i] == target)
}

/// True iff `player` owns any full line.
#[instrument(skip(board))]
pub fn is_win(board: &Board, player: Player) -> bool {
    win_by_rows(board, player)
        || win_by_columns(board, player)
        || win_by_diagonal(board, player)
        || win_by_anti_diagonal(board, player)
}

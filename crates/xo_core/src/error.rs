//! Error types for move validation.

use crate::position::Cell;
use derive_more::{Display, Error};

/// Why a selection was refused.
///
/// Both kinds are ordinary bad input: the caller re-prompts the active
/// player and tries again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum SelectionError {
    /// The selection does not name a cell (valid cells are 1-9).
    #[display("Selection {selection} is out of scope (choose 1-9)")]
    OutOfScope {
        /// The rejected selection.
        selection: i64,
    },

    /// The selected cell already holds a mark.
    #[display("Position {cell} is already set")]
    PositionAlreadySet {
        /// The occupied cell.
        cell: Cell,
    },
}

/// Error returned by [`Session::play`](crate::Session::play).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum TurnError {
    /// The selection failed validation; the same player moves again.
    #[display("{_0}")]
    Selection(SelectionError),

    /// The session already ended in a win or a draw.
    #[display("Game is already over")]
    GameOver,
}

impl From<SelectionError> for TurnError {
    fn from(err: SelectionError) -> Self {
        Self::Selection(err)
    }
}

//! Turn-by-turn driver over [`Board`] and [`GameMechanics`].
//!
//! A session runs the caller loop: validate the active player's
//! selection, apply it, look for a win, then a draw, and otherwise pass
//! the move to the other player.

use crate::error::TurnError;
use crate::mechanics::GameMechanics;
use crate::types::{Board, Player};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Result of one accepted move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// No win and no draw; the other player moves next.
    Continue,
    /// The mover completed a line.
    Win(Player),
    /// The board filled up without a winning line.
    Draw,
}

impl Outcome {
    /// Returns true if the game ended with this move.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::Continue)
    }
}

/// Where a session stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    /// Waiting for the given player to move.
    AwaitingMove(Player),
    /// Ended with a winner.
    Won(Player),
    /// Ended in a draw.
    Drawn,
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Status::AwaitingMove(player) => write!(f, "Player {} to move", player),
            Status::Won(player) => write!(f, "Player {} wins", player),
            Status::Drawn => write!(f, "Draw"),
        }
    }
}

/// One game from empty board to win or draw.
///
/// Serializable for inspection only. A session is rebuilt by replaying
/// its moves, never read back, since a stored status could contradict
/// the stored board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Session {
    board: Board,
    mechanics: GameMechanics,
    status: Status,
    moves_played: usize,
}

impl Session {
    /// Creates a session with X moving first.
    pub fn new() -> Self {
        Self::from_mechanics(GameMechanics::new())
    }

    /// Creates a session where `first` moves first.
    pub fn starting_with(first: Player) -> Self {
        Self::from_mechanics(GameMechanics::starting_with(first))
    }

    fn from_mechanics(mechanics: GameMechanics) -> Self {
        Self {
            board: Board::new(),
            status: Status::AwaitingMove(mechanics.get_active_user()),
            mechanics,
            moves_played: 0,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the mechanics.
    pub fn mechanics(&self) -> &GameMechanics {
        &self.mechanics
    }

    /// Returns the current status.
    pub fn status(&self) -> Status {
        self.status
    }

    /// Number of accepted moves so far.
    pub fn moves_played(&self) -> usize {
        self.moves_played
    }

    /// Returns true once the session ended in a win or a draw.
    pub fn is_over(&self) -> bool {
        !matches!(self.status, Status::AwaitingMove(_))
    }

    /// Plays the active player's `selection`.
    ///
    /// A rejected selection leaves the session untouched, with the same
    /// player still to move.
    ///
    /// # Errors
    ///
    /// - [`TurnError::GameOver`] after a win or a draw.
    /// - [`TurnError::Selection`] when validation fails.
    #[instrument(skip(self), fields(player = %self.mechanics.get_active_user()))]
    pub fn play(&mut self, selection: i64) -> Result<Outcome, TurnError> {
        if self.is_over() {
            return Err(TurnError::GameOver);
        }

        let player = self.mechanics.get_active_user();
        let cell = self.mechanics.validate_selection(&self.board, selection)?;

        self.board.add_to_board(player, cell);
        self.moves_played += 1;
        debug!(%cell, moves_played = self.moves_played, "Move applied");

        if self.mechanics.win(&self.board, player) {
            info!(%player, "Game won");
            self.status = Status::Won(player);
            return Ok(Outcome::Win(player));
        }

        if self.mechanics.draw(&self.board) {
            info!("Game drawn");
            self.status = Status::Drawn;
            return Ok(Outcome::Draw);
        }

        self.mechanics.switch_active_user();
        let next = self.mechanics.get_active_user();
        debug_assert_eq!(
            next,
            self.mechanics.players()[self.moves_played % 2],
            "Players must alternate"
        );
        self.status = Status::AwaitingMove(next);
        Ok(Outcome::Continue)
    }

    /// Plays a sequence of selections, stopping at the first terminal
    /// outcome.
    ///
    /// # Errors
    ///
    /// Fails on the first rejected selection; moves before it stay applied.
    #[instrument(skip(self))]
    pub fn replay(&mut self, selections: &[i64]) -> Result<Outcome, TurnError> {
        let mut outcome = Outcome::Continue;
        for selection in selections {
            outcome = self.play(*selection)?;
            if outcome.is_terminal() {
                break;
            }
        }
        Ok(outcome)
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Cell, SelectionError};

    #[test]
    fn test_new_session_awaits_first_player() {
        let session = Session::new();
        assert_eq!(session.status(), Status::AwaitingMove(Player::X));
        assert_eq!(session.moves_played(), 0);
        assert!(!session.is_over());
    }

    #[test]
    fn test_continue_switches_player() {
        let mut session = Session::new();
        assert_eq!(session.play(5), Ok(Outcome::Continue));
        assert_eq!(session.status(), Status::AwaitingMove(Player::O));
        assert_eq!(session.board().at(5), Player::X.mark());
    }

    #[test]
    fn test_rejected_selection_keeps_player() {
        let mut session = Session::new();
        session.play(5).unwrap();

        let err = session.play(5).unwrap_err();
        assert_eq!(
            err,
            TurnError::Selection(SelectionError::PositionAlreadySet { cell: Cell::Center })
        );
        assert_eq!(session.status(), Status::AwaitingMove(Player::O));
        assert_eq!(session.moves_played(), 1);

        let err = session.play(42).unwrap_err();
        assert_eq!(
            err,
            TurnError::Selection(SelectionError::OutOfScope { selection: 42 })
        );
        assert_eq!(session.status(), Status::AwaitingMove(Player::O));
    }

    #[test]
    fn test_win_is_terminal() {
        let mut session = Session::new();
        // X: 1 2 3, O: 4 5
        assert_eq!(session.replay(&[1, 4, 2, 5, 3]), Ok(Outcome::Win(Player::X)));
        assert_eq!(session.status(), Status::Won(Player::X));
        assert_eq!(session.play(9), Err(TurnError::GameOver));
        assert_eq!(session.board().at(9), 0);
    }

    #[test]
    fn test_draw_is_terminal() {
        let mut session = Session::new();
        // O X O / X O X / X O X
        let outcome = session.replay(&[2, 1, 4, 3, 6, 5, 7, 8, 9]).unwrap();
        assert_eq!(outcome, Outcome::Draw);
        assert_eq!(session.status(), Status::Drawn);
        assert_eq!(session.moves_played(), 9);
    }

    #[test]
    fn test_win_on_last_square_is_not_draw() {
        let mut session = Session::new();
        // X O X / O X O / O X X, X completes 1-5-9 with the ninth move
        let outcome = session.replay(&[1, 2, 3, 4, 8, 6, 5, 7, 9]).unwrap();
        assert_eq!(outcome, Outcome::Win(Player::X));
    }

    #[test]
    fn test_o_first() {
        let mut session = Session::starting_with(Player::O);
        session.play(1).unwrap();
        assert_eq!(session.board().at(1), Player::O.mark());
        assert_eq!(session.status(), Status::AwaitingMove(Player::X));
    }
}

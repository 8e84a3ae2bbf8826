//! Turn management, move validation and win/draw queries.

use crate::error::SelectionError;
use crate::position::Cell;
use crate::rules;
use crate::types::{Board, Player};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

/// Owns the two players and knows whose move it is.
///
/// The players are held as an ordered pair and the active one is picked
/// by index, so switching is plain arithmetic on that index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "MechanicsState")]
pub struct GameMechanics {
    players: [Player; 2],
    active: usize,
}

/// Unchecked wire form of [`GameMechanics`].
#[derive(Deserialize)]
struct MechanicsState {
    players: [Player; 2],
    active: usize,
}

impl TryFrom<MechanicsState> for GameMechanics {
    type Error = String;

    fn try_from(state: MechanicsState) -> Result<Self, Self::Error> {
        let [first, second] = state.players;
        if second != first.opponent() {
            return Err(format!("players must differ, got {} and {}", first, second));
        }
        if state.active > 1 {
            return Err(format!("active index must be 0 or 1, got {}", state.active));
        }
        Ok(Self {
            players: state.players,
            active: state.active,
        })
    }
}

impl GameMechanics {
    /// Creates mechanics with X moving first.
    pub fn new() -> Self {
        Self::starting_with(Player::X)
    }

    /// Creates mechanics where `first` moves first against its opponent.
    #[instrument]
    pub fn starting_with(first: Player) -> Self {
        Self {
            players: [first, first.opponent()],
            active: 0,
        }
    }

    /// The two players in turn order.
    pub fn players(&self) -> [Player; 2] {
        self.players
    }

    /// Returns the player whose move is expected.
    pub fn get_active_user(&self) -> Player {
        self.players[self.active]
    }

    /// Hands the move to the other player.
    #[instrument(skip(self), fields(from = %self.get_active_user()))]
    pub fn switch_active_user(&mut self) {
        self.active = 1 - self.active;
        debug!(to = %self.get_active_user(), "Active player switched");
    }

    /// Checks the active player's selection against `board`.
    ///
    /// The range is checked before occupancy. Nothing is mutated; on
    /// success the validated cell is returned for
    /// [`Board::add_to_board`].
    ///
    /// # Errors
    ///
    /// - [`SelectionError::OutOfScope`] if `selection` is not in 1-9.
    /// - [`SelectionError::PositionAlreadySet`] if the cell holds a mark,
    ///   whoever placed it.
    #[instrument(skip(self, board), fields(player = %self.get_active_user()))]
    pub fn validate_selection(&self, board: &Board, selection: i64) -> Result<Cell, SelectionError> {
        let Some(cell) = Cell::from_index(selection) else {
            warn!("Selection out of scope");
            return Err(SelectionError::OutOfScope { selection });
        };

        if !board.is_empty(cell) {
            warn!(%cell, "Selection already set");
            return Err(SelectionError::PositionAlreadySet { cell });
        }

        Ok(cell)
    }

    /// True iff any row belongs to `player`.
    pub fn win_by_rows(&self, board: &Board, player: Player) -> bool {
        rules::win_by_rows(board, player)
    }

    /// True iff any column belongs to `player`.
    pub fn win_by_columns(&self, board: &Board, player: Player) -> bool {
        rules::win_by_columns(board, player)
    }

    /// True iff the top-left to bottom-right diagonal belongs to `player`.
    pub fn win_by_diagonal(&self, board: &Board, player: Player) -> bool {
        rules::win_by_diagonal(board, player)
    }

    /// True iff the top-right to bottom-left diagonal belongs to `player`.
    pub fn win_by_anti_diagonal(&self, board: &Board, player: Player) -> bool {
        rules::win_by_anti_diagonal(board, player)
    }

    /// True iff `player` owns any row, column or diagonal.
    pub fn win(&self, board: &Board, player: Player) -> bool {
        rules::is_win(board, player)
    }

    /// True iff every cell is occupied.
    ///
    /// A full board that also contains a winning line still counts, so
    /// check [`win`](Self::win) first.
    pub fn draw(&self, board: &Board) -> bool {
        rules::is_full(board)
    }

    /// The player owning a full line, if any.
    #[instrument(skip(self, board))]
    pub fn winner(&self, board: &Board) -> Option<Player> {
        self.players
            .into_iter()
            .find(|player| self.win(board, *player))
    }
}

impl Default for GameMechanics {
    fn default() -> Self {
        Self::new()
    }
}

//! XO rules engine.
//!
//! Board state, turn order, move validation and win/draw detection for
//! two-player tic-tac-toe on a 3x3 grid. There is no I/O here; a caller
//! (terminal, server, test harness) owns the loop and the presentation.
//!
//! # Example
//!
//! ```
//! use xo_core::{Board, GameMechanics, Player};
//!
//! let mut board = Board::new();
//! let mut mechanics = GameMechanics::new();
//!
//! let player = mechanics.get_active_user();
//! let cell = mechanics.validate_selection(&board, 5).unwrap();
//! board.add_to_board(player, cell);
//!
//! assert!(!mechanics.win(&board, Player::X));
//! mechanics.switch_active_user();
//! assert_eq!(mechanics.get_active_user(), Player::O);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod mechanics;
mod position;
pub mod rules;
mod session;
mod types;

pub use error::{SelectionError, TurnError};
pub use mechanics::GameMechanics;
pub use position::{CELL_COUNT, Cell, DIMENSION, position_to_column, position_to_row};
pub use session::{Outcome, Session, Status};
pub use types::{Board, Player, Square};

//! Game rules for XO.
//!
//! Pure functions over a [`Board`](crate::Board). They read the grid and
//! never mutate it, so the order they are evaluated in does not matter.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{is_win, win_by_anti_diagonal, win_by_columns, win_by_diagonal, win_by_rows};

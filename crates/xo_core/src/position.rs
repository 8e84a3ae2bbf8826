//! Cell addressing for the 3x3 board.
//!
//! Cells are numbered 1-9 in row-major order starting at the top-left
//! corner. Rows and columns are zero-based.

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Side length of the board.
pub const DIMENSION: usize = 3;

/// Number of cells on the board.
pub const CELL_COUNT: usize = DIMENSION * DIMENSION;

/// Maps a 1-based linear index to its zero-based row.
///
/// # Panics
///
/// Panics if `dimension` is 0. `index` must be at least 1: 0 panics in
/// debug builds and wraps to a meaningless row in release builds.
pub fn position_to_row(index: usize, dimension: usize) -> usize {
    debug_assert!(index >= 1, "cell indices are 1-based");
    (index - 1) / dimension
}

/// Maps a 1-based linear index to its zero-based column.
///
/// # Panics
///
/// Panics if `dimension` is 0. `index` must be at least 1: 0 panics in
/// debug builds and wraps to a meaningless column in release builds.
pub fn position_to_column(index: usize, dimension: usize) -> usize {
    debug_assert!(index >= 1, "cell indices are 1-based");
    (index - 1) % dimension
}

/// A cell on the board, numbered 1-9.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    strum::EnumIter,
)]
#[repr(u8)]
pub enum Cell {
    /// Top-left (cell 1)
    TopLeft = 1,
    /// Top-center (cell 2)
    TopCenter = 2,
    /// Top-right (cell 3)
    TopRight = 3,
    /// Middle-left (cell 4)
    MiddleLeft = 4,
    /// Center (cell 5)
    Center = 5,
    /// Middle-right (cell 6)
    MiddleRight = 6,
    /// Bottom-left (cell 7)
    BottomLeft = 7,
    /// Bottom-center (cell 8)
    BottomCenter = 8,
    /// Bottom-right (cell 9)
    BottomRight = 9,
}

impl Cell {
    /// All 9 cells in index order.
    pub const ALL: [Cell; CELL_COUNT] = [
        Cell::TopLeft,
        Cell::TopCenter,
        Cell::TopRight,
        Cell::MiddleLeft,
        Cell::Center,
        Cell::MiddleRight,
        Cell::BottomLeft,
        Cell::BottomCenter,
        Cell::BottomRight,
    ];

    /// Creates a cell from its 1-based index.
    ///
    /// Returns `None` for anything outside 1-9.
    pub fn from_index(index: i64) -> Option<Self> {
        match index {
            1 => Some(Cell::TopLeft),
            2 => Some(Cell::TopCenter),
            3 => Some(Cell::TopRight),
            4 => Some(Cell::MiddleLeft),
            5 => Some(Cell::Center),
            6 => Some(Cell::MiddleRight),
            7 => Some(Cell::BottomLeft),
            8 => Some(Cell::BottomCenter),
            9 => Some(Cell::BottomRight),
            _ => None,
        }
    }

    /// Converts the cell to its 1-based index.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Zero-based row of the cell.
    pub fn row(self) -> usize {
        position_to_row(self.index(), DIMENSION)
    }

    /// Zero-based column of the cell.
    pub fn column(self) -> usize {
        position_to_column(self.index(), DIMENSION)
    }

    /// Get label for this cell (for display).
    pub fn label(self) -> &'static str {
        match self {
            Cell::TopLeft => "Top-left",
            Cell::TopCenter => "Top-center",
            Cell::TopRight => "Top-right",
            Cell::MiddleLeft => "Middle-left",
            Cell::Center => "Center",
            Cell::MiddleRight => "Middle-right",
            Cell::BottomLeft => "Bottom-left",
            Cell::BottomCenter => "Bottom-center",
            Cell::BottomRight => "Bottom-right",
        }
    }

    /// Parses a cell from its label (case-insensitive, e.g. "center" or "top left").
    #[instrument]
    pub fn from_label(s: &str) -> Option<Cell> {
        let wanted = normalize_label(s);
        if wanted.is_empty() {
            return None;
        }
        <Cell as strum::IntoEnumIterator>::iter().find(|cell| normalize_label(cell.label()) == wanted)
    }
}

fn normalize_label(s: &str) -> String {
    s.chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.label(), self.index())
    }
}

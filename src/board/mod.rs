//! Board representation for five-in-a-row

pub mod band;
pub mod bitboard;
pub mod board;
pub mod zobrist;


use std::fmt;
use std::sync::OnceLock;

// Re-exports
pub use band::{bands, Band, Direction};
pub use bitboard::Bitboard;
pub use board::{Board, GameStatus};
pub use zobrist::ZobristTable;

/// Number of rows (10x10 board)
pub const N_ROW: usize = 10;
/// Number of columns
pub const N_COL: usize = 10;
pub const TOTAL_CELLS: usize = N_ROW * N_COL; // 100

/// Run length that wins the game
pub const WIN_LENGTH: usize = 5;

/// Chebyshev radius used to prune candidate moves
pub const AVAILABLE_DISTANCE: usize = 2;

/// Marker printed for an empty cell
pub const EMPTY_MARKER: char = '-';

/// Which seat a cell belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stone {
    Empty,
    First,
    Second,
}

impl Stone {
    /// Get opponent seat
    #[inline]
    pub fn opponent(self) -> Stone {
        match self {
            Stone::First => Stone::Second,
            Stone::Second => Stone::First,
            Stone::Empty => Stone::Empty,
        }
    }

    /// Column in the zobrist salt table, `None` for empty
    #[inline]
    pub(crate) fn seat_index(self) -> Option<usize> {
        match self {
            Stone::First => Some(0),
            Stone::Second => Some(1),
            Stone::Empty => None,
        }
    }
}

/// A participant: display name plus the marker drawn on the grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    pub name: String,
    pub marker: char,
}

impl Player {
    pub fn new(name: impl Into<String>, marker: char) -> Self {
        Self {
            name: name.into(),
            marker,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}]", self.name, self.marker)
    }
}

/// Position on the board
///
/// Coordinates are not range-checked on construction so that callers can
/// describe an off-board target; `Board::place` rejects those.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pos {
    pub row: u8,
    pub col: u8,
}

impl Pos {
    #[inline]
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    #[inline]
    pub fn to_index(self) -> usize {
        self.row as usize * N_ROW + self.col as usize
    }

    #[inline]
    pub fn from_index(idx: usize) -> Self {
        Self {
            row: (idx / N_ROW) as u8,
            col: (idx % N_ROW) as u8,
        }
    }

    #[inline]
    pub fn is_valid(row: i32, col: i32) -> bool {
        row >= 0 && row < N_ROW as i32 && col >= 0 && col < N_COL as i32
    }

    #[inline]
    pub fn is_on_board(self) -> bool {
        (self.row as usize) < N_ROW && (self.col as usize) < N_COL
    }

    /// Step by `(dr, dc)`, `None` when the result leaves the board
    #[inline]
    pub fn offset(self, dr: i32, dc: i32) -> Option<Pos> {
        let r = i32::from(self.row) + dr;
        let c = i32::from(self.col) + dc;
        if Pos::is_valid(r, c) {
            Some(Pos::new(r as u8, c as u8))
        } else {
            None
        }
    }
}

impl PartialOrd for Pos {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Pos {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.row, self.col).cmp(&(other.row, other.col))
    }
}

/// 1-based, as shown to people
impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row + 1, self.col + 1)
    }
}

static ALL_POS: OnceLock<Vec<Pos>> = OnceLock::new();

/// Every cell of the board in row-major order, built once per process.
pub fn all_positions() -> &'static [Pos] {
    ALL_POS.get_or_init(|| (0..TOTAL_CELLS).map(Pos::from_index).collect())
}

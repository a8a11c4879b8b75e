//! Five-in-a-row engine on a 10x10 board
//!
//! Two players alternately place markers; the first unbroken run of five
//! or more along a row, column or diagonal wins, and a full board with no
//! such run is a draw.
//!
//! # Architecture
//!
//! - [`board`]: positions, band table, zobrist salts, and the grid state
//! - [`rules`]: group scanning along bands, win/draw detection
//! - [`eval`]: per-group scores and the heuristic evaluation
//! - [`search`]: minimax with alpha-beta over the evaluation
//! - [`engine`]: self-play driver
//!
//! # Quick Start
//!
//! ```
//! use gomoku::{Board, Player, Pos, Stone};
//!
//! let mut board = Board::new(Player::new("alice", 'X'), Player::new("bob", 'O')).unwrap();
//! for col in 0..5 {
//!     board.place(Pos::new(0, col), Stone::First).unwrap();
//! }
//! assert_eq!(board.status().winner(), Some(Stone::First));
//! ```
//!
//! The band table and zobrist salts are built once per process and shared
//! by every board; cloning a board copies only its occupancy, hash and
//! status.

pub mod board;
pub mod config;
pub mod engine;
pub mod error;
pub mod eval;
pub mod rules;
pub mod search;

// Re-export commonly used types for convenience
pub use board::{Board, GameStatus, Player, Pos, Stone, N_COL, N_ROW};
pub use config::Config;
pub use engine::{Game, MoveResult};
pub use error::{ConfigError, MarkerError, PlaceError};

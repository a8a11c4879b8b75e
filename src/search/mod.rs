//! Search module
//!
//! Contains:
//! - Transposition table keyed by the board's identity hash
//! - Minimax with alpha-beta pruning over the heuristic evaluation

pub mod alphabeta;
pub mod tt;

pub use alphabeta::{SearchResult, Searcher, CENTER};
pub use tt::{EntryType, TTEntry, TTStats, TranspositionTable};

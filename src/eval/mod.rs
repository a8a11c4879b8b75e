//! Evaluation module for five-in-a-row positions
//!
//! Every group found by the scanner is scored from its length and open
//! ends; the side to evaluate adds its own groups and subtracts the
//! opponent's, which are weighted as threats.

pub mod heuristic;
pub mod patterns;

pub use heuristic::{evaluate, open_ends, LOSS_SCORE, WIN_SCORE};
pub use patterns::{group_score, PatternScore};

//! Game rules for five-in-a-row
//!
//! - Group scanning along every band
//! - Win (five or more in a row) and draw (full board) detection

pub mod scan;
pub mod win;

// Re-exports for convenient access
pub use scan::{scan, Group, Groups};
pub use win::check_status;

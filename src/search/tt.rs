//! Transposition Table for caching search results
//!
//! Entries are indexed by the board's identity hash. Positions with the
//! same occupancy are reached at the same ply, so a stored score (which
//! carries the depth bias of decided games) can be reused as is.
//!
//! # Example
//!
//! ```
//! use gomoku::board::Pos;
//! use gomoku::search::{EntryType, TranspositionTable};
//!
//! let mut tt = TranspositionTable::new(1); // 1 MB
//! let hash = 0x1234_5678_9ABC_DEF0;
//! tt.store(hash, 3, 100, EntryType::Exact, Some(Pos::new(4, 4)));
//!
//! assert_eq!(tt.probe(hash, 3, -1000, 1000), Some(100));
//! assert_eq!(tt.get_best_move(hash), Some(Pos::new(4, 4)));
//! ```

use crate::board::Pos;

/// Entry type for score interpretation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryType {
    /// Exact score - the search completed normally
    Exact,
    /// Lower bound - score >= stored value (beta cutoff)
    LowerBound,
    /// Upper bound - score <= stored value (alpha fail-low)
    UpperBound,
}

/// Transposition table entry
#[derive(Debug, Clone, Copy)]
pub struct TTEntry {
    /// Identity hash of the position
    pub hash: u64,
    /// Remaining search depth below this position
    pub depth: u32,
    pub score: i32,
    pub entry_type: EntryType,
    pub best_move: Option<Pos>,
}

/// Direct-mapped table: each hash maps to exactly one slot, collisions are
/// resolved by a depth-preferred replacement policy.
pub struct TranspositionTable {
    entries: Vec<Option<TTEntry>>,
    size: usize,
}

impl TranspositionTable {
    /// Create a new transposition table with the given size in megabytes.
    #[must_use]
    pub fn new(size_mb: usize) -> Self {
        let entry_size = std::mem::size_of::<Option<TTEntry>>();
        let size = ((size_mb * 1024 * 1024) / entry_size).max(1024);

        Self {
            entries: vec![None; size],
            size,
        }
    }

    #[inline]
    fn slot(&self, hash: u64) -> usize {
        (hash % self.size as u64) as usize
    }

    /// Stored score, if the entry is deep enough and its bound settles the
    /// window `(alpha, beta)`.
    #[must_use]
    pub fn probe(&self, hash: u64, depth: u32, alpha: i32, beta: i32) -> Option<i32> {
        let entry = self.entries[self.slot(hash)]?;
        if entry.hash != hash || entry.depth < depth {
            return None;
        }
        match entry.entry_type {
            EntryType::Exact => Some(entry.score),
            EntryType::LowerBound if entry.score >= beta => Some(entry.score),
            EntryType::UpperBound if entry.score <= alpha => Some(entry.score),
            _ => None,
        }
    }

    /// Best move from an earlier visit, for move ordering.
    #[must_use]
    pub fn get_best_move(&self, hash: u64) -> Option<Pos> {
        self.entries[self.slot(hash)].and_then(|e| if e.hash == hash { e.best_move } else { None })
    }

    /// Store a position in the table.
    ///
    /// Replaces when the slot is empty, holds the same position, or the new
    /// search is at least as deep.
    pub fn store(
        &mut self,
        hash: u64,
        depth: u32,
        score: i32,
        entry_type: EntryType,
        best_move: Option<Pos>,
    ) {
        let idx = self.slot(hash);
        let should_replace = match &self.entries[idx] {
            None => true,
            Some(e) => e.hash == hash || e.depth <= depth,
        };

        if should_replace {
            self.entries[idx] = Some(TTEntry {
                hash,
                depth,
                score,
                entry_type,
                best_move,
            });
        }
    }

    pub fn clear(&mut self) {
        self.entries.fill(None);
    }

    #[must_use]
    pub fn stats(&self) -> TTStats {
        let used = self.entries.iter().filter(|e| e.is_some()).count();
        TTStats {
            size: self.size,
            used,
            usage_percent: (used as f64 / self.size as f64 * 100.0) as u8,
        }
    }
}

/// Statistics about transposition table usage.
#[derive(Debug, Clone, Copy)]
pub struct TTStats {
    /// Total number of slots in the table
    pub size: usize,
    /// Number of slots currently occupied
    pub used: usize,
    /// Percentage of table in use (0-100)
    pub usage_percent: u8,
}

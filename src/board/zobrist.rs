//! Zobrist hashing for position identification
//!
//! Each (cell, seat) pair owns a random salt. A board's identity hash is
//! its initial salt XOR the salts of all occupied cells, so placing a stone
//! is a single XOR and the result does not depend on move order.
//!
//! # Example
//!
//! ```
//! use gomoku::board::{Pos, Stone, ZobristTable};
//!
//! let zt = ZobristTable::global();
//! let pos = Pos::new(4, 4);
//! let h = zt.update_place(0, pos, Stone::First);
//! // XOR is its own inverse
//! assert_eq!(zt.update_place(h, pos, Stone::First), 0);
//! ```

use std::sync::OnceLock;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::{Bitboard, Pos, Stone, TOTAL_CELLS};

/// Random salts indexed by `[cell][seat]`.
pub struct ZobristTable {
    salts: [[u64; 2]; TOTAL_CELLS],
}

static GLOBAL: OnceLock<ZobristTable> = OnceLock::new();

impl ZobristTable {
    /// Process-wide table, seeded from the thread RNG on first use.
    pub fn global() -> &'static ZobristTable {
        GLOBAL.get_or_init(|| Self::from_rng(&mut rand::thread_rng()))
    }

    /// Deterministic table, for reproducible hashes.
    #[must_use]
    pub fn from_seed(seed: u64) -> Self {
        Self::from_rng(&mut StdRng::seed_from_u64(seed))
    }

    fn from_rng<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut salts = [[0u64; 2]; TOTAL_CELLS];
        for cell in salts.iter_mut() {
            cell[0] = rng.gen();
            cell[1] = rng.gen();
        }
        Self { salts }
    }

    /// Salt for a stone of `stone` at `pos`; 0 for empty.
    #[inline]
    #[must_use]
    pub fn salt(&self, pos: Pos, stone: Stone) -> u64 {
        match stone.seat_index() {
            Some(seat) => self.salts[pos.to_index()][seat],
            None => 0,
        }
    }

    /// Incrementally update hash after placing a stone. O(1).
    #[inline]
    #[must_use]
    pub fn update_place(&self, hash: u64, pos: Pos, stone: Stone) -> u64 {
        hash ^ self.salt(pos, stone)
    }

    /// Full recomputation from occupancy.
    #[must_use]
    pub fn hash(&self, seed: u64, first: &Bitboard, second: &Bitboard) -> u64 {
        let mut h = seed;
        for pos in first.iter_ones() {
            h ^= self.salt(pos, Stone::First);
        }
        for pos in second.iter_ones() {
            h ^= self.salt(pos, Stone::Second);
        }
        h
    }
}

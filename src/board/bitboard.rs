//! Bitboard occupancy for one seat

use super::{Pos, TOTAL_CELLS};

const WORDS: usize = (TOTAL_CELLS + 63) / 64;

/// Occupancy set over the 100 cells.
/// Uses 2 x u64 (128 >= 100). There is no `clear`: stones never leave the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Bitboard {
    bits: [u64; WORDS],
}

impl Bitboard {
    /// Create empty bitboard
    pub const fn new() -> Self {
        Self { bits: [0; WORDS] }
    }

    /// Set a bit at position
    #[inline]
    pub fn set(&mut self, pos: Pos) {
        let idx = pos.to_index();
        self.bits[idx / 64] |= 1u64 << (idx % 64);
    }

    /// Check if bit is set at position
    #[inline]
    pub fn get(&self, pos: Pos) -> bool {
        let idx = pos.to_index();
        (self.bits[idx / 64] >> (idx % 64)) & 1 == 1
    }

    /// Count total set bits (popcount)
    #[inline]
    pub fn count(&self) -> u32 {
        self.bits.iter().map(|b| b.count_ones()).sum()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bits.iter().all(|&b| b == 0)
    }

    /// Union of two boards
    #[inline]
    pub fn union(&self, other: &Bitboard) -> Bitboard {
        let mut bits = self.bits;
        for (b, o) in bits.iter_mut().zip(other.bits.iter()) {
            *b |= o;
        }
        Bitboard { bits }
    }

    /// Iterate over set bit positions
    pub fn iter_ones(&self) -> BitboardIter {
        BitboardIter {
            bits: self.bits,
            word_idx: 0,
            current_word: self.bits[0],
        }
    }
}

/// Iterator over set bits in a Bitboard
pub struct BitboardIter {
    bits: [u64; WORDS],
    word_idx: usize,
    current_word: u64,
}

impl Iterator for BitboardIter {
    type Item = Pos;

    fn next(&mut self) -> Option<Self::Item> {
        while self.current_word == 0 {
            self.word_idx += 1;
            if self.word_idx >= WORDS {
                return None;
            }
            self.current_word = self.bits[self.word_idx];
        }

        let bit_pos = self.current_word.trailing_zeros() as usize;
        let idx = self.word_idx * 64 + bit_pos;

        // Clear lowest set bit
        self.current_word &= self.current_word - 1;

        if idx < TOTAL_CELLS {
            Some(Pos::from_index(idx))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_get() {
        let mut bb = Bitboard::new();
        assert!(bb.is_empty());
        bb.set(Pos::new(9, 9));
        bb.set(Pos::new(0, 0));
        assert!(bb.get(Pos::new(9, 9)));
        assert!(bb.get(Pos::new(0, 0)));
        assert!(!bb.get(Pos::new(5, 5)));
        assert_eq!(bb.count(), 2);
    }

    #[test]
    fn test_iter_ones_crosses_word_boundary() {
        let mut bb = Bitboard::new();
        // index 63 and 64 straddle the two words
        bb.set(Pos::from_index(63));
        bb.set(Pos::from_index(64));
        bb.set(Pos::from_index(99));
        let found: Vec<usize> = bb.iter_ones().map(Pos::to_index).collect();
        assert_eq!(found, vec![63, 64, 99]);
    }

    #[test]
    fn test_union() {
        let mut a = Bitboard::new();
        let mut b = Bitboard::new();
        a.set(Pos::new(1, 1));
        b.set(Pos::new(2, 2));
        let u = a.union(&b);
        assert_eq!(u.count(), 2);
        assert!(u.get(Pos::new(1, 1)) && u.get(Pos::new(2, 2)));
    }
}

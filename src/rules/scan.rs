//! Group scanning along the band table
//!
//! A group is a maximal run of one seat's stones inside a single band.
//! Every band is walked once per scan, so the cost is fixed by the board
//! size and not by how many stones are down.

use std::mem;

use crate::board::{bands, Bitboard, Board, Direction, Pos, Stone};

/// Maximal run of same-seat stones within one band, in band order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    pub direction: Direction,
    pub cells: Vec<Pos>,
}

impl Group {
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[inline]
    pub fn contains(&self, pos: Pos) -> bool {
        self.cells.contains(&pos)
    }

    /// The two extremities along `direction` (equal for a single stone)
    #[inline]
    pub fn ends(&self) -> Option<(Pos, Pos)> {
        Some((*self.cells.first()?, *self.cells.last()?))
    }
}

/// All groups of both seats from one scan.
#[derive(Debug, Clone, Default)]
pub struct Groups {
    first: Vec<Group>,
    second: Vec<Group>,
    /// Stones already reported as a one-stone group
    singles: [Bitboard; 2],
}

impl Groups {
    /// Groups owned by `stone`, in band-table order
    pub fn of(&self, stone: Stone) -> &[Group] {
        match stone {
            Stone::First => &self.first,
            Stone::Second => &self.second,
            Stone::Empty => &[],
        }
    }

    /// Two bands share at most one cell, so only one-stone runs can repeat
    /// across bands; those are kept once.
    fn push(&mut self, owner: Stone, direction: Direction, cells: Vec<Pos>) {
        let Some(seat) = owner.seat_index() else {
            return;
        };
        if let [only] = cells.as_slice() {
            if self.singles[seat].get(*only) {
                return;
            }
            self.singles[seat].set(*only);
        }
        let group = Group { direction, cells };
        match owner {
            Stone::First => self.first.push(group),
            _ => self.second.push(group),
        }
    }
}

/// Walk every band and collect the maximal runs of each seat.
pub fn scan(board: &Board) -> Groups {
    let mut groups = Groups::default();

    for band in bands() {
        let mut run: Vec<Pos> = Vec::new();
        let mut owner = Stone::Empty;

        for &pos in &band.cells {
            let stone = board.get(pos);
            if stone != owner && !run.is_empty() {
                groups.push(owner, band.direction, mem::take(&mut run));
            }
            owner = stone;
            if stone != Stone::Empty {
                run.push(pos);
            }
        }
        if !run.is_empty() {
            groups.push(owner, band.direction, run);
        }
    }

    groups
}

//! Band table: every straight line of two or more cells
//!
//! Cells are grouped by a shared row, column, `row - col` (diagonal) or
//! `row + col` (anti-diagonal) key. Within a band cells keep row-major
//! order, so walking a band always moves by [`Direction::delta`].

use std::collections::BTreeMap;
use std::sync::OnceLock;

use super::{all_positions, Pos};

/// The four line directions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Direction {
    /// Along a row
    Horizontal,
    /// Along a column
    Vertical,
    /// Down-right, constant `row - col`
    Diagonal,
    /// Up-right, constant `row + col`
    AntiDiagonal,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Horizontal,
        Direction::Vertical,
        Direction::Diagonal,
        Direction::AntiDiagonal,
    ];

    /// Step between consecutive cells of a band, in band order
    #[inline]
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Horizontal => (0, 1),
            Direction::Vertical => (1, 0),
            Direction::Diagonal => (1, 1),
            Direction::AntiDiagonal => (1, -1),
        }
    }

    /// Grouping key for a cell
    #[inline]
    fn key(self, pos: Pos) -> i32 {
        let (r, c) = (i32::from(pos.row), i32::from(pos.col));
        match self {
            Direction::Horizontal => r,
            Direction::Vertical => c,
            Direction::Diagonal => r - c,
            Direction::AntiDiagonal => r + c,
        }
    }
}

/// A maximal straight line of >= 2 cells
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Band {
    pub direction: Direction,
    pub cells: Vec<Pos>,
}

impl Band {
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

static BANDS: OnceLock<Vec<Band>> = OnceLock::new();

/// Process-wide band table, built on first use and shared by every board.
pub fn bands() -> &'static [Band] {
    BANDS.get_or_init(build_bands)
}

fn build_bands() -> Vec<Band> {
    let mut basket: BTreeMap<(Direction, i32), Vec<Pos>> = BTreeMap::new();
    for &pos in all_positions() {
        for dir in Direction::ALL {
            basket.entry((dir, dir.key(pos))).or_default().push(pos);
        }
    }

    let table: Vec<Band> = basket
        .into_iter()
        .filter(|(_, cells)| cells.len() > 1)
        .map(|((direction, _), cells)| Band { direction, cells })
        .collect();
    log::debug!("built band table with {} bands", table.len());
    table
}

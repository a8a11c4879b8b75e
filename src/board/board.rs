//! Grid state: occupancy, identity hash and game status

use std::collections::BTreeSet;
use std::fmt;
use std::sync::Arc;

use log::{debug, trace};

use super::bitboard::Bitboard;
use super::zobrist::ZobristTable;
use super::{
    all_positions, Player, Pos, Stone, AVAILABLE_DISTANCE, EMPTY_MARKER, N_COL, N_ROW,
    TOTAL_CELLS,
};
use crate::error::{MarkerError, PlaceError};
use crate::eval;
use crate::rules::{self, Groups};

/// Outcome of the game so far. Leaves `Ongoing` at most once.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum GameStatus {
    #[default]
    Ongoing,
    /// `winning_set` is the whole qualifying run, which may exceed five
    Won {
        winner: Stone,
        winning_set: BTreeSet<Pos>,
    },
    Draw,
}

impl GameStatus {
    #[inline]
    pub fn is_game_over(&self) -> bool {
        !matches!(self, GameStatus::Ongoing)
    }

    #[inline]
    pub fn is_winning(&self) -> bool {
        matches!(self, GameStatus::Won { .. })
    }

    #[inline]
    pub fn is_draw(&self) -> bool {
        matches!(self, GameStatus::Draw)
    }

    pub fn winner(&self) -> Option<Stone> {
        match self {
            GameStatus::Won { winner, .. } => Some(*winner),
            _ => None,
        }
    }

    pub fn winning_set(&self) -> Option<&BTreeSet<Pos>> {
        match self {
            GameStatus::Won { winning_set, .. } => Some(winning_set),
            _ => None,
        }
    }
}

/// Game board.
///
/// Cloning copies the two occupancy words, the hash and the status; the
/// players are shared, and the band and salt tables are process-wide.
#[derive(Debug, Clone)]
pub struct Board {
    /// First player's stones
    first: Bitboard,
    /// Second player's stones
    second: Bitboard,
    hash: u64,
    status: GameStatus,
    players: Arc<[Player; 2]>,
}

impl Board {
    /// Empty board with a random initial hash salt.
    pub fn new(first: Player, second: Player) -> Result<Self, MarkerError> {
        Self::with_seed(first, second, rand::random())
    }

    /// Empty board whose hash starts at `seed`.
    ///
    /// The markers must differ from each other and from [`EMPTY_MARKER`].
    pub fn with_seed(first: Player, second: Player, seed: u64) -> Result<Self, MarkerError> {
        for marker in [first.marker, second.marker] {
            if marker == EMPTY_MARKER {
                return Err(MarkerError::Reserved(marker));
            }
        }
        if first.marker == second.marker {
            return Err(MarkerError::Duplicate(first.marker));
        }
        Ok(Self {
            first: Bitboard::new(),
            second: Bitboard::new(),
            hash: seed,
            status: GameStatus::Ongoing,
            players: Arc::new([first, second]),
        })
    }

    /// Player sitting in `stone`'s seat
    #[inline]
    pub fn player(&self, stone: Stone) -> Option<&Player> {
        stone.seat_index().map(|i| &self.players[i])
    }

    #[inline]
    pub fn opponent(&self, stone: Stone) -> Stone {
        stone.opponent()
    }

    /// Get stone at position; off-board cells read as empty
    #[inline]
    pub fn get(&self, pos: Pos) -> Stone {
        if !pos.is_on_board() {
            Stone::Empty
        } else if self.first.get(pos) {
            Stone::First
        } else if self.second.get(pos) {
            Stone::Second
        } else {
            Stone::Empty
        }
    }

    /// `false` off the board, where nothing can be placed
    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        pos.is_on_board() && !self.first.get(pos) && !self.second.get(pos)
    }

    /// Marker drawn at `pos`
    pub fn marker(&self, pos: Pos) -> char {
        self.player(self.get(pos))
            .map_or(EMPTY_MARKER, |p| p.marker)
    }

    /// Get bitboard for a seat (None for Empty)
    #[inline]
    pub fn stones(&self, stone: Stone) -> Option<&Bitboard> {
        match stone {
            Stone::First => Some(&self.first),
            Stone::Second => Some(&self.second),
            Stone::Empty => None,
        }
    }

    #[inline]
    pub fn stone_count(&self) -> u32 {
        self.first.count() + self.second.count()
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.stone_count() as usize == TOTAL_CELLS
    }

    #[inline]
    pub fn identity_hash(&self) -> u64 {
        self.hash
    }

    #[inline]
    pub fn status(&self) -> &GameStatus {
        &self.status
    }

    /// Put `stone` on `pos`, update the hash and re-check the status.
    ///
    /// Fails without touching the board when `pos` is off the grid or
    /// already taken. Placing after the game has ended is not prevented
    /// here; the status simply stays where it is.
    pub fn place(&mut self, pos: Pos, stone: Stone) -> Result<(), PlaceError> {
        if !pos.is_on_board() {
            debug!("rejected placement off the board at {:?}", pos);
            return Err(PlaceError::OutOfBounds {
                row: pos.row,
                col: pos.col,
            });
        }
        if !self.is_empty(pos) {
            let marker = self.marker(pos);
            debug!("rejected placement on {}={}", pos, marker);
            return Err(PlaceError::Occupied { pos, marker });
        }

        match stone {
            Stone::First => self.first.set(pos),
            Stone::Second => self.second.set(pos),
            Stone::Empty => return Err(PlaceError::NotAPlayer),
        }
        self.hash = ZobristTable::global().update_place(self.hash, pos, stone);

        if !self.status.is_game_over() {
            self.status = rules::check_status(self);
            if self.status.is_game_over() {
                // search branches land here too; the driver reports real endings
                trace!("{:?} at {} decided the game: {:?}", stone, pos, self.status);
            }
        }
        Ok(())
    }

    /// Empty cells within Chebyshev distance 2 of any stone.
    ///
    /// Empty on an empty board: the opening move is the caller's choice.
    pub fn available_moves(&self) -> BTreeSet<Pos> {
        let occupied = self.first.union(&self.second);
        let radius = AVAILABLE_DISTANCE as i32;
        let mut moves = BTreeSet::new();

        for stone in occupied.iter_ones() {
            for dr in -radius..=radius {
                for dc in -radius..=radius {
                    if let Some(p) = stone.offset(dr, dc) {
                        if !occupied.get(p) {
                            moves.insert(p);
                        }
                    }
                }
            }
        }
        moves
    }

    /// Maximal same-seat runs along every band
    pub fn scan(&self) -> Groups {
        rules::scan(self)
    }

    /// Heuristic value of this position for `stone`, see [`eval::evaluate`].
    pub fn evaluate(&self, stone: Stone, depth: u32) -> i32 {
        eval::evaluate(self, stone, depth)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "    ")?;
        for c in 0..N_COL {
            write!(f, "{:<4}", c + 1)?;
        }
        writeln!(f)?;
        for r in 0..N_ROW {
            write!(f, "{:<4}", r + 1)?;
            for &pos in &all_positions()[r * N_COL..(r + 1) * N_COL] {
                write!(f, "{:<4}", self.marker(pos))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

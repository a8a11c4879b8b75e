//! Self-play driver
//!
//! Alternates two searchers on one board until the game is decided, and
//! keeps per-player step counts and thinking time for the final summary.
//!
//! # Example
//!
//! ```
//! use gomoku::{Game, Player};
//!
//! let mut game = Game::new(Player::new("a", 'X'), Player::new("b", 'O'), 1, 1, Some(5)).unwrap();
//! let status = game.run().clone();
//! assert!(status.is_game_over());
//! ```

use std::time::{Duration, Instant};

use log::{debug, info};

use crate::board::{Board, GameStatus, Player, Pos, Stone};
use crate::error::MarkerError;
use crate::search::Searcher;

/// One move played by the driver
#[derive(Debug, Clone)]
pub struct MoveResult {
    pub stone: Stone,
    pub pos: Pos,
    /// Evaluation of the position after the move, for the mover
    pub score: i32,
    pub nodes: u64,
    pub time: Duration,
}

/// Per-seat bookkeeping
#[derive(Debug, Clone, Copy, Default)]
pub struct SeatStats {
    pub steps: u32,
    pub thinking: Duration,
    pub last_move: Option<Pos>,
}

impl SeatStats {
    /// Mean thinking time per move, `None` before the first move
    pub fn average(&self) -> Option<Duration> {
        (self.steps > 0).then(|| self.thinking / self.steps)
    }
}

pub struct Game {
    board: Board,
    searchers: [Searcher; 2],
    stats: [SeatStats; 2],
    to_move: Stone,
}

impl Game {
    /// Both seats search `depth` plies with `tt_size_mb` of table each.
    pub fn new(
        first: Player,
        second: Player,
        depth: u32,
        tt_size_mb: usize,
        seed: Option<u64>,
    ) -> Result<Self, MarkerError> {
        let board = match seed {
            Some(seed) => Board::with_seed(first, second, seed)?,
            None => Board::new(first, second)?,
        };
        Ok(Self {
            board,
            searchers: [Searcher::new(depth, tt_size_mb), Searcher::new(depth, tt_size_mb)],
            stats: [SeatStats::default(); 2],
            to_move: Stone::First,
        })
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn to_move(&self) -> Stone {
        self.to_move
    }

    pub fn stats(&self, stone: Stone) -> Option<&SeatStats> {
        match stone {
            Stone::First => Some(&self.stats[0]),
            Stone::Second => Some(&self.stats[1]),
            Stone::Empty => None,
        }
    }

    /// Let the side to move search and play. `None` once the game is over.
    pub fn play_turn(&mut self) -> Option<MoveResult> {
        if self.board.status().is_game_over() {
            return None;
        }
        let seat = if self.to_move == Stone::First { 0 } else { 1 };
        let start = Instant::now();
        let result = self.searchers[seat].best_move(&self.board, self.to_move);
        let time = start.elapsed();

        let pos = result.best_move?;
        if let Err(e) = self.board.place(pos, self.to_move) {
            // the searcher only proposes empty on-board cells
            debug!("searcher proposed an illegal move: {}", e);
            return None;
        }

        let stats = &mut self.stats[seat];
        stats.steps += 1;
        stats.thinking += time;
        stats.last_move = Some(pos);

        if let Some(p) = self.board.player(self.to_move) {
            info!(
                "#{} {} plays {} (score {}, {} nodes, {:?})",
                self.board.stone_count(),
                p,
                pos,
                result.score,
                result.nodes,
                time
            );
        }

        match self.board.status() {
            GameStatus::Won { winner, winning_set } => {
                if let Some(p) = self.board.player(*winner) {
                    info!("{} wins with {} in a row", p, winning_set.len());
                }
            }
            GameStatus::Draw => info!("board full, game drawn"),
            GameStatus::Ongoing => {}
        }

        let played = MoveResult {
            stone: self.to_move,
            pos,
            score: result.score,
            nodes: result.nodes,
            time,
        };
        self.to_move = self.to_move.opponent();
        Some(played)
    }

    /// Play until the game is decided.
    pub fn run(&mut self) -> &GameStatus {
        while self.play_turn().is_some() {}
        self.board.status()
    }

    /// Closing lines: result and per-player step/time totals.
    pub fn summary(&self) -> Vec<String> {
        let mut lines = Vec::new();
        match self.board.status() {
            GameStatus::Won { winner, winning_set } => {
                let name = self
                    .board
                    .player(*winner)
                    .map_or_else(String::new, ToString::to_string);
                let cells: Vec<String> = winning_set.iter().map(ToString::to_string).collect();
                lines.push(format!("{} is the WINNER ({})", name, cells.join(", ")));
            }
            GameStatus::Draw => lines.push("game is a draw".to_string()),
            GameStatus::Ongoing => lines.push("game still in progress".to_string()),
        }
        for stone in [Stone::First, Stone::Second] {
            let (Some(player), Some(stats)) = (self.board.player(stone), self.stats(stone)) else {
                continue;
            };
            let avg = stats
                .average()
                .map_or_else(|| "-".to_string(), |d| format!("{:.1}s", d.as_secs_f64()));
            lines.push(format!(
                "{}   Step: {}   Total Time: {:.1}s   Avg Time: {}",
                player,
                stats.steps,
                stats.thinking.as_secs_f64(),
                avg
            ));
        }
        lines
    }
}

//! Depth-limited minimax with alpha-beta pruning
//!
//! The score is always taken from the searching player's point of view
//! (`board.evaluate(me, ply)`), so the player to move maximizes on its own
//! turns and minimizes on the opponent's. Children are cloned boards; the
//! candidate set is the board's pruned `available_moves`.
//!
//! # Example
//!
//! ```
//! use gomoku::board::{Board, Player, Pos, Stone};
//! use gomoku::search::Searcher;
//!
//! let mut board = Board::new(Player::new("a", 'X'), Player::new("b", 'O')).unwrap();
//! board.place(Pos::new(5, 5), Stone::First).unwrap();
//!
//! let mut searcher = Searcher::new(2, 1);
//! let result = searcher.best_move(&board, Stone::Second);
//! assert!(result.best_move.is_some());
//! ```

use std::time::Instant;

use log::debug;

use crate::board::{Board, Pos, Stone, N_COL, N_ROW};

use super::{EntryType, TranspositionTable};

/// Opening move when the board offers no candidates
pub const CENTER: Pos = Pos::new((N_ROW / 2) as u8, (N_COL / 2) as u8);

/// Search result containing the best move found and associated statistics.
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// Best move found, if any
    pub best_move: Option<Pos>,
    /// Evaluation of the position after the best move
    pub score: i32,
    /// Total nodes searched
    pub nodes: u64,
}

pub struct Searcher {
    max_depth: u32,
    tt: TranspositionTable,
    nodes: u64,
}

impl Searcher {
    /// `max_depth` plies, `tt_size_mb` megabytes of transposition table
    pub fn new(max_depth: u32, tt_size_mb: usize) -> Self {
        Self {
            max_depth: max_depth.max(1),
            tt: TranspositionTable::new(tt_size_mb),
            nodes: 0,
        }
    }

    #[inline]
    pub fn max_depth(&self) -> u32 {
        self.max_depth
    }

    /// Pick the move for `me` on `board`. `None` once the game is over.
    pub fn best_move(&mut self, board: &Board, me: Stone) -> SearchResult {
        let start = Instant::now();
        self.nodes = 0;
        // scores are relative to `me`, so entries from another seat's search are useless
        self.tt.clear();

        let mut best_move = None;
        let mut best_score = i32::MIN;

        if !board.status().is_game_over() {
            let mut alpha = i32::MIN;
            for pos in self.ordered_moves(board) {
                let mut child = board.clone();
                if child.place(pos, me).is_err() {
                    continue;
                }
                let score = self.minimax(&child, me, me.opponent(), 1, alpha, i32::MAX);
                if best_move.is_none() || score > best_score {
                    best_score = score;
                    best_move = Some(pos);
                }
                alpha = alpha.max(score);
            }
        }

        let tt = self.tt.stats();
        debug!(
            "search depth {}: move {:?} score {} nodes {} tt {}% in {:?}",
            self.max_depth,
            best_move,
            best_score,
            self.nodes,
            tt.usage_percent,
            start.elapsed()
        );

        SearchResult {
            best_move,
            score: best_score,
            nodes: self.nodes,
        }
    }

    /// Candidates in index order, the centre on an empty board, and the
    /// table's remembered best move first.
    fn ordered_moves(&self, board: &Board) -> Vec<Pos> {
        let mut moves: Vec<Pos> = board.available_moves().into_iter().collect();
        if moves.is_empty() && board.is_empty(CENTER) {
            moves.push(CENTER);
        }
        if let Some(tt_move) = self.tt.get_best_move(board.identity_hash()) {
            if let Some(i) = moves.iter().position(|&m| m == tt_move) {
                moves[..=i].rotate_right(1);
            }
        }
        moves
    }

    fn minimax(
        &mut self,
        board: &Board,
        me: Stone,
        to_move: Stone,
        ply: u32,
        mut alpha: i32,
        mut beta: i32,
    ) -> i32 {
        self.nodes += 1;

        if ply >= self.max_depth || board.status().is_game_over() {
            return board.evaluate(me, ply);
        }

        let remaining = self.max_depth - ply;
        let hash = board.identity_hash();
        if let Some(score) = self.tt.probe(hash, remaining, alpha, beta) {
            return score;
        }

        let (alpha_orig, beta_orig) = (alpha, beta);
        let maximizing = to_move == me;
        let mut best = if maximizing { i32::MIN } else { i32::MAX };
        let mut best_move = None;

        for pos in self.ordered_moves(board) {
            let mut child = board.clone();
            if child.place(pos, to_move).is_err() {
                continue;
            }
            let score = self.minimax(&child, me, to_move.opponent(), ply + 1, alpha, beta);

            if maximizing {
                if best_move.is_none() || score > best {
                    best = score;
                    best_move = Some(pos);
                }
                alpha = alpha.max(score);
            } else {
                if best_move.is_none() || score < best {
                    best = score;
                    best_move = Some(pos);
                }
                beta = beta.min(score);
            }
            if alpha >= beta {
                break;
            }
        }

        if best_move.is_none() {
            return board.evaluate(me, ply);
        }

        let entry_type = if best <= alpha_orig {
            EntryType::UpperBound
        } else if best >= beta_orig {
            EntryType::LowerBound
        } else {
            EntryType::Exact
        };
        self.tt.store(hash, remaining, best, entry_type, best_move);

        best
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Player;

    fn new_board() -> Board {
        Board::with_seed(Player::new("a", 'X'), Player::new("b", 'O'), 11)
            .unwrap()
    }

    #[test]
    fn test_search_empty_board_plays_center() {
        let board = new_board();
        let mut searcher = Searcher::new(2, 1);
        let result = searcher.best_move(&board, Stone::First);
        assert_eq!(result.best_move, Some(CENTER));
    }

    #[test]
    fn test_search_finds_winning_move() {
        let mut board = new_board();
        for c in 1..5 {
            board.place(Pos::new(3, c), Stone::First).unwrap();
        }
        board.place(Pos::new(3, 0), Stone::Second).unwrap();
        board.place(Pos::new(8, 8), Stone::Second).unwrap();

        let mut searcher = Searcher::new(2, 1);
        let result = searcher.best_move(&board, Stone::First);
        assert_eq!(result.best_move, Some(Pos::new(3, 5)));
        assert!(result.score > 1_000_000);
    }

    #[test]
    fn test_search_blocks_opponent_four() {
        let mut board = new_board();
        for c in 2..6 {
            board.place(Pos::new(6, c), Stone::Second).unwrap();
        }
        board.place(Pos::new(6, 1), Stone::First).unwrap();
        board.place(Pos::new(0, 9), Stone::First).unwrap();

        let mut searcher = Searcher::new(2, 1);
        let result = searcher.best_move(&board, Stone::First);
        assert_eq!(result.best_move, Some(Pos::new(6, 6)));
    }

    #[test]
    fn test_search_on_finished_game() {
        let mut board = new_board();
        for c in 0..5 {
            board.place(Pos::new(0, c), Stone::First).unwrap();
        }
        let mut searcher = Searcher::new(2, 1);
        assert_eq!(searcher.best_move(&board, Stone::Second).best_move, None);
    }

    #[test]
    fn test_search_counts_nodes() {
        let mut board = new_board();
        board.place(Pos::new(5, 5), Stone::First).unwrap();
        let mut searcher = Searcher::new(2, 1);
        let result = searcher.best_move(&board, Stone::Second);
        assert!(result.nodes > 0);
        assert!(result
            .best_move
            .is_some_and(|p| board.available_moves().contains(&p)));
    }

    mod quiet {
        use std::cell::Cell;
        use std::sync::Once;

        use log::{Level, Log, Metadata, Record};

        thread_local! {
            static INFO_RECORDS: Cell<usize> = const { Cell::new(0) };
        }

        /// Counts info-and-above records emitted on the current thread
        struct CountingLogger;

        impl Log for CountingLogger {
            fn enabled(&self, _: &Metadata) -> bool {
                true
            }

            fn log(&self, record: &Record) {
                if record.level() <= Level::Info {
                    INFO_RECORDS.with(|n| n.set(n.get() + 1));
                }
            }

            fn flush(&self) {}
        }

        static LOGGER: CountingLogger = CountingLogger;
        static INIT: Once = Once::new();

        pub fn install() {
            INIT.call_once(|| {
                let _ = log::set_logger(&LOGGER);
                log::set_max_level(log::LevelFilter::Info);
            });
        }

        pub fn info_records() -> usize {
            INFO_RECORDS.with(Cell::get)
        }
    }

    #[test]
    fn test_search_branches_do_not_log_game_endings() {
        quiet::install();
        let mut board = new_board();
        for c in 0..4 {
            board.place(Pos::new(3, c), Stone::First).unwrap();
            board.place(Pos::new(6, c), Stone::Second).unwrap();
        }
        let before = quiet::info_records();

        let mut searcher = Searcher::new(3, 1);
        let result = searcher.best_move(&board, Stone::First);
        assert!(result.best_move.is_some());
        assert!(!board.status().is_game_over());
        assert_eq!(quiet::info_records(), before);
    }
}

//! Heuristic evaluation function for board positions
//!
//! Consumed by the search at every leaf. Decided games map to values near
//! the `i32` extremes, biased by depth so that a quicker win (or a slower
//! loss) is preferred. Ongoing games are scored as the sum of our group
//! scores minus the sum of the opponent's, the latter counted as threats.

use crate::board::{Board, GameStatus, Stone};
use crate::rules::{scan, Group};

use super::patterns::group_score;

/// Score for a decided game before the depth bias
pub const WIN_SCORE: i32 = i32::MAX - 1;
pub const LOSS_SCORE: i32 = i32::MIN + 1;

/// Depth bias is capped so terminal scores stay clear of ordinary ones
const MAX_DEPTH_BIAS: u32 = 1 << 16;

/// Evaluate the board from the perspective of `stone`.
///
/// # Arguments
/// * `board` - The current board state
/// * `stone` - The seat to evaluate for
/// * `depth` - Ply at which this position was reached in the search
#[must_use]
pub fn evaluate(board: &Board, stone: Stone, depth: u32) -> i32 {
    let bias = depth.min(MAX_DEPTH_BIAS) as i32;
    match board.status() {
        GameStatus::Won { winner, .. } if *winner == stone => WIN_SCORE - bias,
        GameStatus::Won { .. } => LOSS_SCORE + bias,
        GameStatus::Draw => 0,
        GameStatus::Ongoing => {
            let groups = scan(board);
            let mine = sum_groups(board, groups.of(stone), false);
            let theirs = sum_groups(board, groups.of(stone.opponent()), true);
            mine - theirs
        }
    }
}

fn sum_groups(board: &Board, groups: &[Group], is_opponent: bool) -> i32 {
    groups
        .iter()
        .map(|g| {
            // a lone stone scores the same whatever its surroundings
            let open = if g.len() > 1 { open_ends(board, g) } else { 0 };
            group_score(g.len(), open, is_opponent)
        })
        .sum()
}

/// Count group ends whose next cell along the line is on the board and empty.
pub fn open_ends(board: &Board, group: &Group) -> u8 {
    let Some((head, tail)) = group.ends() else {
        return 0;
    };
    let (dr, dc) = group.direction.delta();
    let before = head.offset(-dr, -dc).is_some_and(|p| board.is_empty(p));
    let after = tail.offset(dr, dc).is_some_and(|p| board.is_empty(p));
    u8::from(before) + u8::from(after)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Direction, Player, Pos};
    use crate::eval::PatternScore;

    fn new_board() -> Board {
        Board::with_seed(Player::new("a", 'X'), Player::new("b", 'O'), 0)
            .unwrap()
    }

    fn row_group(board: &Board, stone: Stone, len: usize) -> Group {
        scan(board)
            .of(stone)
            .iter()
            .find(|g| g.direction == Direction::Horizontal && g.len() == len)
            .cloned()
            .unwrap()
    }

    #[test]
    fn test_evaluate_empty_board() {
        let board = new_board();
        assert_eq!(evaluate(&board, Stone::First, 0), 0);
        assert_eq!(evaluate(&board, Stone::Second, 3), 0);
    }

    #[test]
    fn test_single_stones() {
        let mut board = new_board();
        board.place(Pos::new(5, 5), Stone::First).unwrap();
        assert_eq!(evaluate(&board, Stone::First, 0), 1);
        assert_eq!(evaluate(&board, Stone::Second, 0), -1);
    }

    #[test]
    fn test_open_ends_of_four() {
        let mut board = new_board();
        for c in 3..7 {
            board.place(Pos::new(4, c), Stone::First).unwrap();
        }
        let g = row_group(&board, Stone::First, 4);
        assert_eq!(open_ends(&board, &g), 2);

        board.place(Pos::new(4, 2), Stone::Second).unwrap();
        assert_eq!(open_ends(&board, &g), 1);

        board.place(Pos::new(4, 7), Stone::Second).unwrap();
        assert_eq!(open_ends(&board, &g), 0);
    }

    #[test]
    fn test_edge_closes_an_end() {
        let mut board = new_board();
        for c in 0..3 {
            board.place(Pos::new(0, c), Stone::First).unwrap();
        }
        let g = row_group(&board, Stone::First, 3);
        assert_eq!(open_ends(&board, &g), 1);
    }

    #[test]
    fn test_open_ends_anti_diagonal() {
        let mut board = new_board();
        for i in 0..3u8 {
            board.place(Pos::new(3 + i, 5 - i), Stone::Second).unwrap();
        }
        let g = scan(&board)
            .of(Stone::Second)
            .iter()
            .find(|g| g.len() == 3)
            .cloned()
            .unwrap();
        assert_eq!(open_ends(&board, &g), 2);
        board.place(Pos::new(2, 6), Stone::First).unwrap();
        assert_eq!(open_ends(&board, &g), 1);
    }

    /// Horizontal four at row 4, cols 3..=6, plus one blocker per `blocks`
    fn four_with_blocks(owner: Stone, blocks: &[u8]) -> Board {
        let mut board = new_board();
        for c in 3..7 {
            board.place(Pos::new(4, c), owner).unwrap();
        }
        for &c in blocks {
            board.place(Pos::new(4, c), owner.opponent()).unwrap();
        }
        board
    }

    /// Score of the horizontal four alone, from `owner`'s side or as an
    /// opponent threat.
    fn four_score(board: &Board, owner: Stone, is_opponent: bool) -> i32 {
        let g = row_group(board, owner, 4);
        group_score(4, open_ends(board, &g), is_opponent)
    }

    #[test]
    fn test_open_four_beats_blocked_four() {
        let open = four_with_blocks(Stone::First, &[]);
        let half = four_with_blocks(Stone::First, &[2]);
        let dead = four_with_blocks(Stone::First, &[2, 7]);

        assert_eq!(four_score(&open, Stone::First, false), 10_000);
        assert_eq!(four_score(&half, Stone::First, false), 5_000);
        assert_eq!(four_score(&dead, Stone::First, false), 200);

        assert_eq!(four_score(&open, Stone::First, true), 20_000);
        assert_eq!(four_score(&half, Stone::First, true), 10_000);
        assert_eq!(four_score(&dead, Stone::First, true), 2_000);
    }

    #[test]
    fn test_evaluate_open_four_totals() {
        let board = four_with_blocks(Stone::First, &[]);
        // four stones: one horizontal four plus four singles
        assert_eq!(evaluate(&board, Stone::First, 0), 10_000 + 4);
        assert_eq!(evaluate(&board, Stone::Second, 0), -(20_000 + 4));
    }

    #[test]
    fn test_threats_outweigh_offence() {
        let mut board = new_board();
        for c in 1..4 {
            board.place(Pos::new(2, c), Stone::First).unwrap();
        }
        for c in 1..4 {
            board.place(Pos::new(7, c), Stone::Second).unwrap();
        }
        board.place(Pos::new(7, 0), Stone::First).unwrap();
        // First: open three; Second: closed three, counted as a threat to First
        let first = evaluate(&board, Stone::First, 0);
        let second = evaluate(&board, Stone::Second, 0);
        assert!(first > 0, "got {}", first);
        assert!(second < 0, "got {}", second);
    }

    #[test]
    fn test_win_prefers_shallow() {
        let mut board = new_board();
        for c in 0..5 {
            board.place(Pos::new(0, c), Stone::First).unwrap();
        }
        let shallow = evaluate(&board, Stone::First, 1);
        let deep = evaluate(&board, Stone::First, 4);
        assert!(shallow > deep && deep > PatternScore::FIVE);
        assert_eq!(shallow, WIN_SCORE - 1);

        let quick_loss = evaluate(&board, Stone::Second, 1);
        let slow_loss = evaluate(&board, Stone::Second, 4);
        assert!(quick_loss < slow_loss && slow_loss < -PatternScore::FIVE);
        assert_eq!(quick_loss, LOSS_SCORE + 1);
    }

    #[test]
    fn test_draw_scores_zero() {
        let mut board = new_board();
        for &pos in crate::board::all_positions() {
            let stone = if (pos.col as usize / 2 + pos.row as usize) % 2 == 0 {
                Stone::First
            } else {
                Stone::Second
            };
            board.place(pos, stone).unwrap();
        }
        assert!(board.status().is_draw());
        assert_eq!(evaluate(&board, Stone::First, 2), 0);
        assert_eq!(evaluate(&board, Stone::Second, 7), 0);
    }
}

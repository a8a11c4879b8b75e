//! Per-group scores
//!
//! A group's value depends on its length, how many of its two ends are
//! open, and whether it is being counted as our own attack or as an
//! opponent threat. Threats of three and four weigh more than the same
//! shape on offence, which tilts the search toward blocking.

/// Pattern scores for evaluation
pub struct PatternScore;

impl PatternScore {
    /// Five or more in a row
    pub const FIVE: i32 = 1_000_000;

    /// Open four: _OOOO_
    pub const OPEN_FOUR: i32 = 10_000;
    pub const OPEN_FOUR_THREAT: i32 = 20_000;
    /// Closed four: XOOOO_ or _OOOOX
    pub const CLOSED_FOUR: i32 = 5_000;
    pub const CLOSED_FOUR_THREAT: i32 = 10_000;
    /// Dead four: XOOOOX (or against the edge)
    pub const DEAD_FOUR: i32 = 200;
    pub const DEAD_FOUR_THREAT: i32 = 2_000;

    /// Open three: _OOO_, the same either way
    pub const OPEN_THREE: i32 = 2_000;
    pub const CLOSED_THREE: i32 = 20;
    pub const CLOSED_THREE_THREAT: i32 = 200;
    pub const DEAD_THREE: i32 = 2;
    pub const DEAD_THREE_THREAT: i32 = 20;

    pub const OPEN_TWO: i32 = 2;
    /// Half-open or closed two, and any single stone
    pub const STONE: i32 = 1;
}

/// Score of one group of `size` stones with `open_ends` (0..=2) free ends.
///
/// `is_opponent` selects the threat column for three and four.
pub fn group_score(size: usize, open_ends: u8, is_opponent: bool) -> i32 {
    let pick = |threat: i32, own: i32| if is_opponent { threat } else { own };
    match (size, open_ends) {
        (0, _) => 0,
        (1, _) => PatternScore::STONE,
        (2, 2) => PatternScore::OPEN_TWO,
        (2, _) => PatternScore::STONE,
        (3, 2) => PatternScore::OPEN_THREE,
        (3, 1) => pick(PatternScore::CLOSED_THREE_THREAT, PatternScore::CLOSED_THREE),
        (3, _) => pick(PatternScore::DEAD_THREE_THREAT, PatternScore::DEAD_THREE),
        (4, 2) => pick(PatternScore::OPEN_FOUR_THREAT, PatternScore::OPEN_FOUR),
        (4, 1) => pick(PatternScore::CLOSED_FOUR_THREAT, PatternScore::CLOSED_FOUR),
        (4, _) => pick(PatternScore::DEAD_FOUR_THREAT, PatternScore::DEAD_FOUR),
        _ => PatternScore::FIVE,
    }
}

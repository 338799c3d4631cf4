//! Pattern scores for Gomoku evaluation
//!
//! A run is described from one of its stones: how many same-color neighbours
//! it has along the axis (itself excluded) and how many ends are still open.

/// Pattern scores for evaluation
pub struct PatternScore;

impl PatternScore {
    /// Four neighbours, both ends open
    pub const OPEN_FOUR: i64 = 1_000;
    /// Three neighbours, both ends open
    pub const OPEN_THREE: i64 = 100;
    /// Two neighbours, both ends open
    pub const OPEN_TWO: i64 = 10;
    /// One neighbour, both ends open
    pub const OPEN_ONE: i64 = 1;

    /// Neighbour count from which the end state no longer matters
    pub const LONG_RUN: u32 = 5;

    /// Completed five. Far above anything the pattern sum can reach,
    /// even with a board full of overlines.
    pub const WIN: i64 = 1_000_000_000_000_000_000;
}

/// Whether `score` reports a finished game rather than a static estimate.
#[inline]
pub fn is_decisive(score: i64) -> bool {
    score.abs() >= PatternScore::WIN
}

/// Points for one stone's view of its run.
///
/// | neighbours | open ends | points          |
/// |------------|-----------|-----------------|
/// | >= 5       | any       | 10^(n - 5)      |
/// | 4          | 2         | 1000            |
/// | 3          | 2         | 100             |
/// | 2          | 2         | 10              |
/// | 1          | 2         | 1               |
/// | otherwise  |           | 0               |
///
/// Runs blocked on either end are worth nothing until they are long enough.
pub fn line_score(consecutive: u32, open_ends: u8) -> i64 {
    if consecutive >= PatternScore::LONG_RUN {
        return 10i64.saturating_pow(consecutive - PatternScore::LONG_RUN);
    }
    if open_ends < 2 {
        return 0;
    }
    match consecutive {
        4 => PatternScore::OPEN_FOUR,
        3 => PatternScore::OPEN_THREE,
        2 => PatternScore::OPEN_TWO,
        1 => PatternScore::OPEN_ONE,
        _ => 0,
    }
}

//! Heuristic evaluation function for Gomoku board positions
//!
//! Every stone looks along the four axes and scores the run it sits in.
//! A run of k stones is therefore counted once per member stone, which makes
//! longer runs weigh more than the pattern table alone suggests.

use crate::board::{Board, Direction, Stone};

use super::line::scan_line;

/// Evaluate the board from the perspective of the given color.
///
/// Returns a score where:
/// - Positive values indicate advantage for `color`
/// - Negative values indicate advantage for the opponent
///
/// The function is antisymmetric: `evaluate(b, c) == -evaluate(b, c.opponent())`.
#[must_use]
pub fn evaluate(board: &Board, color: Stone) -> i64 {
    debug_assert_ne!(color, Stone::Empty);

    let mut score = 0i64;
    for (pos, stone) in board.iter() {
        if stone == Stone::Empty {
            continue;
        }
        let points: i64 = Direction::ALL
            .iter()
            .map(|&dir| scan_line(board, pos, dir).score())
            .sum();
        if stone == color {
            score += points;
        } else {
            score -= points;
        }
    }
    score
}

/// Evaluate the board for the side to move.
#[inline]
#[must_use]
pub fn evaluate_board(board: &Board) -> i64 {
    evaluate(board, board.current_player())
}

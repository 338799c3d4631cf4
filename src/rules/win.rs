//! Win condition checking
//!
//! A player wins by completing five or more stones in a row along any of the
//! four axes. Overlines count. The checks here look only at lines through the
//! move just played, so they must run right after that move is applied.

use crate::board::{Board, Direction, Pos, Stone};

/// Stones in a row needed to win
pub const WIN_LENGTH: usize = 5;

/// Length of the run through `pos` along `dir`, `pos` included.
///
/// Returns 0 for an empty cell.
pub fn run_length(board: &Board, pos: Pos, dir: Direction) -> usize {
    let color = board.get(pos);
    if color == Stone::Empty {
        return 0;
    }
    1 + count_side(board, pos, dir, 1, color) + count_side(board, pos, dir, -1, color)
}

/// Stones of `color` beyond `pos`, stepping `sign` along `dir`.
#[inline]
fn count_side(board: &Board, pos: Pos, dir: Direction, sign: i32, color: Stone) -> usize {
    let size = board.size();
    let mut count = 0;
    while let Some(next) = pos.offset(dir, sign * (count as i32 + 1), size) {
        if board.get(next) != color {
            break;
        }
        count += 1;
    }
    count
}

/// Did the stone at `pos` (the last one played) complete five in a row?
///
/// Panics if `pos` is off the board.
pub fn check_win(board: &Board, pos: Pos) -> bool {
    assert!(
        board.contains(pos),
        "win check at {pos} is off a {0}x{0} board",
        board.size()
    );
    Direction::ALL
        .iter()
        .any(|&dir| run_length(board, pos, dir) >= WIN_LENGTH)
}

/// The winning run through `pos`, ordered from one end to the other.
///
/// Returns `None` when the stone at `pos` has not completed five.
pub fn winning_line(board: &Board, pos: Pos) -> Option<Vec<Pos>> {
    let color = board.get(pos);
    if color == Stone::Empty {
        return None;
    }
    let size = board.size();

    for dir in Direction::ALL {
        if run_length(board, pos, dir) < WIN_LENGTH {
            continue;
        }
        let back = count_side(board, pos, dir, -1, color) as i32;
        let forward = count_side(board, pos, dir, 1, color) as i32;
        let line = (-back..=forward)
            .filter_map(|step| pos.offset(dir, step, size))
            .collect();
        return Some(line);
    }
    None
}

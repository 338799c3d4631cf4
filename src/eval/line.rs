//! Line scanning around a single stone

use crate::board::{Board, Direction, Pos, Stone};

use super::patterns::line_score;

/// Shape of the run through a stone along one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineScan {
    /// Same-color stones adjacent to the origin in both directions,
    /// origin excluded.
    pub consecutive: u32,
    /// Ends of the run that stop on an empty cell (0, 1 or 2).
    /// An end that stops at the board edge or an enemy stone is blocked.
    pub open_ends: u8,
}

impl LineScan {
    /// Points for this run. See [`line_score`].
    #[inline]
    pub fn score(self) -> i64 {
        line_score(self.consecutive, self.open_ends)
    }
}

/// Measure the run through the stone at `pos` along `dir`.
///
/// `pos` must hold a stone.
pub fn scan_line(board: &Board, pos: Pos, dir: Direction) -> LineScan {
    let color = board.get(pos);
    debug_assert_ne!(color, Stone::Empty, "line scan from empty cell {pos}");

    let mut scan = LineScan {
        consecutive: 0,
        open_ends: 0,
    };
    for sign in [1, -1] {
        let (run, open) = scan_side(board, pos, dir, sign, color);
        scan.consecutive += run;
        scan.open_ends += u8::from(open);
    }
    scan
}

/// Walk away from `pos` while the color matches. Returns the run length and
/// whether the first cell past it is on the board and empty.
fn scan_side(board: &Board, pos: Pos, dir: Direction, sign: i32, color: Stone) -> (u32, bool) {
    let size = board.size();
    let mut run = 0u32;
    loop {
        match pos.offset(dir, sign * (run as i32 + 1), size) {
            Some(next) if board.get(next) == color => run += 1,
            Some(next) => return (run, board.get(next) == Stone::Empty),
            None => return (run, false),
        }
    }
}

//! Scoped speculative moves
//!
//! The search explores hypothetical lines by playing a move, recursing and
//! taking the move back. [`MoveGuard`] ties the take-back to scope exit, so
//! a pruning `break` or an early `return` cannot leave a stone behind.
//!
//! A guard only hands out shared access to the board. The one way to change
//! the board while a guard is alive is [`MoveGuard::play`], which nests
//! another guard; the grid is therefore always restored cell for cell.
//!
//! ```compile_fail
//! use gomoku::{Board, Pos};
//!
//! let mut board = Board::new();
//! let mut guard = board.play(Pos::new(0, 0)).unwrap();
//! guard.apply_move(Pos::new(1, 1)); // no mutable access through a guard
//! ```

use std::ops::Deref;

use super::{Board, Pos};

/// A move that is undone when the guard goes out of scope.
#[derive(Debug)]
pub struct MoveGuard<'a> {
    board: &'a mut Board,
    pos: Pos,
}

impl<'a> MoveGuard<'a> {
    /// The move at `pos` must already be applied to `board`.
    pub(super) fn new(board: &'a mut Board, pos: Pos) -> Self {
        Self { board, pos }
    }

    /// The cell this guard will clear
    #[inline]
    pub fn pos(&self) -> Pos {
        self.pos
    }

    /// Play a follow-up move on top of this one. The returned guard must be
    /// dropped before this one is usable again.
    #[must_use]
    pub fn play(&mut self, pos: Pos) -> Option<MoveGuard<'_>> {
        self.board.play(pos)
    }
}

impl Deref for MoveGuard<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        self.board
    }
}

impl Drop for MoveGuard<'_> {
    fn drop(&mut self) {
        self.board.undo_move(self.pos);
    }
}

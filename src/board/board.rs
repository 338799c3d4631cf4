//! Board structure with side-to-move bookkeeping

use std::fmt;

use super::guard::MoveGuard;
use super::{Pos, Stone, DEFAULT_BOARD_SIZE, MAX_BOARD_SIZE, MIN_BOARD_SIZE};
use crate::error::EngineError;

/// Square game board plus whose turn it is.
///
/// Only the side to move is stored; the opponent is always its complement,
/// so exactly one mark is current at any time. The grid is mutated only by
/// [`Board::apply_move`] and the crate-private `undo_move`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    cells: Vec<Stone>,
    current: Stone,
}

impl Board {
    /// Empty 15x15 board, Black to move.
    pub fn new() -> Self {
        Self::empty(DEFAULT_BOARD_SIZE)
    }

    /// Empty board of the given dimension.
    pub fn with_size(size: usize) -> Result<Self, EngineError> {
        if !(MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&size) {
            return Err(EngineError::InvalidBoardSize {
                size,
                min: MIN_BOARD_SIZE,
                max: MAX_BOARD_SIZE,
            });
        }
        Ok(Self::empty(size))
    }

    fn empty(size: usize) -> Self {
        Self {
            size,
            cells: vec![Stone::Empty; size * size],
            current: Stone::Black,
        }
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Whether `pos` lies on this board
    #[inline]
    pub fn contains(&self, pos: Pos) -> bool {
        (pos.row as usize) < self.size && (pos.col as usize) < self.size
    }

    /// Validate caller-supplied coordinates against the board dimension.
    pub fn checked_pos(&self, row: i64, col: i64) -> Result<Pos, EngineError> {
        let size = self.size as i64;
        if row < 0 || row >= size || col < 0 || col >= size {
            return Err(EngineError::OutOfBounds {
                row,
                col,
                size: self.size,
            });
        }
        Ok(Pos::new(row as u8, col as u8))
    }

    /// Get stone at position. Panics if `pos` is off the board.
    #[inline]
    pub fn get(&self, pos: Pos) -> Stone {
        assert!(self.contains(pos), "{pos} is off a {0}x{0} board", self.size);
        self.cells[pos.to_index(self.size)]
    }

    /// Check if position is empty
    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        self.get(pos) == Stone::Empty
    }

    /// Mark of the side to move
    #[inline]
    pub fn current_player(&self) -> Stone {
        self.current
    }

    /// Mark of the side that moved last
    #[inline]
    pub fn opponent_player(&self) -> Stone {
        self.current.opponent()
    }

    /// Place the side to move's stone at `pos` and pass the turn.
    ///
    /// Occupied cells are ignored: nothing changes and `false` is returned.
    /// Panics if `pos` is off the board.
    pub fn apply_move(&mut self, pos: Pos) -> bool {
        assert!(
            self.contains(pos),
            "move {pos} is off a {0}x{0} board",
            self.size
        );
        let idx = pos.to_index(self.size);
        if self.cells[idx] != Stone::Empty {
            return false;
        }
        self.cells[idx] = self.current;
        self.current = self.current.opponent();
        true
    }

    /// Clear `pos` and hand the turn back. Only the search restores moves,
    /// always through [`MoveGuard`].
    pub(crate) fn undo_move(&mut self, pos: Pos) {
        debug_assert!(!self.is_empty(pos), "undo of empty cell {pos}");
        let idx = pos.to_index(self.size);
        self.cells[idx] = Stone::Empty;
        self.current = self.current.opponent();
    }

    /// Apply a legal move and return a guard that undoes it when dropped.
    #[must_use]
    pub fn play(&mut self, pos: Pos) -> Option<MoveGuard<'_>> {
        if self.apply_move(pos) {
            Some(MoveGuard::new(self, pos))
        } else {
            None
        }
    }

    /// Back to an empty grid with Black to move.
    pub fn reset(&mut self) {
        self.cells.fill(Stone::Empty);
        self.current = Stone::Black;
    }

    /// Every cell with its contents, row-major.
    pub fn iter(&self) -> impl Iterator<Item = (Pos, Stone)> + '_ {
        let size = self.size;
        self.cells
            .iter()
            .enumerate()
            .map(move |(idx, &stone)| (Pos::from_index(idx, size), stone))
    }

    /// Total stones on board
    #[inline]
    pub fn stone_count(&self) -> usize {
        self.cells.iter().filter(|&&s| s != Stone::Empty).count()
    }

    /// Check if board is empty
    #[inline]
    pub fn is_board_empty(&self) -> bool {
        self.cells.iter().all(|&s| s == Stone::Empty)
    }

    /// No empty cell left
    #[inline]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&s| s != Stone::Empty)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "   ")?;
        for c in 0..self.size {
            write!(f, "{:3}", c)?;
        }
        writeln!(f)?;

        for r in 0..self.size {
            write!(f, "{:2} ", r)?;
            for c in 0..self.size {
                let stone = self.cells[r * self.size + c];
                write!(f, "  {}", stone.symbol())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

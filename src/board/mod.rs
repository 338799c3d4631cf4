//! Board representation for Gomoku

pub mod board;
pub mod guard;


// Re-exports
pub use board::Board;
pub use guard::MoveGuard;

/// Smallest board that can still hold a five
pub const MIN_BOARD_SIZE: usize = 5;
/// Largest supported board (19x19)
pub const MAX_BOARD_SIZE: usize = 19;
/// Standard board size (15x15)
pub const DEFAULT_BOARD_SIZE: usize = 15;

/// Cell states. Black moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stone {
    Empty,
    Black,
    White,
}

impl Stone {
    /// Get opponent color
    #[inline]
    pub fn opponent(self) -> Stone {
        match self {
            Stone::Black => Stone::White,
            Stone::White => Stone::Black,
            Stone::Empty => Stone::Empty,
        }
    }

    /// Single-character form used by the text renderer
    #[inline]
    pub fn symbol(self) -> char {
        match self {
            Stone::Black => 'X',
            Stone::White => 'O',
            Stone::Empty => '.',
        }
    }
}

/// Position on the board
///
/// A `Pos` is only meaningful relative to a particular board; nothing about
/// the value itself says whether it is on one. Check it with
/// [`Board::contains`] or build it with [`Board::checked_pos`]. Board
/// accessors panic on positions outside the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pos {
    pub row: u8,
    pub col: u8,
}

impl Pos {
    #[inline]
    pub fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Row-major index on a board of the given size
    #[inline]
    pub fn to_index(self, size: usize) -> usize {
        self.row as usize * size + self.col as usize
    }

    #[inline]
    pub fn from_index(idx: usize, size: usize) -> Self {
        Self {
            row: (idx / size) as u8,
            col: (idx % size) as u8,
        }
    }

    /// Step `steps` cells along `dir`, or `None` when that leaves `[0, size)`.
    #[inline]
    pub fn offset(self, dir: Direction, steps: i32, size: usize) -> Option<Pos> {
        let (dr, dc) = dir.delta();
        let r = self.row as i32 + dr * steps;
        let c = self.col as i32 + dc * steps;
        if r >= 0 && r < size as i32 && c >= 0 && c < size as i32 {
            Some(Pos::new(r as u8, c as u8))
        } else {
            None
        }
    }
}

impl std::fmt::Display for Pos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl PartialOrd for Pos {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Pos {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.row, self.col).cmp(&(other.row, other.col))
    }
}

/// The four line axes. Each one is scanned both ways from a cell,
/// so the opposite vectors are never needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Horizontal,
    Vertical,
    /// Top-left to bottom-right
    DiagonalDown,
    /// Bottom-left to top-right
    DiagonalUp,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Horizontal,
        Direction::Vertical,
        Direction::DiagonalDown,
        Direction::DiagonalUp,
    ];

    /// (row, col) step
    #[inline]
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Horizontal => (0, 1),
            Direction::Vertical => (1, 0),
            Direction::DiagonalDown => (1, 1),
            Direction::DiagonalUp => (-1, 1),
        }
    }
}

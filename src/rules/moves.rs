//! Legal move enumeration

use crate::board::{Board, Pos, Stone};

/// All empty cells in row-major order.
///
/// The order is part of the contract: the search visits moves in this order
/// and keeps the first of several equally scored moves, so results are
/// reproducible.
pub fn available_moves(board: &Board) -> Vec<Pos> {
    board
        .iter()
        .filter(|&(_, stone)| stone == Stone::Empty)
        .map(|(pos, _)| pos)
        .collect()
}

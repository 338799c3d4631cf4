//! Shared helpers for the integration tests.

#![allow(dead_code)]

use gomoku::board::{Board, MoveGuard, Pos, Stone};
use gomoku::eval::{evaluate, PatternScore};
use gomoku::rules::{available_moves, check_win};
use rand::{rngs::StdRng, Rng};

/// Board of `size` after playing `moves` in order, Black first.
pub fn board_from(size: usize, moves: &[(u8, u8)]) -> Board {
    let mut board = Board::with_size(size).expect("valid size");
    for &(r, c) in moves {
        assert!(board.apply_move(Pos::new(r, c)), "({r}, {c}) taken");
    }
    board
}

/// Random legal position with `stones` stones and no completed five.
pub fn random_position(size: usize, stones: usize, rng: &mut StdRng) -> Board {
    let mut board = Board::with_size(size).expect("valid size");
    while board.stone_count() < stones {
        let moves = available_moves(&board);
        let pos = moves[rng.random_range(0..moves.len())];
        board.apply_move(pos);
        if check_win(&board, pos) {
            // Start over rather than hand the search a finished game.
            board.reset();
        }
    }
    board
}

/// Minimax without pruning, scored for `root` the way the searcher scores.
pub fn exhaustive(node: &mut MoveGuard<'_>, root: Stone, depth: u8) -> i64 {
    if check_win(node, node.pos()) {
        let won = PatternScore::WIN + i64::from(depth);
        return if node.opponent_player() == root { won } else { -won };
    }
    let moves = available_moves(node);
    if depth == 0 || moves.is_empty() {
        return evaluate(node, root);
    }

    let maximizing = node.current_player() == root;
    let mut best = if maximizing { i64::MIN } else { i64::MAX };
    for pos in moves {
        let mut child = node.play(pos).expect("listed move is legal");
        let score = exhaustive(&mut child, root, depth - 1);
        best = if maximizing { best.max(score) } else { best.min(score) };
    }
    best
}

/// First move with the strictly highest exhaustive score, and that score.
pub fn exhaustive_best(board: &mut Board, depth: u8) -> (Option<Pos>, i64) {
    let root = board.current_player();
    let mut best_move = None;
    let mut best_score = i64::MIN;
    for pos in available_moves(board) {
        let mut child = board.play(pos).expect("listed move is legal");
        let score = exhaustive(&mut child, root, depth - 1);
        if score > best_score {
            best_move = Some(pos);
            best_score = score;
        }
    }
    (best_move, best_score)
}

//! Alpha-Beta search
//!
//! This module implements the core search algorithm for the Gomoku AI:
//! a fixed-depth minimax with alpha-beta pruning.
//!
//! # Features
//!
//! - The side to move at the root maximizes; every node derives its role
//!   from the board's side to move, so role and board can never disagree
//! - Speculative moves go through [`MoveGuard`](crate::board::MoveGuard),
//!   which restores the board on every exit path, cutoffs included
//! - Moves are tried in row-major order and ties keep the first move, so the
//!   same position always yields the same answer
//! - A move that completes five ends the line with a decisive score;
//!   quicker wins score higher
//!
//! # Example
//!
//! ```
//! use gomoku::board::{Board, Pos};
//! use gomoku::search::Searcher;
//!
//! let mut searcher = Searcher::new();
//! let mut board = Board::with_size(9).unwrap();
//! board.apply_move(Pos::new(4, 4));
//!
//! let result = searcher.search(&mut board, 2);
//! if let Some(best_move) = result.best_move {
//!     println!("Best move: ({}, {})", best_move.row, best_move.col);
//! }
//! ```

use tracing::{debug, instrument};

use crate::board::{Board, MoveGuard, Pos, Stone};
use crate::eval::{evaluate, PatternScore};
use crate::rules::{available_moves, check_win};

/// Infinity score for alpha-beta bounds
const INF: i64 = i64::MAX;

/// Search statistics for diagnostics and tuning.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Cutoffs at maximizing nodes (fail-high)
    pub beta_cutoffs: u64,
    /// Cutoffs at minimizing nodes (fail-low)
    pub alpha_cutoffs: u64,
}

/// Search result containing the best move found and associated statistics.
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// Best move found; `None` only when the board is full
    pub best_move: Option<Pos>,
    /// Score of the best move from the searching side's point of view
    pub score: i64,
    /// Plies searched, root move included
    pub depth: u8,
    /// Total nodes visited below the root
    pub nodes: u64,
    /// Search diagnostics
    pub stats: SearchStats,
}

/// Minimax searcher.
///
/// Holds per-search bookkeeping only; the board is borrowed for the
/// duration of [`Searcher::search`] and handed back unchanged.
#[derive(Debug, Clone)]
pub struct Searcher {
    /// Side that moves at the root and maximizes
    root: Stone,
    nodes: u64,
    stats: SearchStats,
}

impl Searcher {
    #[must_use]
    pub fn new() -> Self {
        Self {
            root: Stone::Black,
            nodes: 0,
            stats: SearchStats::default(),
        }
    }

    /// Find the best move for the side to move, looking `depth` plies ahead
    /// (the candidate move itself is the first ply; 0 is treated as 1).
    ///
    /// The board is explored in place and is identical to its previous state
    /// when this returns.
    #[instrument(level = "debug", skip(self, board), fields(size = board.size()))]
    pub fn search(&mut self, board: &mut Board, depth: u8) -> SearchResult {
        let depth = depth.max(1);
        self.root = board.current_player();
        self.nodes = 0;
        self.stats = SearchStats::default();

        let mut best_move = None;
        let mut best_score = -INF;

        for pos in available_moves(board) {
            let score = {
                let Some(mut child) = board.play(pos) else {
                    continue;
                };
                // Anything not above the current best cannot change the
                // choice, so the best so far is the lower bound.
                self.minimax(&mut child, depth - 1, best_score, INF)
            };

            if score > best_score {
                best_score = score;
                best_move = Some(pos);
            }
        }

        if best_move.is_none() {
            best_score = evaluate(board, self.root);
        }

        debug!(
            depth,
            nodes = self.nodes,
            beta_cutoffs = self.stats.beta_cutoffs,
            alpha_cutoffs = self.stats.alpha_cutoffs,
            score = best_score,
            best_move = ?best_move,
            "search finished"
        );

        SearchResult {
            best_move,
            score: best_score,
            depth,
            nodes: self.nodes,
            stats: self.stats.clone(),
        }
    }

    /// Score of the position reached by the guarded move, from the root
    /// side's point of view.
    fn minimax(
        &mut self,
        node: &mut MoveGuard<'_>,
        depth: u8,
        mut alpha: i64,
        mut beta: i64,
    ) -> i64 {
        self.nodes += 1;

        if check_win(node, node.pos()) {
            let won = PatternScore::WIN + i64::from(depth);
            return if node.opponent_player() == self.root {
                won
            } else {
                -won
            };
        }

        if depth == 0 {
            return evaluate(node, self.root);
        }

        let moves = available_moves(node);
        if moves.is_empty() {
            return evaluate(node, self.root);
        }

        if node.current_player() == self.root {
            let mut best = -INF;
            for pos in moves {
                let score = {
                    let Some(mut child) = node.play(pos) else {
                        continue;
                    };
                    self.minimax(&mut child, depth - 1, alpha, beta)
                };
                best = best.max(score);
                alpha = alpha.max(best);
                if beta <= alpha {
                    self.stats.beta_cutoffs += 1;
                    break;
                }
            }
            best
        } else {
            let mut best = INF;
            for pos in moves {
                let score = {
                    let Some(mut child) = node.play(pos) else {
                        continue;
                    };
                    self.minimax(&mut child, depth - 1, alpha, beta)
                };
                best = best.min(score);
                beta = beta.min(best);
                if beta <= alpha {
                    self.stats.alpha_cutoffs += 1;
                    break;
                }
            }
            best
        }
    }
}

impl Default for Searcher {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::eval::is_decisive;

    fn board_from(size: usize, moves: &[(u8, u8)]) -> Board {
        let mut board = Board::with_size(size).unwrap();
        for &(r, c) in moves {
            assert!(board.apply_move(Pos::new(r, c)));
        }
        board
    }

    /// Plain minimax without pruning, same conventions as the searcher.
    fn exhaustive(node: &mut MoveGuard<'_>, root: Stone, depth: u8) -> i64 {
        if check_win(node, node.pos()) {
            let won = PatternScore::WIN + i64::from(depth);
            return if node.opponent_player() == root { won } else { -won };
        }
        let moves = available_moves(node);
        if depth == 0 || moves.is_empty() {
            return evaluate(node, root);
        }
        let maximizing = node.current_player() == root;
        let scores = moves.into_iter().map(|pos| {
            let mut child = node.play(pos).unwrap();
            exhaustive(&mut child, root, depth - 1)
        });
        if maximizing {
            scores.max().unwrap()
        } else {
            scores.min().unwrap()
        }
    }

    fn exhaustive_root(board: &mut Board, depth: u8) -> (Option<Pos>, i64) {
        let root = board.current_player();
        let mut best = (None, -INF);
        for pos in available_moves(board) {
            let score = {
                let mut child = board.play(pos).unwrap();
                exhaustive(&mut child, root, depth - 1)
            };
            if score > best.1 {
                best = (Some(pos), score);
            }
        }
        best
    }

    #[test]
    fn test_search_leaves_board_unchanged() {
        let mut board = board_from(9, &[(4, 4), (4, 5), (3, 3), (5, 5)]);
        let before = board.clone();

        let mut searcher = Searcher::new();
        let result = searcher.search(&mut board, 3);

        assert!(result.best_move.is_some());
        assert_eq!(board, before);
    }

    #[test]
    fn test_search_empty_board_returns_a_cell() {
        let mut board = Board::with_size(7).unwrap();
        let mut searcher = Searcher::new();

        let result = searcher.search(&mut board, 2);
        let best = result.best_move.expect("empty board has moves");
        assert!(board.contains(best));
        assert!(board.is_board_empty());
    }

    #[test]
    fn test_search_full_board_has_no_move() {
        let mut board = Board::with_size(5).unwrap();
        for idx in 0..25 {
            board.apply_move(Pos::from_index(idx, 5));
        }
        let mut searcher = Searcher::new();
        let result = searcher.search(&mut board, 2);
        assert_eq!(result.best_move, None);
        assert_eq!(result.nodes, 0);
    }

    #[test]
    fn test_search_finds_winning_move() {
        // Black: (2,0..3), White scattered; Black to move
        let mut board = board_from(
            7,
            &[(2, 0), (6, 6), (2, 1), (6, 4), (2, 2), (4, 6), (2, 3), (6, 0)],
        );
        let mut searcher = Searcher::new();

        let result = searcher.search(&mut board, 2);
        assert_eq!(result.best_move, Some(Pos::new(2, 4)));
        assert!(is_decisive(result.score));
        assert!(result.score > 0);
    }

    #[test]
    fn test_search_blocks_opponent_win() {
        // White: (3,0..3), Black to move must take (3,4)
        let mut board = board_from(
            7,
            &[(0, 6), (3, 0), (6, 6), (3, 1), (0, 4), (3, 2), (6, 2), (3, 3)],
        );
        assert_eq!(board.current_player(), Stone::Black);
        let mut searcher = Searcher::new();

        let result = searcher.search(&mut board, 2);
        assert_eq!(result.best_move, Some(Pos::new(3, 4)));
        assert!(!is_decisive(result.score));
    }

    #[test]
    fn test_depth_zero_is_one_ply() {
        let mut board = board_from(7, &[(3, 3)]);
        let mut searcher = Searcher::new();
        let result = searcher.search(&mut board, 0);
        assert_eq!(result.depth, 1);
        assert_eq!(result.nodes as usize, 48);
    }

    #[test]
    fn test_matches_exhaustive_minimax() {
        let positions: [&[(u8, u8)]; 3] = [
            &[(2, 2), (2, 3), (3, 2)],
            &[(0, 0), (1, 1), (0, 1), (2, 2), (0, 2), (4, 4)],
            &[(2, 2), (1, 2), (2, 1), (1, 1), (3, 3), (1, 3)],
        ];
        for moves in positions {
            for depth in 1..=3 {
                let mut board = board_from(5, moves);
                let mut searcher = Searcher::new();
                let pruned = searcher.search(&mut board, depth);
                let (best, score) = exhaustive_root(&mut board, depth);
                assert_eq!(pruned.best_move, best, "moves {moves:?} depth {depth}");
                assert_eq!(pruned.score, score, "moves {moves:?} depth {depth}");
            }
        }
    }

    #[test]
    fn test_pruning_cuts_work() {
        let mut board = board_from(5, &[(2, 2), (2, 3)]);
        let mut searcher = Searcher::new();
        let result = searcher.search(&mut board, 3);

        // 23 * 22 * 21 leaves without pruning
        assert!(result.nodes < 23 + 23 * 22 + 23 * 22 * 21);
        assert!(result.stats.beta_cutoffs + result.stats.alpha_cutoffs > 0);
    }

    #[test]
    fn test_search_is_deterministic() {
        let mut board = board_from(7, &[(3, 3), (3, 4), (2, 2)]);
        let first = Searcher::new().search(&mut board, 2);
        let second = Searcher::new().search(&mut board, 2);
        assert_eq!(first.best_move, second.best_move);
        assert_eq!(first.score, second.score);
        assert_eq!(first.nodes, second.nodes);
    }
}

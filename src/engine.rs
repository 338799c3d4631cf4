//! Game engine facade
//!
//! [`Engine`] is the single object a front end holds: it owns the board, the
//! searcher and the settings. There is no process-wide game state; create as
//! many engines as there are games.
//!
//! Two layers are offered:
//!
//! 1. **Raw primitives** ([`Engine::apply_move`], [`Engine::check_win`],
//!    [`Engine::reset`], [`Engine::find_best_move`]): thin, error-free calls
//!    into the board, win detector and search. Illegal moves are ignored.
//! 2. **Validated play** ([`Engine::play`], [`Engine::play_engine_move`]):
//!    rejects bad input with [`EngineError`], checks for a result after every
//!    move and refuses further moves once the game has ended.
//!
//! # Example
//!
//! ```
//! use gomoku::{Engine, EngineConfig, MoveOutcome, Pos};
//!
//! let config = EngineConfig { board_size: 9, search_depth: 2 };
//! let mut engine = Engine::with_config(config).unwrap();
//!
//! // Human plays the center, engine answers
//! let outcome = engine.play(Pos::new(4, 4)).unwrap();
//! assert_eq!(outcome, MoveOutcome::Continue);
//! let (reply, _) = engine.play_engine_move().unwrap();
//! println!("Engine plays at ({}, {})", reply.row, reply.col);
//! ```

use std::time::Instant;

use tracing::info;

use crate::board::{Board, Pos, Stone};
use crate::config::EngineConfig;
use crate::error::EngineError;
use crate::rules::{check_win, winning_line};
use crate::search::{SearchResult, Searcher};

/// Result of a move search with detailed statistics.
#[derive(Debug, Clone)]
pub struct MoveResult {
    /// Best move found, if any
    pub best_move: Option<Pos>,
    /// Score of the move for the side that searched
    pub score: i64,
    /// Plies searched
    pub depth: u8,
    /// Time taken in milliseconds
    pub time_ms: u64,
    /// Number of nodes searched
    pub nodes: u64,
}

impl MoveResult {
    #[inline]
    fn from_search(result: SearchResult, time_ms: u64) -> Self {
        Self {
            best_move: result.best_move,
            score: result.score,
            depth: result.depth,
            time_ms,
            nodes: result.nodes,
        }
    }
}

/// Finished game with a winner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameResult {
    pub winner: Stone,
    /// The completed run, from one end to the other
    pub winning_line: Vec<Pos>,
}

/// What a validated move led to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Game goes on
    Continue,
    /// The mover completed five
    Win(GameResult),
    /// The board filled up without a five
    Draw,
}

/// Where the game stands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won(GameResult),
    Drawn,
}

/// Gomoku engine: board, search and settings owned together.
#[derive(Debug, Clone)]
pub struct Engine {
    board: Board,
    searcher: Searcher,
    config: EngineConfig,
    status: GameStatus,
}

impl Engine {
    /// Engine with default settings (15x15 board, depth 2).
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            searcher: Searcher::new(),
            config: EngineConfig::default(),
            status: GameStatus::InProgress,
        }
    }

    /// Engine with custom settings. Sizes and depths outside the supported
    /// ranges are rejected.
    pub fn with_config(config: EngineConfig) -> Result<Self, EngineError> {
        let board = Board::with_size(config.board_size)?;
        config.validate()?;
        Ok(Self {
            board,
            searcher: Searcher::new(),
            config,
            status: GameStatus::InProgress,
        })
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.board.size()
    }

    /// Mark of the side to move
    #[inline]
    pub fn current_player(&self) -> Stone {
        self.board.current_player()
    }

    #[inline]
    pub fn status(&self) -> &GameStatus {
        &self.status
    }

    /// Place the side to move's stone. Occupied cells are ignored.
    ///
    /// This does not track the game result; pair it with
    /// [`Engine::check_win`] or use [`Engine::play`].
    pub fn apply_move(&mut self, pos: Pos) -> bool {
        self.board.apply_move(pos)
    }

    /// Did the stone just played at `pos` complete five?
    pub fn check_win(&self, pos: Pos) -> bool {
        check_win(&self.board, pos)
    }

    /// Clear the board; Black moves first again.
    pub fn reset(&mut self) {
        self.board.reset();
        self.status = GameStatus::InProgress;
        info!(size = self.board.size(), "game reset");
    }

    /// Start over on a board of a different dimension.
    pub fn resize(&mut self, size: usize) -> Result<(), EngineError> {
        self.board = Board::with_size(size)?;
        self.config.board_size = size;
        self.status = GameStatus::InProgress;
        info!(size, "board resized");
        Ok(())
    }

    /// Recommended move for the side to move, or `None` on a full board.
    pub fn find_best_move(&mut self) -> Option<Pos> {
        self.find_best_move_with_stats().best_move
    }

    /// Recommended move together with score, timing and node count.
    pub fn find_best_move_with_stats(&mut self) -> MoveResult {
        let start = Instant::now();
        let result = self
            .searcher
            .search(&mut self.board, self.config.search_depth);
        MoveResult::from_search(result, start.elapsed().as_millis() as u64)
    }

    /// Play a move for the side to move, with full validation.
    pub fn play(&mut self, pos: Pos) -> Result<MoveOutcome, EngineError> {
        if self.status != GameStatus::InProgress {
            return Err(EngineError::GameOver);
        }
        if !self.board.contains(pos) {
            return Err(EngineError::OutOfBounds {
                row: i64::from(pos.row),
                col: i64::from(pos.col),
                size: self.board.size(),
            });
        }

        let mover = self.board.current_player();
        if !self.board.apply_move(pos) {
            return Err(EngineError::Occupied {
                row: pos.row,
                col: pos.col,
            });
        }

        let outcome = if check_win(&self.board, pos) {
            let result = GameResult {
                winner: mover,
                winning_line: winning_line(&self.board, pos).unwrap_or_default(),
            };
            info!(winner = ?mover, %pos, "five in a row");
            self.status = GameStatus::Won(result.clone());
            MoveOutcome::Win(result)
        } else if self.board.is_full() {
            info!("board full, game drawn");
            self.status = GameStatus::Drawn;
            MoveOutcome::Draw
        } else {
            MoveOutcome::Continue
        };
        Ok(outcome)
    }

    /// Let the search pick a move for the side to move and play it.
    pub fn play_engine_move(&mut self) -> Result<(Pos, MoveOutcome), EngineError> {
        if self.status != GameStatus::InProgress {
            return Err(EngineError::GameOver);
        }
        let pos = self.find_best_move().ok_or(EngineError::NoMovesAvailable)?;
        let outcome = self.play(pos)?;
        Ok((pos, outcome))
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

//! Gomoku AI Engine
//!
//! A small, deterministic engine for freestyle Gomoku (five in a row):
//! - Square board from 5x5 to 19x19 (15x15 by default)
//! - Five or more in a row wins (overlines allowed)
//! - Fixed hand-written pattern evaluation
//! - Minimax with alpha-beta pruning at a configurable depth
//!
//! # Architecture
//!
//! The engine is organized into several modules:
//! - [`board`]: Board representation and scoped speculative moves
//! - [`rules`]: Legal moves and win detection
//! - [`eval`]: Line scanning and position evaluation
//! - [`search`]: Alpha-beta search
//! - [`engine`]: Game facade owned by the caller
//! - [`config`]: Settings, loadable from TOML
//!
//! # Quick Start
//!
//! ```
//! use gomoku::{Engine, Pos};
//!
//! let mut engine = Engine::new();
//!
//! // Human plays the center
//! engine.apply_move(Pos::new(7, 7));
//! assert!(!engine.check_win(Pos::new(7, 7)));
//!
//! // Engine responds
//! if let Some(pos) = engine.find_best_move() {
//!     engine.apply_move(pos);
//!     println!("AI plays at ({}, {})", pos.row, pos.col);
//! }
//! ```

pub mod board;
pub mod config;
pub mod engine;
pub mod error;
pub mod eval;
pub mod rules;
pub mod search;

// Re-export commonly used types for convenience
pub use board::{Board, Direction, Pos, Stone, DEFAULT_BOARD_SIZE};
pub use config::EngineConfig;
pub use engine::{Engine, GameResult, GameStatus, MoveOutcome, MoveResult};
pub use error::{ConfigError, EngineError};

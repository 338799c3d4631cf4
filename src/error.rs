//! Error types for the engine and its configuration

use std::path::PathBuf;

/// Errors from the validated game-facing operations.
///
/// The raw board primitives never return these: an illegal
/// [`Board::apply_move`](crate::Board::apply_move) is simply ignored.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    #[error("position ({row}, {col}) is outside the {size}x{size} board")]
    OutOfBounds { row: i64, col: i64, size: usize },

    #[error("position ({row}, {col}) is already occupied")]
    Occupied { row: u8, col: u8 },

    #[error("game is already over")]
    GameOver,

    #[error("board size {size} is not supported (expected {min}..={max})")]
    InvalidBoardSize { size: usize, min: usize, max: usize },

    #[error("no empty cell left to play")]
    NoMovesAvailable,

    #[error("invalid engine settings: {0}")]
    InvalidConfig(String),
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}

impl From<ConfigError> for EngineError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::Validation(msg) => EngineError::InvalidConfig(msg),
            other => EngineError::InvalidConfig(other.to_string()),
        }
    }
}

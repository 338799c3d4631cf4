//! Engine configuration, loadable from TOML.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::board::{DEFAULT_BOARD_SIZE, MAX_BOARD_SIZE, MIN_BOARD_SIZE};
use crate::error::ConfigError;

/// Deepest search the engine accepts. Every ply multiplies the work by the
/// number of empty cells, so deeper settings are not practical.
pub const MAX_SEARCH_DEPTH: u8 = 6;

/// Default lookahead: the candidate move plus the opponent's best reply.
pub const DEFAULT_SEARCH_DEPTH: u8 = 2;

/// Settings file picked up from the working directory when none is named.
pub const DEFAULT_CONFIG_FILE: &str = "gomoku.toml";

/// Game and search settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Board dimension (the board is `board_size` x `board_size`)
    pub board_size: usize,
    /// Plies searched, the candidate move included
    pub search_depth: u8,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            board_size: DEFAULT_BOARD_SIZE,
            search_depth: DEFAULT_SEARCH_DEPTH,
        }
    }
}

impl EngineConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_toml_str(&content)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            debug!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Parse and validate a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: EngineConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&self.board_size) {
            return Err(ConfigError::Validation(format!(
                "board_size must be in {MIN_BOARD_SIZE}..={MAX_BOARD_SIZE}, got {}",
                self.board_size
            )));
        }
        if self.search_depth == 0 {
            return Err(ConfigError::Validation("search_depth must be >= 1".into()));
        }
        if self.search_depth > MAX_SEARCH_DEPTH {
            return Err(ConfigError::Validation(format!(
                "search_depth must be <= {MAX_SEARCH_DEPTH}, got {}",
                self.search_depth
            )));
        }
        Ok(())
    }
}

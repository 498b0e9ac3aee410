use std::path::Path;

use tracing::warn;

use crate::error::{BoardError, ConfigError};
use crate::game::{Board, DEFAULT_COLS, DEFAULT_ROWS};

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub board: BoardConfig,
}

/// Board dimensions.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub rows: usize,
    pub cols: usize,
}

impl Default for BoardConfig {
    fn default() -> Self {
        BoardConfig {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
        }
    }
}

impl BoardConfig {
    /// Build an empty board with the configured dimensions.
    pub fn build(&self) -> Result<Board, BoardError> {
        Board::with_dimensions(self.rows, self.cols)
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            warn!("config file '{}' not found, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        Board::check_dimensions(self.board.rows, self.board.cols)
            .map_err(|e| ConfigError::Validation(format!("board: {e}")))
    }

    /// Build an empty board from the `[board]` section.
    pub fn build_board(&self) -> Result<Board, ConfigError> {
        Ok(self.board.build()?)
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> Result<String, ConfigError> {
        toml::to_string_pretty(&AppConfig::default())
            .map_err(|e| ConfigError::Validation(format!("default config does not serialize: {e}")))
    }
}

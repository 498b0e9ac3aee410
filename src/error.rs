use std::path::PathBuf;

use crate::game::Cell;

/// Errors that can occur when building or mutating a board.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("invalid board dimensions {rows}x{cols}: need at least 4x4 and an addressable grid")]
    InvalidDimensions { rows: usize, cols: usize },

    #[error("illegal field '{value}' at index ({row},{col})")]
    InvalidCellValue { row: usize, col: usize, value: char },

    #[error("illegal cell character '{0}'")]
    InvalidCellChar(char),

    #[error("row {row} has {found} columns, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("move in column {column} is not a legal move")]
    IllegalMove { column: usize },

    #[error("mark '{0}' cannot be played")]
    IllegalMark(Cell),
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

    #[error("board error: {0}")]
    Board(#[from] BoardError),
}

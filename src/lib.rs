//! # Connect Four Board
//!
//! A Connect Four board model: a fixed-size grid, legal-move checking,
//! gravity-drop stone placement and four-in-a-row detection along rows,
//! columns and both diagonals.
//!
//! ## Modules
//!
//! - [`game`] — Board, cell states and the text notation for boards
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod config;
pub mod error;
pub mod game;

pub use error::{BoardError, ConfigError};
pub use game::{Board, Cell};

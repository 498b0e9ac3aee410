//! Connect Four board: cell states, the grid with gravity-drop placement and
//! win detection, and the character notation used to read and write boards.

mod board;
mod cell;
mod notation;

pub use board::{Board, DEFAULT_COLS, DEFAULT_ROWS, MIN_DIMENSION, WIN_LENGTH};
pub use cell::{Cell, EMPTY_CHAR, PLAYER_ONE_CHAR, PLAYER_TWO_CHAR};

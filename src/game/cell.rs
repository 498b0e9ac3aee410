use std::fmt;

use crate::error::BoardError;

/// Character used for an unplayed cell.
pub const EMPTY_CHAR: char = '_';
/// Character used for player one's stones.
pub const PLAYER_ONE_CHAR: char = 'x';
/// Character used for player two's stones.
pub const PLAYER_TWO_CHAR: char = 'o';

/// State of a single grid position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "char", into = "char")]
pub enum Cell {
    #[default]
    Empty,
    PlayerOne,
    PlayerTwo,
}

impl Cell {
    /// True for the two marks a player can drop.
    pub fn is_player(self) -> bool {
        self != Cell::Empty
    }

    /// The other player's mark, or `None` for an empty cell.
    pub fn opponent(self) -> Option<Cell> {
        match self {
            Cell::Empty => None,
            Cell::PlayerOne => Some(Cell::PlayerTwo),
            Cell::PlayerTwo => Some(Cell::PlayerOne),
        }
    }

    /// Notation character for this cell.
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => EMPTY_CHAR,
            Cell::PlayerOne => PLAYER_ONE_CHAR,
            Cell::PlayerTwo => PLAYER_TWO_CHAR,
        }
    }
}

impl From<Cell> for char {
    fn from(cell: Cell) -> char {
        cell.to_char()
    }
}

impl TryFrom<char> for Cell {
    type Error = BoardError;

    /// Parse a notation character. Grid parsers report the position of an
    /// illegal character themselves.
    fn try_from(value: char) -> Result<Self, Self::Error> {
        match value {
            EMPTY_CHAR => Ok(Cell::Empty),
            PLAYER_ONE_CHAR => Ok(Cell::PlayerOne),
            PLAYER_TWO_CHAR => Ok(Cell::PlayerTwo),
            other => Err(BoardError::InvalidCellChar(other)),
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

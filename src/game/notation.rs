//! Text form of a board: one line per row, top row first, using `_` for
//! empty cells, `x` for player one and `o` for player two.

use std::fmt;
use std::str::FromStr;

use super::board::Board;
use super::cell::Cell;
use crate::error::BoardError;

impl Board {
    /// Create a board from a grid of notation characters.
    ///
    /// Dimensions are checked before contents. The first illegal
    /// character in row-major order is reported with its position.
    pub fn from_chars(grid: &[Vec<char>]) -> Result<Self, BoardError> {
        let rows = grid.len();
        let cols = grid.first().map_or(0, Vec::len);
        Board::check_dimensions(rows, cols)?;

        let mut cells = Vec::with_capacity(rows * cols);
        for (row, line) in grid.iter().enumerate() {
            if line.len() != cols {
                return Err(BoardError::RaggedRow {
                    row,
                    expected: cols,
                    found: line.len(),
                });
            }
            for (col, &value) in line.iter().enumerate() {
                let cell = Cell::try_from(value)
                    .map_err(|_| BoardError::InvalidCellValue { row, col, value })?;
                cells.push(cell);
            }
        }

        Ok(Board::from_parts(rows, cols, cells))
    }
}

impl FromStr for Board {
    type Err = BoardError;

    /// Blank lines and whitespace around each line are ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let grid: Vec<Vec<char>> = s
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(|line| line.chars().collect())
            .collect();
        Board::from_chars(&grid)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows() {
            if row > 0 {
                writeln!(f)?;
            }
            for cell in self.row(row) {
                write!(f, "{cell}")?;
            }
        }
        Ok(())
    }
}

impl From<Board> for Vec<String> {
    fn from(board: Board) -> Self {
        (0..board.rows())
            .map(|row| board.row(row).iter().map(|&cell| char::from(cell)).collect())
            .collect()
    }
}

impl TryFrom<Vec<String>> for Board {
    type Error = BoardError;

    fn try_from(rows: Vec<String>) -> Result<Self, Self::Error> {
        let grid: Vec<Vec<char>> = rows.iter().map(|row| row.chars().collect()).collect();
        Board::from_chars(&grid)
    }
}

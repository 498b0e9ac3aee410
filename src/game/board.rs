use tracing::debug;

use super::cell::Cell;
use crate::error::BoardError;

pub const DEFAULT_ROWS: usize = 6;
pub const DEFAULT_COLS: usize = 7;

/// Smallest number of rows and columns a board may have.
pub const MIN_DIMENSION: usize = 4;

/// Number of equal marks in a line that wins.
pub const WIN_LENGTH: usize = 4;

/// Step directions (row, col) of the four lines through a cell: the row,
/// the column, the up-right diagonal (/) and the down-right diagonal (\).
const LINE_DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (-1, 1), (1, 1)];

/// A Connect Four grid. Row 0 is the top, row `rows - 1` is the bottom.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct Board {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Create an empty board of the default 6x7 size
    pub fn new() -> Self {
        Board::empty(DEFAULT_ROWS, DEFAULT_COLS)
    }

    /// Create an empty board with custom dimensions. Both must be at least four.
    pub fn with_dimensions(rows: usize, cols: usize) -> Result<Self, BoardError> {
        Board::check_dimensions(rows, cols)?;
        Ok(Board::empty(rows, cols))
    }

    /// Create a board from a row-major grid of cells (row 0 on top).
    ///
    /// The grid must be rectangular and at least 4x4. Gravity is not
    /// checked: floating stones are accepted as given.
    pub fn from_cells(grid: Vec<Vec<Cell>>) -> Result<Self, BoardError> {
        let rows = grid.len();
        let cols = grid.first().map_or(0, Vec::len);
        Board::check_dimensions(rows, cols)?;

        let mut cells = Vec::with_capacity(rows * cols);
        for (row, line) in grid.into_iter().enumerate() {
            if line.len() != cols {
                return Err(BoardError::RaggedRow {
                    row,
                    expected: cols,
                    found: line.len(),
                });
            }
            cells.extend(line);
        }

        Ok(Board { rows, cols, cells })
    }

    /// Check that `rows` x `cols` is a valid board shape: both at least
    /// four, and small enough that every cell is addressable.
    pub fn check_dimensions(rows: usize, cols: usize) -> Result<(), BoardError> {
        let addressable = rows
            .checked_mul(cols)
            .is_some_and(|len| len <= isize::MAX as usize);
        if rows < MIN_DIMENSION || cols < MIN_DIMENSION || !addressable {
            return Err(BoardError::InvalidDimensions { rows, cols });
        }
        Ok(())
    }

    fn empty(rows: usize, cols: usize) -> Self {
        Board {
            rows,
            cols,
            cells: vec![Cell::Empty; rows * cols],
        }
    }

    pub(crate) fn from_parts(rows: usize, cols: usize, cells: Vec<Cell>) -> Self {
        debug_assert_eq!(cells.len(), rows * cols);
        Board { rows, cols, cells }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Get the cell at a specific position.
    ///
    /// # Panics
    /// Panics if `row` or `col` is out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Cell {
        assert!(
            row < self.rows && col < self.cols,
            "cell ({row},{col}) is outside a {}x{} board",
            self.rows,
            self.cols
        );
        self.cells[self.index(row, col)]
    }

    /// Get the cell at a specific position, or `None` when out of bounds.
    pub fn try_get(&self, row: usize, col: usize) -> Option<Cell> {
        (row < self.rows && col < self.cols).then(|| self.cells[self.index(row, col)])
    }

    /// Borrow one row of the grid, left to right.
    ///
    /// # Panics
    /// Panics if `row` is out of bounds.
    pub fn row(&self, row: usize) -> &[Cell] {
        assert!(row < self.rows, "row {row} is outside a {}-row board", self.rows);
        let start = row * self.cols;
        &self.cells[start..start + self.cols]
    }

    /// Snapshot of the whole grid, row-major with row 0 on top.
    pub fn cells(&self) -> Vec<Vec<Cell>> {
        self.cells.chunks(self.cols).map(<[Cell]>::to_vec).collect()
    }

    /// A move is legal when the column exists and its top cell is empty.
    pub fn is_legal_move(&self, column: usize) -> bool {
        column < self.cols && self.cells[column] == Cell::Empty
    }

    /// Check if a column is full. Columns outside the board count as full.
    pub fn is_column_full(&self, col: usize) -> bool {
        !self.is_legal_move(col)
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        (0..self.cols).all(|col| self.is_column_full(col))
    }

    /// Legal columns in ascending order.
    pub fn legal_moves(&self) -> Vec<usize> {
        (0..self.cols).filter(|&col| self.is_legal_move(col)).collect()
    }

    /// Row a stone dropped into `col` would land in, if the move is legal.
    pub fn landing_row(&self, col: usize) -> Option<usize> {
        if !self.is_legal_move(col) {
            return None;
        }
        (0..self.rows)
            .rev()
            .find(|&row| self.cells[self.index(row, col)] == Cell::Empty)
    }

    /// Drop `mark` into `column`, returning the row where it landed.
    ///
    /// Fails without touching the board when the column is out of range or
    /// full, or when `mark` is not a player mark.
    pub fn play_move(&mut self, column: usize, mark: Cell) -> Result<usize, BoardError> {
        if !self.is_legal_move(column) {
            return Err(BoardError::IllegalMove { column });
        }
        if !mark.is_player() {
            return Err(BoardError::IllegalMark(mark));
        }

        // Find the lowest empty row in this column
        for row in (0..self.rows).rev() {
            let idx = self.index(row, column);
            if self.cells[idx] == Cell::Empty {
                self.cells[idx] = mark;
                debug!(column, row, %mark, "stone placed");
                return Ok(row);
            }
        }

        unreachable!("column {column} has an empty top cell but no empty cell");
    }

    /// Check whether the cell at (`row`, `column`) anchors four in a row.
    ///
    /// Looks at the full row, the full column and both full diagonals
    /// through the anchor, and reports a win if any of them holds four
    /// consecutive copies of the anchor's mark. The run does not have to
    /// include the anchor itself. Empty or out-of-range anchors never win.
    pub fn is_winning_sequence_at(&self, column: usize, row: usize) -> bool {
        let mark = match self.try_get(row, column) {
            Some(cell) if cell.is_player() => cell,
            _ => return false,
        };

        LINE_DIRECTIONS.iter().any(|&(dr, dc)| {
            let found = contains_run(self.line_through(row, column, dr, dc), mark);
            if found {
                debug!(column, row, %mark, direction = ?(dr, dc), "winning run found");
            }
            found
        })
    }

    /// Walk the whole line through (`row`, `col`) with step (`dr`, `dc`),
    /// starting at the grid edge behind the anchor.
    fn line_through(
        &self,
        row: usize,
        col: usize,
        dr: isize,
        dc: isize,
    ) -> impl Iterator<Item = Cell> + '_ {
        let (mut r, mut c) = (row as isize, col as isize);
        while self.in_bounds(r - dr, c - dc) {
            r -= dr;
            c -= dc;
        }

        std::iter::successors(Some((r, c)), move |&(r, c)| Some((r + dr, c + dc)))
            .take_while(move |&(r, c)| self.in_bounds(r, c))
            .map(move |(r, c)| self.cells[self.index(r as usize, c as usize)])
    }

    fn in_bounds(&self, row: isize, col: isize) -> bool {
        row >= 0 && col >= 0 && (row as usize) < self.rows && (col as usize) < self.cols
    }

    fn index(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

fn contains_run(line: impl Iterator<Item = Cell>, mark: Cell) -> bool {
    let mut run = 0;
    for cell in line {
        if cell == mark {
            run += 1;
            if run >= WIN_LENGTH {
                return true;
            }
        } else {
            run = 0;
        }
    }
    false
}

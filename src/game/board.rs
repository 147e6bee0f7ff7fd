use crate::error::MoveError;

/// Default board width (columns).
pub const DEFAULT_COLS: usize = 7;
/// Default board height (rows).
pub const DEFAULT_ROWS: usize = 6;

/// Number of contiguous same-player pieces required to win.
const WIN_LENGTH: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    One,
    Two,
}

/// A rectangular Connect Four grid with runtime-chosen dimensions.
///
/// Cells are stored row-major, bottom row first: row 0 is the bottom of the
/// board and row `height - 1` the top, so a dropped piece lands in the
/// lowest-numbered empty row of its column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Create a new empty board. Panics on zero dimensions; the config
    /// layer rejects those before construction.
    pub fn new(width: usize, height: usize) -> Self {
        assert!(width > 0 && height > 0, "board dimensions must be nonzero");
        Board {
            width,
            height,
            cells: vec![Cell::Empty; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Get the cell at a specific position. Row 0 is the bottom row.
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row * self.width + col]
    }

    fn set(&mut self, row: usize, col: usize, cell: Cell) {
        self.cells[row * self.width + col] = cell;
    }

    /// Check if a column is full. Out-of-range columns count as full.
    pub fn is_column_full(&self, col: usize) -> bool {
        if col >= self.width {
            return true;
        }
        self.get(self.height - 1, col) != Cell::Empty
    }

    /// The row a piece dropped in `col` would land in: the lowest empty row.
    pub fn landing_row(&self, col: usize) -> Result<usize, MoveError> {
        if col >= self.width {
            return Err(MoveError::OutOfRangeColumn {
                column: col,
                width: self.width,
            });
        }
        (0..self.height)
            .find(|&row| self.get(row, col) == Cell::Empty)
            .ok_or(MoveError::ColumnFull(col))
    }

    /// Drop a piece in a column, returns the row where it landed.
    pub fn drop_piece(&mut self, col: usize, cell: Cell) -> Result<usize, MoveError> {
        let row = self.landing_row(col)?;
        self.set(row, col, cell);
        Ok(row)
    }

    /// Check if the board is completely full.
    pub fn is_full(&self) -> bool {
        (0..self.width).all(|col| self.is_column_full(col))
    }

    /// Check if the last move at (row, col) resulted in a win.
    ///
    /// Only runs through the just-placed cell can complete a line, so this is
    /// equivalent to scanning the whole board for the placing player.
    pub fn check_win(&self, row: usize, col: usize) -> bool {
        let cell = self.get(row, col);
        if cell == Cell::Empty {
            return false;
        }

        self.check_line(row, col, cell, 0, 1)   // horizontal
            || self.check_line(row, col, cell, 1, 0)   // vertical
            || self.check_line(row, col, cell, 1, 1)   // diagonal /
            || self.check_line(row, col, cell, 1, -1)  // diagonal \
    }

    /// Count contiguous `cell` pieces through (row, col) along the axis
    /// (dr, dc), walking both directions from the placed piece.
    fn check_line(&self, row: usize, col: usize, cell: Cell, dr: i32, dc: i32) -> bool {
        let mut count = 1; // the placed piece itself

        for sign in [1, -1] {
            let mut r = row as i32 + dr * sign;
            let mut c = col as i32 + dc * sign;
            while r >= 0
                && r < self.height as i32
                && c >= 0
                && c < self.width as i32
                && self.get(r as usize, c as usize) == cell
            {
                count += 1;
                r += dr * sign;
                c += dc * sign;
            }
        }

        count >= WIN_LENGTH
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(DEFAULT_COLS, DEFAULT_ROWS)
    }
}

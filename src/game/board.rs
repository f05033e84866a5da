use std::fmt;

use crate::error::BoardError;

/// Standard Connect Four grid: 7 columns, 6 rows.
pub const COLS: usize = 7;
pub const ROWS: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    PlayerA,
    PlayerB,
}

/// Fixed-size grid indexed by `(column, row)`, row 0 at the bottom.
///
/// Cells are stored column-major, so a column is a contiguous slice and
/// gravity drops only ever look at one slice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Create a new empty board
    pub fn new(width: usize, height: usize) -> Result<Self, BoardError> {
        let size = match width.checked_mul(height) {
            Some(size) if size > 0 => size,
            _ => return Err(BoardError::InvalidDimensions { width, height }),
        };
        Ok(Board {
            width,
            height,
            cells: vec![Cell::Empty; size],
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Get the cell at a specific position
    /// Row 0 is the bottom, row `height - 1` is the top
    pub fn get(&self, column: usize, row: usize) -> Result<Cell, BoardError> {
        if column >= self.width || row >= self.height {
            return Err(BoardError::OutOfBounds { column, row });
        }
        Ok(self.cells[column * self.height + row])
    }

    /// Signed bounds check, so direction walks can step off the edge.
    pub fn is_in_bounds(&self, column: isize, row: isize) -> bool {
        column >= 0
            && row >= 0
            && (column as usize) < self.width
            && (row as usize) < self.height
    }

    /// Cell at signed coordinates, `None` off the board.
    pub(crate) fn cell_at(&self, column: isize, row: isize) -> Option<Cell> {
        if self.is_in_bounds(column, row) {
            Some(self.cells[column as usize * self.height + row as usize])
        } else {
            None
        }
    }

    fn column(&self, column: usize) -> &[Cell] {
        &self.cells[column * self.height..(column + 1) * self.height]
    }

    /// Number of tokens stacked in a column (0 for out-of-range columns).
    pub fn column_height(&self, column: usize) -> usize {
        if column >= self.width {
            return 0;
        }
        self.column(column)
            .iter()
            .take_while(|&&cell| cell != Cell::Empty)
            .count()
    }

    /// Empty every cell, keeping the shape.
    pub(crate) fn clear(&mut self) {
        self.cells.fill(Cell::Empty);
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&cell| cell != Cell::Empty)
    }

    /// True iff `column` is on the board and still has an empty cell.
    /// Out-of-range columns are reported as invalid, never as an error.
    pub fn is_valid_move(&self, column: usize) -> bool {
        column < self.width && self.column(column).contains(&Cell::Empty)
    }

    /// Columns that can still take a token, ascending.
    pub fn legal_columns(&self) -> Vec<usize> {
        (0..self.width)
            .filter(|&col| self.is_valid_move(col))
            .collect()
    }

    /// Drop a token into `column`, returning the row where it landed.
    /// Invalid moves leave the board untouched and return `None`.
    pub fn apply_move(&mut self, column: usize, cell: Cell) -> Option<usize> {
        if !self.is_valid_move(column) {
            return None;
        }

        // Lowest empty row; unique because columns fill bottom-up.
        let row = self.column_height(column);
        self.cells[column * self.height + row] = cell;
        Some(row)
    }
}

impl Default for Board {
    fn default() -> Self {
        Board {
            width: COLS,
            height: ROWS,
            cells: vec![Cell::Empty; COLS * ROWS],
        }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (0..self.height).rev() {
            for col in 0..self.width {
                let symbol = match self.cells[col * self.height + row] {
                    Cell::Empty => '.',
                    Cell::PlayerA => 'A',
                    Cell::PlayerB => 'B',
                };
                if col > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{symbol}")?;
            }
            writeln!(f)?;
        }
        for col in 0..self.width {
            if col > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", col % 10)?;
        }
        Ok(())
    }
}

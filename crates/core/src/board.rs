//! Board module - the 22x10 play field
//!
//! Each row is its own fixed-size array, so rows never share storage and
//! mutating one row can never leak into another. Updates are copy-on-write:
//! [`Board::with_cell`] and friends return a new board and leave `self` alone.
//!
//! Coordinates are `(row, col)`; row 0 is the top. Out-of-range coordinates are
//! programming errors and panic; collision checks keep normal play in range.

use serde::{Deserialize, Serialize};

use crate::types::{Cell, Color, Coord, BOARD_COLS, BOARD_ROWS};

/// One board row
pub type Row = [Cell; BOARD_COLS];

/// A row with no blocks
pub const EMPTY_ROW: Row = [None; BOARD_COLS];

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    rows: [Row; BOARD_ROWS],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            rows: [EMPTY_ROW; BOARD_ROWS],
        }
    }

    /// Build a board from rows, top to bottom.
    ///
    /// Panics unless exactly `BOARD_ROWS` rows are supplied.
    pub fn from_rows<I>(rows: I) -> Self
    where
        I: IntoIterator<Item = Row>,
    {
        let mut board = Self::new();
        let mut count = 0usize;
        for (slot, row) in board.rows.iter_mut().zip(rows) {
            *slot = row;
            count += 1;
        }
        assert_eq!(count, BOARD_ROWS, "board needs exactly {} rows", BOARD_ROWS);
        board
    }

    pub fn rows(&self) -> &[Row; BOARD_ROWS] {
        &self.rows
    }

    pub fn row(&self, row: usize) -> &Row {
        &self.rows[row]
    }

    pub fn height(&self) -> usize {
        BOARD_ROWS
    }

    pub fn width(&self) -> usize {
        BOARD_COLS
    }

    /// Cell at `(row, col)`
    pub fn cell(&self, row: usize, col: usize) -> Cell {
        self.rows[row][col]
    }

    /// Cell at a signed coordinate; `None` when out of range
    pub fn get(&self, (row, col): Coord) -> Option<Cell> {
        if Self::in_bounds((row, col)) {
            Some(self.rows[row as usize][col as usize])
        } else {
            None
        }
    }

    pub fn in_bounds((row, col): Coord) -> bool {
        row >= 0 && (row as usize) < BOARD_ROWS && col >= 0 && (col as usize) < BOARD_COLS
    }

    /// In range and filled
    pub fn is_occupied(&self, pos: Coord) -> bool {
        matches!(self.get(pos), Some(Some(_)))
    }

    /// In range and empty
    pub fn is_vacant(&self, pos: Coord) -> bool {
        matches!(self.get(pos), Some(None))
    }

    /// New board with `(row, col)` set to `value`
    #[must_use]
    pub fn with_cell(&self, row: usize, col: usize, value: Cell) -> Self {
        let mut next = self.clone();
        next.rows[row][col] = value;
        next
    }

    /// New board with every listed cell set to `value`
    #[must_use]
    pub fn with_cells(&self, cells: &[Coord], value: Cell) -> Self {
        let mut next = self.clone();
        for &(row, col) in cells {
            debug_assert!(Self::in_bounds((row, col)), "cell ({row}, {col}) out of range");
            next.rows[row as usize][col as usize] = value;
        }
        next
    }

    /// Move a piece: clear `from`, then paint `to` with `color`.
    #[must_use]
    pub fn with_piece_moved(&self, from: &[Coord], to: &[Coord], color: Color) -> Self {
        self.with_cells(from, None).with_cells_painted(to, color)
    }

    fn with_cells_painted(mut self, cells: &[Coord], color: Color) -> Self {
        for &(row, col) in cells {
            debug_assert!(Self::in_bounds((row, col)), "cell ({row}, {col}) out of range");
            self.rows[row as usize][col as usize] = Some(color);
        }
        self
    }

    /// True iff every cell in the row is filled
    pub fn is_row_full(&self, row: usize) -> bool {
        self.rows[row].iter().all(Option::is_some)
    }

    pub fn is_row_empty(&self, row: usize) -> bool {
        row_is_empty(&self.rows[row])
    }

    pub fn is_empty(&self) -> bool {
        self.rows.iter().all(row_is_empty)
    }

    /// Number of filled cells
    pub fn filled_count(&self) -> usize {
        self.rows.iter().flatten().filter(|c| c.is_some()).count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

pub fn row_is_empty(row: &Row) -> bool {
    row.iter().all(Option::is_none)
}

/// A row filled with `color` everywhere except the listed columns
pub fn row_with_gaps(color: Color, gaps: &[usize]) -> Row {
    let mut row = [Some(color); BOARD_COLS];
    for &col in gaps {
        row[col] = None;
    }
    row
}

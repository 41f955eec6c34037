//! Line clear module - partition rows into kept and cleared
//!
//! Rows are scanned top to bottom. Full rows are dropped and their indices
//! recorded; the rest keep their order. The new board is one fresh empty row per
//! cleared row, followed by the kept rows, so the stack settles downward.

use arrayvec::ArrayVec;

use crate::board::{Board, Row, EMPTY_ROW};
use crate::types::BOARD_ROWS;

/// Result of [`remove_cleared_lines`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineClear {
    pub board: Board,
    /// Indices of the removed rows, ascending
    pub cleared: ArrayVec<usize, BOARD_ROWS>,
    /// Rows that survived, in original order
    pub remaining: ArrayVec<Row, BOARD_ROWS>,
}

impl LineClear {
    pub fn count(&self) -> usize {
        self.cleared.len()
    }

    pub fn is_noop(&self) -> bool {
        self.cleared.is_empty()
    }
}

pub fn remove_cleared_lines(board: &Board) -> LineClear {
    let mut cleared = ArrayVec::new();
    let mut remaining = ArrayVec::new();

    for (index, row) in board.rows().iter().enumerate() {
        if board.is_row_full(index) {
            cleared.push(index);
        } else {
            remaining.push(*row);
        }
    }

    let board = if cleared.is_empty() {
        board.clone()
    } else {
        Board::from_rows(
            std::iter::repeat(EMPTY_ROW)
                .take(cleared.len())
                .chain(remaining.iter().copied()),
        )
    };

    LineClear {
        board,
        cleared,
        remaining,
    }
}

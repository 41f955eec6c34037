//! Collision module - extremal probes and wall/floor/stack tests
//!
//! Instead of testing every mino, a move only needs the minos at the leading
//! edge: the lowest mino of each column when falling, the outermost mino of each
//! row when shifting sideways. Those probes never have a cell of their own piece
//! in front of them, which lets the board keep the falling piece painted in.

use arrayvec::ArrayVec;

use crate::board::Board;
use crate::types::{Coord, Direction, LAST_COL, LAST_ROW};

/// Leading-edge minos of a piece (at most one per column/row of a 4-cell piece)
pub type Probes = ArrayVec<Coord, 4>;

/// For each column (down) or row (left/right) the piece touches, the single
/// coordinate furthest along `direction`.
pub fn extremal_coordinates(cells: &[Coord], direction: Direction) -> Probes {
    let mut probes = Probes::new();
    for &(row, col) in cells {
        let same_line = |&(r, c): &Coord| match direction {
            Direction::Down => c == col,
            Direction::Left | Direction::Right => r == row,
        };
        match probes.iter().position(same_line) {
            Some(i) if is_ahead((row, col), probes[i], direction) => probes[i] = (row, col),
            Some(_) => {}
            None => probes.push((row, col)),
        }
    }
    probes
}

fn is_ahead((row, col): Coord, (pr, pc): Coord, direction: Direction) -> bool {
    match direction {
        Direction::Down => row > pr,
        Direction::Left => col < pc,
        Direction::Right => col > pc,
    }
}

/// True if a probe sits on the boundary for `direction`, or the next cell that
/// way is filled.
pub fn would_collide(probes: &[Coord], board: &Board, direction: Direction) -> bool {
    let (dr, dc) = direction.delta();
    probes.iter().any(|&(row, col)| {
        let at_edge = match direction {
            Direction::Down => row >= LAST_ROW,
            Direction::Left => col <= 0,
            Direction::Right => col >= LAST_COL,
        };
        at_edge || board.is_occupied((row + dr, col + dc))
    })
}

/// Extremal probes plus collision test in one call
pub fn blocked(cells: &[Coord], board: &Board, direction: Direction) -> bool {
    would_collide(&extremal_coordinates(cells, direction), board, direction)
}

/// Shift every cell one step along `direction`
pub fn shifted(cells: &[Coord; 4], direction: Direction) -> [Coord; 4] {
    let (dr, dc) = direction.delta();
    cells.map(|(row, col)| (row + dr, col + dc))
}

/// Where `cells` come to rest if dropped straight down on `board`.
///
/// Iterates until the leading edge is blocked, so the result is the true
/// landing position rather than a single step.
pub fn drop_preview(cells: &[Coord; 4], board: &Board) -> [Coord; 4] {
    let mut current = *cells;
    while !blocked(&current, board, Direction::Down) {
        current = shifted(&current, Direction::Down);
    }
    current
}

//! Four-in-a-row detection.
//!
//! Every cell is tried as the start of a line in each of four directions, so
//! overlapping windows are checked more than once. The board is small enough
//! that this runs after every move without tracking the last placement.

use super::board::{Board, Cell, COLS, ROWS};
use super::player::Player;

/// Length of a winning line
pub const CONNECT: usize = 4;

/// Step applied from a line's start cell, as (row_step, col_step).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Vertical,
    Horizontal,
    DiagonalDownRight,
    DiagonalDownLeft,
}

impl Direction {
    /// Scan order used by [`winning_line`]
    pub const ALL: [Direction; 4] = [
        Direction::Vertical,
        Direction::Horizontal,
        Direction::DiagonalDownRight,
        Direction::DiagonalDownLeft,
    ];

    pub fn step(self) -> (isize, isize) {
        match self {
            Direction::Vertical => (1, 0),
            Direction::Horizontal => (0, 1),
            Direction::DiagonalDownRight => (1, 1),
            Direction::DiagonalDownLeft => (1, -1),
        }
    }
}

/// True if `player` owns four consecutive slots in any direction.
pub fn has_won(board: &Board, player: Player) -> bool {
    winning_line(board, player).is_some()
}

/// First winning line for `player`, scanning directions in [`Direction::ALL`]
/// order and start cells in row-major order.
pub fn winning_line(board: &Board, player: Player) -> Option<[(usize, usize); CONNECT]> {
    Direction::ALL.iter().find_map(|&direction| {
        Board::positions().find_map(|(row, col)| line_from(board, row, col, direction, player))
    })
}

/// The four cells starting at (row, col) if all are on the board and hold `player`
fn line_from(
    board: &Board,
    row: usize,
    col: usize,
    direction: Direction,
    player: Player,
) -> Option<[(usize, usize); CONNECT]> {
    let (row_step, col_step) = direction.step();
    let mut line = [(0, 0); CONNECT];

    for (k, slot) in line.iter_mut().enumerate() {
        let r = row as isize + k as isize * row_step;
        let c = col as isize + k as isize * col_step;
        if r < 0 || r >= ROWS as isize || c < 0 || c >= COLS as isize {
            return None;
        }
        let (r, c) = (r as usize, c as usize);
        if board.slot_at(r, c) != Some(Cell::Occupied(player)) {
            return None;
        }
        *slot = (r, c);
    }

    Some(line)
}

//! Core Connect Four logic: the board with gravity-drop placement, the
//! four-direction win scan, and the per-round state machine.

mod board;
mod player;
mod round;
pub mod win;

pub use board::{Board, Cell, COLS, ROWS};
pub use player::Player;
pub use round::{Placement, Round, RoundState};
pub use win::{has_won, winning_line};

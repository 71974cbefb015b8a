use rand::RngCore;

use crate::game::Board;

/// A move-selection policy for the computer side.
pub trait Agent {
    /// Pick a column to play, or `None` if the board has no legal column.
    /// Any randomness comes from `rng`; agents hold no generator of their own.
    fn select_column(&mut self, board: &Board, rng: &mut dyn RngCore) -> Option<usize>;

    /// Return the agent's display name.
    fn name(&self) -> &str;
}

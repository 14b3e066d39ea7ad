// Bot trait for computer opponents

use crate::game::Board;

/// Trait for computer opponent implementations
///
/// A bot is handed the board on every frame of its own turn and drives it
/// through the same placement and shot operations a human uses.
pub trait Bot {
    /// Play this frame for the acting player
    ///
    /// # Arguments
    /// * `board` - The board, borrowed for this frame only
    fn act(&mut self, board: &mut Board);

    /// Reset bot internal state (called on rematch)
    fn reset(&mut self);

    /// Bot name for debugging/display
    fn name(&self) -> &str;
}

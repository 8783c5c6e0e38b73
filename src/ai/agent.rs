use crate::game::Board;

/// Universal interface for move-selecting opponents.
pub trait Agent {
    /// Pick a column for the side to move, or `None` when the board has no
    /// playable column (already decided or full).
    fn select_move(&mut self, board: &Board) -> Option<usize>;

    /// Return the agent's display name.
    fn name(&self) -> &str;
}

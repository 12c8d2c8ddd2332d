//! Change notification for board observers.
//!
//! A board keeps its observers in registration order and calls each one
//! synchronously, exactly once, after every state-changing operation.
//! Snapshots never inherit observers, so speculative play stays silent.

use super::contract::ReadOnlyBoard;

pub trait BoardObserver {
    /// Called after a placement, a pass, or a skipped turn.
    fn on_board_changed(&mut self, board: &dyn ReadOnlyBoard);

    /// Called once when the game is started.
    fn on_game_started(&mut self, board: &dyn ReadOnlyBoard) {
        let _ = board;
    }
}

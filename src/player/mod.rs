//! Player adapters.
//!
//! A player turns "the user picked this cell" or "it is your turn" into a
//! `Move` for whoever drives the game. Human players echo the picked cell;
//! AI players ignore it and consult their strategy.

use tracing::debug;

use crate::board::{Coord, Move, Occupancy, ReadOnlyBoard};
use crate::strategy::Strategy;

pub trait Player {
    fn color(&self) -> Occupancy;

    /// The move this player makes when `at` is picked.
    fn play(&self, board: &dyn ReadOnlyBoard, at: Coord) -> Move;

    fn pass(&self) -> Move {
        Move::pass(self.color())
    }

    fn is_player_turn(&self, board: &dyn ReadOnlyBoard) -> bool {
        board.current_player() == self.color()
    }

    /// A move chosen without outside input, or `None` when the move has to
    /// come from the user.
    fn propose(&self, board: &dyn ReadOnlyBoard) -> Option<Move> {
        let _ = board;
        None
    }

    fn is_human(&self) -> bool {
        false
    }
}

#[derive(Debug, Clone, Copy)]
pub struct HumanPlayer {
    color: Occupancy,
}

impl HumanPlayer {
    pub fn new(color: Occupancy) -> Self {
        HumanPlayer { color }
    }
}

impl Player for HumanPlayer {
    fn color(&self) -> Occupancy {
        self.color
    }

    fn play(&self, _board: &dyn ReadOnlyBoard, at: Coord) -> Move {
        Move::Place { at, player: self.color }
    }

    fn is_human(&self) -> bool {
        true
    }
}

/// A player backed by a strategy. When the strategy finds nothing the player
/// passes.
pub struct AiPlayer {
    color: Occupancy,
    strategy: Box<dyn Strategy>,
}

impl AiPlayer {
    pub fn new(color: Occupancy, strategy: Box<dyn Strategy>) -> Self {
        AiPlayer { color, strategy }
    }

    pub fn strategy(&self) -> &dyn Strategy {
        self.strategy.as_ref()
    }

    /// Asks the strategy for a move on `board`.
    pub fn next_move(&self, board: &dyn ReadOnlyBoard) -> Move {
        match self.strategy.choose_move(board, self.color) {
            Ok(mv) => mv,
            Err(e) => {
                debug!(player = %self.color, strategy = %self.strategy.name(), error = %e, "passing");
                Move::pass(self.color)
            }
        }
    }
}

impl Player for AiPlayer {
    fn color(&self) -> Occupancy {
        self.color
    }

    fn play(&self, board: &dyn ReadOnlyBoard, _at: Coord) -> Move {
        self.next_move(board)
    }

    fn propose(&self, board: &dyn ReadOnlyBoard) -> Option<Move> {
        Some(self.next_move(board))
    }
}

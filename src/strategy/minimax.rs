//! One-ply opponent modelling.
//!
//! Asks an assumed opponent strategy what it would play if it were on move,
//! then keeps only the mover's placements that take that cell or make the
//! predicted move illegal. The survivors are ranked like `Aggressive`.
//! With no predicted reply there is nothing to block and the strategy fails.

use tracing::debug;

use super::{ensure_turn, most_gaining, Strategy, StrategyError};
use crate::board::{Coord, Move, MutableBoard, Occupancy, ReadOnlyBoard};
use crate::movegen::legal_moves;

pub struct Minimax {
    opponent: Box<dyn Strategy>,
}

impl Minimax {
    pub fn new(opponent: impl Strategy + 'static) -> Self {
        Minimax {
            opponent: Box::new(opponent),
        }
    }

    pub fn boxed(opponent: Box<dyn Strategy>) -> Self {
        Minimax { opponent }
    }

    /// The move the assumed opponent would make if handed the turn now.
    pub fn predict(
        &self,
        board: &dyn ReadOnlyBoard,
        player: Occupancy,
    ) -> Result<Move, StrategyError> {
        let other = player.opponent().ok_or(crate::board::BoardError::NoPlayer)?;
        let mut probe = board.mutable_copy();
        if probe.current_player() != other {
            probe.skip_turn()?;
        }
        self.opponent.choose_move(&probe, other)
    }

    /// True when playing `at` takes the predicted cell or leaves the
    /// predicted move illegal for the opponent.
    fn blocks(
        board: &dyn ReadOnlyBoard,
        at: Coord,
        player: Occupancy,
        predicted: &Move,
    ) -> Result<bool, StrategyError> {
        if predicted.coord() == Some(at) {
            return Ok(true);
        }
        let mut probe = board.mutable_copy();
        probe.play(at, player)?;
        Ok(probe.apply(predicted).is_err())
    }
}

impl Strategy for Minimax {
    fn choose_move(
        &self,
        board: &dyn ReadOnlyBoard,
        player: Occupancy,
    ) -> Result<Move, StrategyError> {
        ensure_turn(board, player)?;
        let legal = legal_moves(board, player);
        if legal.is_empty() {
            return Err(StrategyError::NoLegalMove { player });
        }

        let predicted = self.predict(board, player)?;
        debug!(strategy = "minimax", %player, %predicted, "predicted reply");
        let mut candidates = Vec::new();
        for &at in &legal {
            if Self::blocks(board, at, player, &predicted)? {
                candidates.push(at);
            }
        }

        let at = most_gaining(board, player, &candidates)?
            .ok_or(StrategyError::NoCandidate { strategy: "minimax", player })?;
        debug!(strategy = "minimax", %player, %at, candidates = candidates.len(), "chose move");
        Ok(Move::Place { at, player })
    }

    fn name(&self) -> String {
        format!("minimax({})", self.opponent.name())
    }
}

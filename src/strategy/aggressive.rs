//! Greedy capture maximisation.

use tracing::debug;

use super::{ensure_turn, most_gaining, Strategy, StrategyError};
use crate::board::{Move, Occupancy, ReadOnlyBoard};
use crate::movegen::legal_moves;

/// Plays whichever legal placement gains the most cells, upper-left first on
/// ties.
#[derive(Debug, Clone, Copy, Default)]
pub struct Aggressive;

impl Strategy for Aggressive {
    fn choose_move(
        &self,
        board: &dyn ReadOnlyBoard,
        player: Occupancy,
    ) -> Result<Move, StrategyError> {
        ensure_turn(board, player)?;
        let legal = legal_moves(board, player);
        let at = most_gaining(board, player, &legal)?
            .ok_or(StrategyError::NoLegalMove { player })?;
        debug!(strategy = "aggressive", %player, %at, candidates = legal.len(), "chose move");
        Ok(Move::Place { at, player })
    }

    fn name(&self) -> String {
        "aggressive".to_string()
    }
}

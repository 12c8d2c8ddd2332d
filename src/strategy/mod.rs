//! Move selection policies.
//!
//! A strategy looks at a read-only board and the color it plays for and
//! returns exactly one placement, or an error meaning "no move under this
//! policy". Strategies never touch the board they are handed; anything
//! speculative happens on `mutable_copy` snapshots.

pub mod aggressive;
pub mod corners;
pub mod fallback;
pub mod minimax;

pub use aggressive::Aggressive;
pub use corners::{AvoidCorners, GoForCorners};
pub use fallback::Fallback;
pub use minimax::Minimax;

use crate::board::{BoardError, Coord, ErrorKind, Move, Occupancy, ReadOnlyBoard};
use crate::eval::score_gain;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StrategyError {
    #[error("it's not {player}'s turn")]
    NotYourTurn { player: Occupancy },

    #[error("{player} has no legal move")]
    NoLegalMove { player: Occupancy },

    #[error("{strategy} found no candidate move for {player}")]
    NoCandidate { strategy: &'static str, player: Occupancy },

    #[error("no move available, {player} must pass")]
    Exhausted { player: Occupancy },

    #[error(transparent)]
    Board(#[from] BoardError),
}

impl StrategyError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            StrategyError::Board(e) => e.kind(),
            _ => ErrorKind::RuleViolation,
        }
    }
}

pub trait Strategy: Send + Sync {
    /// Picks a placement for `player`, who must be the side to move.
    fn choose_move(
        &self,
        board: &dyn ReadOnlyBoard,
        player: Occupancy,
    ) -> Result<Move, StrategyError>;

    /// Short label used in logs.
    fn name(&self) -> String;
}

impl<S: Strategy + ?Sized> Strategy for Box<S> {
    fn choose_move(
        &self,
        board: &dyn ReadOnlyBoard,
        player: Occupancy,
    ) -> Result<Move, StrategyError> {
        (**self).choose_move(board, player)
    }

    fn name(&self) -> String {
        (**self).name()
    }
}

/// Rejects the empty sentinel and colors that are not on move.
pub(crate) fn ensure_turn(board: &dyn ReadOnlyBoard, player: Occupancy) -> Result<(), StrategyError> {
    if !player.is_player() {
        return Err(BoardError::NoPlayer.into());
    }
    if board.current_player() != player {
        return Err(StrategyError::NotYourTurn { player });
    }
    Ok(())
}

/// The candidate with the largest score gain. Ties go to the smaller
/// coordinate in (r, q) order.
pub(crate) fn most_gaining(
    board: &dyn ReadOnlyBoard,
    player: Occupancy,
    candidates: &[Coord],
) -> Result<Option<Coord>, StrategyError> {
    let mut best: Option<(Coord, usize)> = None;
    for &coord in candidates {
        let gain = score_gain(board, coord, player)?;
        let better = match best {
            None => true,
            Some((at, most)) => gain > most || (gain == most && coord < at),
        };
        if better {
            best = Some((coord, gain));
        }
    }
    Ok(best.map(|(coord, _)| coord))
}

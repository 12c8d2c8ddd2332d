//! Board engine errors.

use super::coord::Coord;
use super::geometry::Topology;
use super::occupancy::Occupancy;

/// The two failure families of the board engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Input that can never be legal, whatever the game state.
    InvalidArgument,
    /// Well-formed input that the current game state does not allow.
    RuleViolation,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("{coord} is not a cell on this board")]
    OffBoard { coord: Coord },

    #[error("a player color is required, got the empty sentinel")]
    NoPlayer,

    #[error("board size {size} is not valid for a {topology} board")]
    InvalidSize { topology: Topology, size: i32 },

    #[error("the game has been ended")]
    GameOver,

    #[error("it's not {player}'s turn")]
    NotYourTurn { player: Occupancy },

    #[error("{coord} is already occupied")]
    Occupied { coord: Coord },

    #[error("placing at {coord} captures nothing")]
    NoCapture { coord: Coord },
}

impl BoardError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            BoardError::OffBoard { .. } | BoardError::NoPlayer | BoardError::InvalidSize { .. } => {
                ErrorKind::InvalidArgument
            }
            BoardError::GameOver
            | BoardError::NotYourTurn { .. }
            | BoardError::Occupied { .. }
            | BoardError::NoCapture { .. } => ErrorKind::RuleViolation,
        }
    }

    pub fn is_rule_violation(&self) -> bool {
        self.kind() == ErrorKind::RuleViolation
    }
}

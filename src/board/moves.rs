//! Move values.
//!
//! A move is what a player hands back to whoever drives the game: either a
//! placement at a coordinate or a pass. Moves carry the mover's color and are
//! never modified after construction.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::coord::Coord;
use super::occupancy::Occupancy;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Move {
    /// Place a piece at `at`.
    Place { at: Coord, player: Occupancy },
    /// Give up the turn.
    Pass { player: Occupancy },
}

impl Move {
    pub fn place(q: i32, r: i32, player: Occupancy) -> Self {
        Move::Place { at: Coord::new(q, r), player }
    }

    pub fn pass(player: Occupancy) -> Self {
        Move::Pass { player }
    }

    pub fn player(&self) -> Occupancy {
        match *self {
            Move::Place { player, .. } | Move::Pass { player } => player,
        }
    }

    /// The target cell, or `None` for a pass.
    pub fn coord(&self) -> Option<Coord> {
        match *self {
            Move::Place { at, .. } => Some(at),
            Move::Pass { .. } => None,
        }
    }

    pub fn is_pass(&self) -> bool {
        matches!(self, Move::Pass { .. })
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Move::Place { at, player } => write!(f, "{} plays {}", player, at),
            Move::Pass { player } => write!(f, "{} passes", player),
        }
    }
}

//! Cell occupancy and player colors.

use std::fmt;

use serde::{Deserialize, Serialize};

/// What sits on an on-board cell. Also used to name a player; `Empty` is
/// the "no player" sentinel and is rejected wherever a player is required.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Occupancy {
    Black,
    White,
    Empty,
}

impl Occupancy {
    /// Returns the other color. `Empty` has no opponent.
    pub const fn opponent(self) -> Option<Occupancy> {
        match self {
            Occupancy::Black => Some(Occupancy::White),
            Occupancy::White => Some(Occupancy::Black),
            Occupancy::Empty => None,
        }
    }

    /// Returns true for `Black` and `White`.
    pub const fn is_player(self) -> bool {
        !matches!(self, Occupancy::Empty)
    }
}

impl fmt::Display for Occupancy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Occupancy::Black => "black",
            Occupancy::White => "white",
            Occupancy::Empty => "empty",
        };
        f.write_str(name)
    }
}

/// Both player colors in turn order.
pub const PLAYERS: [Occupancy; 2] = [Occupancy::Black, Occupancy::White];

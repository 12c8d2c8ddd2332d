//! Board representation and game-state types.
//!
//! Contains coordinates, topologies, the occupancy and move values, the
//! read-only and mutable board contracts, and the board engine itself.

pub mod contract;
pub mod coord;
pub mod error;
pub mod geometry;
pub mod moves;
pub mod observer;
pub mod occupancy;
pub mod state;

pub use contract::{MutableBoard, ReadOnlyBoard};
pub use coord::Coord;
pub use error::{BoardError, ErrorKind};
pub use geometry::{Geometry, Topology, HEX_DIRECTIONS, SQUARE_DIRECTIONS};
pub use moves::Move;
pub use observer::BoardObserver;
pub use occupancy::{Occupancy, PLAYERS};
pub use state::{Board, Termination};

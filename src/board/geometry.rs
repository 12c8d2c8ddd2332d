//! Board topologies.
//!
//! A `Geometry` is the only thing that differs between a hexagonal and a
//! square board: which grid positions exist, which direction vectors a
//! capture scan walks, where the opening pieces go, and which cells count as
//! corners. The board engine is written once against this value.
//!
//! Hexagonal boards use axial coordinates stored in a `(2n-1)` by `(2n-1)`
//! grid. The upper-left and lower-right triangles of that grid are off the
//! board; a position is on the board iff `n-1 <= q+r <= 3(n-1)`.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::coord::Coord;
use super::error::BoardError;
use super::occupancy::Occupancy;

/// The six axial neighbours: up-left, up-right, right, down-right,
/// down-left, left.
pub const HEX_DIRECTIONS: [Coord; 6] = [
    Coord::new(0, -1),
    Coord::new(1, -1),
    Coord::new(1, 0),
    Coord::new(0, 1),
    Coord::new(-1, 1),
    Coord::new(-1, 0),
];

/// Orthogonal and diagonal neighbours on a square grid.
pub const SQUARE_DIRECTIONS: [Coord; 8] = [
    Coord::new(-1, -1),
    Coord::new(1, -1),
    Coord::new(1, 0),
    Coord::new(-1, 1),
    Coord::new(1, 1),
    Coord::new(-1, 0),
    Coord::new(0, -1),
    Coord::new(0, 1),
];

/// The shape of the playing surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Topology {
    Hexagon,
    Square,
}

impl Topology {
    /// Parses a topology name as accepted on the command line.
    pub fn from_name(name: &str) -> Option<Topology> {
        match name.to_ascii_lowercase().as_str() {
            "hexagon" | "hex" => Some(Topology::Hexagon),
            "square" => Some(Topology::Square),
            _ => None,
        }
    }
}

impl fmt::Display for Topology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Topology::Hexagon => f.write_str("hexagon"),
            Topology::Square => f.write_str("square"),
        }
    }
}

/// A validated topology and size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Geometry {
    topology: Topology,
    size: i32,
}

impl Geometry {
    /// Smallest hexagonal side length that fits the opening ring.
    pub const MIN_HEX_SIZE: i32 = 3;
    /// Smallest square side length with room around the opening block.
    pub const MIN_SQUARE_SIZE: i32 = 4;

    /// Creates a geometry, rejecting sizes the topology cannot lay out.
    /// Square boards must have an even side length.
    pub fn new(topology: Topology, size: i32) -> Result<Self, BoardError> {
        let ok = match topology {
            Topology::Hexagon => size >= Self::MIN_HEX_SIZE,
            Topology::Square => size >= Self::MIN_SQUARE_SIZE && size % 2 == 0,
        };
        if !ok {
            return Err(BoardError::InvalidSize { topology, size });
        }
        Ok(Geometry { topology, size })
    }

    pub fn hexagon(size: i32) -> Result<Self, BoardError> {
        Self::new(Topology::Hexagon, size)
    }

    pub fn square(size: i32) -> Result<Self, BoardError> {
        Self::new(Topology::Square, size)
    }

    pub fn topology(&self) -> Topology {
        self.topology
    }

    pub fn size(&self) -> i32 {
        self.size
    }

    /// Width (and height) of the backing grid.
    pub fn array_width(&self) -> i32 {
        match self.topology {
            Topology::Hexagon => self.size * 2 - 1,
            Topology::Square => self.size,
        }
    }

    /// Returns true if `coord` is a real cell of this board.
    pub fn contains(&self, coord: Coord) -> bool {
        let width = self.array_width();
        if coord.q < 0 || coord.r < 0 || coord.q >= width || coord.r >= width {
            return false;
        }
        match self.topology {
            Topology::Hexagon => {
                let n = self.size - 1;
                let sum = coord.q + coord.r;
                sum >= n && sum <= 3 * n
            }
            Topology::Square => true,
        }
    }

    /// Row-major index into the backing grid, or `None` off the grid.
    pub fn index(&self, coord: Coord) -> Option<usize> {
        if self.contains(coord) {
            Some((coord.r * self.array_width() + coord.q) as usize)
        } else {
            None
        }
    }

    /// Number of slots in the backing grid, including off-board ones.
    pub fn grid_len(&self) -> usize {
        let width = self.array_width() as usize;
        width * width
    }

    /// Direction vectors walked by capture scans.
    pub fn directions(&self) -> &'static [Coord] {
        match self.topology {
            Topology::Hexagon => &HEX_DIRECTIONS,
            Topology::Square => &SQUARE_DIRECTIONS,
        }
    }

    /// All on-board coordinates, upper-left first.
    pub fn cells(&self) -> impl Iterator<Item = Coord> + '_ {
        let width = self.array_width();
        (0..width)
            .flat_map(move |r| (0..width).map(move |q| Coord::new(q, r)))
            .filter(move |c| self.contains(*c))
    }

    /// The opening pieces.
    ///
    /// Hexagonal boards get a ring of six alternating pieces around the
    /// centre cell, which stays empty. Square boards get the usual 2x2 block
    /// with matching colors on the diagonals.
    pub fn starting_layout(&self) -> Vec<(Coord, Occupancy)> {
        match self.topology {
            Topology::Hexagon => {
                let m = self.size - 1;
                vec![
                    (Coord::new(m, m - 1), Occupancy::Black),
                    (Coord::new(m + 1, m - 1), Occupancy::White),
                    (Coord::new(m - 1, m), Occupancy::White),
                    (Coord::new(m + 1, m), Occupancy::Black),
                    (Coord::new(m - 1, m + 1), Occupancy::Black),
                    (Coord::new(m, m + 1), Occupancy::White),
                ]
            }
            Topology::Square => {
                let h = self.size / 2;
                vec![
                    (Coord::new(h - 1, h - 1), Occupancy::Black),
                    (Coord::new(h - 1, h), Occupancy::White),
                    (Coord::new(h, h), Occupancy::Black),
                    (Coord::new(h, h - 1), Occupancy::White),
                ]
            }
        }
    }

    /// The four corner cells used by the corner-aware strategies.
    pub fn corners(&self) -> [Coord; 4] {
        let n = self.size;
        match self.topology {
            Topology::Hexagon => [
                Coord::new(n - 1, 0),
                Coord::new(2 * n - 2, 0),
                Coord::new(0, 2 * n - 2),
                Coord::new(n - 1, 2 * n - 2),
            ],
            Topology::Square => [
                Coord::new(0, 0),
                Coord::new(n - 1, 0),
                Coord::new(0, n - 1),
                Coord::new(n - 1, n - 1),
            ],
        }
    }

    pub fn is_corner(&self, coord: Coord) -> bool {
        self.corners().contains(&coord)
    }
}

//! Axial coordinate pairs.
//!
//! A `Coord` is used both as an absolute board position and as a direction
//! vector for line scans. Ordering is row-major, so the smallest coordinate
//! is the upper-leftmost cell.

use std::cmp::Ordering;
use std::fmt;
use std::ops::Add;

use serde::{Deserialize, Serialize};

/// A (q, r) pair. `q` is the column, `r` the row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coord {
    pub q: i32,
    pub r: i32,
}

impl Coord {
    pub const fn new(q: i32, r: i32) -> Self {
        Coord { q, r }
    }

    /// Returns true if `other` lies in the 8-neighbourhood of this coordinate
    /// (orthogonal or diagonal, distance one). A coordinate is not adjacent
    /// to itself.
    pub fn touches(self, other: Coord) -> bool {
        let dq = (self.q - other.q).abs();
        let dr = (self.r - other.r).abs();
        self != other && dq <= 1 && dr <= 1
    }
}

impl Add for Coord {
    type Output = Coord;

    fn add(self, rhs: Coord) -> Coord {
        Coord::new(self.q + rhs.q, self.r + rhs.r)
    }
}

impl Ord for Coord {
    fn cmp(&self, other: &Self) -> Ordering {
        self.r.cmp(&other.r).then(self.q.cmp(&other.q))
    }
}

impl PartialOrd for Coord {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(q={},r={})", self.q, self.r)
    }
}

impl From<(i32, i32)> for Coord {
    fn from((q, r): (i32, i32)) -> Self {
        Coord::new(q, r)
    }
}

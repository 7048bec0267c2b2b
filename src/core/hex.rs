//! Axial hex-grid coordinates.
//!
//! The board uses the standard axial system: every cell is addressed by
//! `(q, r)` and the third cube coordinate is implied (`s = -q - r`).
//!
//! ## Neighbour Order
//!
//! The six neighbour offsets are listed in a fixed anticlockwise cycle:
//!
//! ```text
//!        [ 0,-1]  /\   [ 1,-1]
//!               /    \
//!     [-1, 0] | [0, 0] | [ 1, 0]
//!               \    /
//!        [-1, 1]  \/   [ 0, 1]
//! ```
//!
//! The exposed-edge rule looks for three *consecutive* free neighbours, so
//! the order of [`AXIAL_DIRECTIONS`] is load-bearing.
//!
//! ```
//! use hexgarden::core::Axial;
//!
//! let origin = Axial::new(0, 0);
//! let east = origin.neighbor(0);
//! assert_eq!(east, Axial::new(1, 0));
//! assert_eq!(origin.distance(Axial::new(2, -1)), 2);
//! ```

use serde::{Deserialize, Serialize};

/// A cell on the hex board in axial coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Axial {
    pub q: i32,
    pub r: i32,
}

/// Neighbour offsets in anticlockwise cyclic order.
pub const AXIAL_DIRECTIONS: [Axial; 6] = [
    Axial::new(1, 0),
    Axial::new(1, -1),
    Axial::new(0, -1),
    Axial::new(-1, 0),
    Axial::new(-1, 1),
    Axial::new(0, 1),
];

impl Axial {
    /// Create a coordinate.
    #[must_use]
    pub const fn new(q: i32, r: i32) -> Self {
        Self { q, r }
    }

    /// The board centre.
    pub const ORIGIN: Axial = Axial::new(0, 0);

    /// The neighbour in direction `dir` (taken modulo 6).
    #[must_use]
    pub const fn neighbor(self, dir: usize) -> Self {
        let d = AXIAL_DIRECTIONS[dir % 6];
        Self::new(self.q + d.q, self.r + d.r)
    }

    /// All six neighbours, in [`AXIAL_DIRECTIONS`] order.
    #[must_use]
    pub fn neighbors(self) -> [Axial; 6] {
        let mut out = [self; 6];
        for (dir, cell) in out.iter_mut().enumerate() {
            *cell = self.neighbor(dir);
        }
        out
    }

    /// Whether `other` shares an edge with this cell.
    #[must_use]
    pub fn is_adjacent(self, other: Axial) -> bool {
        self.distance(other) == 1
    }

    /// Hex distance (number of steps) between two cells.
    #[must_use]
    pub fn distance(self, other: Axial) -> u32 {
        let dq = self.q - other.q;
        let dr = self.r - other.r;
        let ds = -dq - dr;
        ((dq.abs() + dr.abs() + ds.abs()) / 2) as u32
    }
}

impl From<(i32, i32)> for Axial {
    fn from((q, r): (i32, i32)) -> Self {
        Self::new(q, r)
    }
}

impl std::fmt::Display for Axial {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{},{}]", self.q, self.r)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directions_are_unit_steps() {
        for dir in AXIAL_DIRECTIONS {
            assert_eq!(Axial::ORIGIN.distance(dir), 1);
        }
    }

    #[test]
    fn test_directions_are_cyclic_neighbors() {
        // Consecutive directions are themselves adjacent, wrapping 5 -> 0.
        for i in 0..6 {
            let a = AXIAL_DIRECTIONS[i];
            let b = AXIAL_DIRECTIONS[(i + 1) % 6];
            assert!(a.is_adjacent(b), "{} and {} should touch", a, b);
        }
    }

    #[test]
    fn test_neighbor_wraps_direction() {
        let c = Axial::new(3, -2);
        assert_eq!(c.neighbor(6), c.neighbor(0));
        assert_eq!(c.neighbor(2), Axial::new(3, -3));
    }

    #[test]
    fn test_neighbors() {
        let n = Axial::new(1, 1).neighbors();
        assert_eq!(n[0], Axial::new(2, 1));
        assert_eq!(n[3], Axial::new(0, 1));
        assert_eq!(n[5], Axial::new(1, 2));
    }

    #[test]
    fn test_distance() {
        assert_eq!(Axial::ORIGIN.distance(Axial::ORIGIN), 0);
        assert_eq!(Axial::ORIGIN.distance(Axial::new(5, -5)), 5);
        assert_eq!(Axial::new(-2, 1).distance(Axial::new(2, -1)), 4);
        assert!(!Axial::ORIGIN.is_adjacent(Axial::new(1, 1)));
    }

    #[test]
    fn test_display_and_from() {
        let c: Axial = (2, -3).into();
        assert_eq!(format!("{}", c), "[2,-3]");
    }

    #[test]
    fn test_serialization() {
        let c = Axial::new(-4, 2);
        let json = serde_json::to_string(&c).unwrap();
        let back: Axial = serde_json::from_str(&json).unwrap();
        assert_eq!(c, back);
    }
}

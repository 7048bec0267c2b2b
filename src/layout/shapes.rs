//! Board shapes.
//!
//! A `BoardLayout` is the ordered list of cells a deal is zipped onto. The
//! order is the reveal order: cell 0 is placed first. Every standard shape
//! starts at the centre, so the fairness pass puts gold in the middle.

use serde::{Deserialize, Serialize};

use crate::core::Axial;

/// A named, ordered set of board cells.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardLayout {
    pub name: String,
    pub cells: Vec<Axial>,
}

impl BoardLayout {
    /// Create a layout from cells in reveal order.
    #[must_use]
    pub fn new(name: impl Into<String>, cells: Vec<Axial>) -> Self {
        Self {
            name: name.into(),
            cells,
        }
    }

    /// Build a layout from `(q, r)` pairs.
    #[must_use]
    pub fn from_pairs(name: impl Into<String>, pairs: &[(i32, i32)]) -> Self {
        Self::new(name, pairs.iter().map(|&p| Axial::from(p)).collect())
    }

    /// Number of cells.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Check if the layout has no cells.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

const HEXAGON: [(i32, i32); 55] = [
    (0, 0), (1, -1), (1, 0), (0, 1), (-1, 1), (-1, 0), (0, -1), (1, -2),
    (2, -2), (2, -1), (2, 0), (1, 1), (0, 2), (-1, 2), (-2, 2), (-2, 1),
    (-2, 0), (-1, -1), (0, -2), (1, -3), (2, -3), (3, -3), (3, -2), (3, -1),
    (3, 0), (2, 1), (1, 2), (0, 3), (-1, 3), (-2, 3), (-3, 3), (-3, 2),
    (-3, 1), (-3, 0), (-2, -1), (-1, -2), (0, -3), (2, -4), (3, -4), (4, -2),
    (4, -1), (2, 2), (1, 3), (-2, 4), (-3, 4), (-4, 2), (-4, 1), (-2, -2),
    (-1, -3), (3, -5), (5, -2), (2, 3), (-3, 5), (-5, 2), (-2, -3),
];

const PINWHEEL: [(i32, i32); 55] = [
    (0, 0), (1, -1), (1, 0), (0, 1), (-1, 1), (-1, 0), (0, -1), (1, -2),
    (2, -2), (1, 1), (0, 2), (-2, 1), (-2, 0), (2, -3), (3, -2), (1, 2),
    (-1, 3), (-3, 1), (-2, -1), (3, -4), (4, -4), (4, -3), (4, -2), (1, 3),
    (0, 4), (-1, 4), (-2, 4), (-4, 1), (-4, 0), (-3, -1), (-2, -2), (5, -3),
    (5, -2), (5, -1), (5, 0), (4, 1), (3, 2), (2, 3), (1, 4), (-2, 5),
    (-3, 5), (-4, 5), (-5, 5), (-5, 4), (-5, 3), (-5, 2), (-5, 1), (-3, -2),
    (-2, -3), (-1, -4), (0, -5), (1, -5), (2, -5), (3, -5), (4, -5),
];

const RINGS: [(i32, i32); 55] = [
    (0, 0), (2, -2), (2, -1), (2, 0), (1, 1), (0, 2), (-1, 2), (-2, 2),
    (-2, 1), (-2, 0), (-1, -1), (0, -2), (1, -2), (2, -3), (3, -3), (3, -1),
    (3, 0), (1, 2), (0, 3), (-2, 3), (-3, 3), (-3, 1), (-3, 0), (-1, -2),
    (0, -3), (4, -4), (4, -3), (4, -2), (4, -1), (4, 0), (3, 1), (2, 2),
    (1, 3), (0, 4), (-1, 4), (-2, 4), (-3, 4), (-4, 4), (-4, 3), (-4, 2),
    (-4, 1), (-4, 0), (-3, -1), (-2, -2), (-1, -3), (0, -4), (1, -4), (2, -4),
    (3, -4), (5, -5), (5, 0), (0, 5), (-5, 5), (-5, 0), (0, -5),
];

/// The three standard 55-cell shapes, in round-robin order.
#[must_use]
pub fn standard_layouts() -> Vec<BoardLayout> {
    vec![
        BoardLayout::from_pairs("hexagon", &HEXAGON),
        BoardLayout::from_pairs("pinwheel", &PINWHEEL),
        BoardLayout::from_pairs("rings", &RINGS),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use rustc_hash::FxHashSet;

    #[test]
    fn test_standard_shapes_distinct_cells() {
        for layout in standard_layouts() {
            let unique: FxHashSet<_> = layout.cells.iter().copied().collect();
            assert_eq!(unique.len(), layout.len(), "{} repeats a cell", layout.name);
        }
    }

    #[test]
    fn test_standard_shapes_start_at_centre() {
        for layout in standard_layouts() {
            assert_eq!(layout.cells[0], Axial::ORIGIN);
            assert!(layout.cells.iter().all(|c| c.distance(Axial::ORIGIN) <= 5));
        }
    }

    #[test]
    fn test_shapes_differ() {
        let layouts = standard_layouts();
        assert_ne!(layouts[0].cells, layouts[1].cells);
        assert_ne!(layouts[1].cells, layouts[2].cells);
    }
}

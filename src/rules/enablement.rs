//! Adjacency and enablement.
//!
//! A piece is enabled when both rules hold:
//!
//! 1. **Exposed edge**: among its six neighbour cells, taken in
//!    [`AXIAL_DIRECTIONS`](crate::core::AXIAL_DIRECTIONS) order, three
//!    cyclically consecutive cells are empty.
//! 2. **Metal order**: if it is a metal, it is the lowest-ranked metal left
//!    on the board.
//!
//! Enablement is derived state. The board store calls [`refresh`] once per
//! mutation batch; nothing else writes `enabled`.

use im::OrdMap;
use rustc_hash::FxHashMap;

use crate::catalog::Catalog;
use crate::core::{Axial, Piece, PieceId};

/// Pieces by id, in id order.
pub type PieceMap = OrdMap<PieceId, Piece>;

/// Reverse index from cell to occupant.
pub type CellIndex = FxHashMap<Axial, PieceId>;

/// Occupied flags of the six neighbours of `position`, in direction order.
#[must_use]
pub fn occupancy(position: Axial, index: &CellIndex) -> [bool; 6] {
    position.neighbors().map(|cell| index.contains_key(&cell))
}

/// Whether three cyclically consecutive neighbours are free.
///
/// ```
/// use hexgarden::rules::enablement::is_exposed;
///
/// assert!(is_exposed(&[false; 6]));
/// assert!(!is_exposed(&[true; 6]));
/// // free slots 4, 5, 0 wrap around
/// assert!(is_exposed(&[false, true, true, true, false, false]));
/// // alternating gaps never line up three in a row
/// assert!(!is_exposed(&[false, true, false, true, false, true]));
/// ```
#[must_use]
pub fn is_exposed(occupied: &[bool; 6]) -> bool {
    (0..6).any(|i| !occupied[i] && !occupied[(i + 1) % 6] && !occupied[(i + 2) % 6])
}

/// The metal piece with the lowest chain rank, ties broken by id.
#[must_use]
pub fn lowest_metal(pieces: &PieceMap, catalog: &Catalog) -> Option<PieceId> {
    pieces
        .values()
        .filter_map(|p| catalog.metal_rank(p.type_id).map(|rank| (rank, p.id)))
        .min()
        .map(|(_, id)| id)
}

/// Evaluate both rules for one piece.
#[must_use]
pub fn is_enabled(piece: &Piece, index: &CellIndex, catalog: &Catalog, lowest: Option<PieceId>) -> bool {
    let metal_ok = catalog.metal_rank(piece.type_id).is_none() || lowest == Some(piece.id);
    metal_ok && is_exposed(&occupancy(piece.position, index))
}

/// Recompute `enabled` for every piece in place.
///
/// A piece that ends up disabled loses its selection. Returns the ids that
/// were deselected this way.
pub fn refresh(pieces: &mut PieceMap, index: &CellIndex, catalog: &Catalog) -> Vec<PieceId> {
    let lowest = lowest_metal(pieces, catalog);

    let changes: Vec<(PieceId, bool)> = pieces
        .values()
        .filter_map(|p| {
            let enabled = is_enabled(p, index, catalog, lowest);
            let stale = enabled != p.enabled || (!enabled && p.selected);
            stale.then_some((p.id, enabled))
        })
        .collect();

    let mut deselected = Vec::new();
    for (id, enabled) in changes {
        if let Some(piece) = pieces.get_mut(&id) {
            piece.enabled = enabled;
            if !enabled && piece.selected {
                piece.selected = false;
                deselected.push(id);
            }
        }
    }
    deselected
}

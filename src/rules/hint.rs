//! Move hints.
//!
//! A first-match scan over the enabled pieces. It finds *a* legal move,
//! not the best one, and an empty result only means no move exists right
//! now. Whether that ends the game is the caller's decision.

use smallvec::{smallvec, SmallVec};

use crate::board::BoardSnapshot;
use crate::catalog::Catalog;
use crate::core::PieceId;

/// One legal move: a single removable piece or a matching pair.
/// Empty when the board has no move.
pub type Hint = SmallVec<[PieceId; 2]>;

/// Find the first legal move on `board`.
///
/// Pieces are scanned in id order. The first enabled single-removal piece
/// wins outright; otherwise the first enabled piece with an enabled
/// partner in its match set is returned with that partner.
#[must_use]
pub fn find_move(board: &BoardSnapshot, catalog: &Catalog) -> Hint {
    for piece in board.enabled() {
        let Some(def) = catalog.get(piece.type_id) else {
            continue;
        };

        if def.is_single() {
            return smallvec![piece.id];
        }

        let partner = board
            .enabled()
            .find(|other| other.id != piece.id && def.matches(other.type_id));
        if let Some(other) = partner {
            return smallvec![piece.id, other.id];
        }
    }
    Hint::new()
}

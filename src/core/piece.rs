//! Pieces on the board.
//!
//! A `Piece` is one occupant of a board cell. Its static properties
//! (match set, metal rank) live in the catalog under its `type_id`; the
//! piece itself only carries position and the three per-piece flags.
//!
//! ## ID Allocation
//!
//! Ids are issued by the [`BoardStore`](crate::board::BoardStore) from a
//! monotonically increasing counter and are never handed out twice in a
//! session. Undo restores a removed piece under its original id.

use serde::{Deserialize, Serialize};

use super::hex::Axial;
use crate::catalog::PieceTypeId;

/// Stable identifier of a piece for its lifetime on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PieceId(pub u32);

impl PieceId {
    /// Create a piece ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl From<u32> for PieceId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for PieceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Piece({})", self.0)
    }
}

/// A piece occupying a board cell.
///
/// `enabled` is derived state owned by the enablement engine; it is
/// recomputed on every board mutation and should never be set by hand.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Piece {
    pub id: PieceId,
    pub type_id: PieceTypeId,
    pub position: Axial,
    pub enabled: bool,
    pub selected: bool,
    pub highlighted: bool,
}

impl Piece {
    /// Create a fresh piece with all flags cleared.
    #[must_use]
    pub fn new(id: PieceId, type_id: PieceTypeId, position: Axial) -> Self {
        Self {
            id,
            type_id,
            position,
            enabled: false,
            selected: false,
            highlighted: false,
        }
    }
}

impl std::fmt::Display for Piece {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} type {} @ {}", self.id, self.type_id.raw(), self.position)
    }
}

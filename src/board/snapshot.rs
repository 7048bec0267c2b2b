//! Read-only point-in-time view of the board.
//!
//! Snapshots share structure with the live board through `im`, so taking
//! one is O(1). Renderers and the hint engine read snapshots; they never
//! hold on to live pieces across a mutation.

use serde::{Deserialize, Serialize};

use crate::core::{Piece, PieceId};
use crate::rules::enablement::PieceMap;

/// Immutable copy of every piece on the board, iterated in id order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardSnapshot {
    pieces: PieceMap,
}

impl BoardSnapshot {
    pub(crate) fn new(pieces: PieceMap) -> Self {
        Self { pieces }
    }

    /// Get a piece by id.
    #[must_use]
    pub fn get(&self, id: PieceId) -> Option<&Piece> {
        self.pieces.get(&id)
    }

    /// All pieces in id order.
    pub fn iter(&self) -> impl Iterator<Item = &Piece> {
        self.pieces.values()
    }

    /// Enabled pieces in id order.
    pub fn enabled(&self) -> impl Iterator<Item = &Piece> {
        self.iter().filter(|p| p.enabled)
    }

    /// Number of pieces.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pieces.len()
    }

    /// Check if the board was empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }
}

//! Board store: the live set of pieces.
//!
//! The `BoardStore` is the only mutable game state. It owns every piece,
//! keeps the cell index in step with the piece map, and recomputes
//! enablement once at the end of every mutation batch. Other components
//! refer to pieces by [`PieceId`] only.
//!
//! Mutations are total: unknown ids, occupied cells and unknown types are
//! skipped with a warning rather than reported as errors.

use std::sync::Arc;

use log::{debug, warn};

use super::snapshot::BoardSnapshot;
use crate::catalog::{Catalog, PieceTypeId};
use crate::core::{Axial, Piece, PieceId};
use crate::layout::Placement;
use crate::rules::enablement::{self, CellIndex, PieceMap};

/// Owns the pieces on the board and their cell index.
///
/// ## Usage
///
/// ```
/// use std::sync::Arc;
/// use hexgarden::board::BoardStore;
/// use hexgarden::catalog::{standard, Catalog};
/// use hexgarden::core::Axial;
///
/// let mut board = BoardStore::new(Arc::new(Catalog::standard()));
/// let fire = board.place(standard::FIRE, Axial::new(0, 0)).unwrap();
///
/// // An isolated piece is always reachable.
/// assert!(board.get(fire).unwrap().enabled);
///
/// // Removal hands back the pieces so they can be restored.
/// let removed = board.remove(&[fire]);
/// assert!(board.is_empty());
/// board.re_add(&removed);
/// assert_eq!(board.piece_at(Axial::new(0, 0)).unwrap().id, fire);
/// ```
#[derive(Clone, Debug)]
pub struct BoardStore {
    catalog: Arc<Catalog>,
    pieces: PieceMap,
    index: CellIndex,
    /// Next id to issue. Never rewinds within a session.
    next_id: u32,
}

impl BoardStore {
    /// Create an empty board for pieces from `catalog`.
    #[must_use]
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self {
            catalog,
            pieces: PieceMap::new(),
            index: CellIndex::default(),
            next_id: 0,
        }
    }

    /// The catalog pieces are drawn from.
    #[must_use]
    pub fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }

    // === Mutation ===

    /// Place a new piece. Returns `None` if the cell is taken or the type
    /// is unknown.
    pub fn place(&mut self, type_id: PieceTypeId, position: Axial) -> Option<PieceId> {
        let id = self.insert_new(type_id, position);
        self.refresh();
        id
    }

    /// Place a batch of pieces with a single enablement pass.
    pub fn place_all(&mut self, placements: &[Placement]) -> Vec<PieceId> {
        let ids: Vec<PieceId> = placements
            .iter()
            .filter_map(|p| self.insert_new(p.type_id, p.position))
            .collect();
        self.refresh();
        ids
    }

    /// Remove pieces by id. Unknown ids are ignored.
    ///
    /// Returns the removed pieces as they were, in the order given, for
    /// a later [`re_add`](Self::re_add).
    pub fn remove(&mut self, ids: &[PieceId]) -> Vec<Piece> {
        let mut removed = Vec::with_capacity(ids.len());
        for id in ids {
            if let Some(piece) = self.pieces.remove(id) {
                self.index.remove(&piece.position);
                debug!("remove {} ({})", piece, self.catalog.name(piece.type_id));
                removed.push(piece);
            }
        }
        if !removed.is_empty() {
            self.refresh();
        }
        removed
    }

    /// Restore previously removed pieces under their original ids.
    ///
    /// Selection and highlight are cleared. A piece whose id is still on
    /// the board or whose cell has been taken is skipped.
    pub fn re_add(&mut self, pieces: &[Piece]) -> Vec<PieceId> {
        let mut restored = Vec::with_capacity(pieces.len());
        for saved in pieces {
            if self.pieces.contains_key(&saved.id) || self.index.contains_key(&saved.position) {
                warn!("cannot restore {}: id or cell in use", saved);
                continue;
            }

            let piece = Piece::new(saved.id, saved.type_id, saved.position);
            self.index.insert(piece.position, piece.id);
            self.next_id = self.next_id.max(piece.id.raw() + 1);
            debug!("restore {} ({})", piece, self.catalog.name(piece.type_id));
            restored.push(piece.id);
            self.pieces.insert(piece.id, piece);
        }
        if !restored.is_empty() {
            self.refresh();
        }
        restored
    }

    /// Remove every piece. Ids keep counting up.
    pub fn clear(&mut self) {
        self.pieces = PieceMap::new();
        self.index.clear();
    }

    fn insert_new(&mut self, type_id: PieceTypeId, position: Axial) -> Option<PieceId> {
        if self.catalog.get(type_id).is_none() {
            warn!("rejected placement of unknown {} at {}", type_id, position);
            return None;
        }
        if let Some(occupant) = self.index.get(&position) {
            warn!("rejected placement at {}: occupied by {}", position, occupant);
            return None;
        }

        let id = PieceId::new(self.next_id);
        self.next_id += 1;

        let piece = Piece::new(id, type_id, position);
        debug!("place {} ({})", piece, self.catalog.name(type_id));
        self.index.insert(position, id);
        self.pieces.insert(id, piece);
        Some(id)
    }

    fn refresh(&mut self) {
        let deselected = enablement::refresh(&mut self.pieces, &self.index, &self.catalog);
        for id in deselected {
            debug!("{} disabled while selected; deselected", id);
        }
    }

    // === Flags ===

    /// Set the selection flag of one piece. Returns whether it changed.
    ///
    /// Low-level: no enablement gating. Player input goes through
    /// [`SelectionMachine`](crate::rules::SelectionMachine).
    pub fn set_selected(&mut self, id: PieceId, selected: bool) -> bool {
        match self.pieces.get_mut(&id) {
            Some(piece) if piece.selected != selected => {
                piece.selected = selected;
                true
            }
            _ => false,
        }
    }

    /// Deselect every piece. Returns the ids that were selected.
    pub fn clear_selection(&mut self) -> Vec<PieceId> {
        let ids = self.selected_ids();
        for id in &ids {
            self.set_selected(*id, false);
        }
        ids
    }

    /// Highlight exactly the given pieces.
    pub fn highlight(&mut self, ids: &[PieceId]) {
        let toggled: Vec<PieceId> = self
            .pieces
            .values()
            .filter(|p| p.highlighted != ids.contains(&p.id))
            .map(|p| p.id)
            .collect();
        for id in toggled {
            if let Some(piece) = self.pieces.get_mut(&id) {
                piece.highlighted = !piece.highlighted;
            }
        }
    }

    /// Highlight every piece of `type_id`, or clear highlights on `None`.
    pub fn highlight_type(&mut self, type_id: Option<PieceTypeId>) {
        let ids: Vec<PieceId> = match type_id {
            Some(t) => self.pieces.values().filter(|p| p.type_id == t).map(|p| p.id).collect(),
            None => Vec::new(),
        };
        self.highlight(&ids);
    }

    // === Queries ===

    /// Get a piece by id.
    #[must_use]
    pub fn get(&self, id: PieceId) -> Option<&Piece> {
        self.pieces.get(&id)
    }

    /// Check if a piece is on the board.
    #[must_use]
    pub fn contains(&self, id: PieceId) -> bool {
        self.pieces.contains_key(&id)
    }

    /// The piece occupying `cell`, if any.
    #[must_use]
    pub fn piece_at(&self, cell: Axial) -> Option<&Piece> {
        self.index.get(&cell).and_then(|id| self.pieces.get(id))
    }

    /// All pieces in id order.
    pub fn iter(&self) -> impl Iterator<Item = &Piece> {
        self.pieces.values()
    }

    /// Ids of selected pieces, in id order.
    #[must_use]
    pub fn selected_ids(&self) -> Vec<PieceId> {
        self.pieces.values().filter(|p| p.selected).map(|p| p.id).collect()
    }

    /// Number of pieces on the board.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pieces.len()
    }

    /// Check if the board is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }

    /// Pieces left per type, indexed by type id.
    #[must_use]
    pub fn counts_by_type(&self) -> Vec<usize> {
        let mut counts = vec![0; self.catalog.len()];
        for piece in self.pieces.values() {
            if let Some(slot) = counts.get_mut(piece.type_id.index()) {
                *slot += 1;
            }
        }
        counts
    }

    /// O(1) read-only copy of the current board.
    #[must_use]
    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot::new(self.pieces.clone())
    }
}

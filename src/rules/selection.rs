//! Selection and match resolution.
//!
//! The machine is driven by taps. Its state is not stored separately: it is
//! re-derived from the board's selected flags after every toggle, so undo,
//! redo and enablement changes can never leave it out of step.
//!
//! ```text
//!   Idle --tap--> OneSelected --tap--> TwoSelected
//!    ^               |  single type          | match / no match
//!    +---------------+-----------------------+
//! ```
//!
//! The machine never deletes pieces. A resolved match is reported as
//! [`SelectionOutcome::Remove`] and the caller performs the removal, usually
//! through the command manager so it can be undone.

use log::{debug, warn};
use serde::{Deserialize, Serialize};
use smallvec::{smallvec, SmallVec};

use crate::board::BoardStore;
use crate::core::PieceId;

/// Pieces to remove as the result of one match.
pub type Removal = SmallVec<[PieceId; 2]>;

/// Selection state derived from the board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SelectionState {
    /// Nothing selected.
    Idle,
    /// One piece waiting for a partner.
    OneSelected(PieceId),
    /// Two pieces selected; only observable between toggling and resolving.
    TwoSelected([PieceId; 2]),
    /// More than two selected. Only reachable by writing flags directly.
    Overflow(Vec<PieceId>),
}

/// What a tap did.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SelectionOutcome {
    /// Unknown or disabled piece; nothing changed.
    Ignored,
    /// The piece is now selected and waiting for a partner.
    Selected(PieceId),
    /// The piece was deselected.
    Deselected(PieceId),
    /// A match resolved; selection is cleared and these pieces should go.
    Remove(Removal),
    /// Two incompatible pieces; both were deselected.
    Cancelled([PieceId; 2]),
    /// Too many pieces were selected; all were deselected, none removed.
    Overflow(Vec<PieceId>),
}

/// Two-step selection state machine.
///
/// ```
/// use std::sync::Arc;
/// use hexgarden::board::BoardStore;
/// use hexgarden::catalog::{standard, Catalog};
/// use hexgarden::core::Axial;
/// use hexgarden::rules::{SelectionMachine, SelectionOutcome};
///
/// let mut board = BoardStore::new(Arc::new(Catalog::standard()));
/// let salt = board.place(standard::SALT, Axial::new(0, 0)).unwrap();
/// let fire = board.place(standard::FIRE, Axial::new(1, 0)).unwrap();
///
/// let mut machine = SelectionMachine::new();
/// assert_eq!(machine.select(&mut board, salt), SelectionOutcome::Selected(salt));
/// match machine.select(&mut board, fire) {
///     SelectionOutcome::Remove(ids) => assert_eq!(ids.as_slice(), &[salt, fire]),
///     other => panic!("unexpected {:?}", other),
/// }
/// ```
#[derive(Clone, Debug, Default)]
pub struct SelectionMachine {
    overflows: u32,
}

impl SelectionMachine {
    /// Create a new machine.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of overflow recoveries so far.
    #[must_use]
    pub fn overflow_count(&self) -> u32 {
        self.overflows
    }

    /// Current state, derived from the board.
    #[must_use]
    pub fn state(&self, board: &BoardStore) -> SelectionState {
        let selected = board.selected_ids();
        match selected.as_slice() {
            [] => SelectionState::Idle,
            [a] => SelectionState::OneSelected(*a),
            [a, b] => SelectionState::TwoSelected([*a, *b]),
            _ => SelectionState::Overflow(selected),
        }
    }

    /// Handle a tap on `id`.
    pub fn select(&mut self, board: &mut BoardStore, id: PieceId) -> SelectionOutcome {
        let Some(piece) = board.get(id) else {
            debug!("tap on unknown {}", id);
            return SelectionOutcome::Ignored;
        };
        if !piece.enabled {
            debug!("tap on disabled {}", id);
            return SelectionOutcome::Ignored;
        }

        let now_selected = !piece.selected;
        board.set_selected(id, now_selected);

        match self.state(board) {
            SelectionState::Idle => SelectionOutcome::Deselected(id),
            SelectionState::OneSelected(only) => {
                let single = board
                    .get(only)
                    .is_some_and(|p| board.catalog().is_single(p.type_id));
                if single {
                    board.set_selected(only, false);
                    debug!("single removal of {}", only);
                    SelectionOutcome::Remove(smallvec![only])
                } else if now_selected {
                    SelectionOutcome::Selected(id)
                } else {
                    SelectionOutcome::Deselected(id)
                }
            }
            SelectionState::TwoSelected([a, b]) => {
                let matched = match (board.get(a), board.get(b)) {
                    (Some(first), Some(second)) => board.catalog().matches(first.type_id, second.type_id),
                    _ => false,
                };
                board.set_selected(a, false);
                board.set_selected(b, false);
                if matched {
                    debug!("matched pair {} <-> {}", a, b);
                    SelectionOutcome::Remove(smallvec![a, b])
                } else {
                    debug!("no match between {} and {}; selection cancelled", a, b);
                    SelectionOutcome::Cancelled([a, b])
                }
            }
            SelectionState::Overflow(ids) => {
                warn!("selection overflow ({} selected); all selections cancelled", ids.len());
                self.overflows += 1;
                board.clear_selection();
                SelectionOutcome::Overflow(ids)
            }
        }
    }

    /// Deselect everything without resolving. Returns the ids deselected.
    pub fn clear(&self, board: &mut BoardStore) -> Vec<PieceId> {
        board.clear_selection()
    }
}

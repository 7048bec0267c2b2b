//! # hexgarden
//!
//! Rule and state engine for a hexagonal tile-matching puzzle in the style
//! of Sigmar's Garden: 55 pieces dealt onto a hex board, cleared by pairing
//! matching pieces that have an open edge.
//!
//! ## Design Principles
//!
//! 1. **One owner of mutable state**: the [`BoardStore`] holds every piece
//!    and its cell index. Everything else refers to pieces by [`PieceId`].
//!
//! 2. **Derived state is recomputed, not tracked**: enablement is refreshed
//!    inside every board mutation; selection state is read back from the
//!    board's flags.
//!
//! 3. **Configuration over convention**: piece types, match sets, metal
//!    order and board shapes come from a [`Catalog`] and an
//!    [`EngineConfig`]. The standard game is one such configuration.
//!
//! ## Architecture
//!
//! - **Persistent data structures**: the board map is an `im::OrdMap`, so
//!   snapshots for renderers and the hint search are O(1).
//!
//! - **Deterministic deals**: shuffles use a seeded ChaCha8 RNG whose
//!   state can be saved and restored.
//!
//! - **Events, not callbacks**: the [`Session`] queues [`EngineEvent`]s
//!   for the consumer to drain once per frame.
//!
//! ## Modules
//!
//! - `core`: hex coordinates, piece ids, RNG, configuration, errors
//! - `catalog`: piece type definitions and the standard set
//! - `board`: the board store and snapshots
//! - `rules`: enablement, selection and hints
//! - `layout`: board shapes and deal generation
//! - `command`: generic undo/redo
//! - `session`: the tick-driven game facade

pub mod core;
pub mod catalog;
pub mod board;
pub mod rules;
pub mod layout;
pub mod command;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    Axial, AXIAL_DIRECTIONS,
    Piece, PieceId,
    GameRng, GameRngState,
    EngineConfig, CatalogError, ConfigError,
};

pub use crate::catalog::{Catalog, MatchSet, PieceTypeDef, PieceTypeId};

pub use crate::board::{BoardSnapshot, BoardStore};

pub use crate::rules::{find_move, Hint, Removal, SelectionMachine, SelectionOutcome, SelectionState};

pub use crate::layout::{BoardLayout, LayoutGenerator, Placement};

pub use crate::command::{Command, CommandManager};

pub use crate::session::{EngineEvent, GamePhase, Session};

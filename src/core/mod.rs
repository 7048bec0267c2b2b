//! Core engine types: coordinates, pieces, RNG, configuration, errors.
//!
//! These are the building blocks every other module shares. Piece type
//! semantics live in `catalog`; this module stays rule-agnostic.

pub mod hex;
pub mod piece;
pub mod rng;
pub mod config;
pub mod error;

pub use hex::{Axial, AXIAL_DIRECTIONS};
pub use piece::{Piece, PieceId};
pub use rng::{GameRng, GameRngState};
pub use config::EngineConfig;
pub use error::{CatalogError, ConfigError};

//! Piece catalog: type definitions, match rules, metal chain.
//!
//! ## Key Types
//!
//! - `PieceTypeId`: Type identifier (index into the catalog)
//! - `PieceTypeDef`: Static type data (quantity, match set, metal rank)
//! - `Catalog`: Validated, immutable type lookup
//!
//! The `standard` module holds the ids of the standard garden so callers
//! and tests can name types without string lookups.

pub mod definition;
pub mod registry;
pub mod standard;

pub use definition::{MatchSet, PieceTypeDef, PieceTypeId};
pub use registry::Catalog;

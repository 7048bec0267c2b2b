//! Piece type definitions - static piece data.
//!
//! `PieceTypeDef` holds the immutable properties of a piece type: how many
//! are dealt, which types it pairs with, and its place in the metal chain.
//! Per-piece data (position, flags) lives in [`Piece`](crate::core::Piece).

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Piece type identifier. Equal to the type's index in its catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PieceTypeId(pub u8);

impl PieceTypeId {
    /// Create a new piece type ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u8 {
        self.0
    }

    /// Catalog index of this type.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for PieceTypeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "PieceType({})", self.0)
    }
}

/// Set of types a piece type pairs with.
pub type MatchSet = SmallVec<[PieceTypeId; 6]>;

/// Static piece type definition.
///
/// ## Example
///
/// ```
/// use hexgarden::catalog::{PieceTypeDef, PieceTypeId};
///
/// let fire = PieceTypeId::new(1);
/// let salt = PieceTypeId::new(0);
/// let def = PieceTypeDef::new(fire, "fire", 8)
///     .with_sprite(1)
///     .with_matches(&[fire, salt]);
///
/// assert!(def.matches(salt));
/// assert!(!def.is_single());
/// assert!(!def.is_metal());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PieceTypeDef {
    /// Type id (must equal the catalog index).
    pub id: PieceTypeId,

    /// Type name (for display/debugging and name lookup).
    pub name: String,

    /// Display sprite index, opaque to the engine.
    #[serde(default)]
    pub sprite: u8,

    /// How many pieces of this type are dealt per game.
    pub quantity: u32,

    /// Types this type may pair with. Empty means removable alone.
    #[serde(default)]
    pub matches: MatchSet,

    /// Position in the metal chain; `None` for non-metals.
    #[serde(default)]
    pub metal_rank: Option<u8>,
}

impl PieceTypeDef {
    /// Create a definition with no matches and no metal rank.
    #[must_use]
    pub fn new(id: PieceTypeId, name: impl Into<String>, quantity: u32) -> Self {
        Self {
            id,
            name: name.into(),
            sprite: id.raw(),
            quantity,
            matches: MatchSet::new(),
            metal_rank: None,
        }
    }

    /// Set the sprite index (builder pattern).
    #[must_use]
    pub fn with_sprite(mut self, sprite: u8) -> Self {
        self.sprite = sprite;
        self
    }

    /// Set the match set (builder pattern). Duplicates are dropped.
    #[must_use]
    pub fn with_matches(mut self, matches: &[PieceTypeId]) -> Self {
        self.matches.clear();
        for &m in matches {
            if !self.matches.contains(&m) {
                self.matches.push(m);
            }
        }
        self
    }

    /// Place this type in the metal chain (builder pattern).
    #[must_use]
    pub fn with_metal_rank(mut self, rank: u8) -> Self {
        self.metal_rank = Some(rank);
        self
    }

    /// Whether a piece of `other` type completes a pair with this type.
    #[must_use]
    pub fn matches(&self, other: PieceTypeId) -> bool {
        self.matches.contains(&other)
    }

    /// Removable without a partner.
    #[must_use]
    pub fn is_single(&self) -> bool {
        self.matches.is_empty()
    }

    /// Member of the metal chain.
    #[must_use]
    pub fn is_metal(&self) -> bool {
        self.metal_rank.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_id() {
        let id = PieceTypeId::new(13);
        assert_eq!(id.raw(), 13);
        assert_eq!(id.index(), 13);
        assert_eq!(format!("{}", id), "PieceType(13)");
    }

    #[test]
    fn test_builder() {
        let qs = PieceTypeId::new(7);
        let lead = PieceTypeDef::new(PieceTypeId::new(8), "lead", 1)
            .with_matches(&[qs, qs])
            .with_metal_rank(0);

        assert_eq!(lead.sprite, 8);
        assert_eq!(lead.matches.len(), 1);
        assert!(lead.matches(qs));
        assert!(lead.is_metal());
        assert!(!lead.is_single());
    }

    #[test]
    fn test_single() {
        let gold = PieceTypeDef::new(PieceTypeId::new(13), "gold", 1).with_metal_rank(5);
        assert!(gold.is_single());
        assert!(!gold.matches(PieceTypeId::new(7)));
    }

    #[test]
    fn test_serde_defaults() {
        let def: PieceTypeDef =
            serde_json::from_str(r#"{ "id": 2, "name": "water", "quantity": 8 }"#).unwrap();
        assert_eq!(def.sprite, 0);
        assert!(def.is_single());
        assert_eq!(def.metal_rank, None);
    }
}

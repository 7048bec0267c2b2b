//! Piece catalog for definition lookup.
//!
//! The `Catalog` stores every piece type of a game, indexed by
//! [`PieceTypeId`], and derives the metal chain from the types' ranks.
//! It is immutable once built and shared through `Arc`.

use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};

use super::definition::{PieceTypeDef, PieceTypeId};
use crate::core::CatalogError;

/// Registry of piece type definitions.
///
/// ## Example
///
/// ```
/// use hexgarden::catalog::{Catalog, PieceTypeDef, PieceTypeId};
///
/// let a = PieceTypeId::new(0);
/// let b = PieceTypeId::new(1);
/// let catalog = Catalog::new(vec![
///     PieceTypeDef::new(a, "sun", 2).with_matches(&[b]),
///     PieceTypeDef::new(b, "moon", 2).with_matches(&[a]),
/// ])
/// .unwrap();
///
/// assert_eq!(catalog.by_name("moon"), Some(b));
/// assert!(catalog.matches(a, b));
/// assert_eq!(catalog.total_quantity(), 4);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(try_from = "Vec<PieceTypeDef>", into = "Vec<PieceTypeDef>")]
pub struct Catalog {
    types: Vec<PieceTypeDef>,
    by_name: FxHashMap<String, PieceTypeId>,
    /// Metal types in ascending rank.
    chain: Vec<PieceTypeId>,
}

impl Catalog {
    /// Build a catalog, validating ids, names, match references and ranks.
    pub fn new(types: Vec<PieceTypeDef>) -> Result<Self, CatalogError> {
        if types.is_empty() {
            return Err(CatalogError::Empty);
        }

        for (index, def) in types.iter().enumerate() {
            if def.id.index() != index {
                return Err(CatalogError::MisplacedId {
                    name: def.name.clone(),
                    id: def.id.raw(),
                    index,
                });
            }
            if let Some(target) = def.matches.iter().find(|m| m.index() >= types.len()) {
                return Err(CatalogError::UnknownMatch {
                    name: def.name.clone(),
                    target: target.raw(),
                });
            }
        }

        let mut ranks: Vec<u8> = types.iter().filter_map(|d| d.metal_rank).collect();
        ranks.sort_unstable();
        if ranks.iter().enumerate().any(|(i, &r)| usize::from(r) != i) {
            return Err(CatalogError::BadMetalChain(ranks));
        }

        let mut names = FxHashSet::default();
        if let Some(dup) = types.iter().find(|d| !names.insert(d.name.as_str())) {
            return Err(CatalogError::DuplicateName(dup.name.clone()));
        }

        Ok(Self::assemble(types))
    }

    /// Build the lookup tables without validation.
    pub(crate) fn assemble(types: Vec<PieceTypeDef>) -> Self {
        let by_name = types.iter().map(|d| (d.name.clone(), d.id)).collect();

        let mut chain: Vec<&PieceTypeDef> = types.iter().filter(|d| d.is_metal()).collect();
        chain.sort_by_key(|d| d.metal_rank);
        let chain = chain.into_iter().map(|d| d.id).collect();

        Self {
            types,
            by_name,
            chain,
        }
    }

    /// Get a type definition by ID.
    #[must_use]
    pub fn get(&self, id: PieceTypeId) -> Option<&PieceTypeDef> {
        self.types.get(id.index())
    }

    /// Look a type up by name.
    #[must_use]
    pub fn by_name(&self, name: &str) -> Option<PieceTypeId> {
        self.by_name.get(name).copied()
    }

    /// Name of a type, or `"?"` for an unknown id.
    #[must_use]
    pub fn name(&self, id: PieceTypeId) -> &str {
        self.get(id).map_or("?", |d| d.name.as_str())
    }

    /// Whether `first` pairs with `second`. Directional.
    #[must_use]
    pub fn matches(&self, first: PieceTypeId, second: PieceTypeId) -> bool {
        self.get(first).is_some_and(|d| d.matches(second))
    }

    /// Whether a type can be removed without a partner.
    #[must_use]
    pub fn is_single(&self, id: PieceTypeId) -> bool {
        self.get(id).is_some_and(PieceTypeDef::is_single)
    }

    /// Rank of a type in the metal chain, `None` for non-metals.
    #[must_use]
    pub fn metal_rank(&self, id: PieceTypeId) -> Option<u8> {
        self.get(id).and_then(|d| d.metal_rank)
    }

    /// Metal types in ascending rank.
    #[must_use]
    pub fn metal_chain(&self) -> &[PieceTypeId] {
        &self.chain
    }

    /// Number of pieces dealt per game.
    #[must_use]
    pub fn total_quantity(&self) -> usize {
        self.types.iter().map(|d| d.quantity as usize).sum()
    }

    /// Get the number of types.
    #[must_use]
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Check if the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Iterate over all type definitions in id order.
    pub fn iter(&self) -> impl Iterator<Item = &PieceTypeDef> {
        self.types.iter()
    }
}

impl TryFrom<Vec<PieceTypeDef>> for Catalog {
    type Error = CatalogError;

    fn try_from(types: Vec<PieceTypeDef>) -> Result<Self, Self::Error> {
        Self::new(types)
    }
}

impl From<Catalog> for Vec<PieceTypeDef> {
    fn from(catalog: Catalog) -> Self {
        catalog.types
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(id: u8) -> PieceTypeId {
        PieceTypeId::new(id)
    }

    #[test]
    fn test_lookup() {
        let catalog = Catalog::new(vec![
            PieceTypeDef::new(t(0), "a", 2).with_matches(&[t(0)]),
            PieceTypeDef::new(t(1), "b", 1),
        ])
        .unwrap();

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get(t(1)).unwrap().name, "b");
        assert!(catalog.get(t(2)).is_none());
        assert_eq!(catalog.name(t(9)), "?");
        assert!(catalog.is_single(t(1)));
        assert!(!catalog.is_single(t(0)));
        assert!(!catalog.is_single(t(9)));
        assert!(catalog.metal_chain().is_empty());
    }

    #[test]
    fn test_empty_rejected() {
        assert_eq!(Catalog::new(vec![]).unwrap_err(), CatalogError::Empty);
    }

    #[test]
    fn test_misplaced_id_rejected() {
        let err = Catalog::new(vec![PieceTypeDef::new(t(3), "x", 1)]).unwrap_err();
        assert!(matches!(err, CatalogError::MisplacedId { id: 3, index: 0, .. }));
    }

    #[test]
    fn test_duplicate_name_rejected() {
        let err = Catalog::new(vec![
            PieceTypeDef::new(t(0), "x", 1),
            PieceTypeDef::new(t(1), "x", 1),
        ])
        .unwrap_err();
        assert_eq!(err, CatalogError::DuplicateName("x".to_string()));
    }

    #[test]
    fn test_unknown_match_rejected() {
        let err = Catalog::new(vec![PieceTypeDef::new(t(0), "x", 1).with_matches(&[t(4)])])
            .unwrap_err();
        assert!(matches!(err, CatalogError::UnknownMatch { target: 4, .. }));
    }

    #[test]
    fn test_metal_chain_gap_rejected() {
        let err = Catalog::new(vec![
            PieceTypeDef::new(t(0), "x", 1).with_metal_rank(0),
            PieceTypeDef::new(t(1), "y", 1).with_metal_rank(2),
        ])
        .unwrap_err();
        assert_eq!(err, CatalogError::BadMetalChain(vec![0, 2]));
    }

    #[test]
    fn test_metal_chain_sorted_by_rank() {
        let catalog = Catalog::new(vec![
            PieceTypeDef::new(t(0), "late", 1).with_metal_rank(1),
            PieceTypeDef::new(t(1), "early", 1).with_metal_rank(0),
        ])
        .unwrap();
        assert_eq!(catalog.metal_chain(), &[t(1), t(0)]);
        assert_eq!(catalog.metal_rank(t(0)), Some(1));
        assert_eq!(catalog.metal_rank(t(5)), None);
    }

    #[test]
    fn test_serde_validates() {
        let json = r#"[{ "id": 0, "name": "a", "quantity": 1 }, { "id": 0, "name": "b", "quantity": 1 }]"#;
        assert!(serde_json::from_str::<Catalog>(json).is_err());

        let catalog = Catalog::standard();
        let json = serde_json::to_string(&catalog).unwrap();
        let back: Catalog = serde_json::from_str(&json).unwrap();
        assert_eq!(back.len(), catalog.len());
        assert_eq!(back.metal_chain(), catalog.metal_chain());
    }
}

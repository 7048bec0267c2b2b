//! Construction-time errors.
//!
//! Gameplay operations are total and never fail: bad input is ignored.
//! Only building a catalog or validating a configuration can be rejected.

use super::hex::Axial;

/// A piece catalog that cannot be used.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// The catalog defines no piece types.
    #[error("catalog is empty")]
    Empty,

    /// Type ids must equal their position in the catalog.
    #[error("type '{name}' has id {id} but sits at index {index}")]
    MisplacedId { name: String, id: u8, index: usize },

    /// Two types share a name.
    #[error("duplicate type name '{0}'")]
    DuplicateName(String),

    /// A match set refers to a type that does not exist.
    #[error("type '{name}' matches unknown type id {target}")]
    UnknownMatch { name: String, target: u8 },

    /// Metal ranks must be 0..n with no gaps or repeats.
    #[error("metal ranks are not a contiguous sequence starting at 0: {0:?}")]
    BadMetalChain(Vec<u8>),
}

/// An engine configuration that does not fit its catalog.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// At least one board shape is required.
    #[error("no board layouts configured")]
    NoLayouts,

    /// A board shape must have one cell per catalog piece.
    #[error("layout '{name}' has {cells} cells but the catalog deals {pieces} pieces")]
    LayoutSize { name: String, cells: usize, pieces: usize },

    /// A board shape lists the same cell twice.
    #[error("layout '{name}' repeats cell {cell}")]
    DuplicateCell { name: String, cell: Axial },

    /// The catalog itself is invalid.
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = ConfigError::LayoutSize {
            name: "ring".to_string(),
            cells: 54,
            pieces: 55,
        };
        assert_eq!(
            err.to_string(),
            "layout 'ring' has 54 cells but the catalog deals 55 pieces"
        );

        let dup = ConfigError::DuplicateCell {
            name: "ring".to_string(),
            cell: Axial::new(1, -1),
        };
        assert_eq!(dup.to_string(), "layout 'ring' repeats cell [1,-1]");
    }

    #[test]
    fn test_catalog_error_converts() {
        let err: ConfigError = CatalogError::DuplicateName("salt".to_string()).into();
        assert_eq!(err.to_string(), "duplicate type name 'salt'");
        assert!(matches!(err, ConfigError::Catalog(_)));
    }
}

//! Engine configuration.
//!
//! Consumers configure the engine at startup by providing:
//! - a [`Catalog`] of piece types (see `catalog`)
//! - an `EngineConfig` with the board shapes to deal onto and the seed
//!
//! Both are serde types, so they can be loaded from JSON or any other
//! format the consumer prefers. Missing fields fall back to the standard
//! game.
//!
//! ```
//! use hexgarden::catalog::Catalog;
//! use hexgarden::core::EngineConfig;
//!
//! let config: EngineConfig = serde_json::from_str(r#"{ "seed": 7 }"#).unwrap();
//! assert_eq!(config.seed, Some(7));
//! assert_eq!(config.layouts.len(), 3);
//! assert!(config.validate(&Catalog::standard()).is_ok());
//! ```

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::error::ConfigError;
use crate::catalog::Catalog;
use crate::layout::{standard_layouts, BoardLayout};

/// Configuration for a game session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Seed for the deal RNG. `None` draws one from entropy.
    pub seed: Option<u64>,

    /// Board shapes, cycled round-robin across games.
    pub layouts: Vec<BoardLayout>,

    /// Spread the metal chain evenly over the reveal order after shuffling.
    pub distribute_metals: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            seed: None,
            layouts: standard_layouts(),
            distribute_metals: true,
        }
    }
}

impl EngineConfig {
    /// Standard configuration with a fixed seed.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Self::default()
        }
    }

    /// Replace the board shapes (builder pattern).
    #[must_use]
    pub fn with_layouts(mut self, layouts: Vec<BoardLayout>) -> Self {
        self.layouts = layouts;
        self
    }

    /// Toggle the metal fairness pass (builder pattern).
    #[must_use]
    pub fn with_distribute_metals(mut self, enabled: bool) -> Self {
        self.distribute_metals = enabled;
        self
    }

    /// Check that every layout can hold exactly one deal from `catalog`.
    pub fn validate(&self, catalog: &Catalog) -> Result<(), ConfigError> {
        if self.layouts.is_empty() {
            return Err(ConfigError::NoLayouts);
        }

        let pieces = catalog.total_quantity();
        for layout in &self.layouts {
            if layout.cells.len() != pieces {
                return Err(ConfigError::LayoutSize {
                    name: layout.name.clone(),
                    cells: layout.cells.len(),
                    pieces,
                });
            }

            let mut seen = FxHashSet::default();
            for &cell in &layout.cells {
                if !seen.insert(cell) {
                    return Err(ConfigError::DuplicateCell {
                        name: layout.name.clone(),
                        cell,
                    });
                }
            }
        }

        Ok(())
    }
}

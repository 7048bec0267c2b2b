//! Deal generation.
//!
//! A deal is built in three steps:
//! 1. expand the catalog into one entry per dealt piece,
//! 2. Fisher-Yates shuffle,
//! 3. fairness pass: pull each metal out (gold first) and reinsert it at
//!    evenly spaced indices, so the chain is spread over the reveal order.
//!
//! The sequence is then zipped against the next board shape and handed
//! out one [`Placement`] per pull.

use std::collections::VecDeque;
use std::sync::Arc;

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use super::shapes::BoardLayout;
use crate::catalog::{Catalog, PieceTypeId};
use crate::core::{Axial, ConfigError, EngineConfig, GameRng, GameRngState};

/// One piece to be placed: its type and target cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    pub type_id: PieceTypeId,
    pub position: Axial,
}

/// Expand the catalog into a flat list, one entry per unit of quantity.
#[must_use]
pub fn expand_catalog(catalog: &Catalog) -> Vec<PieceTypeId> {
    catalog
        .iter()
        .flat_map(|def| std::iter::repeat(def.id).take(def.quantity as usize))
        .collect()
}

/// Spread the metal chain evenly over `sequence`.
///
/// For pass `i` over `chain` in descending rank, the first occurrence of
/// that metal is removed and reinserted at `i * len / chain.len()`.
/// Metals missing from the sequence are skipped.
pub fn distribute_metals(sequence: &mut Vec<PieceTypeId>, chain: &[PieceTypeId]) {
    if chain.is_empty() {
        return;
    }

    let total = sequence.len();
    for (pass, &metal) in chain.iter().rev().enumerate() {
        if let Some(found) = sequence.iter().position(|&t| t == metal) {
            sequence.remove(found);
            let slot = (pass * total / chain.len()).min(sequence.len());
            sequence.insert(slot, metal);
        }
    }
}

/// Build a shuffled deal for `catalog`.
#[must_use]
pub fn shuffled_deal(catalog: &Catalog, rng: &mut GameRng, fair_metals: bool) -> Vec<PieceTypeId> {
    let mut sequence = expand_catalog(catalog);
    rng.shuffle(&mut sequence);
    if fair_metals {
        distribute_metals(&mut sequence, catalog.metal_chain());
    }
    sequence
}

/// Manufactures placements for successive games.
///
/// Holds no reference to pieces already on the board.
///
/// ```
/// use std::sync::Arc;
/// use hexgarden::catalog::Catalog;
/// use hexgarden::core::EngineConfig;
/// use hexgarden::layout::LayoutGenerator;
///
/// let catalog = Arc::new(Catalog::standard());
/// let mut generator = LayoutGenerator::from_config(catalog, &EngineConfig::seeded(1)).unwrap();
///
/// generator.reset();
/// let mut placed = 0;
/// while generator.next_placement().is_some() {
///     placed += 1;
/// }
/// assert_eq!(placed, 55);
/// ```
#[derive(Clone, Debug)]
pub struct LayoutGenerator {
    catalog: Arc<Catalog>,
    layouts: Vec<BoardLayout>,
    fair_metals: bool,
    rng: GameRng,
    /// Shape used by the current deal; `None` before the first reset.
    layout_index: Option<usize>,
    queue: VecDeque<Placement>,
}

impl LayoutGenerator {
    /// Create a generator without validating the shapes. Call
    /// [`reset`](Self::reset) to start a deal.
    #[must_use]
    pub(crate) fn new(catalog: Arc<Catalog>, layouts: Vec<BoardLayout>, fair_metals: bool, rng: GameRng) -> Self {
        Self {
            catalog,
            layouts,
            fair_metals,
            rng,
            layout_index: None,
            queue: VecDeque::new(),
        }
    }

    /// Create a generator from a validated configuration.
    pub fn from_config(catalog: Arc<Catalog>, config: &EngineConfig) -> Result<Self, ConfigError> {
        config.validate(&catalog)?;
        let rng = config.seed.map_or_else(GameRng::from_entropy, GameRng::new);
        Ok(Self::new(catalog, config.layouts.clone(), config.distribute_metals, rng))
    }

    /// Start the next deal on the next shape (round-robin).
    ///
    /// Any placements left over from the previous deal are discarded.
    pub fn reset(&mut self) {
        self.queue.clear();
        if self.layouts.is_empty() {
            return;
        }

        let index = self.layout_index.map_or(0, |i| (i + 1) % self.layouts.len());
        self.layout_index = Some(index);

        let deal = shuffled_deal(&self.catalog, &mut self.rng, self.fair_metals);
        let layout = &self.layouts[index];
        if layout.cells.len() != deal.len() {
            warn!(
                "layout '{}' has {} cells for a deal of {} pieces; dealing {}",
                layout.name,
                layout.cells.len(),
                deal.len(),
                layout.cells.len().min(deal.len())
            );
        }
        self.queue = deal
            .into_iter()
            .zip(layout.cells.iter().copied())
            .map(|(type_id, position)| Placement { type_id, position })
            .collect();

        debug!(
            "deal on layout {} '{}': {}",
            index,
            layout.name,
            self.queue
                .iter()
                .map(|p| self.catalog.name(p.type_id))
                .collect::<Vec<_>>()
                .join(",")
        );
    }

    /// Pull the next placement. `None` once the deal is exhausted.
    pub fn next_placement(&mut self) -> Option<Placement> {
        self.queue.pop_front()
    }

    /// Placements not yet pulled.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.queue.len()
    }

    /// Check if the current deal has been fully handed out.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.queue.is_empty()
    }

    /// Index of the shape used by the current deal.
    #[must_use]
    pub fn layout_index(&self) -> Option<usize> {
        self.layout_index
    }

    /// Shape used by the current deal.
    #[must_use]
    pub fn current_layout(&self) -> Option<&BoardLayout> {
        self.layout_index.and_then(|i| self.layouts.get(i))
    }

    /// RNG state before the next deal, for replaying it.
    #[must_use]
    pub fn rng_state(&self) -> GameRngState {
        self.rng.state()
    }

    /// Resume dealing from a saved RNG state.
    pub fn restore_rng(&mut self, state: &GameRngState) {
        self.rng = GameRng::from_state(state);
    }
}

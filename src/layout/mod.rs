//! Layout generation: board shapes and shuffled, fairness-adjusted deals.
//!
//! ## Key Types
//!
//! - `BoardLayout`: Ordered cells a deal is placed onto
//! - `Placement`: One `(type, cell)` pair
//! - `LayoutGenerator`: Pull-based source of placements, one deal per reset

pub mod generator;
pub mod shapes;

pub use generator::{distribute_metals, expand_catalog, shuffled_deal, LayoutGenerator, Placement};
pub use shapes::{standard_layouts, BoardLayout};

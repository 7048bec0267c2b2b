//! Board store and snapshots.
//!
//! - `BoardStore`: Owned, mutable piece set with a cell index; every
//!   mutation ends with an enablement refresh
//! - `BoardSnapshot`: Cheap read-only copy for renderers and the hint engine

pub mod snapshot;
pub mod store;

pub use snapshot::BoardSnapshot;
pub use store::BoardStore;

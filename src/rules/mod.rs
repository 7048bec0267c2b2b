//! Game rules.
//!
//! Everything here is a pure function of the board, or a thin state
//! machine over it:
//!
//! - [`enablement`]: which pieces can be tapped
//! - [`selection`]: how taps become matches
//! - [`hint`]: finding a legal move

pub mod enablement;
pub mod hint;
pub mod selection;

pub use hint::{find_move, Hint};
pub use selection::{Removal, SelectionMachine, SelectionOutcome, SelectionState};

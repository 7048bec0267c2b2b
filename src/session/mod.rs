//! Game session.
//!
//! [`Session`] wires the catalog, board, layout generator, selection
//! machine and command manager together behind a tick-driven API:
//!
//! - call [`Session::new_game`] to start a deal,
//! - call [`Session::tick`] once per frame while it lays out pieces and
//!   watches for a win,
//! - feed player input through [`Session::tap`], [`Session::undo`] and
//!   [`Session::redo`],
//! - drain [`EngineEvent`]s once per frame to drive rendering and sound.
//!
//! ## Usage
//!
//! ```
//! use hexgarden::session::{EngineEvent, GamePhase, Session};
//!
//! let mut session = Session::standard(42);
//! session.new_game();
//! while session.phase() == GamePhase::Layout {
//!     session.tick();
//! }
//!
//! assert_eq!(session.pieces().count(), 55);
//! assert!(session
//!     .drain_events()
//!     .iter()
//!     .any(|e| matches!(e, EngineEvent::LayoutComplete { .. })));
//! ```

mod events;
mod game;

pub use events::{EngineEvent, GamePhase};
pub use game::Session;

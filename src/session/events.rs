//! Session phases and the events a session emits.

use serde::{Deserialize, Serialize};

use crate::catalog::PieceTypeId;
use crate::core::{Axial, PieceId};

/// Where a session is in the life of a game.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GamePhase {
    /// No game started yet.
    #[default]
    Idle,
    /// Pieces are being dealt onto the board, one per tick.
    Layout,
    /// All pieces are dealt; the player is clearing the board.
    Running,
    /// The board was cleared.
    Won,
}

impl GamePhase {
    /// Whether taps are handled in this phase.
    #[must_use]
    pub fn accepts_input(self) -> bool {
        matches!(self, GamePhase::Layout | GamePhase::Running)
    }
}

impl std::fmt::Display for GamePhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            GamePhase::Idle => "idle",
            GamePhase::Layout => "layout",
            GamePhase::Running => "running",
            GamePhase::Won => "won",
        };
        f.write_str(name)
    }
}

/// Something the consumer may want to react to.
///
/// Events queue up inside the session until
/// [`drain_events`](super::Session::drain_events) is called.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum EngineEvent {
    /// A piece was dealt onto the board.
    PiecePlaced {
        id: PieceId,
        type_id: PieceTypeId,
        position: Axial,
    },
    /// The set of selected pieces changed. Carries the new selection.
    SelectionChanged(Vec<PieceId>),
    /// Pieces left the board, by a match or a redo.
    PiecesRemoved(Vec<PieceId>),
    /// Pieces came back, by an undo.
    PiecesRestored(Vec<PieceId>),
    /// Two pieces were tapped that do not match.
    MatchCancelled([PieceId; 2]),
    /// Too many pieces were selected; every selection was dropped.
    SelectionOverflow(Vec<PieceId>),
    /// The deal finished.
    LayoutComplete { layout: usize, pieces: usize },
    /// The board was cleared.
    GameWon,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phase_input() {
        assert!(!GamePhase::Idle.accepts_input());
        assert!(GamePhase::Layout.accepts_input());
        assert!(GamePhase::Running.accepts_input());
        assert!(!GamePhase::Won.accepts_input());
        assert_eq!(GamePhase::default(), GamePhase::Idle);
        assert_eq!(GamePhase::Running.to_string(), "running");
    }

    #[test]
    fn test_event_serde() {
        let event = EngineEvent::MatchCancelled([PieceId::new(1), PieceId::new(4)]);
        let json = serde_json::to_string(&event).unwrap();
        let back: EngineEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(back, event);
    }
}

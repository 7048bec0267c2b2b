//! The session facade.

use std::sync::Arc;

use log::{debug, info};

use super::events::{EngineEvent, GamePhase};
use crate::board::{BoardSnapshot, BoardStore};
use crate::catalog::{Catalog, PieceTypeId};
use crate::command::{Command, CommandManager};
use crate::core::{ConfigError, EngineConfig, GameRng, Piece, PieceId};
use crate::layout::{standard_layouts, LayoutGenerator};
use crate::rules::{find_move, Hint, SelectionMachine, SelectionOutcome};

/// One player's garden: a board plus everything that acts on it.
#[derive(Debug)]
pub struct Session {
    catalog: Arc<Catalog>,
    board: BoardStore,
    selection: SelectionMachine,
    layout: LayoutGenerator,
    commands: CommandManager<BoardStore>,
    phase: GamePhase,
    events: Vec<EngineEvent>,
}

impl Session {
    /// Create a session from a catalog and a configuration.
    ///
    /// Fails if the configuration does not fit the catalog.
    pub fn new(catalog: Arc<Catalog>, config: &EngineConfig) -> Result<Self, ConfigError> {
        let layout = LayoutGenerator::from_config(Arc::clone(&catalog), config)?;
        Ok(Self::assemble(catalog, layout))
    }

    /// The standard game with a fixed seed.
    #[must_use]
    pub fn standard(seed: u64) -> Self {
        let catalog = Arc::new(Catalog::standard());
        let layout = LayoutGenerator::new(Arc::clone(&catalog), standard_layouts(), true, GameRng::new(seed));
        Self::assemble(catalog, layout)
    }

    fn assemble(catalog: Arc<Catalog>, layout: LayoutGenerator) -> Self {
        Self {
            board: BoardStore::new(Arc::clone(&catalog)),
            catalog,
            selection: SelectionMachine::new(),
            layout,
            commands: CommandManager::new(),
            phase: GamePhase::Idle,
            events: Vec::new(),
        }
    }

    // === Game flow ===

    /// Throw away the current game and start dealing the next one.
    pub fn new_game(&mut self) {
        self.commands.clear();
        self.board.clear();
        self.layout.reset();
        self.phase = GamePhase::Layout;
        info!(
            "new game on layout {} ({} pieces to deal)",
            self.layout.layout_index().unwrap_or(0),
            self.layout.remaining()
        );
    }

    /// Advance one frame.
    ///
    /// During layout this deals one piece. Once the deal runs out the
    /// session switches to running. While running, an empty board wins.
    pub fn tick(&mut self) -> GamePhase {
        match self.phase {
            GamePhase::Layout => self.deal_one(),
            GamePhase::Running if self.board.is_empty() => {
                self.phase = GamePhase::Won;
                info!("board cleared; game won");
                self.events.push(EngineEvent::GameWon);
            }
            _ => {}
        }
        self.phase
    }

    fn deal_one(&mut self) {
        let Some(placement) = self.layout.next_placement() else {
            self.phase = GamePhase::Running;
            let layout = self.layout.layout_index().unwrap_or(0);
            info!("layout {} complete with {} pieces", layout, self.board.len());
            self.events.push(EngineEvent::LayoutComplete {
                layout,
                pieces: self.board.len(),
            });
            return;
        };

        let before = self.board.selected_ids();
        if let Some(id) = self.board.place(placement.type_id, placement.position) {
            self.events.push(EngineEvent::PiecePlaced {
                id,
                type_id: placement.type_id,
                position: placement.position,
            });
        }
        let after = self.board.selected_ids();
        if before != after {
            self.events.push(EngineEvent::SelectionChanged(after));
        }
    }

    // === Input ===

    /// Handle a tap on a piece.
    ///
    /// A completed match is removed through the command manager, so it can
    /// be undone. Ignored outside layout and running.
    pub fn tap(&mut self, id: PieceId) -> SelectionOutcome {
        if !self.phase.accepts_input() {
            debug!("tap on {} ignored in phase {}", id, self.phase);
            return SelectionOutcome::Ignored;
        }

        let outcome = self.selection.select(&mut self.board, id);
        match &outcome {
            SelectionOutcome::Ignored => {}
            SelectionOutcome::Selected(_) | SelectionOutcome::Deselected(_) => {
                self.events.push(EngineEvent::SelectionChanged(self.board.selected_ids()));
            }
            SelectionOutcome::Remove(ids) => {
                self.remove_matched(ids.to_vec());
                self.events.push(EngineEvent::SelectionChanged(Vec::new()));
            }
            SelectionOutcome::Cancelled(pair) => {
                self.events.push(EngineEvent::MatchCancelled(*pair));
                self.events.push(EngineEvent::SelectionChanged(Vec::new()));
            }
            SelectionOutcome::Overflow(ids) => {
                self.events.push(EngineEvent::SelectionOverflow(ids.clone()));
                self.events.push(EngineEvent::SelectionChanged(Vec::new()));
            }
        }
        outcome
    }

    fn remove_matched(&mut self, ids: Vec<PieceId>) {
        let saved: Vec<Piece> = ids.iter().filter_map(|id| self.board.get(*id).cloned()).collect();
        let label = saved
            .iter()
            .map(|p| self.catalog.name(p.type_id))
            .collect::<Vec<_>>()
            .join("+");

        let targets = ids.clone();
        let command = Command::new(
            move |board: &mut BoardStore| {
                board.remove(&targets);
            },
            move |board: &mut BoardStore| {
                board.re_add(&saved);
            },
        )
        .with_label(format!("match {}", label));

        self.commands.execute(&mut self.board, command);
        // A hint refers to the board it was found on.
        self.board.highlight(&[]);
        self.events.push(EngineEvent::PiecesRemoved(ids));
    }

    /// Undo the last match. Clears the selection first.
    ///
    /// Returns `false` if there was nothing to undo or the game is over.
    pub fn undo(&mut self) -> bool {
        self.replay(|commands, board| commands.undo(board))
    }

    /// Redo the last undone match. Clears the selection first.
    pub fn redo(&mut self) -> bool {
        self.replay(|commands, board| commands.redo(board))
    }

    fn replay(&mut self, step: impl FnOnce(&mut CommandManager<BoardStore>, &mut BoardStore) -> bool) -> bool {
        if !self.phase.accepts_input() {
            return false;
        }
        if !self.selection.clear(&mut self.board).is_empty() {
            self.events.push(EngineEvent::SelectionChanged(Vec::new()));
        }

        let before: Vec<PieceId> = self.board.iter().map(|p| p.id).collect();
        if !step(&mut self.commands, &mut self.board) {
            return false;
        }
        self.board.highlight(&[]);
        let after: Vec<PieceId> = self.board.iter().map(|p| p.id).collect();

        // Both lists are in id order.
        let restored: Vec<PieceId> = after.iter().copied().filter(|id| before.binary_search(id).is_err()).collect();
        let removed: Vec<PieceId> = before.iter().copied().filter(|id| after.binary_search(id).is_err()).collect();
        if !removed.is_empty() {
            self.events.push(EngineEvent::PiecesRemoved(removed));
        }
        if !restored.is_empty() {
            self.events.push(EngineEvent::PiecesRestored(restored));
        }
        true
    }

    // === Hints and highlights ===

    /// Find a legal move and highlight it. An empty hint clears highlights.
    ///
    /// Highlights last until the next removal, undo or redo.
    pub fn hint(&mut self) -> Hint {
        let hint = find_move(&self.board.snapshot(), &self.catalog);
        self.board.highlight(&hint);
        hint
    }

    /// Highlight every piece of a type, or clear highlights on `None`.
    pub fn highlight_type(&mut self, type_id: Option<PieceTypeId>) {
        self.board.highlight_type(type_id);
    }

    /// Whether any legal move is left. Never ends the game by itself.
    #[must_use]
    pub fn has_moves(&self) -> bool {
        !find_move(&self.board.snapshot(), &self.catalog).is_empty()
    }

    /// Pieces left per type, indexed by type id.
    #[must_use]
    pub fn remaining_by_type(&self) -> Vec<usize> {
        self.board.counts_by_type()
    }

    // === Queries ===

    /// Take every event queued since the last drain.
    pub fn drain_events(&mut self) -> Vec<EngineEvent> {
        std::mem::take(&mut self.events)
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// All pieces on the board, in id order.
    pub fn pieces(&self) -> impl Iterator<Item = &Piece> {
        self.board.iter()
    }

    /// Read-only copy of the board.
    #[must_use]
    pub fn snapshot(&self) -> BoardSnapshot {
        self.board.snapshot()
    }

    /// The live board.
    #[must_use]
    pub fn board(&self) -> &BoardStore {
        &self.board
    }

    /// The piece catalog.
    #[must_use]
    pub fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }

    /// Index of the shape the current game was dealt on.
    #[must_use]
    pub fn layout_index(&self) -> Option<usize> {
        self.layout.layout_index()
    }

    /// Whether a match can be undone.
    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.commands.can_undo()
    }

    /// Whether an undone match can be redone.
    #[must_use]
    pub fn can_redo(&self) -> bool {
        self.commands.can_redo()
    }

    /// Number of overflow recoveries so far.
    #[must_use]
    pub fn overflow_count(&self) -> u32 {
        self.selection.overflow_count()
    }
}

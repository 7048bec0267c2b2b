//! Selection and hint integration tests.
//!
//! These tests drive the selection machine the way a player would:
//! - pairs, singles and mismatches
//! - hints that always resolve into a removal

use std::sync::Arc;

use hexgarden::catalog::standard::*;
use hexgarden::catalog::Catalog;
use hexgarden::core::{Axial, PieceId};
use hexgarden::rules::{find_move, SelectionMachine, SelectionOutcome, SelectionState};
use hexgarden::BoardStore;
use proptest::prelude::*;

fn store() -> BoardStore {
    BoardStore::new(Arc::new(Catalog::standard()))
}

// =============================================================================
// Scenarios
// =============================================================================

/// Adjacent salt and fire, both open, resolve into one removal.
#[test]
fn test_salt_and_fire_removed_together() {
    let mut board = store();
    let mut machine = SelectionMachine::new();
    let salt = board.place(SALT, Axial::new(0, 0)).unwrap();
    let fire = board.place(FIRE, Axial::new(1, 0)).unwrap();

    machine.select(&mut board, fire);
    let outcome = machine.select(&mut board, salt);
    assert_eq!(outcome, SelectionOutcome::Remove([salt, fire].into_iter().collect()));
    assert_eq!(machine.state(&board), SelectionState::Idle);
}

/// Gold goes on its own.
#[test]
fn test_gold_removed_alone() {
    let mut board = store();
    let mut machine = SelectionMachine::new();
    let gold = board.place(GOLD, Axial::ORIGIN).unwrap();

    match machine.select(&mut board, gold) {
        SelectionOutcome::Remove(ids) => assert_eq!(ids.as_slice(), &[gold]),
        other => panic!("expected removal, got {:?}", other),
    }
    assert!(board.selected_ids().is_empty());
}

/// Quicksilver pairs with the current metal but not with gold.
#[test]
fn test_quicksilver_and_metals() {
    let mut board = store();
    let mut machine = SelectionMachine::new();
    let quicksilver = board.place(QUICKSILVER, Axial::new(0, 0)).unwrap();
    let silver = board.place(SILVER, Axial::new(4, 0)).unwrap();
    let gold = board.place(GOLD, Axial::new(-4, 0)).unwrap();

    // Silver is the lowest metal left, gold is locked behind it.
    assert!(board.get(silver).unwrap().enabled);
    assert!(!board.get(gold).unwrap().enabled);
    assert_eq!(machine.select(&mut board, gold), SelectionOutcome::Ignored);

    machine.select(&mut board, quicksilver);
    assert!(matches!(machine.select(&mut board, silver), SelectionOutcome::Remove(_)));
}

/// Mismatched pieces are both dropped from the selection and stay put.
#[test]
fn test_mismatch_keeps_pieces() {
    let mut board = store();
    let mut machine = SelectionMachine::new();
    let mors = board.place(MORS, Axial::new(0, 0)).unwrap();
    let air = board.place(AIR, Axial::new(3, 0)).unwrap();

    machine.select(&mut board, air);
    assert_eq!(machine.select(&mut board, mors), SelectionOutcome::Cancelled([mors, air]));
    assert_eq!(board.len(), 2);
    assert!(board.selected_ids().is_empty());
}

// =============================================================================
// Hints
// =============================================================================

/// Removing whatever the hint offers eventually clears a solvable board.
#[test]
fn test_hints_clear_simple_board() {
    let mut board = store();
    let mut machine = SelectionMachine::new();
    for (i, t) in [FIRE, FIRE, WATER, SALT, MORS, VITAE, LEAD, QUICKSILVER, GOLD].into_iter().enumerate() {
        board.place(t, Axial::new(3 * i as i32, 0));
    }

    loop {
        let hint = find_move(&board.snapshot(), board.catalog());
        if hint.is_empty() {
            break;
        }
        let mut last = SelectionOutcome::Ignored;
        for id in &hint {
            last = machine.select(&mut board, *id);
        }
        let SelectionOutcome::Remove(ids) = last else {
            panic!("hint {:?} did not resolve", hint);
        };
        board.remove(&ids);
    }

    assert!(board.is_empty(), "left {:?}", board.iter().collect::<Vec<_>>());
}

proptest! {
    /// Tapping a hinted move always removes exactly the hinted pieces.
    #[test]
    fn prop_hint_always_resolves(
        cells in prop::collection::vec(((-3i32..=3), (-3i32..=3), 0u8..14), 1..25)
    ) {
        let mut board = store();
        for (q, r, t) in cells {
            board.place(hexgarden::catalog::PieceTypeId::new(t), Axial::new(q, r));
        }

        let hint = find_move(&board.snapshot(), board.catalog());
        prop_assume!(!hint.is_empty());

        let mut machine = SelectionMachine::new();
        let mut last = SelectionOutcome::Ignored;
        for id in &hint {
            last = machine.select(&mut board, *id);
        }
        let mut expected: Vec<PieceId> = hint.to_vec();
        expected.sort();
        match last {
            SelectionOutcome::Remove(ids) => prop_assert_eq!(ids.to_vec(), expected),
            other => prop_assert!(false, "unexpected {:?}", other),
        }
    }
}

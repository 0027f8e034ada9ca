//! Tests for list editing operations
//!
//! Batch shifting is checked exhaustively over every selection of a small
//! list, for both directions, against a direct statement of the rule.

use super::{EffectInstance, EffectList, ListEntry, Selection, SelectionKey, ShiftDirection};

/// Entry IDs in order, pin marker as 0
fn ids(list: &EffectList) -> Vec<u32> {
    list.entries()
        .iter()
        .map(|entry| entry.as_effect().map_or(0, |e| e.id))
        .collect()
}

/// Build a list from IDs, 0 marks the pin
fn list_of(ids: &[u32]) -> EffectList {
    let pin = ids.iter().position(|id| *id == 0).expect("fixture needs a pin");
    EffectList::from_effects(
        ids.iter().filter(|id| **id != 0).map(|id| EffectInstance::new(*id)),
        pin,
    )
}

fn key_of(id: u32) -> SelectionKey {
    if id == 0 {
        SelectionKey::Pin
    } else {
        SelectionKey::Effect(id)
    }
}

fn pin_count(list: &EffectList) -> usize {
    list.entries().iter().filter(|entry| entry.is_pin()).count()
}

// ─────────────────────────────────────────────────────────────────────────────
// Insert / remove / toggle
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_insert_appends_with_zero_modifiers() {
    let list = EffectList::new().insert_effect(740).insert_effect(725);
    assert_eq!(ids(&list), vec![0, 740, 725]);
    assert_eq!(
        list.entries()[2],
        ListEntry::Effect(EffectInstance {
            id: 725,
            stacks: 0,
            target: 0,
        })
    );
}

#[test]
fn test_operations_do_not_mutate_input() {
    let original = list_of(&[1, 2, 0, 3]);
    let snapshot = original.clone();

    let _ = original.insert_effect(9);
    let _ = original.remove_effect(2);
    let _ = original.move_item(0, 4);
    let _ = original.shift_selection(&Selection::from_iter([key_of(3)]), ShiftDirection::Up);
    let _ = original.delete_selection(&mut Selection::from_iter([key_of(1)]));

    assert_eq!(original, snapshot);
}

#[test]
fn test_remove_first_match_only() {
    let list = list_of(&[5, 0]).insert_effect(5);
    assert_eq!(ids(&list), vec![5, 0, 5]);
    assert_eq!(ids(&list.remove_effect(5)), vec![0, 5]);
}

#[test]
fn test_remove_missing_is_noop() {
    let list = list_of(&[1, 0, 2]);
    assert_eq!(list.remove_effect(42), list);
}

#[test]
fn test_toggle_effect() {
    let list = EffectList::new().toggle_effect(7);
    assert_eq!(ids(&list), vec![0, 7]);
    assert_eq!(ids(&list.toggle_effect(7)), vec![0]);
}

// ─────────────────────────────────────────────────────────────────────────────
// Move
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_move_forward_accounts_for_hole() {
    // [A, B, C, D] + pin at the end
    let list = list_of(&[1, 2, 3, 4, 0]);
    assert_eq!(ids(&list.move_item(0, 3)), vec![2, 3, 1, 4, 0]);
}

#[test]
fn test_move_backward() {
    let list = list_of(&[1, 2, 3, 4, 0]);
    assert_eq!(ids(&list.move_item(3, 0)), vec![4, 1, 2, 3, 0]);
}

#[test]
fn test_move_to_end_and_clamped() {
    let list = list_of(&[1, 2, 3, 0]);
    assert_eq!(ids(&list.move_item(0, 4)), vec![2, 3, 0, 1]);
    assert_eq!(ids(&list.move_item(0, 100)), vec![2, 3, 0, 1]);
}

#[test]
fn test_move_onto_self_or_next_slot_is_noop() {
    let list = list_of(&[1, 2, 3, 0]);
    assert_eq!(list.move_item(1, 1), list);
    assert_eq!(list.move_item(1, 2), list);
}

#[test]
fn test_move_out_of_range_source_is_noop() {
    let list = list_of(&[1, 0, 2]);
    assert_eq!(list.move_item(3, 0), list);
}

#[test]
fn test_move_pin_repartitions() {
    let list = list_of(&[1, 2, 0, 3]);
    let moved = list.move_item(2, 0);
    assert_eq!(ids(&moved), vec![0, 1, 2, 3]);
    assert_eq!(moved.pinned().count(), 0);
    assert_eq!(moved.rest().count(), 3);
}

// ─────────────────────────────────────────────────────────────────────────────
// Shift selection
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_shift_up_single() {
    let list = list_of(&[1, 2, 0, 3]);
    let selection = Selection::from_iter([key_of(3)]);
    assert_eq!(ids(&list.shift_selection(&selection, ShiftDirection::Up)), vec![1, 2, 3, 0]);
}

#[test]
fn test_shift_up_block_at_top_stays() {
    let list = list_of(&[1, 2, 0, 3]);
    let selection = Selection::from_iter([key_of(2), key_of(1)]);
    assert_eq!(list.shift_selection(&selection, ShiftDirection::Up), list);
}

#[test]
fn test_shift_up_block_moves_together() {
    let list = list_of(&[1, 2, 3, 0]);
    let selection = Selection::from_iter([key_of(3), key_of(2)]);
    assert_eq!(ids(&list.shift_selection(&selection, ShiftDirection::Up)), vec![2, 3, 1, 0]);
}

#[test]
fn test_shift_down_block_at_bottom_stays() {
    let list = list_of(&[1, 0, 2, 3]);
    let selection = Selection::from_iter([key_of(2), key_of(3)]);
    assert_eq!(list.shift_selection(&selection, ShiftDirection::Down), list);
}

#[test]
fn test_shift_down_with_gap() {
    let list = list_of(&[1, 2, 3, 4, 0]);
    let selection = Selection::from_iter([key_of(1), key_of(3)]);
    assert_eq!(
        ids(&list.shift_selection(&selection, ShiftDirection::Down)),
        vec![2, 1, 4, 3, 0]
    );
}

#[test]
fn test_shift_pin_like_any_item() {
    let list = list_of(&[1, 2, 0, 3]);
    let selection = Selection::from_iter([SelectionKey::Pin]);
    assert_eq!(ids(&list.shift_selection(&selection, ShiftDirection::Up)), vec![1, 0, 2, 3]);
    assert_eq!(ids(&list.shift_selection(&selection, ShiftDirection::Down)), vec![1, 2, 3, 0]);
}

#[test]
fn test_shift_ignores_missing_keys() {
    let list = list_of(&[1, 2, 0]);
    // The missing key must not take a rank and unblock entry 1
    let selection = Selection::from_iter([key_of(99), key_of(1)]);
    assert_eq!(list.shift_selection(&selection, ShiftDirection::Up), list);
}

#[test]
fn test_shift_empty_selection_is_noop() {
    let list = list_of(&[1, 0, 2]);
    assert_eq!(list.shift_selection(&Selection::new(), ShiftDirection::Down), list);
}

#[test]
fn test_shift_up_then_down_restores_unblocked_block() {
    let list = list_of(&[1, 2, 3, 4, 0, 5]);
    let selection = Selection::from_iter([key_of(3), key_of(4)]);
    let up = list.shift_selection(&selection, ShiftDirection::Up);
    assert_eq!(ids(&up), vec![1, 3, 4, 2, 0, 5]);
    assert_eq!(up.shift_selection(&selection, ShiftDirection::Down), list);
}

/// Expected position of every selected entry after shifting toward index 0:
/// entries in a selected run touching index 0 stay, every other selected
/// entry moves up by one.
fn expected_up(selected: &[bool]) -> Vec<(usize, usize)> {
    let mut blocked = true;
    let mut moves = Vec::new();
    for (idx, &is_selected) in selected.iter().enumerate() {
        blocked &= is_selected;
        if is_selected {
            moves.push((idx, if blocked { idx } else { idx - 1 }));
        }
    }
    moves
}

#[test]
fn test_shift_exhaustive_small_lists() {
    let base = [1, 2, 0, 3, 4, 5];
    let len = base.len();
    let list = list_of(&base);

    for mask in 0u32..(1 << len) {
        let selected: Vec<bool> = (0..len).map(|i| mask & (1 << i) != 0).collect();
        let selection: Selection = base
            .iter()
            .zip(&selected)
            .filter(|(_, s)| **s)
            .map(|(id, _)| key_of(*id))
            .collect();

        for direction in [ShiftDirection::Up, ShiftDirection::Down] {
            let shifted = list.shift_selection(&selection, direction);
            let out = ids(&shifted);

            assert_eq!(pin_count(&shifted), 1, "mask {mask:#b} {direction:?}");

            let mut sorted = out.clone();
            sorted.sort_unstable();
            let mut expected_sorted = base.to_vec();
            expected_sorted.sort_unstable();
            assert_eq!(sorted, expected_sorted, "mask {mask:#b} {direction:?}");

            // Mirror the down case onto the up rule
            let moves = match direction {
                ShiftDirection::Up => expected_up(&selected),
                ShiftDirection::Down => {
                    let mirrored: Vec<bool> = selected.iter().rev().copied().collect();
                    expected_up(&mirrored)
                        .into_iter()
                        .map(|(from, to)| (len - 1 - from, len - 1 - to))
                        .collect()
                }
            };

            for (from, to) in moves {
                assert_eq!(out[to], base[from], "mask {mask:#b} {direction:?} entry {from}");
            }

            // Unselected entries keep their relative order
            let unselected_before: Vec<u32> = base
                .iter()
                .zip(&selected)
                .filter(|(_, s)| !**s)
                .map(|(id, _)| *id)
                .collect();
            let unselected_after: Vec<u32> =
                out.iter().copied().filter(|id| unselected_before.contains(id)).collect();
            assert_eq!(unselected_after, unselected_before, "mask {mask:#b} {direction:?}");
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Delete selection
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_delete_selection_keeps_pin_and_clears() {
    let list = list_of(&[1, 2, 0, 3]);
    let mut selection = Selection::from_iter([SelectionKey::Pin, key_of(1), key_of(3)]);
    let deleted = list.delete_selection(&mut selection);
    assert_eq!(ids(&deleted), vec![2, 0]);
    assert!(selection.is_empty());
}

#[test]
fn test_delete_everything_leaves_pin() {
    let list = list_of(&[1, 0, 2]);
    let mut selection: Selection = [1, 0, 2].map(key_of).into_iter().collect();
    assert_eq!(list.delete_selection(&mut selection), EffectList::new());
}

// ─────────────────────────────────────────────────────────────────────────────
// Selection bookkeeping
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_selection_toggle_and_dedupe() {
    let mut selection = Selection::new();
    selection.toggle(key_of(5));
    selection.select(key_of(5));
    selection.toggle(SelectionKey::Pin);
    assert_eq!(selection.keys(), &[key_of(5), SelectionKey::Pin]);

    selection.toggle(key_of(5));
    assert_eq!(selection.keys(), &[SelectionKey::Pin]);
    assert!(selection.contains(SelectionKey::Pin));
    assert_eq!(selection.len(), 1);
}

#[test]
fn test_every_operation_keeps_one_pin() {
    let list = list_of(&[1, 2, 0, 3]);
    let all: Selection = [1, 2, 0, 3].map(key_of).into_iter().collect();
    let outputs = [
        list.insert_effect(4),
        list.remove_effect(1),
        list.toggle_effect(2),
        list.move_item(2, 0),
        list.move_item(0, 4),
        list.shift_selection(&all, ShiftDirection::Up),
        list.shift_selection(&all, ShiftDirection::Down),
        list.delete_selection(&mut all.clone()),
    ];
    for out in &outputs {
        assert_eq!(pin_count(out), 1);
    }
}

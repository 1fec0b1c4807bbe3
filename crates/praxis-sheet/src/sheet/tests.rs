// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use super::{EventPayload, EventSheet, Instruction};
use praxis_core::{EditError, EventId};

// --- HELPERS ---

/// Builds a sheet of top-level comment events in the given order.
fn comment_sheet(names: &[&str]) -> (EventSheet, Vec<EventId>) {
    let mut sheet = EventSheet::new();
    let mut ids = Vec::new();
    let mut anchor = None;
    for name in names {
        let id = sheet
            .insert_after(anchor, EventPayload::comment(*name))
            .expect("Inserting into a fresh sheet should always succeed");
        ids.push(id);
        anchor = Some(id);
    }
    (sheet, ids)
}

fn comment_text(sheet: &EventSheet, id: EventId) -> String {
    match &sheet.node(id).expect("Event should be alive").payload {
        EventPayload::Comment { text } => text.clone(),
        other => panic!("Expected a comment event, got {other:?}"),
    }
}

// --- TESTS ---

#[test]
fn insert_with_no_anchor_prepends_to_roots() {
    let (mut sheet, _) = comment_sheet(&["A", "B"]);

    let c = sheet
        .insert_after(None, EventPayload::comment("C"))
        .expect("Insert without anchor should succeed");

    assert_eq!(sheet.roots()[0], c, "New event should be the first root");
    assert_eq!(sheet.len(), 3);
    assert_eq!(comment_text(&sheet, sheet.roots()[1]), "A");
}

#[test]
fn insert_after_anchor_becomes_next_sibling() {
    let (mut sheet, ids) = comment_sheet(&["A", "B"]);

    let c = sheet
        .insert_after(Some(ids[0]), EventPayload::comment("C"))
        .expect("Insert after a live anchor should succeed");

    let order: Vec<String> = sheet
        .roots()
        .iter()
        .map(|&id| comment_text(&sheet, id))
        .collect();
    assert_eq!(order, vec!["A", "C", "B"]);
    assert_eq!(sheet.roots()[1], c);
}

#[test]
fn insert_as_child_appends_in_order() {
    let (mut sheet, ids) = comment_sheet(&["A"]);

    let c1 = sheet
        .insert_as_child(ids[0], EventPayload::standard())
        .expect("First sub-event should succeed");
    let c2 = sheet
        .insert_as_child(ids[0], EventPayload::standard())
        .expect("Second sub-event should succeed");

    let node = sheet.node(ids[0]).expect("Parent should be alive");
    assert_eq!(node.children(), &[c1, c2], "Children keep insertion order");
    assert_eq!(
        sheet.node(c1).and_then(|n| n.parent()),
        Some(ids[0]),
        "Sub-event should point back at its parent"
    );
}

#[test]
fn insert_after_stale_anchor_is_rejected_without_changes() {
    let (mut sheet, ids) = comment_sheet(&["A", "B"]);
    sheet.remove_all(&[ids[0]]);
    let before = sheet.clone();

    let result = sheet.insert_after(Some(ids[0]), EventPayload::comment("C"));

    assert_eq!(result, Err(EditError::InvalidReference { id: ids[0] }));
    assert_eq!(sheet, before, "A rejected insert must not touch the sheet");
}

#[test]
fn remove_of_ancestor_and_descendant_removes_subtree_once() {
    let (mut sheet, ids) = comment_sheet(&["A", "B"]);
    let child = sheet
        .insert_as_child(ids[0], EventPayload::standard())
        .expect("Sub-event should succeed");
    let grandchild = sheet
        .insert_as_child(child, EventPayload::standard())
        .expect("Nested sub-event should succeed");

    // Selection contains both the ancestor and a nested descendant.
    let removed = sheet.remove_all(&[grandchild, ids[0]]);

    assert_eq!(removed, 1, "Only the top-level removed root counts");
    assert!(!sheet.contains(ids[0]));
    assert!(!sheet.contains(child), "Descendants go with the ancestor");
    assert!(!sheet.contains(grandchild));
    assert_eq!(sheet.len(), 1, "Only B should remain");
}

#[test]
fn remove_of_stale_or_duplicate_handles_counts_zero() {
    let (mut sheet, ids) = comment_sheet(&["A", "B"]);

    let first = sheet.remove_all(&[ids[0], ids[0]]);
    let second = sheet.remove_all(&[ids[0]]);

    assert_eq!(first, 1, "The duplicate handle must not double-count");
    assert_eq!(second, 0, "Removing an already-removed event is a no-op");
    assert_eq!(sheet.len(), 1);
}

#[test]
fn slot_recycling_invalidates_old_handles() {
    let (mut sheet, ids) = comment_sheet(&["A"]);
    sheet.remove_all(&[ids[0]]);

    let replacement = sheet
        .insert_after(None, EventPayload::comment("fresh"))
        .expect("Insert should succeed");

    assert_eq!(
        replacement.index, ids[0].index,
        "The freed slot should be recycled"
    );
    assert_eq!(
        replacement.generation,
        ids[0].generation + 1,
        "Recycling must bump the generation"
    );
    assert!(
        !sheet.contains(ids[0]),
        "The stale handle must not resolve to the new event"
    );
    assert!(sheet.contains(replacement));
}

#[test]
fn set_folded_recursive_covers_all_descendants() {
    let (mut sheet, ids) = comment_sheet(&["A", "B"]);
    let child = sheet.insert_as_child(ids[0], EventPayload::standard()).unwrap();
    let grandchild = sheet.insert_as_child(child, EventPayload::standard()).unwrap();

    sheet
        .set_folded_recursive(ids[0], true)
        .expect("Folding a live subtree should succeed");

    for id in [ids[0], child, grandchild] {
        assert!(sheet.node(id).unwrap().folded, "Subtree should be folded");
    }
    assert!(
        !sheet.node(ids[1]).unwrap().folded,
        "Events outside the subtree must be untouched"
    );

    sheet.set_all_folded(false);
    assert!(sheet.iter().all(|id| !sheet.node(id).unwrap().folded));
}

#[test]
fn find_path_reports_child_indices_from_the_roots() {
    let (mut sheet, ids) = comment_sheet(&["A", "B"]);
    let c = sheet.insert_as_child(ids[0], EventPayload::standard()).unwrap();
    let d = sheet.insert_as_child(c, EventPayload::standard()).unwrap();
    let e = sheet.insert_as_child(ids[0], EventPayload::standard()).unwrap();

    assert_eq!(sheet.find_path(ids[1]), Some(vec![1]));
    assert_eq!(sheet.find_path(d), Some(vec![0, 0, 0]));
    assert_eq!(sheet.find_path(e), Some(vec![0, 1]));

    sheet.remove_all(&[c]);
    assert_eq!(sheet.find_path(d), None, "Removed events have no path");
}

#[test]
fn iteration_is_depth_first_pre_order() {
    let (mut sheet, ids) = comment_sheet(&["A", "B"]);
    let c = sheet.insert_as_child(ids[0], EventPayload::standard()).unwrap();
    let d = sheet.insert_as_child(c, EventPayload::standard()).unwrap();
    let e = sheet.insert_as_child(ids[0], EventPayload::standard()).unwrap();

    let visited: Vec<EventId> = sheet.iter().collect();

    assert_eq!(visited, vec![ids[0], c, d, e, ids[1]]);
}

#[test]
fn search_scans_comments_instructions_and_parameters() {
    let mut sheet = EventSheet::new();
    let comment = sheet
        .insert_after(None, EventPayload::comment("Handle player input"))
        .unwrap();
    let standard = sheet
        .insert_after(Some(comment), EventPayload::Standard {
            conditions: vec![Instruction::new("CollisionNP", vec!["Player".into(), "Coin".into()])],
            actions: vec![Instruction::new("Opacity", vec!["128".into()])],
        })
        .unwrap();
    let link = sheet
        .insert_after(Some(standard), EventPayload::link("SharedEvents"))
        .unwrap();

    assert_eq!(sheet.search("player"), vec![comment, standard]);
    assert_eq!(sheet.search("OPACITY"), vec![standard]);
    assert_eq!(sheet.search("shared"), vec![link]);
    assert!(sheet.search("").is_empty(), "An empty needle matches nothing");
}

#[test]
fn instantiated_copies_are_structurally_equal_but_independent() {
    let (mut sheet, ids) = comment_sheet(&["A"]);
    sheet.insert_as_child(ids[0], EventPayload::comment("inner")).unwrap();
    let definition = sheet
        .export_event(ids[0])
        .expect("Exporting a live subtree should succeed");

    let copy_one = sheet.instantiate_after(&definition, Some(ids[0])).unwrap();
    let copy_two = sheet.instantiate_after(&definition, Some(copy_one)).unwrap();

    assert_eq!(
        sheet.export_event(copy_one).unwrap(),
        sheet.export_event(copy_two).unwrap(),
        "Both copies should have the same structure"
    );

    // Mutating one copy must not leak into the other.
    let inner_of_one = sheet.node(copy_one).unwrap().children()[0];
    if let Some(node) = sheet.node_mut(inner_of_one) {
        node.payload = EventPayload::comment("changed");
    }
    assert_ne!(
        sheet.export_event(copy_one).unwrap(),
        sheet.export_event(copy_two).unwrap(),
        "The copies must be referentially independent"
    );
}

#[test]
fn definition_json_helpers_survive_a_round_trip() {
    let (mut sheet, ids) = comment_sheet(&["A"]);
    sheet
        .insert_as_child(
            ids[0],
            EventPayload::Standard {
                conditions: vec![Instruction::new("VarScene", vec!["score".into(), ">".into(), "10".into()])],
                actions: vec![Instruction::new("ChangeAnimation", vec!["2".into()])],
            },
        )
        .unwrap();
    let definition = sheet.export_definition();

    let json = definition.to_json().expect("Serialization should succeed");
    let parsed = super::SheetDefinition::from_json(&json).expect("Parsing our own output should succeed");

    assert_eq!(parsed, definition);
}

#[test]
fn definition_round_trip_preserves_structure() {
    let (mut sheet, ids) = comment_sheet(&["A", "B"]);
    let child = sheet.insert_as_child(ids[0], EventPayload::standard()).unwrap();
    sheet.set_folded(child, true).unwrap();
    sheet.set_enabled(ids[1], false).unwrap();

    let rebuilt = EventSheet::from_definition(&sheet.export_definition());

    assert_eq!(
        rebuilt.export_definition(),
        sheet.export_definition(),
        "A rebuilt sheet should describe the same tree"
    );
    assert_eq!(rebuilt.len(), sheet.len());
}

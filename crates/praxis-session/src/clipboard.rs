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

//! Clipboard snapshots of copied event subtrees.

use praxis_core::EventId;
use praxis_sheet::{EventDefinition, EventSheet};
use std::collections::HashSet;

/// An ordered set of detached event subtrees produced by copy or cut.
///
/// Entries are value-typed [`EventDefinition`]s, so the clipboard shares
/// nothing with the sheet it was copied from: the source can be mutated or
/// the events removed (cut does exactly that) without affecting it, and
/// every paste instantiates fresh copies.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Clipboard {
    entries: Vec<EventDefinition>,
}

impl Clipboard {
    /// Captures the selected subtrees of `sheet`, in pre-order of the sheet
    /// restricted to selection roots: a selected event whose ancestor is
    /// also selected is represented only inside the ancestor's copy.
    /// Stale handles in the selection are skipped.
    pub(crate) fn from_selection(sheet: &EventSheet, selection: &[EventId]) -> Self {
        let selected: HashSet<EventId> = selection
            .iter()
            .copied()
            .filter(|id| sheet.contains(*id))
            .collect();

        let mut entries = Vec::new();
        for id in sheet.iter() {
            if selected.contains(&id) && !has_selected_ancestor(sheet, id, &selected) {
                if let Ok(definition) = sheet.export_event(id) {
                    entries.push(definition);
                }
            }
        }
        Self { entries }
    }

    /// `true` if nothing was copied.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of top-level copied subtrees.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// The copied subtrees, in their original relative order.
    pub fn entries(&self) -> &[EventDefinition] {
        &self.entries
    }
}

fn has_selected_ancestor(sheet: &EventSheet, id: EventId, selected: &HashSet<EventId>) -> bool {
    let mut current = sheet.node(id).and_then(|node| node.parent());
    while let Some(ancestor) = current {
        if selected.contains(&ancestor) {
            return true;
        }
        current = sheet.node(ancestor).and_then(|node| node.parent());
    }
    false
}

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

//! The working event tree and its structural operations.

use crate::sheet::store::EventStore;
use crate::sheet::{EventDefinition, EventNode, EventPayload, SheetDefinition};
use praxis_core::{EditError, EventId};
use std::collections::HashSet;

/// An ordered, hierarchical collection of event nodes.
///
/// Top-level events live in the root list; every event may own nested
/// sub-events. All structural operations validate their handles and reject
/// the whole call (`EditError::InvalidReference`) before touching anything,
/// so a failed operation leaves the sheet exactly as it was.
///
/// `Clone` performs a full deep copy. The editing session uses this as its
/// snapshot primitive: a snapshot shares no state with the live sheet, and
/// restoring one preserves every handle it contained.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventSheet {
    pub(crate) roots: Vec<EventId>,
    pub(crate) store: EventStore,
}

impl EventSheet {
    /// Creates an empty sheet.
    pub fn new() -> Self {
        Self {
            roots: Vec::new(),
            store: EventStore::new(),
        }
    }

    /// The ordered top-level events.
    pub fn roots(&self) -> &[EventId] {
        &self.roots
    }

    /// Number of live events in the whole sheet.
    pub fn len(&self) -> usize {
        self.store.live_count()
    }

    /// Returns `true` if the sheet holds no events.
    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    /// Returns `true` if `id` addresses a live event of this sheet.
    pub fn contains(&self, id: EventId) -> bool {
        self.store.contains(id)
    }

    /// Read access to an event node.
    pub fn node(&self, id: EventId) -> Option<&EventNode> {
        self.store.get(id)
    }

    /// Mutable access to an event node, for payload edits.
    ///
    /// Hierarchy links are not exposed mutably; use the structural
    /// operations to rearrange events.
    pub fn node_mut(&mut self, id: EventId) -> Option<&mut EventNode> {
        self.store.get_mut(id)
    }

    /// Inserts a new event as a sibling immediately after `anchor`, or at
    /// the start of the root list when `anchor` is `None`.
    pub fn insert_after(
        &mut self,
        anchor: Option<EventId>,
        payload: EventPayload,
    ) -> Result<EventId, EditError> {
        let (parent, index) = self.insertion_point(anchor)?;
        let id = self.store.insert(EventNode::new(payload, parent));
        self.place(id, parent, index);
        log::trace!("Inserted event {id:?} under {parent:?} at index {index}.");
        Ok(id)
    }

    /// Appends a new event at the end of `parent`'s sub-events.
    pub fn insert_as_child(
        &mut self,
        parent: EventId,
        payload: EventPayload,
    ) -> Result<EventId, EditError> {
        if !self.contains(parent) {
            return Err(EditError::InvalidReference { id: parent });
        }
        let id = self.store.insert(EventNode::new(payload, Some(parent)));
        if let Some(node) = self.store.get_mut(parent) {
            node.children.push(id);
        }
        log::trace!("Appended sub-event {id:?} to {parent:?}.");
        Ok(id)
    }

    /// Removes the given events and their subtrees wherever found.
    ///
    /// Removal is top-down: a target whose ancestor is also targeted is
    /// removed implicitly with the ancestor and does not count. Stale
    /// handles are no-ops counted as 0. Returns the number of top-level
    /// removed roots.
    pub fn remove_all(&mut self, targets: &[EventId]) -> usize {
        let selected: HashSet<EventId> = targets
            .iter()
            .copied()
            .filter(|id| self.contains(*id))
            .collect();

        let mut removed = 0;
        for &id in targets {
            // Dead by now: stale handle, duplicate, or already gone with an
            // ancestor removed earlier in this call.
            if !self.contains(id) {
                continue;
            }
            if self.has_selected_ancestor(id, &selected) {
                continue;
            }
            self.detach(id);
            self.release_subtree(id);
            removed += 1;
        }
        if removed > 0 {
            log::trace!("Removed {removed} event subtree(s).");
        }
        removed
    }

    /// Sets the enabled flag of one event.
    pub fn set_enabled(&mut self, id: EventId, enabled: bool) -> Result<(), EditError> {
        self.store
            .get_mut(id)
            .map(|node| node.enabled = enabled)
            .ok_or(EditError::InvalidReference { id })
    }

    /// Whether one event takes part in execution.
    pub fn is_enabled(&self, id: EventId) -> Result<bool, EditError> {
        self.store
            .get(id)
            .map(|node| node.enabled)
            .ok_or(EditError::InvalidReference { id })
    }

    /// Sets the fold state of one event.
    pub fn set_folded(&mut self, id: EventId, folded: bool) -> Result<(), EditError> {
        self.store
            .get_mut(id)
            .map(|node| node.folded = folded)
            .ok_or(EditError::InvalidReference { id })
    }

    /// Sets the fold state of one event and all of its descendants.
    pub fn set_folded_recursive(&mut self, id: EventId, folded: bool) -> Result<(), EditError> {
        if !self.contains(id) {
            return Err(EditError::InvalidReference { id });
        }
        let mut stack = vec![id];
        while let Some(current) = stack.pop() {
            if let Some(node) = self.store.get_mut(current) {
                node.folded = folded;
                stack.extend(node.children.iter().copied());
            }
        }
        Ok(())
    }

    /// Folds or unfolds every event in the sheet.
    pub fn set_all_folded(&mut self, folded: bool) {
        for node in self.store.nodes_mut() {
            node.folded = folded;
        }
    }

    /// Computes the child-index path from the root list down to `id`, for
    /// scroll-to-event style consumers. Returns `None` for stale handles.
    pub fn find_path(&self, id: EventId) -> Option<Vec<usize>> {
        if !self.contains(id) {
            return None;
        }
        let mut path = Vec::new();
        let mut current = id;
        loop {
            match self.store.get(current)?.parent {
                Some(parent) => {
                    let position = self
                        .store
                        .get(parent)?
                        .children
                        .iter()
                        .position(|child| *child == current)?;
                    path.push(position);
                    current = parent;
                }
                None => {
                    path.push(self.roots.iter().position(|root| *root == current)?);
                    break;
                }
            }
        }
        path.reverse();
        Some(path)
    }

    /// Depth-first, pre-order traversal of every event in the sheet.
    pub fn iter(&self) -> PreOrder<'_> {
        let mut stack: Vec<EventId> = self.roots.clone();
        stack.reverse();
        PreOrder { sheet: self, stack }
    }

    /// Finds every event whose payload text contains `needle`,
    /// case-insensitively, in pre-order. An empty needle matches nothing.
    pub fn search(&self, needle: &str) -> Vec<EventId> {
        self.iter()
            .filter(|id| {
                self.store
                    .get(*id)
                    .is_some_and(|node| node.payload.matches(needle))
            })
            .collect()
    }

    /// Captures the subtree rooted at `id` as a detached, value-typed
    /// definition. The sheet is not modified.
    pub fn export_event(&self, id: EventId) -> Result<EventDefinition, EditError> {
        let node = self
            .store
            .get(id)
            .ok_or(EditError::InvalidReference { id })?;
        let mut children = Vec::with_capacity(node.children.len());
        for &child in &node.children {
            children.push(self.export_event(child)?);
        }
        Ok(EventDefinition {
            enabled: node.enabled,
            folded: node.folded,
            payload: node.payload.clone(),
            children,
        })
    }

    /// Captures the whole sheet as its serializable intermediate
    /// representation.
    pub fn export_definition(&self) -> SheetDefinition {
        let events = self
            .roots
            .iter()
            .filter_map(|&root| self.export_event(root).ok())
            .collect();
        SheetDefinition { events }
    }

    /// Builds a sheet from its intermediate representation, allocating
    /// fresh handles throughout.
    pub fn from_definition(definition: &SheetDefinition) -> Self {
        let mut sheet = Self::new();
        for event in &definition.events {
            let id = sheet.instantiate(event, None);
            sheet.roots.push(id);
        }
        sheet
    }

    /// Instantiates a fresh deep copy of `definition` as a sibling
    /// immediately after `anchor`, or at the start of the root list when
    /// `anchor` is `None`. Returns the handle of the new subtree root.
    pub fn instantiate_after(
        &mut self,
        definition: &EventDefinition,
        anchor: Option<EventId>,
    ) -> Result<EventId, EditError> {
        let (parent, index) = self.insertion_point(anchor)?;
        let id = self.instantiate(definition, parent);
        self.place(id, parent, index);
        Ok(id)
    }

    /// Resolves where a sibling inserted after `anchor` must land, without
    /// mutating anything. `None` means the start of the root list.
    fn insertion_point(
        &self,
        anchor: Option<EventId>,
    ) -> Result<(Option<EventId>, usize), EditError> {
        let Some(anchor) = anchor else {
            return Ok((None, 0));
        };
        let node = self
            .store
            .get(anchor)
            .ok_or(EditError::InvalidReference { id: anchor })?;
        let siblings = match node.parent {
            Some(parent) => {
                &self
                    .store
                    .get(parent)
                    .ok_or(EditError::InvalidReference { id: parent })?
                    .children
            }
            None => &self.roots,
        };
        let position = siblings
            .iter()
            .position(|sibling| *sibling == anchor)
            .ok_or(EditError::InvalidReference { id: anchor })?;
        Ok((node.parent, position + 1))
    }

    /// Splices an already-allocated event into its sibling list.
    fn place(&mut self, id: EventId, parent: Option<EventId>, index: usize) {
        match parent {
            Some(parent) => {
                if let Some(node) = self.store.get_mut(parent) {
                    node.children.insert(index, id);
                }
            }
            None => self.roots.insert(index, id),
        }
    }

    /// Allocates nodes for `definition` and its descendants, returning the
    /// subtree root. The root is not spliced into any sibling list here.
    fn instantiate(&mut self, definition: &EventDefinition, parent: Option<EventId>) -> EventId {
        let id = self.store.insert(EventNode {
            enabled: definition.enabled,
            folded: definition.folded,
            payload: definition.payload.clone(),
            parent,
            children: Vec::new(),
        });
        let children: Vec<EventId> = definition
            .children
            .iter()
            .map(|child| self.instantiate(child, Some(id)))
            .collect();
        if let Some(node) = self.store.get_mut(id) {
            node.children = children;
        }
        id
    }

    fn has_selected_ancestor(&self, id: EventId, selected: &HashSet<EventId>) -> bool {
        let mut current = self.store.get(id).and_then(|node| node.parent);
        while let Some(ancestor) = current {
            if selected.contains(&ancestor) {
                return true;
            }
            current = self.store.get(ancestor).and_then(|node| node.parent);
        }
        false
    }

    /// Unlinks `id` from its parent's child list or the root list.
    fn detach(&mut self, id: EventId) {
        let parent = self.store.get(id).and_then(|node| node.parent);
        match parent {
            Some(parent) => {
                if let Some(node) = self.store.get_mut(parent) {
                    node.children.retain(|child| *child != id);
                }
            }
            None => self.roots.retain(|root| *root != id),
        }
    }

    /// Frees `id` and every descendant. Assumes `id` is already detached.
    fn release_subtree(&mut self, id: EventId) {
        let mut stack = vec![id];
        while let Some(current) = stack.pop() {
            if let Some(node) = self.store.release(current) {
                stack.extend(node.children);
            }
        }
    }
}

impl Default for EventSheet {
    fn default() -> Self {
        Self::new()
    }
}

/// Depth-first, pre-order iterator over the events of a sheet.
pub struct PreOrder<'a> {
    sheet: &'a EventSheet,
    stack: Vec<EventId>,
}

impl Iterator for PreOrder<'_> {
    type Item = EventId;

    fn next(&mut self) -> Option<EventId> {
        let id = self.stack.pop()?;
        if let Some(node) = self.sheet.store.get(id) {
            self.stack.extend(node.children.iter().rev());
        }
        Some(id)
    }
}

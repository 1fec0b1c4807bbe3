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

//! Internal event storage and handle management.

use crate::sheet::EventNode;
use praxis_core::EventId;

/// Internal manager for event slots.
///
/// The `EventStore` maintains a dense list of event handles and their node
/// data. It handles allocation, recycling of indices via a free list, and
/// generation-checked access. Cloning the store clones every live node,
/// which is what makes `EventSheet::clone` a deep snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct EventStore {
    /// A dense list of every slot that has ever been created. Each entry
    /// holds the current `EventId` (including generation) and an
    /// `Option<EventNode>` which is `Some` only while the event is alive.
    pub(crate) slots: Vec<(EventId, Option<EventNode>)>,
    /// Slot indices available for reuse, enabling O(1) allocation for
    /// previously removed events.
    pub(crate) free_slots: Vec<u32>,
}

impl EventStore {
    /// Creates a new, empty `EventStore`.
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            free_slots: Vec::new(),
        }
    }

    /// Stores `node` in a new or recycled slot and returns its handle.
    ///
    /// If the free list is non-empty, a slot is popped and its generation is
    /// incremented. Otherwise a new slot is appended.
    pub fn insert(&mut self, node: EventNode) -> EventId {
        if let Some(index) = self.free_slots.pop() {
            let slot = &mut self.slots[index as usize];
            slot.0.generation += 1;
            slot.1 = Some(node);
            slot.0
        } else {
            let id = EventId {
                index: self.slots.len() as u32,
                generation: 0,
            };
            self.slots.push((id, Some(node)));
            id
        }
    }

    /// Removes the event addressed by `id` and returns its node, or `None`
    /// if the handle is stale. The slot becomes available for recycling.
    pub fn release(&mut self, id: EventId) -> Option<EventNode> {
        let slot = self.slots.get_mut(id.index as usize)?;
        if slot.0.generation != id.generation || slot.1.is_none() {
            return None;
        }
        self.free_slots.push(id.index);
        slot.1.take()
    }

    /// Returns the node addressed by `id` if the event is alive and the
    /// handle's generation matches.
    pub fn get(&self, id: EventId) -> Option<&EventNode> {
        self.slots.get(id.index as usize).and_then(|(slot_id, node)| {
            if slot_id.generation == id.generation {
                node.as_ref()
            } else {
                None
            }
        })
    }

    /// Mutable variant of [`EventStore::get`].
    pub fn get_mut(&mut self, id: EventId) -> Option<&mut EventNode> {
        self.slots
            .get_mut(id.index as usize)
            .and_then(|(slot_id, node)| {
                if slot_id.generation == id.generation {
                    node.as_mut()
                } else {
                    None
                }
            })
    }

    /// Returns `true` if `id` addresses a live event.
    pub fn contains(&self, id: EventId) -> bool {
        self.get(id).is_some()
    }

    /// Number of live events (not slots).
    pub fn live_count(&self) -> usize {
        self.slots.iter().filter(|(_, node)| node.is_some()).count()
    }

    /// Iterates over every live node mutably, in slot order.
    pub fn nodes_mut(&mut self) -> impl Iterator<Item = &mut EventNode> {
        self.slots.iter_mut().filter_map(|(_, node)| node.as_mut())
    }
}

impl Default for EventStore {
    fn default() -> Self {
        Self::new()
    }
}

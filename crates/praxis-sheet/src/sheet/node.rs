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

use crate::sheet::EventPayload;
use praxis_core::EventId;

/// One event (or sub-event) in a sheet.
///
/// A node's children are totally ordered and owned solely by that node: an
/// event appears in exactly one parent's child list, or in the sheet's root
/// list. The hierarchy links are maintained by [`EventSheet`] operations and
/// are not writable from outside the model.
///
/// [`EventSheet`]: crate::sheet::EventSheet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventNode {
    /// Whether the event takes part in execution. Disabled events stay in
    /// the sheet and keep their sub-events.
    pub enabled: bool,
    /// Display-fold state. Affects how a rendering surface traverses the
    /// tree, never the event semantics.
    pub folded: bool,
    /// The variant data of this event, opaque to the tree logic.
    pub payload: EventPayload,
    pub(crate) parent: Option<EventId>,
    pub(crate) children: Vec<EventId>,
}

impl EventNode {
    /// Creates an enabled, unfolded node with no children yet.
    pub(crate) fn new(payload: EventPayload, parent: Option<EventId>) -> Self {
        Self {
            enabled: true,
            folded: false,
            payload,
            parent,
            children: Vec::new(),
        }
    }

    /// The ordered sub-events of this node.
    pub fn children(&self) -> &[EventId] {
        &self.children
    }

    /// The parent of this node, or `None` for a top-level event.
    pub fn parent(&self) -> Option<EventId> {
        self.parent
    }
}

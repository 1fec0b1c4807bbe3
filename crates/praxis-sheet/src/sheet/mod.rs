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

//! Implements the **event tree model** behind an event-sheet editor.
//!
//! An event sheet is an ordered, hierarchical list of events; each event can
//! own nested sub-events. The model stores every node in a central slot
//! vector and addresses nodes through generational
//! [`EventId`](praxis_core::EventId) handles, so cross-cutting concerns
//! (selection, clipboard, scroll targets) hold cheap copyable references
//! instead of shared pointers into the tree.
//!
//! The primary entry point is the [`EventSheet`] struct. Cloning a sheet is
//! a full deep copy, which is exactly the snapshot primitive the editing
//! session's undo history is built on.

mod definition;
mod node;
mod payload;
mod store;
mod tree;

pub use definition::{EventDefinition, SheetDefinition};
pub use node::EventNode;
pub use payload::{EventPayload, Instruction};
pub use tree::{EventSheet, PreOrder};

#[cfg(test)]
mod tests;

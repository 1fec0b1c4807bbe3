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

//! Defines a stable, intermediate representation of an event sheet using
//! serializable value types.
//!
//! Definitions carry no handles: the nesting of the structs *is* the
//! hierarchy. That makes them the natural currency for everything that
//! leaves the live tree: clipboard entries, and the hand-off to whatever
//! persistence layer the hosting application provides. The editor core
//! itself never writes a file.

use crate::sheet::EventPayload;
use serde::{Deserialize, Serialize};

/// The root container for a sheet's intermediate representation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SheetDefinition {
    /// All top-level events, in sheet order.
    pub events: Vec<EventDefinition>,
}

/// A detached, value-typed copy of one event subtree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventDefinition {
    /// Whether the event takes part in execution.
    pub enabled: bool,
    /// Display-fold state at capture time.
    pub folded: bool,
    /// The event's variant data.
    pub payload: EventPayload,
    /// Nested sub-events, in order.
    pub children: Vec<EventDefinition>,
}

impl SheetDefinition {
    /// Parses a definition from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Renders the definition as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

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

use serde::{Deserialize, Serialize};

/// One condition or action attached to a standard event.
///
/// The tree and session layers treat instructions as opaque data: `kind`
/// names the engine operation (e.g. `"Opacity"`, `"ChangeAnimation"`) and
/// `parameters` are its raw, still-unparsed argument strings. Interpreting
/// them is the job of the code-generation layer, not the editor core.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Instruction {
    /// Name of the engine operation this instruction invokes.
    pub kind: String,
    /// Raw argument strings, edited in place by live parameter editing.
    pub parameters: Vec<String>,
    /// Whether the result is negated. Only meaningful for conditions.
    pub inverted: bool,
}

impl Instruction {
    /// Creates a non-inverted instruction.
    pub fn new(kind: impl Into<String>, parameters: Vec<String>) -> Self {
        Self {
            kind: kind.into(),
            parameters,
            inverted: false,
        }
    }
}

/// The variant data carried by one event node.
///
/// Events are polymorphic over a small set of kinds; everything the tree and
/// history logic does (insert, remove, fold, snapshot) is agnostic to which
/// variant a node holds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum EventPayload {
    /// A regular condition/action block.
    Standard {
        /// Conditions guarding the actions, evaluated in order.
        conditions: Vec<Instruction>,
        /// Actions executed when all conditions pass.
        actions: Vec<Instruction>,
    },
    /// A free-form annotation with no execution semantics.
    Comment {
        /// The comment text.
        text: String,
    },
    /// A reference to an externally defined event list, spliced in at
    /// code-generation time.
    Link {
        /// Name of the external event list this link points at.
        target: String,
    },
}

impl EventPayload {
    /// Creates an empty standard event.
    pub fn standard() -> Self {
        EventPayload::Standard {
            conditions: Vec::new(),
            actions: Vec::new(),
        }
    }

    /// Creates a comment event.
    pub fn comment(text: impl Into<String>) -> Self {
        EventPayload::Comment { text: text.into() }
    }

    /// Creates a link event pointing at an external event list.
    pub fn link(target: impl Into<String>) -> Self {
        EventPayload::Link {
            target: target.into(),
        }
    }

    /// Returns `true` if any text carried by this payload contains `needle`,
    /// case-insensitively: comment text, link targets, instruction kinds,
    /// and instruction parameters are all searched.
    pub fn matches(&self, needle: &str) -> bool {
        let needle = needle.to_lowercase();
        if needle.is_empty() {
            return false;
        }
        match self {
            EventPayload::Standard {
                conditions,
                actions,
            } => conditions
                .iter()
                .chain(actions.iter())
                .any(|instruction| {
                    instruction.kind.to_lowercase().contains(&needle)
                        || instruction
                            .parameters
                            .iter()
                            .any(|parameter| parameter.to_lowercase().contains(&needle))
                }),
            EventPayload::Comment { text } => text.to_lowercase().contains(&needle),
            EventPayload::Link { target } => target.to_lowercase().contains(&needle),
        }
    }
}

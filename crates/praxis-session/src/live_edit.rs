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

//! In-place editing of a single instruction parameter.
//!
//! While a parameter is being typed into, every keystroke is a transient
//! change: it must be visible to the rendering surface but must not create
//! an undo step of its own. The whole edit becomes one undo step when it is
//! committed, or nothing at all when it is cancelled.

use praxis_core::EventId;
use praxis_sheet::{EventPayload, EventSheet};

/// Which instruction list of a standard event a parameter belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstructionScope {
    /// The event's condition list.
    Conditions,
    /// The event's action list.
    Actions,
}

/// Addresses one parameter of one instruction of one event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParameterRef {
    /// The event holding the instruction.
    pub event: EventId,
    /// Whether the instruction is a condition or an action.
    pub scope: InstructionScope,
    /// Index of the instruction within its list.
    pub instruction: usize,
    /// Index of the parameter within the instruction.
    pub parameter: usize,
}

impl ParameterRef {
    /// Reads the current parameter text, or `None` if the event is gone,
    /// is not a standard event, or the indices are out of range.
    pub(crate) fn resolve<'a>(&self, sheet: &'a EventSheet) -> Option<&'a str> {
        let node = sheet.node(self.event)?;
        let EventPayload::Standard {
            conditions,
            actions,
        } = &node.payload
        else {
            return None;
        };
        let list = match self.scope {
            InstructionScope::Conditions => conditions,
            InstructionScope::Actions => actions,
        };
        list.get(self.instruction)?
            .parameters
            .get(self.parameter)
            .map(String::as_str)
    }

    /// Overwrites the parameter text in place. Returns `false` if the
    /// target no longer resolves.
    pub(crate) fn write(&self, sheet: &mut EventSheet, text: &str) -> bool {
        let Some(node) = sheet.node_mut(self.event) else {
            return false;
        };
        let EventPayload::Standard {
            conditions,
            actions,
        } = &mut node.payload
        else {
            return false;
        };
        let list = match self.scope {
            InstructionScope::Conditions => conditions,
            InstructionScope::Actions => actions,
        };
        match list
            .get_mut(self.instruction)
            .and_then(|instruction| instruction.parameters.get_mut(self.parameter))
        {
            Some(parameter) => {
                *parameter = text.to_string();
                true
            }
            None => false,
        }
    }
}

/// Live-editing state of a session: `Idle` or one in-flight edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum LiveEdit {
    Idle,
    Editing {
        target: ParameterRef,
        /// Text the parameter held when editing started; restored on cancel.
        original: String,
        /// Whether any keystroke actually landed, so committing an untouched
        /// edit does not record an empty undo step.
        changed: bool,
    },
}

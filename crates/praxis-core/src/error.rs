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

//! Defines the error types for event-sheet editing operations.

use crate::event::EventId;
use std::fmt;

/// An error produced by an editing operation on an event sheet.
///
/// Every variant is recoverable: the operation that produced it left the
/// sheet and its history completely untouched (apply-or-reject), and the
/// caller decides whether the failure is worth surfacing to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditError {
    /// The operation targeted an event that is no longer present in the
    /// sheet, either because it was removed or because its slot has been
    /// recycled since the handle was taken.
    InvalidReference {
        /// The stale handle that failed to resolve.
        id: EventId,
    },
    /// A paste was requested while the clipboard held nothing.
    EmptyClipboard,
}

impl fmt::Display for EditError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EditError::InvalidReference { id } => {
                write!(
                    f,
                    "Event reference {}v{} no longer resolves to a live event",
                    id.index, id.generation
                )
            }
            EditError::EmptyClipboard => {
                write!(f, "Cannot paste: the clipboard is empty")
            }
        }
    }
}

impl std::error::Error for EditError {}

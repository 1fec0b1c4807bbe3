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

//! Change-notification plumbing between an editing session and its observers.
//!
//! The editing session is deliberately blind to whatever renders the sheet or
//! persists it. Whenever the sheet becomes logically different, the session
//! publishes a [`ChangeNotification`] on its [`NotificationBus`]; the hosting
//! application drains the bus and decides what to refresh or invalidate.

mod bus;

pub use bus::NotificationBus;

use serde::{Deserialize, Serialize};

/// Describes one logical change to an event sheet.
///
/// This is the message an editing session publishes every time the sheet
/// content or view state changes, including after undo and redo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeNotification {
    /// `true` if the change created a new undo step. Transient changes
    /// (live text entry, fold toggles) and undo/redo traversals report
    /// `false`.
    pub history_updated: bool,
    /// `true` if the change invalidates downstream caches, i.e. the hosting
    /// application must recompile the generated code for this sheet.
    pub needs_recompilation: bool,
}

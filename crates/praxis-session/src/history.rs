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

//! Linear undo/redo history of whole-sheet snapshots.

use praxis_sheet::EventSheet;

/// The undo and redo stacks of an editing session.
///
/// Every entry is a complete deep copy of the sheet taken before a mutation
/// landed. Full snapshots keep the history trivially correct: there is no
/// diffing, and no entry aliases the live tree.
#[derive(Debug, Default)]
pub struct ChangeHistory {
    undo: Vec<EventSheet>,
    redo: Vec<EventSheet>,
}

impl ChangeHistory {
    /// Creates an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Pushes a pre-mutation snapshot onto the undo stack.
    ///
    /// Recording a new change invalidates everything that was undone, so
    /// the redo stack is cleared.
    pub fn record(&mut self, snapshot: EventSheet) {
        self.undo.push(snapshot);
        self.redo.clear();
    }

    /// Pops the most recent undo snapshot, saving `current` for redo.
    /// Returns `None` without touching anything if the history is empty.
    pub fn undo(&mut self, current: &EventSheet) -> Option<EventSheet> {
        let restored = self.undo.pop()?;
        self.redo.push(current.clone());
        Some(restored)
    }

    /// Pops the most recent redo snapshot, saving `current` for undo.
    /// Returns `None` without touching anything if nothing was undone.
    pub fn redo(&mut self, current: &EventSheet) -> Option<EventSheet> {
        let restored = self.redo.pop()?;
        self.undo.push(current.clone());
        Some(restored)
    }

    /// `true` if at least one change can be undone.
    pub fn can_undo(&self) -> bool {
        !self.undo.is_empty()
    }

    /// `true` if at least one undone change can be reapplied.
    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use praxis_sheet::{EventPayload, EventSheet};

    fn sheet_with(text: &str) -> EventSheet {
        let mut sheet = EventSheet::new();
        sheet
            .insert_after(None, EventPayload::comment(text))
            .expect("Insert should succeed");
        sheet
    }

    #[test]
    fn undo_on_empty_history_is_a_no_op() {
        let mut history = ChangeHistory::new();
        let current = sheet_with("live");

        assert!(history.undo(&current).is_none());
        assert!(
            !history.can_redo(),
            "A failed undo must not push a redo entry"
        );
    }

    #[test]
    fn undo_returns_snapshots_most_recent_first() {
        let mut history = ChangeHistory::new();
        history.record(sheet_with("first"));
        history.record(sheet_with("second"));

        let current = sheet_with("live");
        let restored = history.undo(&current).expect("History is non-empty");

        assert_eq!(restored, sheet_with("second"));
        assert!(history.can_undo());
        assert!(history.can_redo());
    }

    #[test]
    fn recording_clears_the_redo_stack() {
        let mut history = ChangeHistory::new();
        history.record(sheet_with("first"));
        let current = sheet_with("live");
        history.undo(&current).expect("History is non-empty");
        assert!(history.can_redo());

        history.record(sheet_with("diverged"));

        assert!(
            !history.can_redo(),
            "A new change must invalidate the redo stack"
        );
    }
}

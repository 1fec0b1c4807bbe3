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

//! The editing session: mutations, undo/redo, and change notifications.

use crate::clipboard::Clipboard;
use crate::config::SessionConfig;
use crate::history::ChangeHistory;
use crate::live_edit::{LiveEdit, ParameterRef};
use praxis_core::{ChangeNotification, EditError, EventId, NotificationBus};
use praxis_sheet::{EventPayload, EventSheet};

/// One editing session over one event sheet.
///
/// The session owns the sheet for the lifetime of the editor view that
/// opened it ([`EditingSession::into_sheet`] hands it back on close) and is
/// the single writer: external input resolves to a selection of [`EventId`]s
/// and calls exactly one of the operations below. Every operation either
/// fully applies or rejects without touching anything.
///
/// The undo model mirrors the classic snapshot scheme: `latest_state` always
/// holds a deep copy of the sheet as of the last history-updating change.
/// When the next such change lands, that copy (the pre-mutation state) is
/// rotated onto the undo stack. Transient changes (live keystrokes, fold
/// toggles) skip the rotation and therefore coalesce into the next undo
/// step.
pub struct EditingSession {
    sheet: EventSheet,
    latest_state: EventSheet,
    history: ChangeHistory,
    live_edit: LiveEdit,
    config: SessionConfig,
    notifications: NotificationBus<ChangeNotification>,
}

impl EditingSession {
    /// Opens a session over `sheet`.
    pub fn new(sheet: EventSheet, config: SessionConfig) -> Self {
        let latest_state = sheet.clone();
        Self {
            sheet,
            latest_state,
            history: ChangeHistory::new(),
            live_edit: LiveEdit::Idle,
            config,
            notifications: NotificationBus::new(),
        }
    }

    /// Read access to the working tree, for rendering walks.
    pub fn sheet(&self) -> &EventSheet {
        &self.sheet
    }

    /// Direct mutable access to the working tree, for external collaborators
    /// (e.g. a search-and-replace dialog) that edit payloads in place.
    ///
    /// Whoever mutates through this reference must report it with
    /// [`EditingSession::changes_made`] afterwards, exactly like the
    /// session's own operations do.
    pub fn sheet_mut(&mut self) -> &mut EventSheet {
        &mut self.sheet
    }

    /// Closes the session, handing the sheet back to its owner. History,
    /// clipboard snapshots, and pending live edits are discarded.
    pub fn into_sheet(self) -> EventSheet {
        self.sheet
    }

    /// The session's notification bus. The hosting application drains it to
    /// refresh the view and invalidate compilation caches.
    pub fn notifications(&self) -> &NotificationBus<ChangeNotification> {
        &self.notifications
    }

    /// `true` if at least one change can be undone.
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// `true` if at least one undone change can be reapplied.
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    // --- Structural mutations ---

    /// Inserts a new event after `anchor` (or first in the root list when
    /// `anchor` is `None`) and records an undo step.
    pub fn insert_event(
        &mut self,
        anchor: Option<EventId>,
        payload: EventPayload,
    ) -> Result<EventId, EditError> {
        self.abort_live_edit();
        let id = self.sheet.insert_after(anchor, payload)?;
        self.changes_made(true, true);
        Ok(id)
    }

    /// Appends a new sub-event to `parent` and records an undo step.
    pub fn insert_sub_event(
        &mut self,
        parent: EventId,
        payload: EventPayload,
    ) -> Result<EventId, EditError> {
        self.abort_live_edit();
        let id = self.sheet.insert_as_child(parent, payload)?;
        self.changes_made(true, true);
        Ok(id)
    }

    /// Removes the selected subtrees. Stale handles are skipped; if nothing
    /// was alive, the sheet and history are untouched. Returns the number of
    /// top-level removed roots.
    pub fn delete(&mut self, selection: &[EventId]) -> usize {
        self.abort_live_edit();
        let removed = self.sheet.remove_all(selection);
        if removed > 0 {
            self.changes_made(true, true);
        }
        removed
    }

    /// Flips the enabled flag of every selected event still alive. Returns
    /// how many were toggled; zero leaves the history untouched.
    pub fn toggle_activation(&mut self, selection: &[EventId]) -> usize {
        self.abort_live_edit();
        let mut toggled = 0;
        for &id in selection {
            if let Some(node) = self.sheet.node_mut(id) {
                node.enabled = !node.enabled;
                toggled += 1;
            }
        }
        if toggled > 0 {
            self.changes_made(true, true);
        }
        toggled
    }

    // --- View-state mutations ---

    /// Sets the fold state of every selected event still alive.
    pub fn fold(&mut self, selection: &[EventId], folded: bool) -> usize {
        let mut changed = 0;
        for &id in selection {
            if self.sheet.set_folded(id, folded).is_ok() {
                changed += 1;
            }
        }
        if changed > 0 {
            self.changes_made(self.config.record_folds_in_history, false);
        }
        changed
    }

    /// Sets the fold state of every selected event and all its descendants.
    pub fn fold_recursive(&mut self, selection: &[EventId], folded: bool) -> usize {
        let mut changed = 0;
        for &id in selection {
            if self.sheet.set_folded_recursive(id, folded).is_ok() {
                changed += 1;
            }
        }
        if changed > 0 {
            self.changes_made(self.config.record_folds_in_history, false);
        }
        changed
    }

    /// Folds or unfolds every event in the sheet.
    pub fn fold_all(&mut self, folded: bool) {
        self.sheet.set_all_folded(folded);
        self.changes_made(self.config.record_folds_in_history, false);
    }

    // --- Clipboard ---

    /// Deep-copies the selected subtrees, preserving their relative order.
    /// A selected event nested under another selected event is captured only
    /// inside its ancestor's copy.
    pub fn copy(&self, selection: &[EventId]) -> Clipboard {
        Clipboard::from_selection(&self.sheet, selection)
    }

    /// Copies the selection, then removes it as a single undo step.
    pub fn cut(&mut self, selection: &[EventId]) -> Clipboard {
        self.abort_live_edit();
        let clipboard = Clipboard::from_selection(&self.sheet, selection);
        if self.sheet.remove_all(selection) > 0 {
            self.changes_made(true, true);
        }
        clipboard
    }

    /// Instantiates fresh deep copies of the clipboard contents as siblings
    /// after `anchor` (or at the root start), in their original relative
    /// order. Returns the handles of the newly inserted top-level events.
    /// Repeated pastes of the same clipboard are fully independent copies.
    pub fn paste(
        &mut self,
        clipboard: &Clipboard,
        anchor: Option<EventId>,
    ) -> Result<Vec<EventId>, EditError> {
        if clipboard.is_empty() {
            return Err(EditError::EmptyClipboard);
        }
        if let Some(anchor) = anchor {
            if !self.sheet.contains(anchor) {
                return Err(EditError::InvalidReference { id: anchor });
            }
        }
        self.abort_live_edit();

        let mut inserted = Vec::with_capacity(clipboard.len());
        let mut anchor = anchor;
        for entry in clipboard.entries() {
            let id = self.sheet.instantiate_after(entry, anchor)?;
            inserted.push(id);
            anchor = Some(id);
        }
        self.changes_made(true, true);
        Ok(inserted)
    }

    // --- History ---

    /// Restores the sheet to its state before the last recorded change.
    /// Returns `false` (a no-op) if the history is empty.
    pub fn undo(&mut self) -> bool {
        self.abort_live_edit();
        match self.history.undo(&self.sheet) {
            Some(restored) => {
                self.sheet = restored;
                self.latest_state = self.sheet.clone();
                self.notifications.publish(ChangeNotification {
                    history_updated: false,
                    needs_recompilation: true,
                });
                log::debug!("Undo applied.");
                true
            }
            None => false,
        }
    }

    /// Reapplies the most recently undone change. Returns `false` (a no-op)
    /// if nothing was undone since the last recorded change.
    pub fn redo(&mut self) -> bool {
        self.abort_live_edit();
        match self.history.redo(&self.sheet) {
            Some(restored) => {
                self.sheet = restored;
                self.latest_state = self.sheet.clone();
                self.notifications.publish(ChangeNotification {
                    history_updated: false,
                    needs_recompilation: true,
                });
                log::debug!("Redo applied.");
                true
            }
            None => false,
        }
    }

    /// Reports that the sheet became logically different.
    ///
    /// With `update_history`, the pre-mutation snapshot (`latest_state`) is
    /// rotated onto the undo stack and the redo stack is cleared; without
    /// it, the change is transient and will coalesce into the next recorded
    /// step. A [`ChangeNotification`] is published either way. The session's
    /// own operations call this internally; external collaborators mutating
    /// through [`EditingSession::sheet_mut`] must call it themselves.
    pub fn changes_made(&mut self, update_history: bool, needs_recompilation: bool) {
        if update_history {
            let previous = std::mem::replace(&mut self.latest_state, self.sheet.clone());
            self.history.record(previous);
            log::debug!("Undo snapshot recorded.");
        }
        self.notifications.publish(ChangeNotification {
            history_updated: update_history,
            needs_recompilation,
        });
    }

    // --- Live parameter editing ---

    /// Starts editing one instruction parameter, recording its original
    /// text. Any edit already in progress is cancelled first.
    pub fn begin_live_edit(&mut self, target: ParameterRef) -> Result<(), EditError> {
        self.abort_live_edit();
        let original = target
            .resolve(&self.sheet)
            .ok_or(EditError::InvalidReference { id: target.event })?
            .to_string();
        self.live_edit = LiveEdit::Editing {
            target,
            original,
            changed: false,
        };
        log::trace!("Live edit started on {target:?}.");
        Ok(())
    }

    /// Writes the in-progress text into the parameter without creating an
    /// undo step. Returns `false` if no edit is in progress or the target
    /// vanished (the edit is dropped in that case).
    pub fn update_live_edit(&mut self, text: &str) -> bool {
        let target = match &self.live_edit {
            LiveEdit::Editing { target, .. } => *target,
            LiveEdit::Idle => return false,
        };
        if !target.write(&mut self.sheet, text) {
            log::warn!("Live-edit target {target:?} vanished; dropping the edit.");
            self.live_edit = LiveEdit::Idle;
            return false;
        }
        if let LiveEdit::Editing { changed, .. } = &mut self.live_edit {
            *changed = true;
        }
        self.changes_made(false, false);
        true
    }

    /// Confirms the in-progress edit, turning the whole of it into a single
    /// undo step. Committing an edit that never changed anything records
    /// nothing. Returns `false` if no edit was in progress.
    pub fn commit_live_edit(&mut self) -> bool {
        match std::mem::replace(&mut self.live_edit, LiveEdit::Idle) {
            LiveEdit::Editing { changed, .. } => {
                if changed {
                    self.changes_made(true, false);
                }
                true
            }
            LiveEdit::Idle => false,
        }
    }

    /// Abandons the in-progress edit, restoring the parameter's original
    /// text. No undo step is created. Returns `false` if no edit was in
    /// progress.
    pub fn cancel_live_edit(&mut self) -> bool {
        match std::mem::replace(&mut self.live_edit, LiveEdit::Idle) {
            LiveEdit::Editing {
                target,
                original,
                changed,
            } => {
                if changed && target.write(&mut self.sheet, &original) {
                    self.changes_made(false, false);
                }
                true
            }
            LiveEdit::Idle => false,
        }
    }

    /// Structural changes cancel a pending live edit, like an edit field
    /// losing focus without confirmation.
    fn abort_live_edit(&mut self) {
        if matches!(self.live_edit, LiveEdit::Editing { .. }) {
            log::trace!("Cancelling in-progress live edit before a structural change.");
            self.cancel_live_edit();
        }
    }
}

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

//! Per-view configuration of an editing session.

/// Configuration for one editing session.
///
/// Each open editor view owns its own config; there is no process-wide
/// editor state.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Whether fold/unfold operations create undo steps. Folding is pure
    /// view state, so by default it does not touch the history.
    pub record_folds_in_history: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            record_folds_in_history: false,
        }
    }
}

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

//! # Praxis Session
//!
//! The editing layer over an event sheet: one [`EditingSession`] per open
//! editor view applies mutations, keeps a linear undo/redo history of
//! whole-sheet snapshots, manages the clipboard, and publishes change
//! notifications for the hosting application to act on. Everything is
//! synchronous; the session reacts to discrete input commands translated by
//! an external rendering/input surface.

#![warn(missing_docs)]

pub mod clipboard;
pub mod config;
pub mod history;
pub mod live_edit;
pub mod session;

pub use clipboard::Clipboard;
pub use config::SessionConfig;
pub use history::ChangeHistory;
pub use live_edit::{InstructionScope, ParameterRef};
pub use session::EditingSession;

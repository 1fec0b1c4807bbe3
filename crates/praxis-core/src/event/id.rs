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

/// A unique identifier for an event in a sheet.
///
/// It combines a slot index with a generation count to solve the "ABA
/// problem". When an event is removed, its slot can be recycled for a new
/// event, but the generation is incremented. This ensures that old `EventId`
/// handles held by selections, clipboards, or scroll targets become invalid
/// and cannot accidentally address the new event occupying the slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EventId {
    /// The index of the event's slot in the sheet's central slot vector.
    pub index: u32,
    /// A generation counter that is incremented each time the slot is recycled.
    pub generation: u32,
}

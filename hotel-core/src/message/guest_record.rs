/*
 * Copyright (c) 2024. Govcraft
 *
 * Licensed under either of
 *   * Apache License, Version 2.0 (the "License");
 *     you may not use this file except in compliance with the License.
 *     You may obtain a copy of the License at http://www.apache.org/licenses/LICENSE-2.0
 *   * MIT license: http://opensource.org/licenses/MIT
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the applicable License for the specific language governing permissions and
 * limitations under that License.
 */

use crate::common::Activity;

/// Identifies one guest for the lifetime of the simulation.
pub type GuestId = usize;

/// Index of a physical room in the [`RoomRegistry`](crate::common::RoomRegistry).
pub type RoomKey = usize;

/// The per-guest record that travels through the desk conversations.
///
/// Exactly one record exists per guest task. The guest owns it except during
/// the brief handoff windows: it moves into a [`CheckInRequest`][super::CheckInRequest]
/// and comes back (with `room_key` set) on the reply channel, and a copy is
/// surrendered to the check-out desk with the key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuestRecord {
    /// The guest's identity, assigned at simulation start.
    pub id: GuestId,
    /// The activity this guest will perform while inside the hotel.
    pub activity: Activity,
    /// The assigned room, unset until the check-in desk assigns one.
    pub room_key: Option<RoomKey>,
    /// The fixed service charge owed at check-out, in cents.
    pub balance_due_cents: u32,
}

impl GuestRecord {
    /// Creates a record for a guest that has not yet been assigned a room.
    pub fn new(id: GuestId, activity: Activity, balance_due_cents: u32) -> Self {
        Self {
            id,
            activity,
            room_key: None,
            balance_due_cents,
        }
    }
}

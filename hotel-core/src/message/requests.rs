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

use std::sync::Arc;

use tokio::sync::oneshot;

use crate::message::GuestRecord;
use crate::sync::Rendezvous;

/// A guest's request to the check-in desk.
///
/// Requests travel over a capacity-one MPSC channel, so sending one is the
/// "write the mailbox and signal the clerk" step collapsed into a single
/// blocking operation, and at most one unconsumed request is ever in flight.
/// The reply channel carries the record back once a room has been assigned.
#[derive(Debug)]
pub struct CheckInRequest {
    /// The guest's record; `room_key` is unset on the way in.
    pub record: GuestRecord,
    /// Where the desk sends the record back, `room_key` now populated.
    pub reply: oneshot::Sender<GuestRecord>,
}

/// A guest's request to the check-out desk.
///
/// Carries the room key back to the hotel along with the three-step
/// settlement path: the desk quotes the balance on `balance`, waits on
/// `payment`, and finally posts `exit` to let the guest leave. Both
/// rendezvous are created fresh for each conversation.
#[derive(Debug)]
pub struct CheckOutRequest {
    /// The guest's record, including the room being returned.
    pub record: GuestRecord,
    /// Where the desk quotes the amount owed, in cents.
    pub balance: oneshot::Sender<u32>,
    /// Posted by the guest once payment has been handed over.
    pub payment: Arc<Rendezvous>,
    /// Posted by the desk once the guest is free to leave.
    pub exit: Arc<Rendezvous>,
}

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

use tokio::sync::mpsc;
use tracing::{instrument, trace};

use crate::common::{HotelError, RoomRegistry};
use crate::message::{CheckInRequest, HotelEvent};
use crate::traits::Narrator;

/// The single check-in clerk.
///
/// Serves exactly `expected_guests` conversations, one at a time: receive a
/// request, greet the guest, mark the lowest-numbered vacant room occupied,
/// and send the record back with the key. The clerk never accepts a second
/// request before the previous reply has been sent, so its whole loop body
/// is one serialized conversation.
pub struct CheckInDesk {
    inbox: mpsc::Receiver<CheckInRequest>,
    registry: Arc<RoomRegistry>,
    narrator: Arc<dyn Narrator>,
    expected_guests: usize,
}

impl CheckInDesk {
    /// Seats the clerk at the counter.
    pub fn new(
        inbox: mpsc::Receiver<CheckInRequest>,
        registry: Arc<RoomRegistry>,
        narrator: Arc<dyn Narrator>,
        expected_guests: usize,
    ) -> Self {
        Self {
            inbox,
            registry,
            narrator,
            expected_guests,
        }
    }

    /// Runs the clerk until every expected guest has been checked in.
    ///
    /// # Errors
    ///
    /// Every failure here is a [`HotelError::InvariantViolation`]: the inbox
    /// closing early, a full registry despite the guest's held permit, or a
    /// guest dropping its reply channel mid-conversation. None of these can
    /// happen when the protocol is followed.
    #[instrument(skip(self), fields(expected = self.expected_guests))]
    pub async fn run(mut self) -> Result<(), HotelError> {
        self.narrator.narrate(&HotelEvent::CheckInDeskOpen).await;

        for _ in 0..self.expected_guests {
            let request = self.inbox.recv().await.ok_or_else(|| {
                HotelError::InvariantViolation(
                    "check-in inbox closed before every guest was served".into(),
                )
            })?;
            let mut record = request.record;
            trace!(guest = record.id, "check-in request received");

            self.narrator
                .narrate(&HotelEvent::CheckInGreets { guest: record.id })
                .await;

            let room = self.registry.occupy_first_free()?;
            record.room_key = Some(room);
            self.narrator
                .narrate(&HotelEvent::RoomAssigned {
                    guest: record.id,
                    room,
                })
                .await;

            let guest = record.id;
            request.reply.send(record).map_err(|_| {
                HotelError::InvariantViolation(format!(
                    "guest {} abandoned check-in before receiving a room",
                    guest
                ))
            })?;
        }

        self.narrator.narrate(&HotelEvent::CheckInDeskClosed).await;
        Ok(())
    }
}

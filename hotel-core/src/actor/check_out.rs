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
use crate::message::{CheckOutRequest, HotelEvent};
use crate::traits::Narrator;

/// The single check-out clerk.
///
/// Serves exactly `expected_guests` conversations. Each one is fully
/// serialized: take the key and free the room, quote the balance, wait for
/// the payment rendezvous, then grant the exit. The next request is not
/// received until the previous guest has been released, so check-out is
/// never pipelined.
pub struct CheckOutDesk {
    inbox: mpsc::Receiver<CheckOutRequest>,
    registry: Arc<RoomRegistry>,
    narrator: Arc<dyn Narrator>,
    expected_guests: usize,
}

impl CheckOutDesk {
    /// Seats the clerk at the counter.
    pub fn new(
        inbox: mpsc::Receiver<CheckOutRequest>,
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

    /// Runs the clerk until every expected guest has been checked out.
    ///
    /// # Errors
    ///
    /// [`HotelError::InvariantViolation`] when the inbox closes early, a
    /// guest arrives without a room key, the key names a vacant room, or a
    /// guest abandons the conversation before paying.
    #[instrument(skip(self), fields(expected = self.expected_guests))]
    pub async fn run(mut self) -> Result<(), HotelError> {
        self.narrator.narrate(&HotelEvent::CheckOutDeskOpen).await;

        for _ in 0..self.expected_guests {
            let request = self.inbox.recv().await.ok_or_else(|| {
                HotelError::InvariantViolation(
                    "check-out inbox closed before every guest was served".into(),
                )
            })?;
            let record = request.record;
            let guest = record.id;
            trace!(guest, "check-out request received");

            let room = record.room_key.ok_or_else(|| {
                HotelError::InvariantViolation(format!(
                    "guest {} reached check-out without a room key",
                    guest
                ))
            })?;
            self.narrator
                .narrate(&HotelEvent::KeyReceived { guest, room })
                .await;

            // The room is returned to the registry before the balance is
            // quoted; capacity is still held by the guest's permit until the
            // exit grant.
            self.registry.free(room)?;

            let amount_cents = record.balance_due_cents;
            self.narrator
                .narrate(&HotelEvent::BalanceQuoted { guest, amount_cents })
                .await;
            request.balance.send(amount_cents).map_err(|_| {
                HotelError::InvariantViolation(format!(
                    "guest {} abandoned check-out before the balance was quoted",
                    guest
                ))
            })?;

            request.payment.wait().await?;
            self.narrator
                .narrate(&HotelEvent::PaymentReceived { guest, amount_cents })
                .await;

            self.narrator
                .narrate(&HotelEvent::ExitGranted { guest })
                .await;
            request.exit.post();
        }

        self.narrator.narrate(&HotelEvent::CheckOutDeskClosed).await;
        Ok(())
    }
}

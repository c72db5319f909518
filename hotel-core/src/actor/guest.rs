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

use std::ops::RangeInclusive;
use std::sync::Arc;
use std::time::Duration;

use rand::Rng;
use tokio::sync::{mpsc, oneshot};
use tracing::{instrument, trace};

use crate::common::{ActivityTally, HotelError};
use crate::message::{CheckInRequest, CheckOutRequest, GuestRecord, HotelEvent, RoomKey};
use crate::sync::{PermitPool, Rendezvous};
use crate::traits::Narrator;

/// One hotel guest, driven through arrival, check-in, activity, check-out,
/// and departure.
///
/// The guest holds its room permit from the moment it enters until after the
/// check-out clerk grants the exit; that hold is the only thing bounding how
/// many guests can be inside at once. The room *key*, by contrast, is
/// surrendered at check-out before the balance is quoted.
pub struct Guest {
    record: GuestRecord,
    permits: PermitPool,
    check_in: mpsc::Sender<CheckInRequest>,
    check_out: mpsc::Sender<CheckOutRequest>,
    tally: Arc<ActivityTally>,
    narrator: Arc<dyn Narrator>,
    stay_ms: RangeInclusive<u64>,
}

impl Guest {
    /// Creates a guest ready to arrive at the hotel.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        record: GuestRecord,
        permits: PermitPool,
        check_in: mpsc::Sender<CheckInRequest>,
        check_out: mpsc::Sender<CheckOutRequest>,
        tally: Arc<ActivityTally>,
        narrator: Arc<dyn Narrator>,
        stay_ms: RangeInclusive<u64>,
    ) -> Self {
        Self {
            record,
            permits,
            check_in,
            check_out,
            tally,
            narrator,
            stay_ms,
        }
    }

    /// Drives the full guest protocol and returns the final record.
    ///
    /// The ordering here is the synchronization contract: the permit is
    /// acquired before the check-in conversation, the check-in reply is
    /// observed before the activity begins, payment is posted only after the
    /// balance arrives, and the permit is dropped only after the exit grant.
    ///
    /// # Errors
    ///
    /// [`HotelError::InvariantViolation`] when a desk disappears
    /// mid-conversation or replies without assigning a room; neither can
    /// happen when both clerks serve the full guest count.
    #[instrument(skip(self), fields(guest = self.record.id))]
    pub async fn run(self) -> Result<GuestRecord, HotelError> {
        let guest = self.record.id;

        let permit = self.permits.acquire().await?;
        self.narrator
            .narrate(&HotelEvent::GuestEnters { guest })
            .await;

        let mut record = self.check_in(self.record.clone()).await?;
        let room = record.room_key.ok_or_else(|| {
            HotelError::InvariantViolation(format!(
                "check-in replied to guest {} without a room key",
                guest
            ))
        })?;
        self.narrator
            .narrate(&HotelEvent::CheckInComplete { guest, room })
            .await;

        self.enjoy_activity(&record).await;

        record = self.check_out(record, room).await?;
        self.narrator
            .narrate(&HotelEvent::GuestDeparts { guest })
            .await;

        // Departure narrated; only now does the room permit return to the
        // pool and admit the next arrival.
        drop(permit);
        Ok(record)
    }

    /// The check-in conversation: send the record, wait for it to come back
    /// with a room key.
    async fn check_in(&self, record: GuestRecord) -> Result<GuestRecord, HotelError> {
        let guest = record.id;
        self.narrator
            .narrate(&HotelEvent::GuestApproachesCheckIn { guest })
            .await;

        let (reply_tx, reply_rx) = oneshot::channel();
        self.check_in
            .send(CheckInRequest {
                record,
                reply: reply_tx,
            })
            .await
            .map_err(|_| {
                HotelError::InvariantViolation(format!(
                    "check-in desk closed before guest {} was served",
                    guest
                ))
            })?;

        reply_rx.await.map_err(|_| {
            HotelError::InvariantViolation(format!(
                "check-in desk dropped its reply to guest {}",
                guest
            ))
        })
    }

    /// Records the chosen activity in the tally, then occupies the room for
    /// a bounded random duration.
    async fn enjoy_activity(&self, record: &GuestRecord) {
        self.tally.record(record.activity);
        self.narrator
            .narrate(&HotelEvent::ActivityStarted {
                guest: record.id,
                activity: record.activity,
            })
            .await;

        let stay = rand::rng().random_range(self.stay_ms.clone());
        trace!(guest = record.id, stay_ms = stay, "guest occupies room");
        tokio::time::sleep(Duration::from_millis(stay)).await;
    }

    /// The check-out conversation: return the key, wait for the balance,
    /// pay, and wait to be released.
    async fn check_out(&self, record: GuestRecord, room: RoomKey) -> Result<GuestRecord, HotelError> {
        let guest = record.id;
        self.narrator
            .narrate(&HotelEvent::GuestApproachesCheckOut { guest, room })
            .await;

        let (balance_tx, balance_rx) = oneshot::channel();
        let payment = Arc::new(Rendezvous::new());
        let exit = Arc::new(Rendezvous::new());

        self.check_out
            .send(CheckOutRequest {
                record: record.clone(),
                balance: balance_tx,
                payment: payment.clone(),
                exit: exit.clone(),
            })
            .await
            .map_err(|_| {
                HotelError::InvariantViolation(format!(
                    "check-out desk closed before guest {} was served",
                    guest
                ))
            })?;

        let amount_cents = balance_rx.await.map_err(|_| {
            HotelError::InvariantViolation(format!(
                "check-out desk dropped its balance quote for guest {}",
                guest
            ))
        })?;
        self.narrator
            .narrate(&HotelEvent::PaymentSent { guest, amount_cents })
            .await;
        payment.post();

        exit.wait().await?;
        Ok(record)
    }
}

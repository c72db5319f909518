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

use std::fmt;

use crate::common::Activity;
use crate::message::{GuestId, RoomKey};

/// One observable state transition in the simulation.
///
/// Events are purely observational: they are handed to the injected
/// [`Narrator`](crate::traits::Narrator) and play no part in the
/// synchronization protocol. The `Display` impl renders each event as the
/// single human-readable console line guests and clerks narrate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HotelEvent {
    /// The check-in clerk is at the counter and waiting for guests.
    CheckInDeskOpen,
    /// The check-out clerk is at the counter and waiting for guests.
    CheckOutDeskOpen,
    /// A guest claimed a room permit and stepped inside.
    GuestEnters { guest: GuestId },
    /// A guest reached the check-in counter.
    GuestApproachesCheckIn { guest: GuestId },
    /// The check-in clerk greeted the guest at the counter.
    CheckInGreets { guest: GuestId },
    /// The check-in clerk marked a room occupied for this guest.
    RoomAssigned { guest: GuestId, room: RoomKey },
    /// The guest observed the assignment and left the counter.
    CheckInComplete { guest: GuestId, room: RoomKey },
    /// The guest started their chosen activity.
    ActivityStarted { guest: GuestId, activity: Activity },
    /// The guest reached the check-out counter, key in hand.
    GuestApproachesCheckOut { guest: GuestId, room: RoomKey },
    /// The check-out clerk took the key and marked the room free.
    KeyReceived { guest: GuestId, room: RoomKey },
    /// The check-out clerk quoted the amount owed.
    BalanceQuoted { guest: GuestId, amount_cents: u32 },
    /// The guest handed over payment.
    PaymentSent { guest: GuestId, amount_cents: u32 },
    /// The check-out clerk confirmed the payment.
    PaymentReceived { guest: GuestId, amount_cents: u32 },
    /// The check-out clerk released the guest.
    ExitGranted { guest: GuestId },
    /// The guest left the hotel, releasing their room permit.
    GuestDeparts { guest: GuestId },
    /// The check-in clerk has served every guest.
    CheckInDeskClosed,
    /// The check-out clerk has served every guest.
    CheckOutDeskClosed,
}

fn dollars(cents: u32) -> String {
    format!("${}", cents / 100)
}

impl fmt::Display for HotelEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CheckInDeskOpen => {
                write!(f, "created checkin clerk. waiting for guests!")
            }
            Self::CheckOutDeskOpen => {
                write!(f, "created checkout clerk. waiting for guests!")
            }
            Self::GuestEnters { guest } => write!(f, "Guest {guest} enters hotel"),
            Self::GuestApproachesCheckIn { guest } => {
                write!(f, "Guest {guest} goes to the check-in reservationist")
            }
            Self::CheckInGreets { guest } => {
                write!(f, "The check-in reservationist greets Guest {guest}")
            }
            Self::RoomAssigned { guest, room } => write!(
                f,
                "Check-in reservationist assigns room {room} to Guest {guest}"
            ),
            Self::CheckInComplete { guest, room } => write!(
                f,
                "Guest {guest} receives room {room} and completes check-in"
            ),
            Self::ActivityStarted { guest, activity } => {
                write!(f, "Guest {guest} goes to the {activity}")
            }
            Self::GuestApproachesCheckOut { guest, room } => write!(
                f,
                "Guest {guest} goes to the check-out reservationist and returns room {room}"
            ),
            Self::KeyReceived { guest, room } => write!(
                f,
                "The check-out reservationist greets Guest {guest} and receives the key for room {room}"
            ),
            Self::BalanceQuoted { guest, amount_cents } => write!(
                f,
                "The balance for Guest {guest} is {}",
                dollars(*amount_cents)
            ),
            Self::PaymentSent { guest, amount_cents } => write!(
                f,
                "Guest {guest} gives the payment of {}",
                dollars(*amount_cents)
            ),
            Self::PaymentReceived { guest, amount_cents } => write!(
                f,
                "Receive {} payment from Guest {guest} and complete the check-out",
                dollars(*amount_cents)
            ),
            Self::ExitGranted { guest } => write!(f, "Guest {guest} may exit"),
            Self::GuestDeparts { guest } => write!(f, "Guest {guest} exits hotel"),
            Self::CheckInDeskClosed => write!(f, "checkin clerk has served every guest"),
            Self::CheckOutDeskClosed => write!(f, "checkout clerk has served every guest"),
        }
    }
}

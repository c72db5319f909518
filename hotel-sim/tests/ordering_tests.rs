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

use hotel_sim::prelude::*;

use crate::setup::{fast_config, initialize_tracing, RecordingNarrator};
mod setup;

const GUESTS: usize = 5;
const ROOMS: usize = 3;

async fn recorded_run() -> anyhow::Result<Vec<HotelEvent>> {
    let recorder = RecordingNarrator::new();
    HotelSimulation::new(fast_config(GUESTS, ROOMS))?
        .narrator(recorder.clone() as Arc<dyn Narrator>)
        .run()
        .await?;
    Ok(recorder.events())
}

fn index_where(events: &[HotelEvent], what: &str, pred: impl Fn(&HotelEvent) -> bool) -> usize {
    events
        .iter()
        .position(pred)
        .unwrap_or_else(|| panic!("event missing from recording: {what}"))
}

#[tokio::test]
async fn every_guest_walks_the_protocol_in_order() -> anyhow::Result<()> {
    initialize_tracing();
    let events = recorded_run().await?;

    for id in 0..GUESTS {
        let enters = index_where(&events, "enters", |e| {
            matches!(e, HotelEvent::GuestEnters { guest } if *guest == id)
        });
        let approaches_in = index_where(&events, "approaches check-in", |e| {
            matches!(e, HotelEvent::GuestApproachesCheckIn { guest } if *guest == id)
        });
        let assigned = index_where(&events, "room assigned", |e| {
            matches!(e, HotelEvent::RoomAssigned { guest, .. } if *guest == id)
        });
        let checked_in = index_where(&events, "check-in complete", |e| {
            matches!(e, HotelEvent::CheckInComplete { guest, .. } if *guest == id)
        });
        let activity = index_where(&events, "activity started", |e| {
            matches!(e, HotelEvent::ActivityStarted { guest, .. } if *guest == id)
        });
        let approaches_out = index_where(&events, "approaches check-out", |e| {
            matches!(e, HotelEvent::GuestApproachesCheckOut { guest, .. } if *guest == id)
        });
        let balance = index_where(&events, "balance quoted", |e| {
            matches!(e, HotelEvent::BalanceQuoted { guest, .. } if *guest == id)
        });
        let paid = index_where(&events, "payment sent", |e| {
            matches!(e, HotelEvent::PaymentSent { guest, .. } if *guest == id)
        });
        let received = index_where(&events, "payment received", |e| {
            matches!(e, HotelEvent::PaymentReceived { guest, .. } if *guest == id)
        });
        let departs = index_where(&events, "departs", |e| {
            matches!(e, HotelEvent::GuestDeparts { guest } if *guest == id)
        });

        // A guest never observes a room key before requesting one, never
        // pays before seeing the balance, and never leaves unpaid.
        assert!(enters < approaches_in, "guest {id}");
        assert!(approaches_in < assigned, "guest {id}");
        assert!(assigned < checked_in, "guest {id}");
        assert!(checked_in < activity, "guest {id}");
        assert!(activity < approaches_out, "guest {id}");
        assert!(approaches_out < balance, "guest {id}");
        assert!(balance < paid, "guest {id}");
        assert!(paid < received, "guest {id}");
        assert!(received < departs, "guest {id}");
    }
    Ok(())
}

#[tokio::test]
async fn occupancy_never_exceeds_room_capacity() -> anyhow::Result<()> {
    initialize_tracing();
    let events = recorded_run().await?;

    // A guest narrates its entry after acquiring a permit and its departure
    // before releasing it, so in the linearized recording the running
    // entered-minus-departed count bounds how many guests were inside.
    let mut inside: usize = 0;
    let mut peak: usize = 0;
    for event in &events {
        match event {
            HotelEvent::GuestEnters { .. } => {
                inside += 1;
                peak = peak.max(inside);
            }
            HotelEvent::GuestDeparts { .. } => inside -= 1,
            _ => {}
        }
    }

    assert!(peak <= ROOMS, "{peak} guests were inside {ROOMS} rooms");
    assert_eq!(inside, 0, "every guest that entered must depart");
    Ok(())
}

#[tokio::test]
async fn desks_serve_one_conversation_at_a_time() -> anyhow::Result<()> {
    initialize_tracing();
    let events = recorded_run().await?;

    // The check-in clerk must finish each assignment before greeting the
    // next guest: greetings and assignments strictly alternate.
    let mut mid_conversation = false;
    for event in &events {
        match event {
            HotelEvent::CheckInGreets { .. } => {
                assert!(!mid_conversation, "clerk greeted a second guest mid-assignment");
                mid_conversation = true;
            }
            HotelEvent::RoomAssigned { .. } => {
                assert!(mid_conversation, "assignment without a greeting");
                mid_conversation = false;
            }
            _ => {}
        }
    }
    assert!(!mid_conversation, "a conversation was left unfinished");

    // Likewise at check-out: a key hand-over is settled and released before
    // the next key is accepted.
    let mut settling: Option<usize> = None;
    for event in &events {
        match event {
            HotelEvent::KeyReceived { guest, .. } => {
                assert!(settling.is_none(), "clerk took a key while settling another guest");
                settling = Some(*guest);
            }
            HotelEvent::ExitGranted { guest } => {
                assert_eq!(settling, Some(*guest), "exit granted to the wrong guest");
                settling = None;
            }
            _ => {}
        }
    }
    assert!(settling.is_none(), "a check-out was left unsettled");
    Ok(())
}

#[tokio::test]
async fn clerks_open_before_and_close_after_their_guests() -> anyhow::Result<()> {
    initialize_tracing();
    let events = recorded_run().await?;

    let open = index_where(&events, "check-in open", |e| {
        matches!(e, HotelEvent::CheckInDeskOpen)
    });
    let closed = index_where(&events, "check-in closed", |e| {
        matches!(e, HotelEvent::CheckInDeskClosed)
    });
    let first_greet = index_where(&events, "first greeting", |e| {
        matches!(e, HotelEvent::CheckInGreets { .. })
    });

    assert!(open < first_greet);
    let last_assignment = events
        .iter()
        .rposition(|e| matches!(e, HotelEvent::RoomAssigned { .. }))
        .expect("no assignments recorded");
    assert!(last_assignment < closed);
    Ok(())
}

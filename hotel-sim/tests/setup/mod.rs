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

#![allow(dead_code)]

use std::sync::{Arc, Mutex, Once};

use async_trait::async_trait;
use tracing::Level;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use hotel_sim::prelude::*;

// Ensures tracing initialization happens only once across all tests.
static INIT: Once = Once::new();

/// Initializes the global tracing subscriber for tests.
///
/// Uses `std::sync::Once` so that this runs only once even when called from
/// multiple tests in the same binary. Level is tunable via RUST_LOG; the
/// default keeps narration visible on failure output without drowning it in
/// protocol traces.
pub fn initialize_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("hotel_core=info,hotel_sim=info"));

        let subscriber = FmtSubscriber::builder()
            .with_span_events(FmtSpan::NONE)
            .with_max_level(Level::TRACE)
            .compact()
            .with_line_number(false)
            .with_target(false)
            .without_time()
            .with_env_filter(filter)
            .with_test_writer()
            .finish();

        let _ = tracing::subscriber::set_global_default(subscriber);
    });
}

/// A configuration sized for tests: real contention, near-zero stays.
pub fn fast_config(guest_count: usize, room_capacity: usize) -> HotelConfig {
    HotelConfig {
        guest_count,
        room_capacity,
        base_service_charge_cents: 6_000,
        stay: StayConfig {
            min_ms: 0,
            max_ms: 2,
        },
    }
}

/// A narrator that records the linearized order of every event.
///
/// Events are appended under a lock inside `narrate`, before the emitting
/// actor proceeds, so the recorded order respects every cross-actor
/// happens-before edge the protocol establishes.
#[derive(Debug, Default)]
pub struct RecordingNarrator {
    events: Mutex<Vec<HotelEvent>>,
}

impl RecordingNarrator {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// A snapshot of everything narrated so far, in order.
    pub fn events(&self) -> Vec<HotelEvent> {
        self.events.lock().expect("narrator lock poisoned").clone()
    }
}

#[async_trait]
impl Narrator for RecordingNarrator {
    async fn narrate(&self, event: &HotelEvent) {
        self.events
            .lock()
            .expect("narrator lock poisoned")
            .push(event.clone());
    }
}

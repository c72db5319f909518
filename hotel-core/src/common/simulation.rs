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

use futures::future::join_all;
use tokio::sync::mpsc;
use tracing::{instrument, trace};

use crate::actor::{CheckInDesk, CheckOutDesk, Guest};
use crate::common::{
    Activity, ActivityTally, HotelConfig, HotelError, RoomRegistry, SimulationReport,
};
use crate::message::GuestRecord;
use crate::sync::PermitPool;
use crate::traits::{Narrator, TracingNarrator};

/// Builds and runs one complete simulation.
///
/// Owns every shared resource (permit pool, room registry, tally) and spawns
/// every actor as its own Tokio task. `run` consumes the simulation: all
/// actors run to completion, there is no cancellation or partial result.
///
/// ```rust,ignore
/// let report = HotelSimulation::new(HotelConfig::default())?
///     .assign_activities(vec![Activity::Pool; 5])
///     .run()
///     .await?;
/// println!("{report}");
/// ```
pub struct HotelSimulation {
    config: HotelConfig,
    permits: PermitPool,
    registry: Arc<RoomRegistry>,
    tally: Arc<ActivityTally>,
    narrator: Arc<dyn Narrator>,
    assignments: Option<Vec<Activity>>,
}

impl HotelSimulation {
    /// Validates the configuration and builds the shared resources.
    ///
    /// # Errors
    ///
    /// Returns [`HotelError::Config`] for an unrunnable configuration, such
    /// as zero rooms. Rejecting that here keeps a misconfiguration from
    /// surfacing later as a silent permanent deadlock.
    pub fn new(config: HotelConfig) -> Result<Self, HotelError> {
        config.validate()?;
        let permits = PermitPool::new(config.room_capacity)?;
        let registry = Arc::new(RoomRegistry::new(config.room_capacity));
        Ok(Self {
            config,
            permits,
            registry,
            tally: Arc::new(ActivityTally::new()),
            narrator: Arc::new(TracingNarrator),
            assignments: None,
        })
    }

    /// Fixes each guest's activity instead of choosing uniformly at random.
    ///
    /// The vector is indexed by guest id and must be `guest_count` long,
    /// which `run` verifies.
    pub fn assign_activities(mut self, assignments: Vec<Activity>) -> Self {
        self.assignments = Some(assignments);
        self
    }

    /// Replaces the default tracing narrator with an injected collaborator.
    pub fn narrator(mut self, narrator: Arc<dyn Narrator>) -> Self {
        self.narrator = narrator;
        self
    }

    /// Runs the simulation to completion and returns the aggregated report.
    ///
    /// Spawns the two clerk tasks and all guest tasks, waits for every guest
    /// to depart, then waits for both clerks to close. After the run, every
    /// room must be vacant and every permit returned.
    ///
    /// # Errors
    ///
    /// [`HotelError::Config`] for an activity assignment of the wrong
    /// length; [`HotelError::InvariantViolation`] if any actor failed or the
    /// post-run accounting does not balance.
    #[instrument(skip(self), fields(guests = self.config.guest_count, rooms = self.config.room_capacity))]
    pub async fn run(self) -> Result<SimulationReport, HotelError> {
        let guest_count = self.config.guest_count;

        let activities = match self.assignments {
            Some(assigned) => {
                if assigned.len() != guest_count {
                    return Err(HotelError::Config(format!(
                        "expected {} activity assignments, got {}",
                        guest_count,
                        assigned.len()
                    )));
                }
                assigned
            }
            None => (0..guest_count).map(|_| Activity::random()).collect(),
        };

        // One conversation slot per desk. Capacity 1 is what preserves the
        // at-most-one-request-in-flight invariant.
        let (check_in_tx, check_in_rx) = mpsc::channel(1);
        let (check_out_tx, check_out_rx) = mpsc::channel(1);

        let check_in_desk = CheckInDesk::new(
            check_in_rx,
            self.registry.clone(),
            self.narrator.clone(),
            guest_count,
        );
        let check_out_desk = CheckOutDesk::new(
            check_out_rx,
            self.registry.clone(),
            self.narrator.clone(),
            guest_count,
        );
        let check_in_task = tokio::spawn(check_in_desk.run());
        let check_out_task = tokio::spawn(check_out_desk.run());

        let guest_tasks: Vec<_> = activities
            .into_iter()
            .enumerate()
            .map(|(id, activity)| {
                let record =
                    GuestRecord::new(id, activity, self.config.base_service_charge_cents);
                let guest = Guest::new(
                    record,
                    self.permits.clone(),
                    check_in_tx.clone(),
                    check_out_tx.clone(),
                    self.tally.clone(),
                    self.narrator.clone(),
                    self.config.stay_range(),
                );
                tokio::spawn(guest.run())
            })
            .collect();

        // Drop the orchestrator's sender halves so a clerk that is owed more
        // requests than guests exist fails fast instead of blocking forever.
        drop(check_in_tx);
        drop(check_out_tx);

        let mut records: Vec<GuestRecord> = Vec::with_capacity(guest_count);
        for outcome in join_all(guest_tasks).await {
            records.push(outcome??);
        }
        trace!("all guests departed");

        check_in_task.await??;
        check_out_task.await??;

        let still_occupied = self.registry.occupied_count()?;
        if still_occupied != 0 {
            return Err(HotelError::InvariantViolation(format!(
                "{} rooms still occupied after every guest departed",
                still_occupied
            )));
        }
        if self.permits.available() != self.permits.capacity() {
            return Err(HotelError::InvariantViolation(
                "room permits were not all returned".into(),
            ));
        }

        let total_collected_cents = records
            .iter()
            .map(|record| u64::from(record.balance_due_cents))
            .sum();

        Ok(SimulationReport {
            guest_count: records.len(),
            activity_counts: self.tally.snapshot(),
            total_collected_cents,
        })
    }
}

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

/// The aggregated result of a completed simulation run.
///
/// Produced by [`HotelSimulation::run`](crate::common::HotelSimulation::run)
/// only after every actor has terminated, so the numbers are final.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulationReport {
    /// How many guests passed through the hotel.
    pub guest_count: usize,
    /// Per-activity guest counts, in [`Activity::ALL`] order.
    pub activity_counts: Vec<(Activity, usize)>,
    /// Payments collected at check-out, in cents.
    pub total_collected_cents: u64,
}

impl SimulationReport {
    /// The number of guests that performed `activity`.
    pub fn count(&self, activity: Activity) -> usize {
        self.activity_counts
            .iter()
            .find(|(a, _)| *a == activity)
            .map(|(_, n)| *n)
            .unwrap_or(0)
    }

    /// The sum of all per-activity counts.
    pub fn activity_total(&self) -> usize {
        self.activity_counts.iter().map(|(_, n)| n).sum()
    }
}

impl fmt::Display for SimulationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Number of Customers")?;
        writeln!(f, "\tTotal Guests: {}", self.guest_count)?;
        for (activity, count) in &self.activity_counts {
            writeln!(f, "\t{}: {}", activity, count)?;
        }
        write!(
            f,
            "\tTotal Collected: ${}",
            self.total_collected_cents / 100
        )
    }
}

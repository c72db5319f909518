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

use dashmap::DashMap;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// The activities a guest can choose from while inside the hotel.
///
/// Exactly four. Random selection is uniform over these variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Activity {
    /// The swimming pool.
    Pool,
    /// The restaurant.
    Restaurant,
    /// The fitness center.
    FitnessCenter,
    /// The business center.
    BusinessCenter,
}

impl Activity {
    /// Every activity, in summary-report order.
    pub const ALL: [Activity; 4] = [
        Activity::Pool,
        Activity::Restaurant,
        Activity::FitnessCenter,
        Activity::BusinessCenter,
    ];

    /// Picks one activity uniformly at random.
    pub fn random() -> Self {
        let index = rand::rng().random_range(0..Self::ALL.len());
        Self::ALL[index]
    }

    /// The label used in narration lines ("Guest 2 goes to the Pool").
    pub const fn label(&self) -> &'static str {
        match self {
            Activity::Pool => "Pool",
            Activity::Restaurant => "Restaurant",
            Activity::FitnessCenter => "Fitness center",
            Activity::BusinessCenter => "Business center",
        }
    }
}

impl fmt::Display for Activity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A process-wide count of how many guests performed each activity.
///
/// Guests record their activity exactly once; `DashMap` serializes the
/// per-entry increments, so concurrent guests can never lose an update.
#[derive(Debug, Default)]
pub struct ActivityTally {
    counts: DashMap<Activity, usize>,
}

impl ActivityTally {
    /// Creates an empty tally.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records that one guest performed `activity`.
    pub fn record(&self, activity: Activity) {
        *self.counts.entry(activity).or_insert(0) += 1;
    }

    /// The number of guests recorded for `activity`.
    pub fn count(&self, activity: Activity) -> usize {
        self.counts.get(&activity).map(|entry| *entry).unwrap_or(0)
    }

    /// All counts in [`Activity::ALL`] order, including zero entries.
    pub fn snapshot(&self) -> Vec<(Activity, usize)> {
        Activity::ALL
            .iter()
            .map(|&activity| (activity, self.count(activity)))
            .collect()
    }

    /// The total number of recordings across all activities.
    pub fn total(&self) -> usize {
        Activity::ALL
            .iter()
            .map(|&activity| self.count(activity))
            .sum()
    }
}

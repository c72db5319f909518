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

use hotel_sim::prelude::*;

use crate::setup::{fast_config, initialize_tracing};
mod setup;

#[tokio::test]
async fn five_guests_three_rooms_runs_to_completion() -> anyhow::Result<()> {
    initialize_tracing();

    let report = HotelSimulation::new(fast_config(5, 3))?.run().await?;

    assert_eq!(report.guest_count, 5);
    assert_eq!(report.activity_total(), 5, "every guest tallies exactly once");
    assert_eq!(report.total_collected_cents, 5 * 6_000);
    Ok(())
}

#[tokio::test]
async fn injected_assignment_yields_exact_tally() -> anyhow::Result<()> {
    initialize_tracing();

    let report = HotelSimulation::new(fast_config(5, 3))?
        .assign_activities(vec![
            Activity::Pool,
            Activity::Pool,
            Activity::Restaurant,
            Activity::FitnessCenter,
            Activity::BusinessCenter,
        ])
        .run()
        .await?;

    assert_eq!(report.count(Activity::Pool), 2);
    assert_eq!(report.count(Activity::Restaurant), 1);
    assert_eq!(report.count(Activity::FitnessCenter), 1);
    assert_eq!(report.count(Activity::BusinessCenter), 1);
    Ok(())
}

#[tokio::test]
async fn mismatched_assignment_length_is_a_config_error() -> anyhow::Result<()> {
    initialize_tracing();

    let result = HotelSimulation::new(fast_config(5, 3))?
        .assign_activities(vec![Activity::Pool; 3])
        .run()
        .await;

    assert!(matches!(result, Err(HotelError::Config(_))));
    Ok(())
}

#[tokio::test]
async fn single_guest_single_room_completes() -> anyhow::Result<()> {
    initialize_tracing();

    let report = HotelSimulation::new(fast_config(1, 1))?
        .assign_activities(vec![Activity::Restaurant])
        .run()
        .await?;

    assert_eq!(report.guest_count, 1);
    assert_eq!(report.count(Activity::Restaurant), 1);
    Ok(())
}

#[tokio::test]
async fn heavy_contention_still_drains_every_guest() -> anyhow::Result<()> {
    initialize_tracing();

    // Ten guests queueing on two rooms: most of the run is spent blocked on
    // the permit pool, which is exactly where a lost wake-up would bite.
    let report = HotelSimulation::new(fast_config(10, 2))?.run().await?;

    assert_eq!(report.guest_count, 10);
    assert_eq!(report.activity_total(), 10);
    Ok(())
}

#[tokio::test]
async fn report_renders_the_summary_block() -> anyhow::Result<()> {
    initialize_tracing();

    let report = HotelSimulation::new(fast_config(5, 3))?
        .assign_activities(vec![Activity::Pool; 5])
        .run()
        .await?;

    let rendered = report.to_string();
    assert!(rendered.contains("Number of Customers"));
    assert!(rendered.contains("Total Guests: 5"));
    assert!(rendered.contains("Pool: 5"));
    assert!(rendered.contains("Business center: 0"));
    Ok(())
}

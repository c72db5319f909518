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

// Hotel front-desk simulation: guests check in, pick up a room key, enjoy an
// activity, settle up at check-out, and leave. The interesting part is the
// coordination: three rooms bound how many of the five guests can be inside
// at once, and each counter serves strictly one guest at a time.

use std::sync::Once;

use anyhow::Result;
use tracing::{info, Level};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::fmt::writer::MakeWriterExt;
use tracing_subscriber::{fmt::format::FmtSpan, EnvFilter, FmtSubscriber};

use hotel_sim::prelude::*;

const LOG_DIRECTORY: &str = "logs";
const LOG_FILENAME: &str = "hotel-sim.log";

#[tokio::main]
async fn main() -> Result<()> {
    initialize_tracing();
    info!("** Hotel opens **");

    let config = HotelConfig::load();
    let report = HotelSimulation::new(config)?.run().await?;

    info!("** Hotel closes **");
    println!("{report}");

    Ok(())
}

// Set up our logging system (only needs to happen once)
static INIT: Once = Once::new();

fn initialize_tracing() {
    INIT.call_once(|| {
        // Narration goes to stdout at info level and is mirrored into a
        // daily-rotated log file; the level is tunable through RUST_LOG.
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("hotel_core=info,hotel_sim=info"));

        let file_appender = RollingFileAppender::new(Rotation::DAILY, LOG_DIRECTORY, LOG_FILENAME);
        let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
        // Leak the guard so the non-blocking writer survives until process exit
        Box::leak(Box::new(guard));

        let subscriber = FmtSubscriber::builder()
            .with_span_events(FmtSpan::NONE)
            .with_max_level(Level::TRACE)
            .compact()
            .with_line_number(false)
            .with_target(false)
            .without_time()
            .with_env_filter(filter)
            .with_writer(std::io::stdout.and(non_blocking))
            .finish();

        tracing::subscriber::set_global_default(subscriber)
            .expect("Setting default subscriber failed");
    });
}

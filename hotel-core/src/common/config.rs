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

use serde::{Deserialize, Serialize};

use crate::common::HotelError;

/// Configuration for the hotel simulation.
///
/// All values have working defaults (the classic five-guest, three-room
/// scenario) and can be overridden from a TOML file in an XDG-compliant
/// location.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HotelConfig {
    /// How many guest actors to run.
    pub guest_count: usize,
    /// How many rooms (and therefore room permits) the hotel has.
    pub room_capacity: usize,
    /// The fixed service charge every guest owes at check-out, in cents.
    pub base_service_charge_cents: u32,
    /// Stay-duration configuration.
    pub stay: StayConfig,
}

/// How long a guest's in-hotel activity lasts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StayConfig {
    /// Minimum activity duration in milliseconds.
    pub min_ms: u64,
    /// Maximum activity duration in milliseconds.
    pub max_ms: u64,
}

impl Default for StayConfig {
    fn default() -> Self {
        Self {
            min_ms: 1_000,
            max_ms: 3_000,
        }
    }
}

impl Default for HotelConfig {
    /// The classic five-guest, three-room scenario with a $60 charge.
    fn default() -> Self {
        Self {
            guest_count: 5,
            room_capacity: 3,
            base_service_charge_cents: 6_000,
            stay: StayConfig::default(),
        }
    }
}

impl HotelConfig {
    /// Checks that the configuration describes a runnable hotel.
    ///
    /// # Errors
    ///
    /// Returns [`HotelError::Config`] when there are zero rooms (every guest
    /// would block forever on the permit pool), zero guests, or an inverted
    /// stay-duration range.
    pub fn validate(&self) -> Result<(), HotelError> {
        if self.room_capacity == 0 {
            return Err(HotelError::Config(
                "room_capacity must be at least 1".into(),
            ));
        }
        if self.guest_count == 0 {
            return Err(HotelError::Config("guest_count must be at least 1".into()));
        }
        if self.stay.min_ms > self.stay.max_ms {
            return Err(HotelError::Config(format!(
                "stay duration range is inverted ({}ms > {}ms)",
                self.stay.min_ms, self.stay.max_ms
            )));
        }
        Ok(())
    }

    /// The stay duration range guests sample from, in milliseconds.
    pub const fn stay_range(&self) -> RangeInclusive<u64> {
        self.stay.min_ms..=self.stay.max_ms
    }

    /// Load configuration from XDG-compliant locations.
    ///
    /// Looks for `hotel-sim/config.toml` under the XDG config directories.
    /// If no configuration file is found, returns the default scenario. If
    /// a configuration file exists but is malformed, logs an error and uses
    /// the default scenario rather than aborting.
    pub fn load() -> Self {
        use tracing::{error, info};

        let xdg_dirs = match xdg::BaseDirectories::with_prefix("hotel-sim") {
            Ok(dirs) => dirs,
            Err(e) => {
                error!("Failed to initialize XDG directories: {}", e);
                return Self::default();
            }
        };

        let config_path = xdg_dirs.find_config_file("config.toml");

        if let Some(path) = config_path {
            info!("Loading configuration from: {}", path.display());
            match std::fs::read_to_string(&path) {
                Ok(config_str) => match toml::from_str::<Self>(&config_str) {
                    Ok(config) => {
                        info!("Successfully loaded configuration");
                        config
                    }
                    Err(e) => {
                        error!("Failed to parse configuration file {}: {}", path.display(), e);
                        Self::default()
                    }
                },
                Err(e) => {
                    error!("Failed to read configuration file {}: {}", path.display(), e);
                    Self::default()
                }
            }
        } else {
            info!("No configuration file found, using defaults");
            Self::default()
        }
    }
}

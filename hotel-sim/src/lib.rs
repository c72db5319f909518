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

#![forbid(unsafe_code)]

//! # Hotel Sim
//!
//! Models a small hotel front desk as a set of concurrently running actors:
//! five guests, a check-in clerk, and a check-out clerk, coordinating access
//! to three rooms and two single-clerk counters without races, deadlocks, or
//! lost wake-ups.
//!
//! This crate is a thin facade over [`hotel_core`]; almost everything lives
//! there. See the `hotel-sim` binary for the runnable simulation.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use hotel_sim::prelude::*;
//!
//! let report = HotelSimulation::new(HotelConfig::default())?.run().await?;
//! println!("{report}");
//! ```

/// Prelude module for convenient imports.
pub mod prelude {
    pub use hotel_core::prelude::*;
}

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

//! # Hotel Core
//!
//! This crate provides the building blocks for the hotel front-desk
//! simulation, built on top of Tokio. A fixed set of guest actors and two
//! clerk actors coordinate access to a bounded pool of rooms and two
//! single-clerk service counters using a small number of explicit
//! coordination constructs.
//!
//! ## Key Concepts
//!
//! - **Permit pool (`PermitPool`)**: Bounded counter granting use of one of
//!   N interchangeable rooms. Holding a [`sync::RoomPermit`] is what bounds
//!   the number of guests inside the hotel.
//! - **Rendezvous (`Rendezvous`)**: One-shot, repeatable wake signal used to
//!   order a response strictly after its matching request across actor
//!   boundaries.
//! - **Messaging**: Guests converse with each desk over a capacity-one
//!   Tokio MPSC channel; each request carries its own reply path, so a
//!   second guest's request can never race the first guest's response.
//! - **Actors**: [`actor::Guest`], [`actor::CheckInDesk`], and
//!   [`actor::CheckOutDesk`] each run as an independent Tokio task and run
//!   to completion; there is no cancellation path in the protocol.
//! - **Orchestration (`HotelSimulation`)**: Builds the shared resources,
//!   spawns every actor, waits for all of them, and produces a
//!   [`common::SimulationReport`].
//! - **Narration (`Narrator`)**: Injected observation collaborator; every
//!   state transition is reported as a [`message::HotelEvent`].

/// Shared resources, configuration, orchestration, and errors.
pub(crate) mod common;

/// The guest and clerk actors.
pub(crate) mod actor;

/// Message and event types exchanged between actors.
pub(crate) mod message;

/// Coordination primitives: the permit pool and the rendezvous signal.
pub(crate) mod sync;

/// Trait definitions, currently the narration seam.
pub(crate) mod traits;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use async_trait;

    pub use crate::actor::{CheckInDesk, CheckOutDesk, Guest};
    pub use crate::common::{
        Activity, ActivityTally, HotelConfig, HotelError, HotelSimulation, RoomRegistry,
        SimulationReport, StayConfig,
    };
    pub use crate::message::{
        CheckInRequest, CheckOutRequest, GuestId, GuestRecord, HotelEvent, RoomKey,
    };
    pub use crate::sync::{PermitPool, Rendezvous, RoomPermit};
    pub use crate::traits::{Narrator, TracingNarrator};
}

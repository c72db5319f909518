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

use async_trait::async_trait;
use tracing::info;

use crate::message::HotelEvent;

/// The injected observation collaborator.
///
/// Every actor reports each of its state transitions here. Narration is
/// purely observational and carries no synchronization weight: a narrator
/// must not block the protocol, and the protocol must stay correct if every
/// call is a no-op. Tests inject a recording narrator to capture the
/// linearized event order.
#[async_trait]
pub trait Narrator: Send + Sync {
    /// Reports one state transition.
    async fn narrate(&self, event: &HotelEvent);
}

/// The default narrator: one `info!` line per event, in the console
/// phrasing guests and clerks use.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNarrator;

#[async_trait]
impl Narrator for TracingNarrator {
    async fn narrate(&self, event: &HotelEvent) {
        info!("{}", event);
    }
}

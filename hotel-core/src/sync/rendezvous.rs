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

use tokio::sync::Semaphore;

use crate::common::HotelError;

/// A one-shot, repeatable wake signal for ordering events across actors.
///
/// `post` records that the event happened; `wait` suspends the caller until
/// it has. A `post` is never lost: if it arrives before the matching `wait`,
/// the waiter passes straight through. This is what guarantees a response is
/// never observed before its matching request.
///
/// The protocol pairs each `post` with exactly one `wait`, so at most one
/// signal is ever pending. Kept separate from [`PermitPool`][super::PermitPool]
/// in the API even though both sit on a semaphore: a rendezvous orders two
/// events, a pool counts resources.
#[derive(Debug)]
pub struct Rendezvous {
    signal: Semaphore,
}

impl Rendezvous {
    /// Creates a rendezvous with no pending signal.
    pub fn new() -> Self {
        Self {
            signal: Semaphore::new(0),
        }
    }

    /// Records the event, waking the waiter if one is already blocked.
    ///
    /// Never blocks.
    pub fn post(&self) {
        self.signal.add_permits(1);
    }

    /// Suspends the calling task until the event has been posted, then
    /// consumes the signal so the rendezvous can be reused.
    ///
    /// # Errors
    ///
    /// Returns [`HotelError::InvariantViolation`] if the signal has been
    /// closed; nothing in this crate closes it.
    pub async fn wait(&self) -> Result<(), HotelError> {
        let permit = self
            .signal
            .acquire()
            .await
            .map_err(|_| HotelError::InvariantViolation("rendezvous signal was closed".into()))?;
        permit.forget();
        Ok(())
    }
}

impl Default for Rendezvous {
    fn default() -> Self {
        Self::new()
    }
}

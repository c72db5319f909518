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

use tokio::sync::{OwnedSemaphorePermit, Semaphore};
use tracing::trace;

use crate::common::HotelError;

/// A bounded pool of interchangeable resource permits.
///
/// Holding a [`RoomPermit`] represents exclusive use of one of the pool's
/// `capacity` units. [`PermitPool::acquire`] suspends the calling task until
/// a unit is free; dropping the returned permit releases the unit and wakes
/// exactly one waiter, if any are queued.
///
/// The free count can never leave the range `0..=capacity`: permits only
/// exist as guards handed out by `acquire`, so over-release is impossible by
/// construction.
#[derive(Debug, Clone)]
pub struct PermitPool {
    semaphore: Arc<Semaphore>,
    capacity: usize,
}

/// An owned guard for one unit of a [`PermitPool`].
///
/// The unit returns to the pool when this guard is dropped.
#[derive(Debug)]
pub struct RoomPermit {
    _permit: OwnedSemaphorePermit,
}

impl PermitPool {
    /// Creates a pool with the given number of units.
    ///
    /// # Errors
    ///
    /// Returns [`HotelError::Config`] when `capacity` is zero. A zero-unit
    /// pool would block every caller forever, so it is rejected at
    /// construction rather than left to deadlock silently at runtime.
    pub fn new(capacity: usize) -> Result<Self, HotelError> {
        if capacity == 0 {
            return Err(HotelError::Config(
                "permit pool capacity must be at least 1".into(),
            ));
        }
        Ok(Self {
            semaphore: Arc::new(Semaphore::new(capacity)),
            capacity,
        })
    }

    /// Waits until a unit is free, then claims it.
    ///
    /// # Errors
    ///
    /// Returns [`HotelError::InvariantViolation`] if the underlying
    /// semaphore has been closed. Nothing in this crate closes it, so this
    /// indicates a coordination bug rather than a runtime condition.
    pub async fn acquire(&self) -> Result<RoomPermit, HotelError> {
        let permit = self
            .semaphore
            .clone()
            .acquire_owned()
            .await
            .map_err(|_| HotelError::InvariantViolation("permit pool was closed".into()))?;
        trace!(available = self.available(), "permit acquired");
        Ok(RoomPermit { _permit: permit })
    }

    /// The number of units currently free.
    pub fn available(&self) -> usize {
        self.semaphore.available_permits()
    }

    /// The total number of units in the pool.
    pub const fn capacity(&self) -> usize {
        self.capacity
    }
}

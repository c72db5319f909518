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

use std::sync::Mutex;

use crate::common::HotelError;
use crate::message::RoomKey;

/// The table of room-occupancy flags, one per physical room.
///
/// Only the two clerk actors mutate the registry; guests reach it solely
/// through their desk conversations. Every mutation happens under the inner
/// mutex, which is never held across an await point, so the occupied count
/// always equals the number of room permits currently held.
#[derive(Debug)]
pub struct RoomRegistry {
    rooms: Mutex<Vec<bool>>,
    capacity: usize,
}

impl RoomRegistry {
    /// Creates a registry with every room vacant.
    pub fn new(capacity: usize) -> Self {
        Self {
            rooms: Mutex::new(vec![false; capacity]),
            capacity,
        }
    }

    /// Marks the lowest-numbered vacant room occupied and returns its key.
    ///
    /// # Errors
    ///
    /// Returns [`HotelError::InvariantViolation`] when every room is
    /// occupied. The check-in clerk only reaches this call on behalf of a
    /// guest already holding a room permit, so a full registry means the
    /// permit accounting is broken.
    pub fn occupy_first_free(&self) -> Result<RoomKey, HotelError> {
        let mut rooms = self
            .rooms
            .lock()
            .map_err(|_| HotelError::InvariantViolation("room registry lock poisoned".into()))?;
        match rooms.iter().position(|&occupied| !occupied) {
            Some(key) => {
                rooms[key] = true;
                Ok(key)
            }
            None => Err(HotelError::InvariantViolation(
                "no free room despite a held room permit".into(),
            )),
        }
    }

    /// Marks the given room vacant.
    ///
    /// # Errors
    ///
    /// Returns [`HotelError::InvariantViolation`] for a key that is out of
    /// range or names a room that is already vacant; either means a key was
    /// fabricated or returned twice.
    pub fn free(&self, key: RoomKey) -> Result<(), HotelError> {
        let mut rooms = self
            .rooms
            .lock()
            .map_err(|_| HotelError::InvariantViolation("room registry lock poisoned".into()))?;
        match rooms.get(key) {
            Some(true) => {
                rooms[key] = false;
                Ok(())
            }
            Some(false) => Err(HotelError::InvariantViolation(format!(
                "room {} returned while already vacant",
                key
            ))),
            None => Err(HotelError::InvariantViolation(format!(
                "room key {} is out of range",
                key
            ))),
        }
    }

    /// The number of rooms currently occupied.
    pub fn occupied_count(&self) -> Result<usize, HotelError> {
        let rooms = self
            .rooms
            .lock()
            .map_err(|_| HotelError::InvariantViolation("room registry lock poisoned".into()))?;
        Ok(rooms.iter().filter(|&&occupied| occupied).count())
    }

    /// The total number of rooms.
    pub const fn capacity(&self) -> usize {
        self.capacity
    }
}

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

mod setup;

#[test]
fn assigns_lowest_free_room_first() -> anyhow::Result<()> {
    let registry = RoomRegistry::new(3);

    assert_eq!(registry.occupy_first_free()?, 0);
    assert_eq!(registry.occupy_first_free()?, 1);

    // Room 0 frees up: the next assignment must reuse it, not take room 2.
    registry.free(0)?;
    assert_eq!(registry.occupy_first_free()?, 0);
    assert_eq!(registry.occupy_first_free()?, 2);
    assert_eq!(registry.occupied_count()?, 3);
    Ok(())
}

#[test]
fn full_registry_is_an_invariant_violation() -> anyhow::Result<()> {
    let registry = RoomRegistry::new(1);
    registry.occupy_first_free()?;

    // A permit should have kept this from ever being reached.
    let result = registry.occupy_first_free();
    assert!(matches!(result, Err(HotelError::InvariantViolation(_))));
    Ok(())
}

#[test]
fn freeing_a_vacant_room_is_an_invariant_violation() -> anyhow::Result<()> {
    let registry = RoomRegistry::new(2);
    let room = registry.occupy_first_free()?;
    registry.free(room)?;

    let result = registry.free(room);
    assert!(matches!(result, Err(HotelError::InvariantViolation(_))));
    Ok(())
}

#[test]
fn out_of_range_key_is_rejected() {
    let registry = RoomRegistry::new(2);
    let result = registry.free(7);
    assert!(matches!(result, Err(HotelError::InvariantViolation(_))));
}

#[test]
fn occupancy_starts_empty() -> anyhow::Result<()> {
    let registry = RoomRegistry::new(3);
    assert_eq!(registry.capacity(), 3);
    assert_eq!(registry.occupied_count()?, 0);
    Ok(())
}

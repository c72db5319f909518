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

/// Errors that can occur while configuring or running the simulation.
///
/// There is no recoverable class: a configuration problem aborts before any
/// actor starts, and an invariant violation means the synchronization
/// protocol itself is broken, which must terminate the run rather than
/// continue in a corrupted state.
#[derive(Debug)]
pub enum HotelError {
    /// The configuration is unusable (for example, zero rooms).
    Config(String),
    /// An actor could not be started or waited on.
    Startup(String),
    /// The coordination protocol reached a state it promises is unreachable.
    InvariantViolation(String),
}

impl std::fmt::Display for HotelError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            HotelError::Config(msg) => write!(f, "configuration error: {}", msg),
            HotelError::Startup(msg) => write!(f, "startup failure: {}", msg),
            HotelError::InvariantViolation(msg) => write!(f, "invariant violation: {}", msg),
        }
    }
}

impl std::error::Error for HotelError {}

/// A clerk or guest task that panicked or was aborted is a protocol defect,
/// never something to retry.
impl From<tokio::task::JoinError> for HotelError {
    fn from(err: tokio::task::JoinError) -> Self {
        HotelError::InvariantViolation(format!("actor task failed: {}", err))
    }
}

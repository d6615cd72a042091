//! Session capacity value object.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// Absolute ceiling for any session capacity.
pub const SESSION_MAX_CAPACITY: u32 = 100;

/// Number of seats in a session, within `1..=max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Capacity(u32);

impl Capacity {
    /// Creates a capacity bounded by [`SESSION_MAX_CAPACITY`].
    pub fn new(raw: i64) -> Result<Self, ValidationError> {
        Self::with_max(raw, SESSION_MAX_CAPACITY)
    }

    /// Creates a capacity bounded by a configured ceiling.
    ///
    /// The ceiling itself is clamped to [`SESSION_MAX_CAPACITY`].
    pub fn with_max(raw: i64, max: u32) -> Result<Self, ValidationError> {
        let max = max.min(SESSION_MAX_CAPACITY);
        if raw < 1 || raw > i64::from(max) {
            return Err(ValidationError::out_of_range("capacity", 1, i64::from(max), raw));
        }
        Ok(Self(raw as u32))
    }

    pub fn value(&self) -> u32 {
        self.0
    }

    /// Capacity as a collection length.
    pub fn as_usize(&self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for Capacity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

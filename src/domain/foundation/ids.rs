//! Strongly-typed identifier value objects.
//!
//! Identifiers are non-negative integers assigned by the persistence layer.
//! Raw input arriving as a signed integer or as text is validated here so
//! that a negative or non-numeric id never reaches an aggregate.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ValidationError;

macro_rules! integer_id {
    ($(#[$meta:meta])* $name:ident, $field:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(u64);

        impl $name {
            /// Creates an identifier from an already non-negative value.
            pub const fn new(value: u64) -> Self {
                Self(value)
            }

            /// Creates an identifier from a signed raw value, rejecting negatives.
            pub fn try_from_raw(raw: i64) -> Result<Self, ValidationError> {
                u64::try_from(raw)
                    .map(Self)
                    .map_err(|_| ValidationError::out_of_range($field, 0, i64::MAX, raw))
            }

            /// Returns the raw value.
            pub const fn value(&self) -> u64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = ValidationError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    return Err(ValidationError::empty_field($field));
                }
                let raw: i64 = trimmed.parse().map_err(|_| {
                    ValidationError::invalid_format($field, format!("'{}' is not an integer", s))
                })?;
                Self::try_from_raw(raw)
            }
        }

        impl From<u64> for $name {
            fn from(value: u64) -> Self {
                Self(value)
            }
        }
    };
}

integer_id!(
    /// Unique identifier for a registered player.
    PlayerId,
    "player_id"
);

integer_id!(
    /// Unique identifier for a catalogued game.
    GameId,
    "game_id"
);

integer_id!(
    /// Unique identifier for a scheduled game session.
    SessionId,
    "session_id"
);

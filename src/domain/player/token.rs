//! Authentication token issued to a player at registration or login.
//!
//! The opaque value comes from an external generator; this type only owns
//! the temporal rules. Every time comparison takes `now` explicitly.

use chrono::Duration;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::{PlayerId, Timestamp, ValidationError};

/// Default lifetime of a token.
pub const DEFAULT_TOKEN_VALIDITY_HOURS: i64 = 24;

/// Opaque, non-blank credential string.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TokenValue(String);

impl TokenValue {
    pub fn new(raw: impl Into<String>) -> Result<Self, ValidationError> {
        let raw = raw.into();
        if raw.trim().is_empty() {
            return Err(ValidationError::empty_field("token"));
        }
        Ok(Self(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// Keep credentials out of logs.
impl fmt::Debug for TokenValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("TokenValue(***)")
    }
}

impl TryFrom<String> for TokenValue {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<TokenValue> for String {
    fn from(value: TokenValue) -> Self {
        value.0
    }
}

/// Strictly positive lifetime of a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenValidity(Duration);

impl TokenValidity {
    pub fn new(window: Duration) -> Result<Self, ValidationError> {
        if window <= Duration::zero() {
            return Err(ValidationError::invalid_format(
                "token_validity",
                "validity window must be positive",
            ));
        }
        Ok(Self(window))
    }

    pub fn from_hours(hours: i64) -> Result<Self, ValidationError> {
        let window = Duration::try_hours(hours).ok_or_else(|| {
            ValidationError::invalid_format("token_validity", format!("{} hours overflows", hours))
        })?;
        Self::new(window)
    }

    pub fn as_duration(&self) -> Duration {
        self.0
    }
}

impl Default for TokenValidity {
    fn default() -> Self {
        Self(Duration::hours(DEFAULT_TOKEN_VALIDITY_HOURS))
    }
}

/// A credential binding a player to a validity window.
///
/// # Invariants
///
/// - `expires_at` is strictly after `created_at`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    value: TokenValue,
    player_id: PlayerId,
    created_at: Timestamp,
    expires_at: Timestamp,
}

impl Token {
    /// Issues a token valid from `now` for `validity`.
    ///
    /// Fails if the expiry would fall outside the representable time range.
    pub fn issue(
        value: TokenValue,
        player_id: PlayerId,
        now: Timestamp,
        validity: TokenValidity,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            value,
            player_id,
            created_at: now,
            expires_at: now.plus(validity.as_duration())?,
        })
    }

    /// Rebuilds a token from stored fields, re-checking the time invariant.
    pub fn reconstitute(
        value: TokenValue,
        player_id: PlayerId,
        created_at: Timestamp,
        expires_at: Timestamp,
    ) -> Result<Self, ValidationError> {
        if !expires_at.is_after(&created_at) {
            return Err(ValidationError::invalid_format(
                "expires_at",
                "expiration must be after creation",
            ));
        }
        Ok(Self {
            value,
            player_id,
            created_at,
            expires_at,
        })
    }

    pub fn value(&self) -> &TokenValue {
        &self.value
    }

    pub fn player_id(&self) -> PlayerId {
        self.player_id
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    pub fn expires_at(&self) -> &Timestamp {
        &self.expires_at
    }

    /// True iff `now` is at or past the expiration.
    pub fn is_expired(&self, now: &Timestamp) -> bool {
        !now.is_before(&self.expires_at)
    }

    /// Time left before expiry, zero once expired.
    pub fn remaining(&self, now: &Timestamp) -> Duration {
        let left = self.expires_at.duration_since(now);
        if left > Duration::zero() {
            left
        } else {
            Duration::zero()
        }
    }

    pub fn belongs_to(&self, player_id: PlayerId) -> bool {
        self.player_id == player_id
    }
}

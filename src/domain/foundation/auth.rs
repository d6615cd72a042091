//! Authentication types for the domain layer.
//!
//! These types represent a player authenticated by a bearer token. Any
//! token store can populate them via the `TokenValidator` port.

use thiserror::Error;

use super::{PlayerId, Timestamp};

/// Player identity extracted from a validated token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedPlayer {
    /// The player the token was issued to.
    pub id: PlayerId,

    /// When the presented token stops being valid.
    pub expires_at: Timestamp,
}

impl AuthenticatedPlayer {
    pub fn new(id: PlayerId, expires_at: Timestamp) -> Self {
        Self { id, expires_at }
    }

    /// Checks if this identity may act on behalf of `player_id`.
    pub fn is(&self, player_id: PlayerId) -> bool {
        self.id == player_id
    }
}

/// Authentication errors that can occur during token validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    /// The token is missing, blank, or unknown.
    #[error("Invalid or expired token")]
    InvalidToken,

    /// The token exists but its validity window has elapsed.
    #[error("Token expired")]
    TokenExpired,

    /// Token is valid but the player no longer exists.
    #[error("Player not found")]
    PlayerNotFound,

    /// The token store is unavailable.
    #[error("Auth service unavailable: {0}")]
    ServiceUnavailable(String),
}

impl AuthError {
    pub fn service_unavailable(message: impl Into<String>) -> Self {
        Self::ServiceUnavailable(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn authenticated_player_is_matches_id() {
        let player = AuthenticatedPlayer::new(PlayerId::new(3), Timestamp::now());
        assert!(player.is(PlayerId::new(3)));
        assert!(!player.is(PlayerId::new(4)));
    }
}

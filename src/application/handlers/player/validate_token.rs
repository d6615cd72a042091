//! ValidateTokenHandler - Resolves bearer values to authenticated players.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::foundation::{AuthError, AuthenticatedPlayer};
use crate::domain::player::TokenValue;
use crate::ports::{Clock, PlayerRepository, TokenRepository, TokenValidator};

/// Checks a presented token against the store and the clock.
pub struct ValidateTokenHandler {
    tokens: Arc<dyn TokenRepository>,
    players: Arc<dyn PlayerRepository>,
    clock: Arc<dyn Clock>,
}

impl ValidateTokenHandler {
    pub fn new(
        tokens: Arc<dyn TokenRepository>,
        players: Arc<dyn PlayerRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            tokens,
            players,
            clock,
        }
    }
}

#[async_trait]
impl TokenValidator for ValidateTokenHandler {
    async fn validate(&self, token: &str) -> Result<AuthenticatedPlayer, AuthError> {
        let value = TokenValue::new(token).map_err(|_| AuthError::InvalidToken)?;

        let stored = self
            .tokens
            .find_by_value(&value)
            .await
            .map_err(|e| AuthError::service_unavailable(e.to_string()))?
            .ok_or(AuthError::InvalidToken)?;

        if stored.is_expired(&self.clock.now()) {
            tracing::debug!(player_id = %stored.player_id(), "Token expired");
            return Err(AuthError::TokenExpired);
        }

        let exists = self
            .players
            .find_by_id(stored.player_id())
            .await
            .map_err(|e| AuthError::service_unavailable(e.to_string()))?
            .is_some();
        if !exists {
            tracing::warn!(player_id = %stored.player_id(), "Token for unknown player");
            return Err(AuthError::PlayerNotFound);
        }

        Ok(AuthenticatedPlayer::new(
            stored.player_id(),
            *stored.expires_at(),
        ))
    }
}

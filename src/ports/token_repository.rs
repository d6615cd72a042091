//! Token store port.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, PlayerId};
use crate::domain::player::{Token, TokenValue};

/// Stores issued tokens so bearer values can be resolved to players.
#[async_trait]
pub trait TokenRepository: Send + Sync {
    /// Store a token, replacing every earlier token of the same player.
    async fn replace_for_player(&self, token: &Token) -> Result<(), DomainError>;

    async fn find_by_value(&self, value: &TokenValue) -> Result<Option<Token>, DomainError>;

    /// Drop every token of a player. Returns how many were removed.
    async fn revoke_for_player(&self, player_id: PlayerId) -> Result<usize, DomainError>;
}

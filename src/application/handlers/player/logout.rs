//! LogoutHandler - Revokes every token of a player.

use std::sync::Arc;

use crate::domain::foundation::PlayerId;
use crate::domain::player::PlayerError;
use crate::ports::TokenRepository;

#[derive(Debug, Clone)]
pub struct LogoutCommand {
    pub player_id: PlayerId,
}

pub struct LogoutHandler {
    tokens: Arc<dyn TokenRepository>,
}

impl LogoutHandler {
    pub fn new(tokens: Arc<dyn TokenRepository>) -> Self {
        Self { tokens }
    }

    /// Returns how many tokens were revoked.
    pub async fn handle(&self, cmd: LogoutCommand) -> Result<usize, PlayerError> {
        let revoked = self.tokens.revoke_for_player(cmd.player_id).await?;
        tracing::debug!(player_id = %cmd.player_id, revoked, "Player logged out");
        Ok(revoked)
    }
}

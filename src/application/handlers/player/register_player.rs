//! RegisterPlayerHandler - Command handler for player registration.

use std::sync::Arc;

use crate::domain::foundation::{Email, ErrorCode, ValidationPolicy};
use crate::domain::player::{Player, PlayerError, Token};
use crate::ports::PlayerRepository;

use super::TokenIssuer;

/// Command to register a new player.
#[derive(Debug, Clone)]
pub struct RegisterPlayerCommand {
    pub name: String,
    pub email: String,
}

/// Result of successful registration.
#[derive(Debug, Clone)]
pub struct RegisterPlayerResult {
    pub player: Player,
    pub token: Token,
}

/// Handler for registering players.
pub struct RegisterPlayerHandler {
    players: Arc<dyn PlayerRepository>,
    issuer: TokenIssuer,
    policy: ValidationPolicy,
}

impl RegisterPlayerHandler {
    pub fn new(
        players: Arc<dyn PlayerRepository>,
        issuer: TokenIssuer,
        policy: ValidationPolicy,
    ) -> Self {
        Self {
            players,
            issuer,
            policy,
        }
    }

    pub async fn handle(
        &self,
        cmd: RegisterPlayerCommand,
    ) -> Result<RegisterPlayerResult, PlayerError> {
        // 1. Validate raw input
        let name = self.policy.name("name", cmd.name)?;
        let email = Email::new(cmd.email)?;

        // 2. Reject duplicate email early
        if self.players.find_by_email(&email).await?.is_some() {
            tracing::warn!(email = %email, "Registration rejected: email already registered");
            return Err(PlayerError::EmailTaken(email));
        }

        // 3. Persist player
        let id = self.players.next_id().await?;
        let player = Player::new(id, name, email);
        self.players.save(&player).await.map_err(|e| {
            if e.code == ErrorCode::Conflict {
                PlayerError::EmailTaken(player.email().clone())
            } else {
                e.into()
            }
        })?;

        // 4. Issue token
        let token = self.issuer.issue(id).await?;

        tracing::debug!(player_id = %id, "Player registered");
        Ok(RegisterPlayerResult { player, token })
    }
}

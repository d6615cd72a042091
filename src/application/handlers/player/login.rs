//! LoginHandler - Issues a fresh token to a registered player.

use std::sync::Arc;

use crate::domain::foundation::Email;
use crate::domain::player::{Player, PlayerError, Token};
use crate::ports::PlayerRepository;

use super::TokenIssuer;

/// Command to authenticate by email.
#[derive(Debug, Clone)]
pub struct LoginCommand {
    pub email: String,
}

#[derive(Debug, Clone)]
pub struct LoginResult {
    pub player: Player,
    pub token: Token,
}

/// Handler for logging players in.
///
/// A successful login replaces every token the player held before.
pub struct LoginHandler {
    players: Arc<dyn PlayerRepository>,
    issuer: TokenIssuer,
}

impl LoginHandler {
    pub fn new(players: Arc<dyn PlayerRepository>, issuer: TokenIssuer) -> Self {
        Self { players, issuer }
    }

    pub async fn handle(&self, cmd: LoginCommand) -> Result<LoginResult, PlayerError> {
        let email = Email::new(cmd.email)?;

        let player = match self.players.find_by_email(&email).await? {
            Some(player) => player,
            None => {
                tracing::warn!(email = %email, "Login rejected: unknown email");
                return Err(PlayerError::UnknownEmail(email));
            }
        };

        let token = self.issuer.issue(player.id()).await?;

        tracing::debug!(player_id = %player.id(), "Player logged in");
        Ok(LoginResult { player, token })
    }
}

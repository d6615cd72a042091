//! Shared token issuance used by registration and login.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, PlayerId};
use crate::domain::player::{Token, TokenValidity};
use crate::ports::{Clock, TokenGenerator, TokenRepository};

/// Issues a fresh token and makes it the player's only valid one.
#[derive(Clone)]
pub struct TokenIssuer {
    tokens: Arc<dyn TokenRepository>,
    generator: Arc<dyn TokenGenerator>,
    clock: Arc<dyn Clock>,
    validity: TokenValidity,
}

impl TokenIssuer {
    pub fn new(
        tokens: Arc<dyn TokenRepository>,
        generator: Arc<dyn TokenGenerator>,
        clock: Arc<dyn Clock>,
        validity: TokenValidity,
    ) -> Self {
        Self {
            tokens,
            generator,
            clock,
            validity,
        }
    }

    pub async fn issue(&self, player_id: PlayerId) -> Result<Token, DomainError> {
        let value = self.generator.generate()?;
        let token = Token::issue(value, player_id, self.clock.now(), self.validity)?;
        self.tokens.replace_for_player(&token).await?;
        Ok(token)
    }
}

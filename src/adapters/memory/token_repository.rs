//! In-memory implementation of TokenRepository.

use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, PlayerId};
use crate::domain::player::{Token, TokenValue};
use crate::ports::TokenRepository;

/// In-memory token store keyed by token value.
#[derive(Debug, Default)]
pub struct InMemoryTokenRepository {
    tokens: RwLock<HashMap<TokenValue, Token>>,
}

impl InMemoryTokenRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TokenRepository for InMemoryTokenRepository {
    async fn replace_for_player(&self, token: &Token) -> Result<(), DomainError> {
        let mut tokens = self.tokens.write().await;
        tokens.retain(|_, t| !t.belongs_to(token.player_id()));
        tokens.insert(token.value().clone(), token.clone());
        Ok(())
    }

    async fn find_by_value(&self, value: &TokenValue) -> Result<Option<Token>, DomainError> {
        Ok(self.tokens.read().await.get(value).cloned())
    }

    async fn revoke_for_player(&self, player_id: PlayerId) -> Result<usize, DomainError> {
        let mut tokens = self.tokens.write().await;
        let before = tokens.len();
        tokens.retain(|_, t| !t.belongs_to(player_id));
        Ok(before - tokens.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::Timestamp;
    use crate::domain::player::TokenValidity;

    fn token(value: &str, player: u64) -> Token {
        Token::issue(
            TokenValue::new(value).unwrap(),
            PlayerId::new(player),
            Timestamp::from_unix_secs(0).unwrap(),
            TokenValidity::default(),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn replace_drops_previous_tokens_of_player() {
        let repo = InMemoryTokenRepository::new();
        repo.replace_for_player(&token("old", 1)).await.unwrap();
        repo.replace_for_player(&token("other", 2)).await.unwrap();
        repo.replace_for_player(&token("new", 1)).await.unwrap();

        let old = TokenValue::new("old").unwrap();
        let new = TokenValue::new("new").unwrap();
        let other = TokenValue::new("other").unwrap();
        assert!(repo.find_by_value(&old).await.unwrap().is_none());
        assert!(repo.find_by_value(&new).await.unwrap().is_some());
        assert!(repo.find_by_value(&other).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn revoke_counts_removed_tokens() {
        let repo = InMemoryTokenRepository::new();
        repo.replace_for_player(&token("a", 1)).await.unwrap();
        assert_eq!(repo.revoke_for_player(PlayerId::new(1)).await.unwrap(), 1);
        assert_eq!(repo.revoke_for_player(PlayerId::new(1)).await.unwrap(), 0);
    }
}

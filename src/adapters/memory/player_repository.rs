//! In-memory implementation of PlayerRepository.

use async_trait::async_trait;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

use super::IdSequence;
use crate::domain::foundation::{DomainError, Email, ErrorCode, PlayerId};
use crate::domain::player::Player;
use crate::ports::PlayerRepository;

/// In-memory player store.
#[derive(Debug)]
pub struct InMemoryPlayerRepository {
    players: RwLock<BTreeMap<PlayerId, Player>>,
    ids: IdSequence,
}

impl InMemoryPlayerRepository {
    pub fn new() -> Self {
        Self {
            players: RwLock::new(BTreeMap::new()),
            ids: IdSequence::starting_at(1),
        }
    }
}

impl Default for InMemoryPlayerRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PlayerRepository for InMemoryPlayerRepository {
    async fn next_id(&self) -> Result<PlayerId, DomainError> {
        Ok(PlayerId::new(self.ids.next()))
    }

    async fn save(&self, player: &Player) -> Result<(), DomainError> {
        let mut players = self.players.write().await;
        if players.contains_key(&player.id()) {
            return Err(DomainError::new(
                ErrorCode::Conflict,
                format!("Player {} already exists", player.id()),
            ));
        }
        if players.values().any(|p| p.email().matches(player.email())) {
            return Err(DomainError::new(
                ErrorCode::Conflict,
                format!("Email {} is already registered", player.email()),
            )
            .with_detail("field", "email"));
        }
        players.insert(player.id(), player.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: PlayerId) -> Result<Option<Player>, DomainError> {
        Ok(self.players.read().await.get(&id).cloned())
    }

    async fn find_by_email(&self, email: &Email) -> Result<Option<Player>, DomainError> {
        Ok(self
            .players
            .read()
            .await
            .values()
            .find(|p| p.email().matches(email))
            .cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::Name;

    fn player(id: PlayerId, email: &str) -> Player {
        Player::new(id, Name::new("Alice").unwrap(), Email::new(email).unwrap())
    }

    #[tokio::test]
    async fn next_id_is_monotonic() {
        let repo = InMemoryPlayerRepository::new();
        let a = repo.next_id().await.unwrap();
        let b = repo.next_id().await.unwrap();
        assert!(a < b);
    }

    #[tokio::test]
    async fn save_then_find() {
        let repo = InMemoryPlayerRepository::new();
        let id = repo.next_id().await.unwrap();
        repo.save(&player(id, "alice@example.com")).await.unwrap();

        assert!(repo.find_by_id(id).await.unwrap().is_some());
        let by_email = repo
            .find_by_email(&Email::new("ALICE@example.com").unwrap())
            .await
            .unwrap();
        assert_eq!(by_email.map(|p| p.id()), Some(id));
    }

    #[tokio::test]
    async fn duplicate_email_conflicts() {
        let repo = InMemoryPlayerRepository::new();
        repo.save(&player(PlayerId::new(1), "alice@example.com"))
            .await
            .unwrap();
        let err = repo
            .save(&player(PlayerId::new(2), "Alice@Example.com"))
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::Conflict);
        let kept = repo
            .find_by_email(&Email::new("alice@example.com").unwrap())
            .await
            .unwrap();
        assert_eq!(kept.map(|p| p.id()), Some(PlayerId::new(1)));
    }
}

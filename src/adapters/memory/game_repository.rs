//! In-memory implementation of GameRepository.

use async_trait::async_trait;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

use super::IdSequence;
use crate::domain::foundation::{DomainError, ErrorCode, GameId};
use crate::domain::game::Game;
use crate::ports::GameRepository;

/// In-memory game catalogue.
#[derive(Debug)]
pub struct InMemoryGameRepository {
    games: RwLock<BTreeMap<GameId, Game>>,
    ids: IdSequence,
}

impl InMemoryGameRepository {
    pub fn new() -> Self {
        Self {
            games: RwLock::new(BTreeMap::new()),
            ids: IdSequence::starting_at(1),
        }
    }
}

impl Default for InMemoryGameRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl GameRepository for InMemoryGameRepository {
    async fn next_id(&self) -> Result<GameId, DomainError> {
        Ok(GameId::new(self.ids.next()))
    }

    async fn save(&self, game: &Game) -> Result<(), DomainError> {
        let mut games = self.games.write().await;
        if games.contains_key(&game.id()) {
            return Err(DomainError::new(
                ErrorCode::Conflict,
                format!("Game {} already exists", game.id()),
            ));
        }
        games.insert(game.id(), game.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: GameId) -> Result<Option<Game>, DomainError> {
        Ok(self.games.read().await.get(&id).cloned())
    }

    async fn list(&self) -> Result<Vec<Game>, DomainError> {
        Ok(self.games.read().await.values().cloned().collect())
    }
}

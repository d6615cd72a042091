//! Query handlers for the game catalogue.

use std::sync::Arc;

use crate::domain::foundation::GameId;
use crate::domain::game::{Game, GameError};
use crate::ports::GameRepository;

#[derive(Debug, Clone)]
pub struct GetGameQuery {
    pub game_id: GameId,
}

pub struct GetGameHandler {
    games: Arc<dyn GameRepository>,
}

impl GetGameHandler {
    pub fn new(games: Arc<dyn GameRepository>) -> Self {
        Self { games }
    }

    pub async fn handle(&self, query: GetGameQuery) -> Result<Game, GameError> {
        self.games
            .find_by_id(query.game_id)
            .await?
            .ok_or(GameError::NotFound(query.game_id))
    }
}

/// Lists the catalogue, optionally filtered by genre label.
pub struct ListGamesHandler {
    games: Arc<dyn GameRepository>,
}

#[derive(Debug, Clone, Default)]
pub struct ListGamesQuery {
    pub genre: Option<String>,
}

impl ListGamesHandler {
    pub fn new(games: Arc<dyn GameRepository>) -> Self {
        Self { games }
    }

    pub async fn handle(&self, query: ListGamesQuery) -> Result<Vec<Game>, GameError> {
        let games = self.games.list().await?;
        Ok(match query.genre {
            Some(label) => games.into_iter().filter(|g| g.has_genre(&label)).collect(),
            None => games,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryGameRepository;
    use crate::domain::foundation::{Genre, GenrePolicy, Name};

    async fn seeded() -> Arc<InMemoryGameRepository> {
        let repo = Arc::new(InMemoryGameRepository::new());
        for (id, genre) in [(1, "RPG"), (2, "Shooter")] {
            let game = Game::new(
                GameId::new(id),
                Name::new(format!("Game {}", id)).unwrap(),
                Name::new("Studio").unwrap(),
                vec![Genre::new(genre, &GenrePolicy::curated()).unwrap()],
            )
            .unwrap();
            repo.save(&game).await.unwrap();
        }
        repo
    }

    #[tokio::test]
    async fn get_missing_game_is_not_found() {
        let handler = GetGameHandler::new(seeded().await);
        let err = handler
            .handle(GetGameQuery {
                game_id: GameId::new(9),
            })
            .await
            .unwrap_err();
        assert_eq!(err, GameError::NotFound(GameId::new(9)));
    }

    #[tokio::test]
    async fn list_filters_by_genre() {
        let handler = ListGamesHandler::new(seeded().await);
        let all = handler.handle(ListGamesQuery::default()).await.unwrap();
        assert_eq!(all.len(), 2);

        let rpgs = handler
            .handle(ListGamesQuery {
                genre: Some("RPG".to_string()),
            })
            .await
            .unwrap();
        assert_eq!(rpgs.len(), 1);
        assert_eq!(rpgs[0].id(), GameId::new(1));
    }
}

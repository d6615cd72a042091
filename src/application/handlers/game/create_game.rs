//! CreateGameHandler - Command handler for catalogue insertion.

use std::sync::Arc;

use crate::domain::foundation::ValidationPolicy;
use crate::domain::game::{Game, GameError};
use crate::ports::GameRepository;

/// Command to add a game to the catalogue.
#[derive(Debug, Clone)]
pub struct CreateGameCommand {
    pub name: String,
    pub developer: String,
    pub genres: Vec<String>,
}

/// Handler for creating games.
pub struct CreateGameHandler {
    games: Arc<dyn GameRepository>,
    policy: ValidationPolicy,
}

impl CreateGameHandler {
    pub fn new(games: Arc<dyn GameRepository>, policy: ValidationPolicy) -> Self {
        Self { games, policy }
    }

    pub async fn handle(&self, cmd: CreateGameCommand) -> Result<Game, GameError> {
        let name = self.policy.name("name", cmd.name)?;
        let developer = self.policy.name("developer", cmd.developer)?;
        let genres = self.policy.genres(cmd.genres)?;

        let id = self.games.next_id().await?;
        let game = Game::new(id, name, developer, genres)?;
        self.games.save(&game).await?;

        tracing::debug!(game_id = %id, name = %game.name(), "Game catalogued");
        Ok(game)
    }
}

//! HTTP DTOs for game catalogue endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::game::Game;

/// Request to catalogue a game.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateGameRequest {
    pub name: String,
    pub developer: String,
    #[serde(default)]
    pub genres: Vec<String>,
}

/// Query parameters for listing games.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListGamesParams {
    pub genre: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct GameResponse {
    pub id: u64,
    pub name: String,
    pub developer: String,
    pub genres: Vec<String>,
}

impl From<&Game> for GameResponse {
    fn from(game: &Game) -> Self {
        Self {
            id: game.id().value(),
            name: game.name().as_str().to_string(),
            developer: game.developer().as_str().to_string(),
            genres: game.genres().map(|g| g.as_str().to_string()).collect(),
        }
    }
}

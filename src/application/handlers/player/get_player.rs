//! GetPlayerHandler - Query handler for a single player.

use std::sync::Arc;

use crate::domain::foundation::PlayerId;
use crate::domain::player::{Player, PlayerError};
use crate::ports::PlayerRepository;

#[derive(Debug, Clone)]
pub struct GetPlayerQuery {
    pub player_id: PlayerId,
}

pub struct GetPlayerHandler {
    players: Arc<dyn PlayerRepository>,
}

impl GetPlayerHandler {
    pub fn new(players: Arc<dyn PlayerRepository>) -> Self {
        Self { players }
    }

    pub async fn handle(&self, query: GetPlayerQuery) -> Result<Player, PlayerError> {
        self.players
            .find_by_id(query.player_id)
            .await?
            .ok_or(PlayerError::NotFound(query.player_id))
    }
}

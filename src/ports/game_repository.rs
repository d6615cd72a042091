//! Game catalogue repository port.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, GameId};
use crate::domain::game::Game;

/// Repository port for the game catalogue.
#[async_trait]
pub trait GameRepository: Send + Sync {
    /// Reserve the identifier for the next catalogued game.
    async fn next_id(&self) -> Result<GameId, DomainError>;

    /// Insert a game into the catalogue.
    ///
    /// # Errors
    ///
    /// - `Conflict` if the id is already used
    async fn save(&self, game: &Game) -> Result<(), DomainError>;

    async fn find_by_id(&self, id: GameId) -> Result<Option<Game>, DomainError>;

    /// All catalogued games ordered by id.
    async fn list(&self) -> Result<Vec<Game>, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn game_repository_is_object_safe() {
        fn _accepts_dyn(_repo: &dyn GameRepository) {}
    }
}

//! Game catalogue command and query handlers.

mod create_game;
mod get_game;

pub use create_game::{CreateGameCommand, CreateGameHandler};
pub use get_game::{GetGameHandler, GetGameQuery, ListGamesHandler, ListGamesQuery};

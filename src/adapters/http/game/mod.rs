//! HTTP adapter for game catalogue endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{CreateGameRequest, GameResponse, ListGamesParams};
pub use handlers::GameHandlers;
pub use routes::game_routes;

//! HTTP routes for game catalogue endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{create_game, get_game, list_games, GameHandlers};

/// Routes mounted under `/api/games`.
pub fn game_routes(handlers: GameHandlers) -> Router {
    Router::new()
        .route("/", post(create_game).get(list_games))
        .route("/:id", get(get_game))
        .with_state(handlers)
}

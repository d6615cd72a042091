//! HTTP routes for player and authentication endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{get_player, login, logout, register_player, PlayerHandlers};

/// Routes mounted under `/api/players`.
pub fn player_routes(handlers: PlayerHandlers) -> Router {
    Router::new()
        .route("/", post(register_player))
        .route("/:id", get(get_player))
        .with_state(handlers)
}

/// Routes mounted under `/api/auth`.
pub fn auth_routes(handlers: PlayerHandlers) -> Router {
    Router::new()
        .route("/login", post(login))
        .route("/logout", post(logout))
        .with_state(handlers)
}

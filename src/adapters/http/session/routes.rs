//! HTTP routes for session endpoints.

use axum::{
    routing::{delete, get, post},
    Router,
};

use super::handlers::{create_session, enroll, get_session, list_sessions, remove, SessionHandlers};

/// Routes mounted under `/api/sessions`.
pub fn session_routes(handlers: SessionHandlers) -> Router {
    Router::new()
        .route("/", post(create_session).get(list_sessions))
        .route("/:id", get(get_session))
        .route("/:id/players", post(enroll))
        .route("/:id/players/:player_id", delete(remove))
        .with_state(handlers)
}

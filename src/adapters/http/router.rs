//! Top-level API router.

use std::time::Duration;

use axum::{middleware, Router};
use tower_http::{
    cors::CorsLayer,
    timeout::TimeoutLayer,
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use super::game::{game_routes, GameHandlers};
use super::middleware::{auth_middleware, AuthState};
use super::player::{auth_routes, player_routes, PlayerHandlers};
use super::session::{session_routes, SessionHandlers};

/// Everything the router needs to serve requests.
#[derive(Clone)]
pub struct ApiState {
    pub players: PlayerHandlers,
    pub games: GameHandlers,
    pub sessions: SessionHandlers,
    pub auth: AuthState,
}

/// Builds the `/api` router with tracing, timeout and bearer auth layers.
pub fn api_router(state: ApiState, request_timeout: Duration) -> Router {
    Router::new()
        .nest("/api/players", player_routes(state.players.clone()))
        .nest("/api/auth", auth_routes(state.players))
        .nest("/api/games", game_routes(state.games))
        .nest("/api/sessions", session_routes(state.sessions))
        .layer(middleware::from_fn_with_state(state.auth, auth_middleware))
        .layer(TimeoutLayer::new(request_timeout))
        .layer(CorsLayer::permissive())
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
}

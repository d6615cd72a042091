//! HTTP handlers for player endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::{invalid_id, player_error};
use crate::adapters::http::extract::ApiJson;
use crate::adapters::http::middleware::RequireAuth;
use crate::application::handlers::player::{
    GetPlayerHandler, GetPlayerQuery, LoginCommand, LoginHandler, LogoutCommand, LogoutHandler,
    RegisterPlayerCommand, RegisterPlayerHandler,
};
use crate::domain::foundation::PlayerId;

use super::dto::{AuthResponse, LoginRequest, PlayerResponse, RegisterPlayerRequest};

#[derive(Clone)]
pub struct PlayerHandlers {
    register_handler: Arc<RegisterPlayerHandler>,
    login_handler: Arc<LoginHandler>,
    logout_handler: Arc<LogoutHandler>,
    get_handler: Arc<GetPlayerHandler>,
}

impl PlayerHandlers {
    pub fn new(
        register_handler: Arc<RegisterPlayerHandler>,
        login_handler: Arc<LoginHandler>,
        logout_handler: Arc<LogoutHandler>,
        get_handler: Arc<GetPlayerHandler>,
    ) -> Self {
        Self {
            register_handler,
            login_handler,
            logout_handler,
            get_handler,
        }
    }
}

/// POST /api/players - Register a player
pub async fn register_player(
    State(handlers): State<PlayerHandlers>,
    ApiJson(req): ApiJson<RegisterPlayerRequest>,
) -> Response {
    let cmd = RegisterPlayerCommand {
        name: req.name,
        email: req.email,
    };

    match handlers.register_handler.handle(cmd).await {
        Ok(result) => (StatusCode::CREATED, Json(AuthResponse::from(result))).into_response(),
        Err(e) => player_error(e),
    }
}

/// POST /api/auth/login - Issue a fresh token
pub async fn login(
    State(handlers): State<PlayerHandlers>,
    ApiJson(req): ApiJson<LoginRequest>,
) -> Response {
    match handlers
        .login_handler
        .handle(LoginCommand { email: req.email })
        .await
    {
        Ok(result) => (StatusCode::OK, Json(AuthResponse::from(result))).into_response(),
        Err(e) => player_error(e),
    }
}

/// POST /api/auth/logout - Revoke the caller's tokens
pub async fn logout(
    State(handlers): State<PlayerHandlers>,
    RequireAuth(player): RequireAuth,
) -> Response {
    match handlers
        .logout_handler
        .handle(LogoutCommand {
            player_id: player.id,
        })
        .await
    {
        Ok(_) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => player_error(e),
    }
}

/// GET /api/players/:id - Player details
pub async fn get_player(
    State(handlers): State<PlayerHandlers>,
    Path(player_id): Path<String>,
) -> Response {
    let player_id = match player_id.parse::<PlayerId>() {
        Ok(id) => id,
        Err(e) => return invalid_id(e),
    };

    match handlers.get_handler.handle(GetPlayerQuery { player_id }).await {
        Ok(player) => (StatusCode::OK, Json(PlayerResponse::from(&player))).into_response(),
        Err(e) => player_error(e),
    }
}

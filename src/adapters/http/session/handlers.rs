//! HTTP handlers for session endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::{invalid_id, session_error};
use crate::adapters::http::extract::ApiJson;
use crate::adapters::http::middleware::RequireAuth;
use crate::application::handlers::session::{
    CreateSessionCommand, CreateSessionHandler, EnrollPlayerCommand, EnrollPlayerHandler,
    GetSessionHandler, GetSessionQuery, ListSessionsHandler, ListSessionsQuery,
    RemovePlayerCommand, RemovePlayerHandler,
};
use crate::domain::foundation::{GameId, PlayerId, SessionId};

use super::dto::{CreateSessionRequest, ListSessionsParams, SessionResponse};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct SessionHandlers {
    create_handler: Arc<CreateSessionHandler>,
    enroll_handler: Arc<EnrollPlayerHandler>,
    remove_handler: Arc<RemovePlayerHandler>,
    get_handler: Arc<GetSessionHandler>,
    list_handler: Arc<ListSessionsHandler>,
}

impl SessionHandlers {
    pub fn new(
        create_handler: Arc<CreateSessionHandler>,
        enroll_handler: Arc<EnrollPlayerHandler>,
        remove_handler: Arc<RemovePlayerHandler>,
        get_handler: Arc<GetSessionHandler>,
        list_handler: Arc<ListSessionsHandler>,
    ) -> Self {
        Self {
            create_handler,
            enroll_handler,
            remove_handler,
            get_handler,
            list_handler,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// POST /api/sessions - Schedule a session
pub async fn create_session(
    State(handlers): State<SessionHandlers>,
    ApiJson(req): ApiJson<CreateSessionRequest>,
) -> Response {
    let game_id = match GameId::try_from_raw(req.game_id) {
        Ok(id) => id,
        Err(e) => return invalid_id(e),
    };
    let players = match req
        .players
        .into_iter()
        .map(PlayerId::try_from_raw)
        .collect::<Result<Vec<_>, _>>()
    {
        Ok(players) => players,
        Err(e) => return invalid_id(e),
    };

    let cmd = CreateSessionCommand {
        game_id,
        capacity: req.capacity,
        date: req.date,
        players,
    };

    match handlers.create_handler.handle(cmd).await {
        Ok(view) => (StatusCode::CREATED, Json(SessionResponse::from(&view))).into_response(),
        Err(e) => session_error(e),
    }
}

/// GET /api/sessions - List sessions, `?open=true` for open ones only
pub async fn list_sessions(
    State(handlers): State<SessionHandlers>,
    Query(params): Query<ListSessionsParams>,
) -> Response {
    let query = ListSessionsQuery {
        only_open: params.open,
    };

    match handlers.list_handler.handle(query).await {
        Ok(views) => {
            let body: Vec<SessionResponse> = views.iter().map(SessionResponse::from).collect();
            (StatusCode::OK, Json(body)).into_response()
        }
        Err(e) => session_error(e),
    }
}

/// GET /api/sessions/:id - Session details
pub async fn get_session(
    State(handlers): State<SessionHandlers>,
    Path(session_id): Path<String>,
) -> Response {
    let session_id = match session_id.parse::<SessionId>() {
        Ok(id) => id,
        Err(e) => return invalid_id(e),
    };

    match handlers.get_handler.handle(GetSessionQuery { session_id }).await {
        Ok(view) => (StatusCode::OK, Json(SessionResponse::from(&view))).into_response(),
        Err(e) => session_error(e),
    }
}

/// POST /api/sessions/:id/players - Enroll the caller
pub async fn enroll(
    State(handlers): State<SessionHandlers>,
    RequireAuth(player): RequireAuth,
    Path(session_id): Path<String>,
) -> Response {
    let session_id = match session_id.parse::<SessionId>() {
        Ok(id) => id,
        Err(e) => return invalid_id(e),
    };

    let cmd = EnrollPlayerCommand {
        session_id,
        player_id: player.id,
    };

    match handlers.enroll_handler.handle(cmd).await {
        Ok(view) => (StatusCode::OK, Json(SessionResponse::from(&view))).into_response(),
        Err(e) => session_error(e),
    }
}

/// DELETE /api/sessions/:id/players/:player_id - Leave a session
pub async fn remove(
    State(handlers): State<SessionHandlers>,
    RequireAuth(player): RequireAuth,
    Path((session_id, player_id)): Path<(String, String)>,
) -> Response {
    let session_id = match session_id.parse::<SessionId>() {
        Ok(id) => id,
        Err(e) => return invalid_id(e),
    };
    let player_id = match player_id.parse::<PlayerId>() {
        Ok(id) => id,
        Err(e) => return invalid_id(e),
    };

    let cmd = RemovePlayerCommand {
        session_id,
        player_id,
        requested_by: player.id,
    };

    match handlers.remove_handler.handle(cmd).await {
        Ok(view) => (StatusCode::OK, Json(SessionResponse::from(&view))).into_response(),
        Err(e) => session_error(e),
    }
}

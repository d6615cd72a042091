//! Error responses and domain error to status code mapping.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::domain::foundation::{AuthError, ErrorCode, ValidationError};
use crate::domain::game::GameError;
use crate::domain::player::PlayerError;
use crate::domain::session::SessionError;

/// Standard error response.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code: code.to_string(),
            message: message.into(),
            details: None,
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            code: "BAD_REQUEST".to_string(),
            message: message.into(),
            details: None,
        }
    }

    pub fn validation(err: &ValidationError) -> Self {
        Self {
            code: err.code().to_string(),
            message: err.to_string(),
            details: Some(serde_json::json!({ "field": err.field() })),
        }
    }

    pub fn internal() -> Self {
        Self {
            code: ErrorCode::InternalError.to_string(),
            message: "Internal server error".to_string(),
            details: None,
        }
    }
}

/// Rejects a path segment that is not a valid identifier.
pub fn invalid_id(err: ValidationError) -> Response {
    (StatusCode::BAD_REQUEST, Json(ErrorResponse::validation(&err))).into_response()
}

pub fn player_error(error: PlayerError) -> Response {
    let status = match &error {
        PlayerError::Validation(e) => {
            return (StatusCode::BAD_REQUEST, Json(ErrorResponse::validation(e))).into_response()
        }
        PlayerError::EmailTaken(_) => StatusCode::CONFLICT,
        PlayerError::UnknownEmail(_) => StatusCode::UNAUTHORIZED,
        PlayerError::NotFound(_) => StatusCode::NOT_FOUND,
        PlayerError::Infrastructure(msg) => return internal(msg),
    };
    (status, Json(ErrorResponse::new(error.code(), error.to_string()))).into_response()
}

pub fn game_error(error: GameError) -> Response {
    let status = match &error {
        GameError::Validation(e) => {
            return (StatusCode::BAD_REQUEST, Json(ErrorResponse::validation(e))).into_response()
        }
        GameError::NotFound(_) => StatusCode::NOT_FOUND,
        GameError::Infrastructure(msg) => return internal(msg),
    };
    (status, Json(ErrorResponse::new(error.code(), error.to_string()))).into_response()
}

pub fn session_error(error: SessionError) -> Response {
    let status = match &error {
        SessionError::Validation(e) => {
            return (StatusCode::BAD_REQUEST, Json(ErrorResponse::validation(e))).into_response()
        }
        SessionError::NotFound(_)
        | SessionError::PlayerNotFound(_)
        | SessionError::GameNotFound(_) => StatusCode::NOT_FOUND,
        SessionError::Forbidden => StatusCode::FORBIDDEN,
        SessionError::SessionFull { .. }
        | SessionError::SessionClosed { .. }
        | SessionError::AlreadyEnrolled { .. }
        | SessionError::NotEnrolled { .. } => StatusCode::CONFLICT,
        SessionError::Infrastructure(msg) => return internal(msg),
    };
    (status, Json(ErrorResponse::new(error.code(), error.to_string()))).into_response()
}

pub fn auth_error(error: &AuthError) -> Response {
    let (status, code) = match error {
        AuthError::ServiceUnavailable(msg) => {
            tracing::error!("Auth service unavailable: {}", msg);
            (StatusCode::SERVICE_UNAVAILABLE, ErrorCode::InternalError)
        }
        AuthError::PlayerNotFound => (StatusCode::UNAUTHORIZED, ErrorCode::PlayerNotFound),
        AuthError::InvalidToken | AuthError::TokenExpired => {
            (StatusCode::UNAUTHORIZED, ErrorCode::Unauthorized)
        }
    };
    (status, Json(ErrorResponse::new(code, error.to_string()))).into_response()
}

fn internal(message: &str) -> Response {
    tracing::error!(error = %message, "Request failed");
    (StatusCode::INTERNAL_SERVER_ERROR, Json(ErrorResponse::internal())).into_response()
}

//! Authentication middleware and extractors for axum.
//!
//! ```text
//! Request → auth_middleware → injects AuthenticatedPlayer into extensions
//!                                      ↓
//!                              Handler → RequireAuth extractor reads from extensions
//! ```
//!
//! The middleware only depends on the `TokenValidator` port.

use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    extract::{FromRequestParts, Request, State},
    http::{request::Parts, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::{auth_error, ErrorResponse};
use crate::domain::foundation::{AuthenticatedPlayer, ErrorCode};
use crate::ports::TokenValidator;

/// Auth middleware state - wraps the token validator.
pub type AuthState = Arc<dyn TokenValidator>;

/// Authentication middleware that validates Bearer tokens.
///
/// A request without an `Authorization` header passes through untouched so
/// public routes keep working; `RequireAuth` enforces authentication per
/// handler. A present but invalid token is rejected with 401.
pub async fn auth_middleware(
    State(validator): State<AuthState>,
    mut request: Request,
    next: Next,
) -> Response {
    let token = request
        .headers()
        .get(axum::http::header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "))
        .map(str::to_owned);

    match token {
        Some(token) => match validator.validate(&token).await {
            Ok(player) => {
                request.extensions_mut().insert(player);
                next.run(request).await
            }
            Err(e) => {
                tracing::warn!(error = %e, "Bearer token rejected");
                auth_error(&e)
            }
        },
        None => next.run(request).await,
    }
}

/// Extractor that requires an authenticated player.
#[derive(Debug, Clone)]
pub struct RequireAuth(pub AuthenticatedPlayer);

#[async_trait]
impl<S> FromRequestParts<S> for RequireAuth
where
    S: Send + Sync,
{
    type Rejection = AuthRejection;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthenticatedPlayer>()
            .cloned()
            .map(RequireAuth)
            .ok_or(AuthRejection::Unauthenticated)
    }
}

/// Rejection type for authentication failures.
#[derive(Debug, Clone)]
pub enum AuthRejection {
    /// No valid authentication token was provided.
    Unauthenticated,
}

impl IntoResponse for AuthRejection {
    fn into_response(self) -> Response {
        match self {
            AuthRejection::Unauthenticated => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorResponse::new(
                    ErrorCode::Unauthorized,
                    "Authentication required",
                )),
            )
                .into_response(),
        }
    }
}

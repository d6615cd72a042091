//! Request body extractor that answers malformed JSON with an `ErrorResponse`.
//!
//! axum's own `Json` rejects with 422 and a plain-text body. Handlers take
//! [`ApiJson`] instead so every client error carries the same JSON shape.

use async_trait::async_trait;
use axum::{
    extract::{rejection::JsonRejection, FromRequest, Request},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::de::DeserializeOwned;

use crate::adapters::http::error::ErrorResponse;
use crate::domain::foundation::ErrorCode;

/// JSON body extractor with crate-shaped rejections.
#[derive(Debug, Clone)]
pub struct ApiJson<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(ApiJson(value)),
            Err(rejection) => Err(json_rejection(rejection)),
        }
    }
}

/// Maps a body rejection to 400, or 415 when the content type is wrong.
pub fn json_rejection(rejection: JsonRejection) -> Response {
    let message = rejection.body_text();
    tracing::debug!(error = %message, "Rejected request body");
    match rejection {
        JsonRejection::MissingJsonContentType(_) => (
            StatusCode::UNSUPPORTED_MEDIA_TYPE,
            Json(ErrorResponse::bad_request(message)),
        )
            .into_response(),
        JsonRejection::JsonDataError(_) | JsonRejection::JsonSyntaxError(_) => (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::new(ErrorCode::InvalidFormat, message)),
        )
            .into_response(),
        _ => (StatusCode::BAD_REQUEST, Json(ErrorResponse::bad_request(message))).into_response(),
    }
}

//! Player-specific error types.

use thiserror::Error;

use crate::domain::foundation::{DomainError, Email, ErrorCode, PlayerId, ValidationError};

/// Errors raised while registering, authenticating or looking up players.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlayerError {
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Email {0} is already registered")]
    EmailTaken(Email),

    #[error("No player is registered with email {0}")]
    UnknownEmail(Email),

    #[error("Player not found: {0}")]
    NotFound(PlayerId),

    #[error("Error: {0}")]
    Infrastructure(String),
}

impl PlayerError {
    pub fn code(&self) -> ErrorCode {
        match self {
            PlayerError::Validation(e) => e.code(),
            PlayerError::EmailTaken(_) => ErrorCode::Conflict,
            PlayerError::UnknownEmail(_) => ErrorCode::Unauthorized,
            PlayerError::NotFound(_) => ErrorCode::PlayerNotFound,
            PlayerError::Infrastructure(_) => ErrorCode::InternalError,
        }
    }
}

impl From<DomainError> for PlayerError {
    fn from(err: DomainError) -> Self {
        PlayerError::Infrastructure(err.to_string())
    }
}

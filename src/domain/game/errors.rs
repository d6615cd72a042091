//! Game catalogue error types.

use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode, GameId, ValidationError};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Game not found: {0}")]
    NotFound(GameId),

    #[error("Error: {0}")]
    Infrastructure(String),
}

impl GameError {
    pub fn code(&self) -> ErrorCode {
        match self {
            GameError::Validation(e) => e.code(),
            GameError::NotFound(_) => ErrorCode::GameNotFound,
            GameError::Infrastructure(_) => ErrorCode::InternalError,
        }
    }
}

impl From<DomainError> for GameError {
    fn from(err: DomainError) -> Self {
        GameError::Infrastructure(err.to_string())
    }
}

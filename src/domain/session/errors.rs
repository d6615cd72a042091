//! Session-specific error types.

use thiserror::Error;

use crate::domain::foundation::{
    DomainError, ErrorCode, GameId, PlayerId, SessionId, ValidationError,
};

/// Session-specific errors.
///
/// The first four variants are business-rule violations raised by the
/// aggregate itself; the rest are raised by application handlers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("Session {session_id} is full ({capacity} players)")]
    SessionFull { session_id: SessionId, capacity: u32 },

    #[error("Session {session_id} is closed")]
    SessionClosed { session_id: SessionId },

    #[error("Player {player_id} is already enrolled in session {session_id}")]
    AlreadyEnrolled {
        session_id: SessionId,
        player_id: PlayerId,
    },

    #[error("Player {player_id} is not enrolled in session {session_id}")]
    NotEnrolled {
        session_id: SessionId,
        player_id: PlayerId,
    },

    #[error("Session not found: {0}")]
    NotFound(SessionId),

    #[error("Player not found: {0}")]
    PlayerNotFound(PlayerId),

    #[error("Game not found: {0}")]
    GameNotFound(GameId),

    #[error("Permission denied")]
    Forbidden,

    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Error: {0}")]
    Infrastructure(String),
}

impl SessionError {
    pub fn infrastructure(message: impl Into<String>) -> Self {
        SessionError::Infrastructure(message.into())
    }

    /// True for violations of the enrollment rules.
    pub fn is_rule_violation(&self) -> bool {
        matches!(
            self,
            SessionError::SessionFull { .. }
                | SessionError::SessionClosed { .. }
                | SessionError::AlreadyEnrolled { .. }
                | SessionError::NotEnrolled { .. }
        )
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            SessionError::SessionFull { .. } => ErrorCode::SessionFull,
            SessionError::SessionClosed { .. } => ErrorCode::SessionClosed,
            SessionError::AlreadyEnrolled { .. } => ErrorCode::AlreadyEnrolled,
            SessionError::NotEnrolled { .. } => ErrorCode::NotEnrolled,
            SessionError::NotFound(_) => ErrorCode::SessionNotFound,
            SessionError::PlayerNotFound(_) => ErrorCode::PlayerNotFound,
            SessionError::GameNotFound(_) => ErrorCode::GameNotFound,
            SessionError::Forbidden => ErrorCode::Forbidden,
            SessionError::Validation(e) => e.code(),
            SessionError::Infrastructure(_) => ErrorCode::InternalError,
        }
    }
}

impl From<DomainError> for SessionError {
    fn from(err: DomainError) -> Self {
        SessionError::Infrastructure(err.to_string())
    }
}

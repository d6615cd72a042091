//! Session repository port.
//!
//! Sessions are mutated as immutable snapshots, so the write side is a
//! compare-and-swap: the caller passes the snapshot it read together with
//! the snapshot it computed, and the store refuses the write if somebody
//! else changed the session in between.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, SessionId};
use crate::domain::session::Session;

/// Repository port for Session persistence.
///
/// Implementations must serialize writes per session id.
#[async_trait]
pub trait SessionRepository: Send + Sync {
    /// Reserve the identifier for the next scheduled session.
    async fn next_id(&self) -> Result<SessionId, DomainError>;

    /// Save a new session.
    ///
    /// # Errors
    ///
    /// - `Conflict` if the id is already used
    async fn save(&self, session: &Session) -> Result<(), DomainError>;

    /// Replace `expected` with `updated` atomically.
    ///
    /// # Errors
    ///
    /// - `SessionNotFound` if the session doesn't exist
    /// - `ConcurrentModification` if the stored snapshot differs from `expected`
    async fn compare_and_swap(
        &self,
        expected: &Session,
        updated: &Session,
    ) -> Result<(), DomainError>;

    async fn find_by_id(&self, id: SessionId) -> Result<Option<Session>, DomainError>;

    /// All sessions ordered by date, then id.
    async fn list(&self) -> Result<Vec<Session>, DomainError>;
}

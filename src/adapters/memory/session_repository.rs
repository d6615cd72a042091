//! In-memory implementation of SessionRepository.

use async_trait::async_trait;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

use super::IdSequence;
use crate::domain::foundation::{DomainError, ErrorCode, SessionId};
use crate::domain::session::Session;
use crate::ports::SessionRepository;

/// In-memory session store.
///
/// A single write lock guards the whole map, which serializes every
/// compare-and-swap.
#[derive(Debug)]
pub struct InMemorySessionRepository {
    sessions: RwLock<BTreeMap<SessionId, Session>>,
    ids: IdSequence,
}

impl InMemorySessionRepository {
    pub fn new() -> Self {
        Self {
            sessions: RwLock::new(BTreeMap::new()),
            ids: IdSequence::starting_at(1),
        }
    }
}

impl Default for InMemorySessionRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SessionRepository for InMemorySessionRepository {
    async fn next_id(&self) -> Result<SessionId, DomainError> {
        Ok(SessionId::new(self.ids.next()))
    }

    async fn save(&self, session: &Session) -> Result<(), DomainError> {
        let mut sessions = self.sessions.write().await;
        if sessions.contains_key(&session.id()) {
            return Err(DomainError::new(
                ErrorCode::Conflict,
                format!("Session {} already exists", session.id()),
            ));
        }
        sessions.insert(session.id(), session.clone());
        Ok(())
    }

    async fn compare_and_swap(
        &self,
        expected: &Session,
        updated: &Session,
    ) -> Result<(), DomainError> {
        if expected.id() != updated.id() {
            return Err(DomainError::new(
                ErrorCode::InternalError,
                "compare_and_swap called with snapshots of different sessions",
            ));
        }

        let mut sessions = self.sessions.write().await;
        let current = sessions.get_mut(&expected.id()).ok_or_else(|| {
            DomainError::new(
                ErrorCode::SessionNotFound,
                format!("Session not found: {}", expected.id()),
            )
        })?;

        if current != expected {
            return Err(DomainError::new(
                ErrorCode::ConcurrentModification,
                format!("Session {} was modified concurrently", expected.id()),
            ));
        }

        *current = updated.clone();
        Ok(())
    }

    async fn find_by_id(&self, id: SessionId) -> Result<Option<Session>, DomainError> {
        Ok(self.sessions.read().await.get(&id).cloned())
    }

    async fn list(&self) -> Result<Vec<Session>, DomainError> {
        let mut sessions: Vec<Session> = self.sessions.read().await.values().cloned().collect();
        sessions.sort_by(|a, b| a.date().cmp(b.date()).then(a.id().cmp(&b.id())));
        Ok(sessions)
    }
}

//! Query handlers for sessions.

use std::sync::Arc;

use crate::domain::foundation::SessionId;
use crate::domain::session::SessionError;
use crate::ports::{Clock, SessionRepository};

use super::SessionView;

#[derive(Debug, Clone)]
pub struct GetSessionQuery {
    pub session_id: SessionId,
}

/// Loads one session and derives its state at the current time.
pub struct GetSessionHandler {
    sessions: Arc<dyn SessionRepository>,
    clock: Arc<dyn Clock>,
}

impl GetSessionHandler {
    pub fn new(sessions: Arc<dyn SessionRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { sessions, clock }
    }

    pub async fn handle(&self, query: GetSessionQuery) -> Result<SessionView, SessionError> {
        let session = self
            .sessions
            .find_by_id(query.session_id)
            .await?
            .ok_or(SessionError::NotFound(query.session_id))?;
        Ok(SessionView::at(session, self.clock.now()))
    }
}

#[derive(Debug, Clone, Default)]
pub struct ListSessionsQuery {
    /// Only return sessions that still accept enrollments.
    pub only_open: bool,
}

/// Lists sessions ordered by date.
pub struct ListSessionsHandler {
    sessions: Arc<dyn SessionRepository>,
    clock: Arc<dyn Clock>,
}

impl ListSessionsHandler {
    pub fn new(sessions: Arc<dyn SessionRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { sessions, clock }
    }

    pub async fn handle(&self, query: ListSessionsQuery) -> Result<Vec<SessionView>, SessionError> {
        let now = self.clock.now();
        Ok(self
            .sessions
            .list()
            .await?
            .into_iter()
            .map(|s| SessionView::at(s, now))
            .filter(|view| !query.only_open || view.state.is_open())
            .collect())
    }
}

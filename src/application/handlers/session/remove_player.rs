//! RemovePlayerHandler - Command handler for leaving a session.

use std::sync::Arc;

use crate::domain::foundation::{PlayerId, SessionId};
use crate::domain::session::SessionError;
use crate::ports::{Clock, SessionRepository};

use super::retry::mutate_session;
use super::SessionView;

/// Command to remove a player from a session.
#[derive(Debug, Clone)]
pub struct RemovePlayerCommand {
    pub session_id: SessionId,
    pub player_id: PlayerId,
    /// Authenticated player asking for the removal.
    pub requested_by: PlayerId,
}

/// Handler for removals.
///
/// Players may only remove themselves.
pub struct RemovePlayerHandler {
    sessions: Arc<dyn SessionRepository>,
    clock: Arc<dyn Clock>,
}

impl RemovePlayerHandler {
    pub fn new(sessions: Arc<dyn SessionRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { sessions, clock }
    }

    pub async fn handle(&self, cmd: RemovePlayerCommand) -> Result<SessionView, SessionError> {
        if cmd.requested_by != cmd.player_id {
            tracing::warn!(
                player_id = %cmd.player_id,
                requested_by = %cmd.requested_by,
                "Removal of another player rejected"
            );
            return Err(SessionError::Forbidden);
        }

        let (session, now) = mutate_session(
            self.sessions.as_ref(),
            self.clock.as_ref(),
            cmd.session_id,
            |session, _now| session.remove(cmd.player_id),
        )
        .await?;

        tracing::debug!(
            session_id = %cmd.session_id,
            player_id = %cmd.player_id,
            "Player removed"
        );
        Ok(SessionView::at(session, now))
    }
}

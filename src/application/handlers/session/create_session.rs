//! CreateSessionHandler - Command handler for scheduling sessions.

use std::sync::Arc;

use crate::domain::foundation::{GameId, PlayerId, Timestamp, ValidationPolicy};
use crate::domain::session::{Session, SessionError};
use crate::ports::{Clock, GameRepository, PlayerRepository, SessionRepository};

use super::SessionView;

/// Command to schedule a new session.
#[derive(Debug, Clone)]
pub struct CreateSessionCommand {
    pub game_id: GameId,
    pub capacity: i64,
    /// RFC 3339 date of the session.
    pub date: String,
    pub players: Vec<PlayerId>,
}

/// Handler for creating sessions.
pub struct CreateSessionHandler {
    sessions: Arc<dyn SessionRepository>,
    games: Arc<dyn GameRepository>,
    players: Arc<dyn PlayerRepository>,
    clock: Arc<dyn Clock>,
    policy: ValidationPolicy,
}

impl CreateSessionHandler {
    pub fn new(
        sessions: Arc<dyn SessionRepository>,
        games: Arc<dyn GameRepository>,
        players: Arc<dyn PlayerRepository>,
        clock: Arc<dyn Clock>,
        policy: ValidationPolicy,
    ) -> Self {
        Self {
            sessions,
            games,
            players,
            clock,
            policy,
        }
    }

    pub async fn handle(&self, cmd: CreateSessionCommand) -> Result<SessionView, SessionError> {
        // 1. Validate raw input
        let capacity = self.policy.capacity(cmd.capacity)?;
        let date = Timestamp::parse_rfc3339(&cmd.date)?;

        // 2. Resolve referenced entities
        let game = self
            .games
            .find_by_id(cmd.game_id)
            .await?
            .ok_or(SessionError::GameNotFound(cmd.game_id))?;

        for player_id in &cmd.players {
            if self.players.find_by_id(*player_id).await?.is_none() {
                return Err(SessionError::PlayerNotFound(*player_id));
            }
        }

        // 3. Build and persist
        let id = self.sessions.next_id().await?;
        let session = Session::create(id, capacity, date, game, cmd.players)?;
        self.sessions.save(&session).await?;

        tracing::debug!(
            session_id = %id,
            capacity = capacity.value(),
            "Session scheduled"
        );
        Ok(SessionView::at(session, self.clock.now()))
    }
}

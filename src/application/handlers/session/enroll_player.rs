//! EnrollPlayerHandler - Command handler for joining a session.

use std::sync::Arc;

use crate::domain::foundation::{PlayerId, SessionId};
use crate::domain::session::SessionError;
use crate::ports::{Clock, PlayerRepository, SessionRepository};

use super::retry::mutate_session;
use super::SessionView;

/// Command to enroll a player into a session.
#[derive(Debug, Clone)]
pub struct EnrollPlayerCommand {
    pub session_id: SessionId,
    pub player_id: PlayerId,
}

/// Handler for enrollments.
pub struct EnrollPlayerHandler {
    sessions: Arc<dyn SessionRepository>,
    players: Arc<dyn PlayerRepository>,
    clock: Arc<dyn Clock>,
}

impl EnrollPlayerHandler {
    pub fn new(
        sessions: Arc<dyn SessionRepository>,
        players: Arc<dyn PlayerRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            sessions,
            players,
            clock,
        }
    }

    pub async fn handle(&self, cmd: EnrollPlayerCommand) -> Result<SessionView, SessionError> {
        let player = self
            .players
            .find_by_id(cmd.player_id)
            .await?
            .ok_or(SessionError::PlayerNotFound(cmd.player_id))?;

        let result = mutate_session(
            self.sessions.as_ref(),
            self.clock.as_ref(),
            cmd.session_id,
            |session, now| session.enroll(&player, now),
        )
        .await;

        match result {
            Ok((session, now)) => {
                tracing::debug!(
                    session_id = %cmd.session_id,
                    player_id = %cmd.player_id,
                    "Player enrolled"
                );
                Ok(SessionView::at(session, now))
            }
            Err(e) => {
                tracing::warn!(
                    session_id = %cmd.session_id,
                    player_id = %cmd.player_id,
                    error = %e,
                    "Enrollment rejected"
                );
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::session::fixtures::World;
    use crate::domain::session::SessionState;

    fn handler(world: &World) -> EnrollPlayerHandler {
        EnrollPlayerHandler::new(
            world.sessions.clone(),
            world.players.clone(),
            world.clock.clone(),
        )
    }

    fn enroll(session_id: SessionId, player: u64) -> EnrollPlayerCommand {
        EnrollPlayerCommand {
            session_id,
            player_id: PlayerId::new(player),
        }
    }

    #[tokio::test]
    async fn enrolls_into_open_session() {
        let world = World::new().await;
        let id = world.session(2, vec![]).await;

        let view = handler(&world).handle(enroll(id, 1)).await.unwrap();

        assert!(view.session.has_player(PlayerId::new(1)));
        assert_eq!(view.state, SessionState::Open);
        let stored = world.sessions.find_by_id(id).await.unwrap().unwrap();
        assert_eq!(stored, view.session);
    }

    #[tokio::test]
    async fn last_seat_closes_session() {
        let world = World::new().await;
        let id = world.session(2, vec![1]).await;

        let view = handler(&world).handle(enroll(id, 2)).await.unwrap();

        assert_eq!(view.state, SessionState::Close);
    }

    #[tokio::test]
    async fn full_session_rejects_enrollment() {
        let world = World::new().await;
        let id = world.session(1, vec![1]).await;

        let err = handler(&world).handle(enroll(id, 2)).await.unwrap_err();

        assert!(matches!(err, SessionError::SessionFull { capacity: 1, .. }));
    }

    #[tokio::test]
    async fn duplicate_enrollment_is_rejected() {
        let world = World::new().await;
        let id = world.session(3, vec![1]).await;

        let err = handler(&world).handle(enroll(id, 1)).await.unwrap_err();

        assert!(matches!(err, SessionError::AlreadyEnrolled { .. }));
    }

    #[tokio::test]
    async fn past_session_rejects_enrollment() {
        let world = World::new().await;
        let id = world.session(3, vec![]).await;
        world.clock.advance(chrono::Duration::days(2));

        let err = handler(&world).handle(enroll(id, 1)).await.unwrap_err();

        assert!(matches!(err, SessionError::SessionClosed { .. }));
    }

    #[tokio::test]
    async fn unknown_player_is_rejected() {
        let world = World::new().await;
        let id = world.session(3, vec![]).await;

        let err = handler(&world).handle(enroll(id, 99)).await.unwrap_err();

        assert_eq!(err, SessionError::PlayerNotFound(PlayerId::new(99)));
    }

    #[tokio::test]
    async fn unknown_session_is_rejected() {
        let world = World::new().await;

        let err = handler(&world)
            .handle(enroll(SessionId::new(42), 1))
            .await
            .unwrap_err();

        assert_eq!(err, SessionError::NotFound(SessionId::new(42)));
    }

    #[tokio::test]
    async fn racing_enrollments_never_overfill() {
        let world = World::new().await;
        let id = world.session(1, vec![]).await;
        let handler = Arc::new(handler(&world));

        let mut tasks = Vec::new();
        for player in 1..=3 {
            let handler = handler.clone();
            tasks.push(tokio::spawn(async move {
                handler.handle(enroll(id, player)).await
            }));
        }

        let mut enrolled = 0;
        for task in tasks {
            if task.await.unwrap().is_ok() {
                enrolled += 1;
            }
        }

        assert_eq!(enrolled, 1);
        let stored = world.sessions.find_by_id(id).await.unwrap().unwrap();
        assert_eq!(stored.player_count(), 1);
    }
}

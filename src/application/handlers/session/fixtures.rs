//! Shared fixtures for session handler tests.

use std::sync::Arc;

use crate::adapters::auth::FixedClock;
use crate::adapters::memory::{InMemoryPlayerRepository, InMemorySessionRepository};
use crate::domain::foundation::{
    Capacity, Email, GameId, Genre, GenrePolicy, Name, PlayerId, SessionId, Timestamp,
};
use crate::domain::game::Game;
use crate::domain::player::Player;
use crate::domain::session::Session;
use crate::ports::{PlayerRepository, SessionRepository};

pub(super) const NOW: &str = "2030-01-01T12:00:00Z";
pub(super) const SESSION_DATE: &str = "2030-01-02T18:00:00Z";

pub(super) struct World {
    pub sessions: Arc<InMemorySessionRepository>,
    pub players: Arc<InMemoryPlayerRepository>,
    pub clock: Arc<FixedClock>,
}

impl World {
    pub async fn new() -> Self {
        let players = Arc::new(InMemoryPlayerRepository::new());
        for (id, name) in [(1, "Alice"), (2, "Bruno"), (3, "Chiara")] {
            players
                .save(&Player::new(
                    PlayerId::new(id),
                    Name::new(name).unwrap(),
                    Email::new(format!("{}@example.com", name.to_lowercase())).unwrap(),
                ))
                .await
                .unwrap();
        }
        Self {
            sessions: Arc::new(InMemorySessionRepository::new()),
            players,
            clock: Arc::new(FixedClock::at(Timestamp::parse_rfc3339(NOW).unwrap())),
        }
    }

    pub async fn session(&self, capacity: i64, players: Vec<u64>) -> SessionId {
        let id = self.sessions.next_id().await.unwrap();
        let game = Game::new(
            GameId::new(1),
            Name::new("Carcassonne").unwrap(),
            Name::new("Hans im Glueck").unwrap(),
            vec![Genre::new("Strategy", &GenrePolicy::curated()).unwrap()],
        )
        .unwrap();
        let session = Session::create(
            id,
            Capacity::new(capacity).unwrap(),
            Timestamp::parse_rfc3339(SESSION_DATE).unwrap(),
            game,
            players.into_iter().map(PlayerId::new),
        )
        .unwrap();
        self.sessions.save(&session).await.unwrap();
        id
    }
}

//! HTTP DTOs for session endpoints.

use serde::{Deserialize, Serialize};

use crate::adapters::http::game::GameResponse;
use crate::application::handlers::session::SessionView;
use crate::domain::session::SessionState;

/// Request to schedule a session.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateSessionRequest {
    /// Signed so a negative id reaches identifier validation.
    pub game_id: i64,
    pub capacity: i64,
    /// RFC 3339 date.
    pub date: String,
    #[serde(default)]
    pub players: Vec<i64>,
}

/// Query parameters for listing sessions.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListSessionsParams {
    #[serde(default)]
    pub open: bool,
}

/// Session snapshot with its state at response time.
#[derive(Debug, Clone, Serialize)]
pub struct SessionResponse {
    pub id: u64,
    pub game: GameResponse,
    pub capacity: u32,
    pub date: String,
    pub players: Vec<u64>,
    pub available_slots: u32,
    pub state: SessionState,
}

impl From<&SessionView> for SessionResponse {
    fn from(view: &SessionView) -> Self {
        let session = &view.session;
        Self {
            id: session.id().value(),
            game: session.game().into(),
            capacity: session.capacity().value(),
            date: session.date().to_rfc3339(),
            players: session.players().map(|p| p.value()).collect(),
            available_slots: session.available_slots(),
            state: view.state,
        }
    }
}

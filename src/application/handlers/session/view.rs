//! Read model returned by session handlers.

use crate::domain::foundation::Timestamp;
use crate::domain::session::{Session, SessionState};

/// A session snapshot together with the state derived at `as_of`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionView {
    pub session: Session,
    pub state: SessionState,
    pub as_of: Timestamp,
}

impl SessionView {
    pub fn at(session: Session, now: Timestamp) -> Self {
        let state = session.state(&now);
        Self {
            session,
            state,
            as_of: now,
        }
    }
}

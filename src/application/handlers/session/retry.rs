//! Compare-and-swap loop shared by enrollment and removal.

use crate::domain::foundation::{ErrorCode, SessionId, Timestamp};
use crate::domain::session::{Session, SessionError};
use crate::ports::{Clock, SessionRepository};

/// How many times a mutation is re-applied after losing a race.
pub const MAX_CAS_ATTEMPTS: usize = 3;

/// Loads the session, applies `op` and persists the result.
///
/// On `ConcurrentModification` the session is reloaded and `op` re-applied
/// against the fresh snapshot. Domain errors from `op` are returned as-is.
pub(crate) async fn mutate_session<F>(
    sessions: &dyn SessionRepository,
    clock: &dyn Clock,
    session_id: SessionId,
    op: F,
) -> Result<(Session, Timestamp), SessionError>
where
    F: Fn(&Session, &Timestamp) -> Result<Session, SessionError>,
{
    for attempt in 1..=MAX_CAS_ATTEMPTS {
        let current = sessions
            .find_by_id(session_id)
            .await?
            .ok_or(SessionError::NotFound(session_id))?;

        let now = clock.now();
        let updated = op(&current, &now)?;

        match sessions.compare_and_swap(&current, &updated).await {
            Ok(()) => return Ok((updated, now)),
            Err(e) if e.is_concurrent_modification() => {
                tracing::debug!(
                    session_id = %session_id,
                    attempt,
                    "Session changed concurrently, retrying"
                );
            }
            Err(e) if e.code == ErrorCode::SessionNotFound => {
                return Err(SessionError::NotFound(session_id));
            }
            Err(e) => return Err(e.into()),
        }
    }

    tracing::warn!(session_id = %session_id, "Giving up after repeated concurrent modifications");
    Err(SessionError::infrastructure(format!(
        "Session {} kept changing; gave up after {} attempts",
        session_id, MAX_CAS_ATTEMPTS
    )))
}

//! Session command and query handlers.
//!
//! Mutations go through a compare-and-swap loop so that racing enrollments
//! on the same session cannot overfill it.

mod create_session;
mod enroll_player;
mod get_session;
mod remove_player;
mod retry;
#[cfg(test)]
mod fixtures;
mod view;

pub use create_session::{CreateSessionCommand, CreateSessionHandler};
pub use enroll_player::{EnrollPlayerCommand, EnrollPlayerHandler};
pub use get_session::{GetSessionHandler, GetSessionQuery, ListSessionsHandler, ListSessionsQuery};
pub use remove_player::{RemovePlayerCommand, RemovePlayerHandler};
pub use retry::MAX_CAS_ATTEMPTS;
pub use view::SessionView;

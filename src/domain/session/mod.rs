//! Session domain module.
//!
//! Handles game session scheduling and the enrollment lifecycle. State is
//! derived from capacity, membership and date; there is no stored status.

mod aggregate;
mod errors;
mod state;

pub use aggregate::Session;
pub use errors::SessionError;
pub use state::SessionState;

//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod game;
pub mod player;
pub mod session;

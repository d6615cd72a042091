//! Player domain module.
//!
//! Registered players and the time-bounded tokens that authenticate them.

mod aggregate;
mod errors;
mod token;

pub use aggregate::Player;
pub use errors::PlayerError;
pub use token::{Token, TokenValidity, TokenValue, DEFAULT_TOKEN_VALIDITY_HOURS};

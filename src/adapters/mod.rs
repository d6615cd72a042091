//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `auth` - Clocks and token generation
//! - `http` - axum REST API
//! - `memory` - In-memory repositories

pub mod auth;
pub mod http;
pub mod memory;

pub use auth::{FixedClock, SystemClock, UuidTokenGenerator};
pub use memory::{
    InMemoryGameRepository, InMemoryPlayerRepository, InMemorySessionRepository,
    InMemoryTokenRepository,
};

//! In-memory persistence adapters.
//!
//! Back the repository ports with maps behind `tokio::sync::RwLock`. Used by
//! the binary when no database is configured and by tests.

mod game_repository;
mod player_repository;
mod session_repository;
mod token_repository;

pub use game_repository::InMemoryGameRepository;
pub use player_repository::InMemoryPlayerRepository;
pub use session_repository::InMemorySessionRepository;
pub use token_repository::InMemoryTokenRepository;

use std::sync::atomic::{AtomicU64, Ordering};

/// Monotonic identifier source shared by the in-memory repositories.
#[derive(Debug)]
pub(crate) struct IdSequence(AtomicU64);

impl IdSequence {
    pub(crate) fn starting_at(first: u64) -> Self {
        Self(AtomicU64::new(first))
    }

    pub(crate) fn next(&self) -> u64 {
        self.0.fetch_add(1, Ordering::SeqCst)
    }
}

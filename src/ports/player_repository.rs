//! Player repository port.
//!
//! Defines the contract for persisting and retrieving registered players.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, Email, PlayerId};
use crate::domain::player::Player;

/// Repository port for Player persistence.
///
/// Implementations must ensure:
/// - Identifiers handed out by `next_id` are never reused
/// - Emails are unique, compared case-insensitively
#[async_trait]
pub trait PlayerRepository: Send + Sync {
    /// Reserve the identifier for the next registered player.
    async fn next_id(&self) -> Result<PlayerId, DomainError>;

    /// Save a new player.
    ///
    /// # Errors
    ///
    /// - `Conflict` if the id or email is already registered
    /// - `InternalError` on persistence failure
    async fn save(&self, player: &Player) -> Result<(), DomainError>;

    /// Find a player by ID.
    async fn find_by_id(&self, id: PlayerId) -> Result<Option<Player>, DomainError>;

    /// Find a player by email (case-insensitive).
    async fn find_by_email(&self, email: &Email) -> Result<Option<Player>, DomainError>;
}

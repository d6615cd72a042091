//! Player entity.

use crate::domain::foundation::{Email, Name, PlayerId};

/// A registered player.
///
/// # Invariants
///
/// - every field was validated by its own constructor
/// - never mutated; re-registration creates a new player
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Player {
    id: PlayerId,
    name: Name,
    email: Email,
}

impl Player {
    pub fn new(id: PlayerId, name: Name, email: Email) -> Self {
        Self { id, name, email }
    }

    pub fn id(&self) -> PlayerId {
        self.id
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn email(&self) -> &Email {
        &self.email
    }
}

//! Game catalogue entry.

use std::collections::BTreeSet;

use crate::domain::foundation::{GameId, Genre, Name, ValidationError};

/// A catalogued game.
///
/// # Invariants
///
/// - `genres` is non-empty and holds no duplicates
/// - never mutated after catalog insertion
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Game {
    id: GameId,
    name: Name,
    developer: Name,
    genres: BTreeSet<Genre>,
}

impl Game {
    /// Assembles a game from validated parts.
    ///
    /// # Errors
    ///
    /// - `EmptyField("genres")` if no genre is given
    pub fn new(
        id: GameId,
        name: Name,
        developer: Name,
        genres: impl IntoIterator<Item = Genre>,
    ) -> Result<Self, ValidationError> {
        let genres: BTreeSet<Genre> = genres.into_iter().collect();
        if genres.is_empty() {
            return Err(ValidationError::empty_field("genres"));
        }
        Ok(Self {
            id,
            name,
            developer,
            genres,
        })
    }

    pub fn id(&self) -> GameId {
        self.id
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn developer(&self) -> &Name {
        &self.developer
    }

    /// Genres in label order.
    pub fn genres(&self) -> impl Iterator<Item = &Genre> {
        self.genres.iter()
    }

    pub fn genre_count(&self) -> usize {
        self.genres.len()
    }

    pub fn has_genre(&self, label: &str) -> bool {
        self.genres.iter().any(|g| g.as_str() == label)
    }
}

//! Deployment-wide validation policy.
//!
//! Bundles the strictness knobs so application handlers validate raw input
//! the same way everywhere. Built from configuration at startup.

use super::{Capacity, Genre, GenrePolicy, Name, NameRules, ValidationError, SESSION_MAX_CAPACITY};

/// Validation rules injected into handlers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationPolicy {
    pub names: NameRules,
    pub genres: GenrePolicy,
    pub max_capacity: u32,
}

impl ValidationPolicy {
    pub fn new(names: NameRules, genres: GenrePolicy, max_capacity: u32) -> Self {
        Self {
            names,
            genres,
            max_capacity: max_capacity.min(SESSION_MAX_CAPACITY),
        }
    }

    /// Validates a name for the given field.
    pub fn name(&self, field: &str, raw: impl Into<String>) -> Result<Name, ValidationError> {
        Name::for_field(field, raw, &self.names)
    }

    pub fn genre(&self, raw: impl Into<String>) -> Result<Genre, ValidationError> {
        Genre::new(raw, &self.genres)
    }

    /// Validates every raw genre, failing on the first invalid label.
    pub fn genres<I, S>(&self, raw: I) -> Result<Vec<Genre>, ValidationError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        raw.into_iter().map(|g| self.genre(g)).collect()
    }

    pub fn capacity(&self, raw: i64) -> Result<Capacity, ValidationError> {
        Capacity::with_max(raw, self.max_capacity)
    }
}

impl Default for ValidationPolicy {
    fn default() -> Self {
        Self::new(NameRules::STRICT, GenrePolicy::curated(), SESSION_MAX_CAPACITY)
    }
}

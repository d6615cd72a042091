//! Genre value object and the policy that governs which labels are accepted.

use serde::Serialize;
use std::collections::BTreeSet;
use std::fmt;

use super::ValidationError;

/// Minimum genre label length.
pub const GENRE_MIN_LENGTH: usize = 3;

/// Maximum genre label length.
pub const GENRE_MAX_LENGTH: usize = 40;

/// Labels accepted by the default strict policy.
pub const CURATED_GENRES: &[&str] = &[
    "Action",
    "Adventure",
    "RPG",
    "Shooter",
    "Turn-Based",
    "Strategy",
    "Simulation",
    "Sports",
    "Racing",
    "Fighting",
    "Platformer",
    "Horror",
];

/// Validation policy for genre labels.
///
/// A deployment picks exactly one policy; it is passed to every
/// [`Genre`] construction instead of living in a global table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenrePolicy {
    /// Length rules plus membership in a fixed label set (case-sensitive).
    Strict { allowed: BTreeSet<String> },
    /// Length and non-blank rules only.
    Loose,
}

impl GenrePolicy {
    /// Strict policy over [`CURATED_GENRES`].
    pub fn curated() -> Self {
        Self::strict(CURATED_GENRES.iter().copied())
    }

    /// Strict policy over a custom label set.
    pub fn strict<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        GenrePolicy::Strict {
            allowed: labels.into_iter().map(Into::into).collect(),
        }
    }

    pub fn is_strict(&self) -> bool {
        matches!(self, GenrePolicy::Strict { .. })
    }

    /// Returns the allowed labels, or `None` for the loose policy.
    pub fn allowed(&self) -> Option<&BTreeSet<String>> {
        match self {
            GenrePolicy::Strict { allowed } => Some(allowed),
            GenrePolicy::Loose => None,
        }
    }
}

impl Default for GenrePolicy {
    fn default() -> Self {
        Self::curated()
    }
}

/// A genre label accepted by the active [`GenrePolicy`].
///
/// Surrounding whitespace is trimmed before any rule is checked.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Genre(String);

impl Genre {
    pub fn new(raw: impl Into<String>, policy: &GenrePolicy) -> Result<Self, ValidationError> {
        let raw = raw.into();
        let label = raw.trim();
        if label.is_empty() {
            return Err(ValidationError::empty_field("genre"));
        }
        let length = label.chars().count();
        if !(GENRE_MIN_LENGTH..=GENRE_MAX_LENGTH).contains(&length) {
            return Err(ValidationError::out_of_range(
                "genre",
                GENRE_MIN_LENGTH as i64,
                GENRE_MAX_LENGTH as i64,
                length as i64,
            ));
        }
        if let GenrePolicy::Strict { allowed } = policy {
            if !allowed.contains(label) {
                return Err(ValidationError::not_allowed("genre", label));
            }
        }
        Ok(Self(label.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Genre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

//! Name value object used for player names, game titles and developers.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// Inclusive character-length bounds applied to a [`Name`].
///
/// Surrounding whitespace is trimmed before the length is measured, and the
/// stored name keeps only the trimmed text, as [`super::Email`] does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameRules {
    pub min_length: usize,
    pub max_length: usize,
}

impl NameRules {
    /// Canonical bounds used by players and games: 3 to 60 characters.
    pub const STRICT: Self = Self {
        min_length: 3,
        max_length: 60,
    };

    /// Creates custom bounds, rejecting an empty or inverted range.
    pub fn new(min_length: usize, max_length: usize) -> Result<Self, ValidationError> {
        if min_length == 0 || min_length > max_length {
            return Err(ValidationError::invalid_format(
                "name_rules",
                format!("invalid bounds {}..={}", min_length, max_length),
            ));
        }
        Ok(Self {
            min_length,
            max_length,
        })
    }

    fn check<'a>(&self, field: &str, raw: &'a str) -> Result<&'a str, ValidationError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::empty_field(field));
        }
        let length = trimmed.chars().count();
        if length < self.min_length || length > self.max_length {
            return Err(ValidationError::out_of_range(
                field,
                self.min_length as i64,
                self.max_length as i64,
                length as i64,
            ));
        }
        Ok(trimmed)
    }
}

impl Default for NameRules {
    fn default() -> Self {
        Self::STRICT
    }
}

/// A non-blank name whose length lies within the configured [`NameRules`].
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Name(String);

impl Name {
    /// Creates a name under the strict 3..=60 rules.
    pub fn new(raw: impl Into<String>) -> Result<Self, ValidationError> {
        Self::with_rules(raw, &NameRules::STRICT)
    }

    /// Creates a name under the given rules.
    pub fn with_rules(raw: impl Into<String>, rules: &NameRules) -> Result<Self, ValidationError> {
        Self::for_field("name", raw, rules)
    }

    /// Creates a name, reporting failures against `field` (e.g. "developer").
    pub fn for_field(
        field: &str,
        raw: impl Into<String>,
        rules: &NameRules,
    ) -> Result<Self, ValidationError> {
        let raw = raw.into();
        let trimmed = rules.check(field, &raw)?;
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

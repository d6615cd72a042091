//! Validation rules configuration
//!
//! Controls how strictly names, genres and capacities are checked.

use serde::Deserialize;

use crate::domain::foundation::{
    Genre, GenrePolicy, NameRules, ValidationPolicy, SESSION_MAX_CAPACITY,
};

use super::error::ValidationError;

/// Which genre labels are accepted.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum GenrePolicyKind {
    /// Only labels from the allowed list.
    #[default]
    Strict,
    /// Any label of acceptable length.
    Loose,
}

/// Rules configuration
#[derive(Debug, Clone, Deserialize)]
pub struct RulesConfig {
    #[serde(default = "default_name_min_length")]
    pub name_min_length: usize,

    #[serde(default = "default_name_max_length")]
    pub name_max_length: usize,

    #[serde(default)]
    pub genre_policy: GenrePolicyKind,

    /// Allowed genres (comma-separated). Curated list when unset.
    pub allowed_genres: Option<String>,

    #[serde(default = "default_session_max_capacity")]
    pub session_max_capacity: u32,
}

impl RulesConfig {
    /// Get allowed genres as a vector
    pub fn allowed_genres_list(&self) -> Option<Vec<String>> {
        self.allowed_genres.as_ref().map(|s| {
            s.split(',')
                .map(|g| g.trim().to_string())
                .filter(|g| !g.is_empty())
                .collect()
        })
    }

    /// Validate rules configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.to_policy().map(|_| ())
    }

    /// Build the domain validation policy.
    pub fn to_policy(&self) -> Result<ValidationPolicy, ValidationError> {
        let names = NameRules::new(self.name_min_length, self.name_max_length)
            .map_err(|_| ValidationError::InvalidNameBounds)?;

        if self.session_max_capacity == 0 || self.session_max_capacity > SESSION_MAX_CAPACITY {
            return Err(ValidationError::InvalidCapacityCeiling);
        }

        let genres = match (self.genre_policy, self.allowed_genres_list()) {
            (GenrePolicyKind::Loose, _) => GenrePolicy::Loose,
            (GenrePolicyKind::Strict, None) => GenrePolicy::curated(),
            (GenrePolicyKind::Strict, Some(list)) if list.is_empty() => {
                return Err(ValidationError::EmptyGenreList)
            }
            (GenrePolicyKind::Strict, Some(list)) => {
                // A label Genre::new can never construct would be dead weight.
                if let Some(bad) = list
                    .iter()
                    .find(|label| Genre::new(label.as_str(), &GenrePolicy::Loose).is_err())
                {
                    return Err(ValidationError::InvalidAllowedGenre(bad.clone()));
                }
                GenrePolicy::strict(list)
            }
        };

        Ok(ValidationPolicy::new(names, genres, self.session_max_capacity))
    }
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            name_min_length: default_name_min_length(),
            name_max_length: default_name_max_length(),
            genre_policy: GenrePolicyKind::default(),
            allowed_genres: None,
            session_max_capacity: default_session_max_capacity(),
        }
    }
}

fn default_name_min_length() -> usize {
    NameRules::STRICT.min_length
}

fn default_name_max_length() -> usize {
    NameRules::STRICT.max_length
}

fn default_session_max_capacity() -> u32 {
    SESSION_MAX_CAPACITY
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_build_curated_policy() {
        let policy = RulesConfig::default().to_policy().unwrap();
        assert!(policy.genre("RPG").is_ok());
        assert!(policy.genre("Puzzle").is_err());
        assert!(policy.capacity(100).is_ok());
    }

    #[test]
    fn test_loose_policy_accepts_any_genre() {
        let config = RulesConfig {
            genre_policy: GenrePolicyKind::Loose,
            ..Default::default()
        };
        assert!(config.to_policy().unwrap().genre("Puzzle").is_ok());
    }

    #[test]
    fn test_custom_allowed_genres() {
        let config = RulesConfig {
            allowed_genres: Some("Puzzle, Party ,".to_string()),
            ..Default::default()
        };
        assert_eq!(
            config.allowed_genres_list().unwrap(),
            vec!["Puzzle".to_string(), "Party".to_string()]
        );
        let policy = config.to_policy().unwrap();
        assert!(policy.genre("Party").is_ok());
        assert!(policy.genre("RPG").is_err());
    }

    #[test]
    fn test_empty_allowed_genres_rejected() {
        let config = RulesConfig {
            allowed_genres: Some(" , ".to_string()),
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::EmptyGenreList));
    }

    #[test]
    fn test_unconstructible_allowed_genre_rejected() {
        let config = RulesConfig {
            allowed_genres: Some("Strategy, 4X".to_string()),
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ValidationError::InvalidAllowedGenre("4X".to_string()))
        );

        let config = RulesConfig {
            allowed_genres: Some("x".repeat(41)),
            ..Default::default()
        };
        assert!(matches!(
            config.to_policy(),
            Err(ValidationError::InvalidAllowedGenre(_))
        ));
    }

    #[test]
    fn test_loose_policy_ignores_allowed_genres() {
        let config = RulesConfig {
            genre_policy: GenrePolicyKind::Loose,
            allowed_genres: Some("4X".to_string()),
            ..Default::default()
        };
        assert!(config.to_policy().is_ok());
    }

    #[test]
    fn test_inverted_name_bounds_rejected() {
        let config = RulesConfig {
            name_min_length: 10,
            name_max_length: 5,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::InvalidNameBounds));
    }

    #[test]
    fn test_capacity_ceiling_bounds() {
        let config = RulesConfig {
            session_max_capacity: 0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::InvalidCapacityCeiling));

        let config = RulesConfig {
            session_max_capacity: 101,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::InvalidCapacityCeiling));

        let config = RulesConfig {
            session_max_capacity: 8,
            ..Default::default()
        };
        let policy = config.to_policy().unwrap();
        assert!(policy.capacity(8).is_ok());
        assert!(policy.capacity(9).is_err());
    }
}

//! Authentication configuration

use serde::Deserialize;

use crate::domain::player::{TokenValidity, DEFAULT_TOKEN_VALIDITY_HOURS};

use super::error::ValidationError;

const MAX_TOKEN_VALIDITY_HOURS: i64 = 720;

/// Authentication configuration (bearer tokens)
#[derive(Debug, Clone, Deserialize)]
pub struct AuthConfig {
    /// How long an issued token stays valid
    #[serde(default = "default_token_validity_hours")]
    pub token_validity_hours: i64,
}

impl AuthConfig {
    /// Get the token validity window
    pub fn validity(&self) -> Result<TokenValidity, ValidationError> {
        self.validate()?;
        TokenValidity::from_hours(self.token_validity_hours)
            .map_err(|_| ValidationError::InvalidTokenValidity)
    }

    /// Validate authentication configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !(1..=MAX_TOKEN_VALIDITY_HOURS).contains(&self.token_validity_hours) {
            return Err(ValidationError::InvalidTokenValidity);
        }
        Ok(())
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            token_validity_hours: default_token_validity_hours(),
        }
    }
}

fn default_token_validity_hours() -> i64 {
    DEFAULT_TOKEN_VALIDITY_HOURS
}

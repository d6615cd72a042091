//! UUID-backed token generator.

use uuid::Uuid;

use crate::domain::foundation::DomainError;
use crate::domain::player::TokenValue;
use crate::ports::TokenGenerator;

/// Generates random v4 UUIDs in simple (hyphen-free) form.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidTokenGenerator;

impl UuidTokenGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl TokenGenerator for UuidTokenGenerator {
    fn generate(&self) -> Result<TokenValue, DomainError> {
        Ok(TokenValue::new(Uuid::new_v4().simple().to_string())?)
    }
}

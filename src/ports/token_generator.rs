//! Opaque token value generation port.

use crate::domain::foundation::DomainError;
use crate::domain::player::TokenValue;

/// Produces unique, unguessable token values.
pub trait TokenGenerator: Send + Sync {
    fn generate(&self) -> Result<TokenValue, DomainError>;
}

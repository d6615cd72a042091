//! Token validation port.
//!
//! HTTP middleware uses this to resolve a bearer value to a player without
//! knowing how tokens are stored.

use async_trait::async_trait;

use crate::domain::foundation::{AuthError, AuthenticatedPlayer};

/// Validates bearer token values.
///
/// # Contract
///
/// - `AuthError::InvalidToken` for blank or unknown values
/// - `AuthError::TokenExpired` once the validity window has elapsed
/// - `AuthError::ServiceUnavailable` for transient store failures
#[async_trait]
pub trait TokenValidator: Send + Sync {
    async fn validate(&self, token: &str) -> Result<AuthenticatedPlayer, AuthError>;
}

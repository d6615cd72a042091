//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, the validation policy, and error
//! types that form the vocabulary of the game sessions domain.

mod auth;
mod capacity;
mod email;
mod errors;
mod genre;
mod ids;
mod name;
mod policy;
mod timestamp;

pub use auth::{AuthError, AuthenticatedPlayer};
pub use capacity::{Capacity, SESSION_MAX_CAPACITY};
pub use email::{Email, MAX_EMAIL_LENGTH};
pub use errors::{DomainError, ErrorCode, ValidationError};
pub use genre::{Genre, GenrePolicy, CURATED_GENRES, GENRE_MAX_LENGTH, GENRE_MIN_LENGTH};
pub use ids::{GameId, PlayerId, SessionId};
pub use name::{Name, NameRules};
pub use policy::ValidationPolicy;
pub use timestamp::Timestamp;

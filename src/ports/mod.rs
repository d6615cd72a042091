//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Persistence Ports
//!
//! - `PlayerRepository`, `GameRepository`, `SessionRepository`
//! - `TokenRepository` - issued tokens keyed by value
//!
//! ## Authentication Ports
//!
//! - `TokenGenerator` - opaque token values
//! - `TokenValidator` - bearer value to player identity
//!
//! ## Time
//!
//! - `Clock` - source of `now` for application handlers

mod clock;
mod game_repository;
mod player_repository;
mod session_repository;
mod token_generator;
mod token_repository;
mod token_validator;

pub use clock::Clock;
pub use game_repository::GameRepository;
pub use player_repository::PlayerRepository;
pub use session_repository::SessionRepository;
pub use token_generator::TokenGenerator;
pub use token_repository::TokenRepository;
pub use token_validator::TokenValidator;

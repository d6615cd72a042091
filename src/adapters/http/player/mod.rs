//! HTTP adapter for player and authentication endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{AuthResponse, LoginRequest, PlayerResponse, RegisterPlayerRequest, TokenResponse};
pub use handlers::PlayerHandlers;
pub use routes::{auth_routes, player_routes};

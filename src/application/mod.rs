//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Following CQRS, it separates command handlers (write) from query handlers (read).

pub mod handlers;

pub use handlers::game::{
    CreateGameCommand, CreateGameHandler, GetGameHandler, GetGameQuery, ListGamesHandler,
    ListGamesQuery,
};
pub use handlers::player::{
    GetPlayerHandler, GetPlayerQuery, LoginCommand, LoginHandler, LoginResult,
    LogoutCommand, LogoutHandler,
    RegisterPlayerCommand, RegisterPlayerHandler, RegisterPlayerResult, TokenIssuer,
    ValidateTokenHandler,
};
pub use handlers::session::{
    CreateSessionCommand, CreateSessionHandler, EnrollPlayerCommand, EnrollPlayerHandler,
    GetSessionHandler, GetSessionQuery, ListSessionsHandler, ListSessionsQuery,
    RemovePlayerCommand, RemovePlayerHandler, SessionView, MAX_CAS_ATTEMPTS,
};

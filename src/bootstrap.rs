//! Wiring of ports, handlers and the HTTP state.

use std::sync::Arc;

use crate::adapters::auth::UuidTokenGenerator;
use crate::adapters::http::game::GameHandlers;
use crate::adapters::http::player::PlayerHandlers;
use crate::adapters::http::session::SessionHandlers;
use crate::adapters::http::ApiState;
use crate::adapters::memory::{
    InMemoryGameRepository, InMemoryPlayerRepository, InMemorySessionRepository,
    InMemoryTokenRepository,
};
use crate::application::handlers::game::{CreateGameHandler, GetGameHandler, ListGamesHandler};
use crate::application::handlers::player::{
    GetPlayerHandler, LoginHandler, LogoutHandler, RegisterPlayerHandler, TokenIssuer, ValidateTokenHandler,
};
use crate::application::handlers::session::{
    CreateSessionHandler, EnrollPlayerHandler, GetSessionHandler, ListSessionsHandler,
    RemovePlayerHandler,
};
use crate::domain::foundation::ValidationPolicy;
use crate::domain::player::TokenValidity;
use crate::ports::{
    Clock, GameRepository, PlayerRepository, SessionRepository, TokenGenerator, TokenRepository,
};

/// The ports every handler is built from.
#[derive(Clone)]
pub struct Ports {
    pub players: Arc<dyn PlayerRepository>,
    pub games: Arc<dyn GameRepository>,
    pub sessions: Arc<dyn SessionRepository>,
    pub tokens: Arc<dyn TokenRepository>,
    pub generator: Arc<dyn TokenGenerator>,
    pub clock: Arc<dyn Clock>,
}

impl Ports {
    /// In-memory repositories and UUID tokens around the given clock.
    pub fn in_memory(clock: Arc<dyn Clock>) -> Self {
        Self {
            players: Arc::new(InMemoryPlayerRepository::new()),
            games: Arc::new(InMemoryGameRepository::new()),
            sessions: Arc::new(InMemorySessionRepository::new()),
            tokens: Arc::new(InMemoryTokenRepository::new()),
            generator: Arc::new(UuidTokenGenerator),
            clock,
        }
    }
}

/// Builds the HTTP state from ports and validation settings.
pub fn api_state(ports: &Ports, policy: ValidationPolicy, validity: TokenValidity) -> ApiState {
    let issuer = TokenIssuer::new(
        ports.tokens.clone(),
        ports.generator.clone(),
        ports.clock.clone(),
        validity,
    );

    let players = PlayerHandlers::new(
        Arc::new(RegisterPlayerHandler::new(
            ports.players.clone(),
            issuer.clone(),
            policy.clone(),
        )),
        Arc::new(LoginHandler::new(ports.players.clone(), issuer)),
        Arc::new(LogoutHandler::new(ports.tokens.clone())),
        Arc::new(GetPlayerHandler::new(ports.players.clone())),
    );

    let games = GameHandlers::new(
        Arc::new(CreateGameHandler::new(ports.games.clone(), policy.clone())),
        Arc::new(GetGameHandler::new(ports.games.clone())),
        Arc::new(ListGamesHandler::new(ports.games.clone())),
    );

    let sessions = SessionHandlers::new(
        Arc::new(CreateSessionHandler::new(
            ports.sessions.clone(),
            ports.games.clone(),
            ports.players.clone(),
            ports.clock.clone(),
            policy,
        )),
        Arc::new(EnrollPlayerHandler::new(
            ports.sessions.clone(),
            ports.players.clone(),
            ports.clock.clone(),
        )),
        Arc::new(RemovePlayerHandler::new(
            ports.sessions.clone(),
            ports.clock.clone(),
        )),
        Arc::new(GetSessionHandler::new(
            ports.sessions.clone(),
            ports.clock.clone(),
        )),
        Arc::new(ListSessionsHandler::new(
            ports.sessions.clone(),
            ports.clock.clone(),
        )),
    );

    let auth = Arc::new(ValidateTokenHandler::new(
        ports.tokens.clone(),
        ports.players.clone(),
        ports.clock.clone(),
    ));

    ApiState {
        players,
        games,
        sessions,
        auth,
    }
}

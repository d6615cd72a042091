//! HTTP DTOs for player and authentication endpoints.

use serde::{Deserialize, Serialize};

use crate::application::handlers::player::{LoginResult, RegisterPlayerResult};
use crate::domain::player::{Player, Token};

/// Request to register a new player.
#[derive(Debug, Clone, Deserialize)]
pub struct RegisterPlayerRequest {
    pub name: String,
    pub email: String,
}

/// Request to obtain a fresh token.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    pub email: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct PlayerResponse {
    pub id: u64,
    pub name: String,
    pub email: String,
}

impl From<&Player> for PlayerResponse {
    fn from(player: &Player) -> Self {
        Self {
            id: player.id().value(),
            name: player.name().as_str().to_string(),
            email: player.email().as_str().to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct TokenResponse {
    pub value: String,
    pub expires_at: String,
}

impl From<&Token> for TokenResponse {
    fn from(token: &Token) -> Self {
        Self {
            value: token.value().as_str().to_string(),
            expires_at: token.expires_at().to_rfc3339(),
        }
    }
}

/// Player together with the token just issued to them.
#[derive(Debug, Clone, Serialize)]
pub struct AuthResponse {
    pub player: PlayerResponse,
    pub token: TokenResponse,
}

impl From<RegisterPlayerResult> for AuthResponse {
    fn from(result: RegisterPlayerResult) -> Self {
        Self {
            player: (&result.player).into(),
            token: (&result.token).into(),
        }
    }
}

impl From<LoginResult> for AuthResponse {
    fn from(result: LoginResult) -> Self {
        Self {
            player: (&result.player).into(),
            token: (&result.token).into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{Email, Name, PlayerId, Timestamp};
    use crate::domain::player::{TokenValidity, TokenValue};

    #[test]
    fn register_request_deserializes() {
        let json = r#"{"name": "Alice", "email": "alice@example.com"}"#;
        let req: RegisterPlayerRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.name, "Alice");
        assert_eq!(req.email, "alice@example.com");
    }

    #[test]
    fn auth_response_serializes_token_and_player() {
        let player = Player::new(
            PlayerId::new(4),
            Name::new("Alice").unwrap(),
            Email::new("alice@example.com").unwrap(),
        );
        let token = Token::issue(
            TokenValue::new("abc123").unwrap(),
            PlayerId::new(4),
            Timestamp::parse_rfc3339("2030-01-01T00:00:00Z").unwrap(),
            TokenValidity::default(),
        )
        .unwrap();

        let json = serde_json::to_value(AuthResponse::from(LoginResult { player, token })).unwrap();

        assert_eq!(json["player"]["id"], 4);
        assert_eq!(json["player"]["email"], "alice@example.com");
        assert_eq!(json["token"]["value"], "abc123");
        assert_eq!(json["token"]["expires_at"], "2030-01-02T00:00:00+00:00");
    }
}

//! Integration tests for the HTTP API.
//!
//! Drive the full router (middleware included) over in-memory adapters
//! with a fixed clock.

use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::Router;
use chrono::Duration as ChronoDuration;
use http::{Request, StatusCode};
use serde_json::{json, Value};
use tower::ServiceExt;

use game_sessions::adapters::auth::FixedClock;
use game_sessions::adapters::http::api_router;
use game_sessions::bootstrap::{api_state, Ports};
use game_sessions::domain::foundation::{Timestamp, ValidationPolicy};
use game_sessions::domain::player::TokenValidity;

// =============================================================================
// Test Infrastructure
// =============================================================================

struct TestApp {
    router: Router,
    clock: Arc<FixedClock>,
}

impl TestApp {
    fn new() -> Self {
        let clock = Arc::new(FixedClock::at(
            Timestamp::parse_rfc3339("2030-01-01T12:00:00Z").unwrap(),
        ));
        let ports = Ports::in_memory(clock.clone());
        let state = api_state(&ports, ValidationPolicy::default(), TokenValidity::default());
        Self {
            router: api_router(state, Duration::from_secs(5)),
            clock,
        }
    }

    async fn send(
        &self,
        method: &str,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header("Authorization", format!("Bearer {}", token));
        }
        let request = match body {
            Some(body) => builder
                .header("Content-Type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, value)
    }

    /// Registers a player and returns (id, token).
    async fn register(&self, name: &str) -> (u64, String) {
        let (status, body) = self
            .send(
                "POST",
                "/api/players",
                None,
                Some(json!({
                    "name": name,
                    "email": format!("{}@example.com", name.to_lowercase()),
                })),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED, "{}", body);
        (
            body["player"]["id"].as_u64().unwrap(),
            body["token"]["value"].as_str().unwrap().to_string(),
        )
    }

    async fn create_game(&self) -> u64 {
        let (status, body) = self
            .send(
                "POST",
                "/api/games",
                None,
                Some(json!({
                    "name": "Catan",
                    "developer": "Kosmos",
                    "genres": ["Strategy"],
                })),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED, "{}", body);
        body["id"].as_u64().unwrap()
    }

    async fn create_session(&self, game_id: u64, capacity: i64) -> u64 {
        let (status, body) = self
            .send(
                "POST",
                "/api/sessions",
                None,
                Some(json!({
                    "game_id": game_id,
                    "capacity": capacity,
                    "date": "2030-06-01T18:00:00Z",
                })),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED, "{}", body);
        body["id"].as_u64().unwrap()
    }
}

// =============================================================================
// Players and authentication
// =============================================================================

#[tokio::test]
async fn register_then_login_issues_new_token() {
    let app = TestApp::new();
    let (id, first_token) = app.register("Alice").await;

    let (status, body) = app
        .send(
            "POST",
            "/api/auth/login",
            None,
            Some(json!({ "email": "alice@example.com" })),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["player"]["id"].as_u64(), Some(id));
    assert_ne!(body["token"]["value"].as_str(), Some(first_token.as_str()));
}

#[tokio::test]
async fn duplicate_email_is_a_conflict() {
    let app = TestApp::new();
    app.register("Alice").await;

    let (status, body) = app
        .send(
            "POST",
            "/api/players",
            None,
            Some(json!({ "name": "Alice Again", "email": "alice@example.com" })),
        )
        .await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["code"], "CONFLICT");
}

#[tokio::test]
async fn invalid_registration_is_bad_request() {
    let app = TestApp::new();

    let (status, body) = app
        .send(
            "POST",
            "/api/players",
            None,
            Some(json!({ "name": "Al", "email": "al@example.com" })),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "OUT_OF_RANGE");
    assert_eq!(body["details"]["field"], "name");
}

#[tokio::test]
async fn login_with_unknown_email_is_unauthorized() {
    let app = TestApp::new();

    let (status, _) = app
        .send(
            "POST",
            "/api/auth/login",
            None,
            Some(json!({ "email": "nobody@example.com" })),
        )
        .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn get_player_handles_missing_and_malformed_ids() {
    let app = TestApp::new();
    let (id, _) = app.register("Alice").await;

    let (status, body) = app.send("GET", &format!("/api/players/{}", id), None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Alice");

    let (status, _) = app.send("GET", "/api/players/999", None, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = app.send("GET", "/api/players/abc", None, None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

// =============================================================================
// Games
// =============================================================================

#[tokio::test]
async fn uncurated_genre_is_rejected() {
    let app = TestApp::new();

    let (status, body) = app
        .send(
            "POST",
            "/api/games",
            None,
            Some(json!({ "name": "Tetris", "developer": "Pajitnov", "genres": ["Puzzle"] })),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "NOT_ALLOWED");
}

#[tokio::test]
async fn games_can_be_listed_by_genre() {
    let app = TestApp::new();
    let id = app.create_game().await;

    let (status, body) = app.send("GET", "/api/games?genre=Strategy", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 1);
    assert_eq!(body[0]["id"].as_u64(), Some(id));

    let (_, body) = app.send("GET", "/api/games?genre=Horror", None, None).await;
    assert!(body.as_array().unwrap().is_empty());
}

// =============================================================================
// Sessions
// =============================================================================

#[tokio::test]
async fn enrollment_lifecycle_over_http() {
    let app = TestApp::new();
    let (_alice, alice_token) = app.register("Alice").await;
    let (bruno, bruno_token) = app.register("Bruno").await;
    let (_chiara, chiara_token) = app.register("Chiara").await;
    let game = app.create_game().await;
    let session = app.create_session(game, 2).await;
    let enroll_uri = format!("/api/sessions/{}/players", session);

    let (status, body) = app.send("POST", &enroll_uri, Some(&alice_token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["state"], "OPEN");

    let (status, body) = app.send("POST", &enroll_uri, Some(&bruno_token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["state"], "CLOSE");

    let (status, body) = app.send("POST", &enroll_uri, Some(&chiara_token), None).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["code"], "SESSION_FULL");

    let (status, body) = app
        .send(
            "DELETE",
            &format!("{}/{}", enroll_uri, bruno),
            Some(&alice_token),
            None,
        )
        .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["code"], "FORBIDDEN");

    let (status, body) = app
        .send(
            "DELETE",
            &format!("{}/{}", enroll_uri, bruno),
            Some(&bruno_token),
            None,
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["state"], "OPEN");
    assert_eq!(body["available_slots"], 1);
}

#[tokio::test]
async fn duplicate_enrollment_is_a_conflict() {
    let app = TestApp::new();
    let (_, token) = app.register("Alice").await;
    let game = app.create_game().await;
    let session = app.create_session(game, 4).await;
    let uri = format!("/api/sessions/{}/players", session);

    app.send("POST", &uri, Some(&token), None).await;
    let (status, body) = app.send("POST", &uri, Some(&token), None).await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["code"], "ALREADY_ENROLLED");
}

#[tokio::test]
async fn enrollment_requires_authentication() {
    let app = TestApp::new();
    let game = app.create_game().await;
    let session = app.create_session(game, 4).await;
    let uri = format!("/api/sessions/{}/players", session);

    let (status, _) = app.send("POST", &uri, None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = app.send("POST", &uri, Some("not-a-token"), None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn expired_token_is_rejected() {
    let app = TestApp::new();
    let (_, token) = app.register("Alice").await;
    let game = app.create_game().await;
    let session = app.create_session(game, 4).await;

    app.clock.advance(ChronoDuration::hours(24));

    let (status, _) = app
        .send(
            "POST",
            &format!("/api/sessions/{}/players", session),
            Some(&token),
            None,
        )
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn session_closes_once_its_date_passes() {
    let app = TestApp::new();
    let game = app.create_game().await;
    let session = app.create_session(game, 4).await;

    let (_, body) = app.send("GET", "/api/sessions?open=true", None, None).await;
    assert_eq!(body.as_array().unwrap().len(), 1);

    app.clock
        .set(Timestamp::parse_rfc3339("2030-07-01T00:00:00Z").unwrap());

    let (status, body) = app
        .send("GET", &format!("/api/sessions/{}", session), None, None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["state"], "CLOSE");

    let (_, body) = app.send("GET", "/api/sessions?open=true", None, None).await;
    assert!(body.as_array().unwrap().is_empty());
    let (_, body) = app.send("GET", "/api/sessions", None, None).await;
    assert_eq!(body.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn session_for_unknown_game_is_not_found() {
    let app = TestApp::new();

    let (status, body) = app
        .send(
            "POST",
            "/api/sessions",
            None,
            Some(json!({ "game_id": 77, "capacity": 4, "date": "2030-06-01T18:00:00Z" })),
        )
        .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "GAME_NOT_FOUND");
}

#[tokio::test]
async fn capacity_above_ceiling_is_bad_request() {
    let app = TestApp::new();
    let game = app.create_game().await;

    let (status, body) = app
        .send(
            "POST",
            "/api/sessions",
            None,
            Some(json!({ "game_id": game, "capacity": 101, "date": "2030-06-01T18:00:00Z" })),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["details"]["field"], "capacity");
}

#[tokio::test]
async fn negative_ids_in_body_fail_identifier_validation() {
    let app = TestApp::new();
    let game = app.create_game().await;

    let (status, body) = app
        .send(
            "POST",
            "/api/sessions",
            None,
            Some(json!({ "game_id": -1, "capacity": 4, "date": "2030-06-01T18:00:00Z" })),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "OUT_OF_RANGE");
    assert_eq!(body["details"]["field"], "game_id");

    let (status, body) = app
        .send(
            "POST",
            "/api/sessions",
            None,
            Some(json!({
                "game_id": game,
                "capacity": 4,
                "date": "2030-06-01T18:00:00Z",
                "players": [-3]
            })),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "OUT_OF_RANGE");
    assert_eq!(body["details"]["field"], "player_id");
}

#[tokio::test]
async fn mistyped_body_is_a_json_bad_request() {
    let app = TestApp::new();
    let game = app.create_game().await;

    let (status, body) = app
        .send(
            "POST",
            "/api/sessions",
            None,
            Some(json!({ "game_id": game, "capacity": "two", "date": "2030-06-01T18:00:00Z" })),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "INVALID_FORMAT");

    let (status, body) = app
        .send(
            "POST",
            "/api/players",
            None,
            Some(json!({ "name": 42, "email": "alice@example.com" })),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "INVALID_FORMAT");
}

#[tokio::test]
async fn logout_invalidates_token() {
    let app = TestApp::new();
    let (_, token) = app.register("Alice").await;

    let (status, _) = app.send("POST", "/api/auth/logout", Some(&token), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = app.send("POST", "/api/auth/logout", Some(&token), None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

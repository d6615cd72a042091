//! HTTP handlers for game catalogue endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::{game_error, invalid_id};
use crate::adapters::http::extract::ApiJson;
use crate::application::handlers::game::{
    CreateGameCommand, CreateGameHandler, GetGameHandler, GetGameQuery, ListGamesHandler,
    ListGamesQuery,
};
use crate::domain::foundation::GameId;

use super::dto::{CreateGameRequest, GameResponse, ListGamesParams};

#[derive(Clone)]
pub struct GameHandlers {
    create_handler: Arc<CreateGameHandler>,
    get_handler: Arc<GetGameHandler>,
    list_handler: Arc<ListGamesHandler>,
}

impl GameHandlers {
    pub fn new(
        create_handler: Arc<CreateGameHandler>,
        get_handler: Arc<GetGameHandler>,
        list_handler: Arc<ListGamesHandler>,
    ) -> Self {
        Self {
            create_handler,
            get_handler,
            list_handler,
        }
    }
}

/// POST /api/games - Catalogue a game
pub async fn create_game(
    State(handlers): State<GameHandlers>,
    ApiJson(req): ApiJson<CreateGameRequest>,
) -> Response {
    let cmd = CreateGameCommand {
        name: req.name,
        developer: req.developer,
        genres: req.genres,
    };

    match handlers.create_handler.handle(cmd).await {
        Ok(game) => (StatusCode::CREATED, Json(GameResponse::from(&game))).into_response(),
        Err(e) => game_error(e),
    }
}

/// GET /api/games/:id - Game details
pub async fn get_game(
    State(handlers): State<GameHandlers>,
    Path(game_id): Path<String>,
) -> Response {
    let game_id = match game_id.parse::<GameId>() {
        Ok(id) => id,
        Err(e) => return invalid_id(e),
    };

    match handlers.get_handler.handle(GetGameQuery { game_id }).await {
        Ok(game) => (StatusCode::OK, Json(GameResponse::from(&game))).into_response(),
        Err(e) => game_error(e),
    }
}

/// GET /api/games - List games, optionally by genre
pub async fn list_games(
    State(handlers): State<GameHandlers>,
    Query(params): Query<ListGamesParams>,
) -> Response {
    match handlers
        .list_handler
        .handle(ListGamesQuery {
            genre: params.genre,
        })
        .await
    {
        Ok(games) => {
            let body: Vec<GameResponse> = games.iter().map(GameResponse::from).collect();
            (StatusCode::OK, Json(body)).into_response()
        }
        Err(e) => game_error(e),
    }
}

//! HTTP routes: `POST /api/ai-move`, `POST /api/random-move`, `GET /health`.

use std::sync::Arc;

use axum::{
    extract::{Json, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use chess_core::{play_move, FenError, GameStatus, MoveError, PlayedMove, Position};
use classical_engine::{EngineConfig, MoveSelector};
use random_engine::RandomEngine;
use serde::{Deserialize, Serialize};
use serde_json::json;
use thiserror::Error;
use tokio::task::JoinError;
use tracing::{info, warn};

#[derive(Clone)]
pub struct AppState {
    selector: Arc<MoveSelector>,
}

#[derive(Debug, Deserialize)]
pub struct MoveRequest {
    pub fen: String,
}

#[derive(Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveResponse {
    /// Position after the move
    pub fen: String,
    #[serde(rename = "move")]
    pub mv: String,
    pub score: i32,
}

impl From<PlayedMove> for MoveResponse {
    fn from(played: PlayedMove) -> Self {
        Self {
            mv: played.uci(),
            fen: played.fen,
            score: played.score,
        }
    }
}

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("malformed position: {0}")]
    Decode(#[from] FenError),

    #[error("no legal move available: {}", .0.as_str())]
    NoLegalMove(GameStatus),

    #[error("search task failed: {0}")]
    Internal(#[from] JoinError),
}

impl ApiError {
    /// `NoLegalMove` carries the reason the game has ended.
    fn from_move_error(err: MoveError, fen: &str) -> Self {
        match err {
            MoveError::Decode(e) => ApiError::Decode(e),
            MoveError::NoLegalMove => {
                let status = Position::from_fen(fen)
                    .map(|pos| pos.status())
                    .unwrap_or(GameStatus::Ongoing);
                ApiError::NoLegalMove(status)
            }
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Decode(_) => StatusCode::BAD_REQUEST,
            ApiError::NoLegalMove(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            ApiError::Decode(_) => "decode_error",
            ApiError::NoLegalMove(_) => "no_legal_move",
            ApiError::Internal(_) => "internal",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let mut body = json!({
            "error": self.to_string(),
            "kind": self.kind(),
        });
        if let ApiError::NoLegalMove(status) = &self {
            body["status"] = json!(status.as_str());
        }
        (self.status_code(), Json(body)).into_response()
    }
}

pub fn router(engine: EngineConfig) -> Router {
    let state = AppState {
        selector: Arc::new(MoveSelector::new(engine)),
    };

    Router::new()
        .route("/api/ai-move", post(ai_move))
        .route("/api/random-move", post(random_move))
        .route("/health", get(health))
        .with_state(state)
}

async fn ai_move(
    State(state): State<AppState>,
    Json(req): Json<MoveRequest>,
) -> Result<Json<MoveResponse>, ApiError> {
    let selector = Arc::clone(&state.selector);
    respond("ai", req.fen, move |fen| selector.select(fen)).await
}

async fn random_move(Json(req): Json<MoveRequest>) -> Result<Json<MoveResponse>, ApiError> {
    respond("random", req.fen, |fen| play_move(&mut RandomEngine::new(), fen, 1)).await
}

async fn health() -> &'static str {
    "ok"
}

/// Runs `pick` on the blocking pool so a search never stalls the runtime.
async fn respond<F>(
    engine: &'static str,
    fen: String,
    pick: F,
) -> Result<Json<MoveResponse>, ApiError>
where
    F: FnOnce(&str) -> Result<PlayedMove, MoveError> + Send + 'static,
{
    let outcome = tokio::task::spawn_blocking(move || {
        pick(&fen).map_err(|err| ApiError::from_move_error(err, &fen))
    })
    .await?;

    match outcome {
        Ok(played) => {
            info!(
                engine,
                mv = %played.uci(),
                score = played.score,
                nodes = played.nodes,
                "move served"
            );
            Ok(Json(played.into()))
        }
        Err(err) => {
            warn!(engine, kind = err.kind(), "move request rejected: {err}");
            Err(err)
        }
    }
}

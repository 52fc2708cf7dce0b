//! HTTP routes.

use std::sync::Arc;

use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::routing::{get, post};
use axum::{Json, Router};
use tower_http::cors::CorsLayer;
use tracing::debug;

use crate::engine::MoveService;
use crate::error::ServiceError;
use crate::request::{BotMoveRequest, BotMoveResponse, MoveRequest};

/// Text returned by the liveness route.
pub const LIVENESS_TEXT: &str = "gambit engine server is running";

/// Build the application router.
pub fn router(service: MoveService) -> Router {
    Router::new()
        .route("/", get(home))
        .route("/api/bot-move", post(bot_move))
        .layer(CorsLayer::permissive())
        .with_state(Arc::new(service))
}

async fn home() -> &'static str {
    LIVENESS_TEXT
}

async fn bot_move(
    State(service): State<Arc<MoveService>>,
    payload: Result<Json<BotMoveRequest>, JsonRejection>,
) -> Result<Json<BotMoveResponse>, ServiceError> {
    let body = match payload {
        Ok(Json(body)) => body,
        Err(rejection) => {
            debug!(error = %rejection, "unreadable request body");
            return Err(ServiceError::MissingFen);
        }
    };
    let request = MoveRequest::from_body(body, service.config())?;
    debug!(fen = %request.fen, depth = request.depth, "move requested");

    // The search is CPU-bound; keep it off the async workers.
    let response = tokio::task::spawn_blocking(move || service.choose_move(&request))
        .await
        .map_err(|e| ServiceError::Internal {
            reason: e.to_string(),
        })??;

    Ok(Json(response))
}

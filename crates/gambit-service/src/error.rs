//! Service errors and their HTTP mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use gambit_core::PositionError;
use serde_json::json;
use tracing::{error, warn};

/// Errors that can occur while answering a move request.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    /// The request body carried no usable `fen` field.
    #[error("FEN position is required")]
    MissingFen,

    /// The FEN could not be turned into a position.
    #[error(transparent)]
    InvalidFen(#[from] PositionError),

    /// The position is already checkmate or stalemate.
    #[error("no legal moves in position: {fen}")]
    NoLegalMoves {
        /// The terminal position.
        fen: String,
    },

    /// The search task failed unexpectedly.
    #[error("internal error: {reason}")]
    Internal {
        /// What went wrong, for the logs only.
        reason: String,
    },
}

impl ServiceError {
    /// HTTP status for this error.
    pub fn status(&self) -> StatusCode {
        match self {
            ServiceError::MissingFen | ServiceError::InvalidFen(_) => StatusCode::BAD_REQUEST,
            ServiceError::NoLegalMoves { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            ServiceError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match &self {
            ServiceError::Internal { reason } => {
                error!(%reason, "move request failed");
                "internal server error".to_string()
            }
            other => {
                warn!(error = %other, "move request rejected");
                other.to_string()
            }
        };
        (status, Json(json!({ "error": message }))).into_response()
    }
}

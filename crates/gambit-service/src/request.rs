//! Request and response bodies for `POST /api/bot-move`.

use std::time::Duration;

use gambit_engine::think_time;
use serde::{Deserialize, Serialize};

use crate::engine::ServiceConfig;
use crate::error::ServiceError;

/// JSON body of a move request.
///
/// All fields are optional on the wire so a missing `fen` is reported as
/// [`ServiceError::MissingFen`] rather than a deserialization failure.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct BotMoveRequest {
    /// Position to move in.
    #[serde(default)]
    pub fen: Option<String>,
    /// Requested search depth.
    #[serde(default)]
    pub depth: Option<i64>,
    /// Requested think time in seconds.
    #[serde(default)]
    pub time: Option<f64>,
}

/// JSON body of a successful move response.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct BotMoveResponse {
    /// Chosen move in coordinate notation, e.g. `e2e4`.
    #[serde(rename = "move")]
    pub mv: String,
    /// Wall-clock seconds spent.
    pub time: f64,
    /// Nodes searched (0 for book moves).
    pub nodes: u64,
    /// Deepest completed depth.
    pub depth: i32,
    /// Score of the chosen line from the mover's point of view.
    pub score: i32,
    /// `book`, `search` or `fallback`.
    pub source: String,
}

/// A validated move request.
#[derive(Debug, Clone, PartialEq)]
pub struct MoveRequest {
    /// Trimmed, non-empty FEN.
    pub fen: String,
    /// Depth clamped to `1..=max_depth`.
    pub depth: i32,
    /// Think time capped by the configured budget.
    pub think_time: Duration,
}

impl MoveRequest {
    /// Validate a request body against the service limits.
    pub fn from_body(body: BotMoveRequest, config: &ServiceConfig) -> Result<Self, ServiceError> {
        let fen = body
            .fen
            .map(|f| f.trim().to_string())
            .filter(|f| !f.is_empty())
            .ok_or(ServiceError::MissingFen)?;

        let max_depth = i64::from(config.max_depth.max(1));
        let depth = body
            .depth
            .unwrap_or(i64::from(config.default_depth))
            .clamp(1, max_depth);

        Ok(Self {
            fen,
            depth: i32::try_from(depth).unwrap_or(config.max_depth),
            think_time: think_time(body.time, config.time_budget),
        })
    }
}

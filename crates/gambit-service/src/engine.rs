//! Per-request move selection on top of the engine's searcher.

use std::time::Duration;

use gambit_core::{Game, Rules};
use gambit_engine::{MAX_DEPTH, SearchControl, Searcher};
use tracing::{debug, info};

use crate::error::ServiceError;
use crate::request::{BotMoveResponse, MoveRequest};

/// Limits applied to every request.
#[derive(Debug, Clone, PartialEq)]
pub struct ServiceConfig {
    /// Deepest search a client may ask for.
    pub max_depth: i32,
    /// Depth used when the request names none.
    pub default_depth: i32,
    /// Longest think time a request may use, and the default.
    pub time_budget: Duration,
}

impl ServiceConfig {
    /// Clamp the configured depths into the engine's supported range.
    pub fn normalized(self) -> Self {
        let max_depth = self.max_depth.clamp(1, MAX_DEPTH);
        Self {
            max_depth,
            default_depth: self.default_depth.clamp(1, max_depth),
            time_budget: self.time_budget,
        }
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            max_depth: 5,
            default_depth: 3,
            time_budget: Duration::from_secs(5),
        }
    }
}

/// Shared, read-only state behind the HTTP handlers.
///
/// Every request builds its own position, search context and deadline;
/// only the limits and the opening book are shared.
#[derive(Debug, Clone)]
pub struct MoveService {
    config: ServiceConfig,
    searcher: Searcher,
}

impl MoveService {
    /// Create a service with the built-in opening book.
    pub fn new(config: ServiceConfig) -> Self {
        Self::with_searcher(config, Searcher::new())
    }

    /// Create a service around a specific searcher.
    pub fn with_searcher(config: ServiceConfig, searcher: Searcher) -> Self {
        Self {
            config: config.normalized(),
            searcher,
        }
    }

    /// The active limits.
    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    /// Pick a move for a validated request. Blocks for up to the think time.
    pub fn choose_move(&self, request: &MoveRequest) -> Result<BotMoveResponse, ServiceError> {
        let mut game = Game::from_fen(&request.fen)?;
        if game.legal_moves().is_empty() {
            return Err(ServiceError::NoLegalMoves {
                fen: request.fen.clone(),
            });
        }

        let control = SearchControl::new_timed(request.think_time);
        let mut rng = rand::thread_rng();
        let result = self.searcher.search(
            &mut game,
            request.depth,
            &control,
            &mut rng,
            |depth, score, nodes, best| {
                debug!(depth, score, nodes, best = ?best.map(|m| m.to_uci()), "iteration");
            },
        );

        let mv = result.best_move.ok_or_else(|| ServiceError::NoLegalMoves {
            fen: request.fen.clone(),
        })?;

        info!(
            fen = %request.fen,
            requested_depth = request.depth,
            depth = result.depth,
            mv = %mv,
            nodes = result.nodes,
            elapsed_ms = result.elapsed.as_millis() as u64,
            source = %result.source,
            "move chosen"
        );

        Ok(BotMoveResponse {
            mv: mv.to_uci(),
            time: result.elapsed.as_secs_f64(),
            nodes: result.nodes,
            depth: result.depth,
            score: result.score,
            source: result.source.as_str().to_string(),
        })
    }
}

impl Default for MoveService {
    fn default() -> Self {
        Self::new(ServiceConfig::default())
    }
}

//! Iterative-deepening driver, move ordering and the negamax core.

pub mod control;
pub mod heuristics;
pub mod negamax;
pub mod ordering;

use std::fmt;
use std::time::Duration;

use gambit_core::{Move, Rules};
use rand::Rng;
use tracing::{debug, warn};

use crate::book::OpeningBook;
use crate::error::SearchError;
use crate::eval::score::{INFINITY, is_decisive};
use control::SearchControl;
use negamax::{MAX_DEPTH, SearchContext, negamax};

/// Where the chosen move came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveSource {
    /// The opening book had a legal candidate.
    Book,
    /// At least one search depth completed with a move.
    Search,
    /// No depth completed; the first legal move was taken.
    Fallback,
}

impl MoveSource {
    /// Lower-case name used on the wire and in logs.
    pub fn as_str(self) -> &'static str {
        match self {
            MoveSource::Book => "book",
            MoveSource::Search => "search",
            MoveSource::Fallback => "fallback",
        }
    }
}

impl fmt::Display for MoveSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of a completed search.
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// Best move found, `None` only when the position has no legal move.
    pub best_move: Option<Move>,
    /// Score of the deepest completed depth, from the mover's perspective.
    pub score: i32,
    /// Deepest completed depth (0 for book moves and fallbacks).
    pub depth: i32,
    /// Total nodes visited during the search.
    pub nodes: u64,
    /// Wall-clock time spent.
    pub elapsed: Duration,
    /// How the move was chosen.
    pub source: MoveSource,
}

/// Iterative-deepening searcher with an opening book.
#[derive(Debug, Clone)]
pub struct Searcher {
    book: OpeningBook,
}

impl Searcher {
    /// Create a searcher with the built-in opening book.
    pub fn new() -> Self {
        Self::with_book(OpeningBook::standard())
    }

    /// Create a searcher with a custom book.
    pub fn with_book(book: OpeningBook) -> Self {
        Self { book }
    }

    /// The opening book consulted before searching.
    pub fn book(&self) -> &OpeningBook {
        &self.book
    }

    /// Pick a move for the side to move.
    ///
    /// A book hit returns at once with zero nodes. Otherwise depth 1 always
    /// runs, then each deeper depth up to `max_depth` (clamped to
    /// `1..=MAX_DEPTH`) starts only while `control` allows it. Deepening
    /// stops once a depth reports a decisive score. A depth interrupted by
    /// the deadline is discarded and the last completed depth's move kept.
    ///
    /// Calls `on_iter(depth, score, nodes, best_move)` after each completed
    /// depth. The position is left as it was passed in.
    pub fn search<R, G, F>(
        &self,
        game: &mut R,
        max_depth: i32,
        control: &SearchControl,
        rng: &mut G,
        mut on_iter: F,
    ) -> SearchResult
    where
        R: Rules + ?Sized,
        G: Rng + ?Sized,
        F: FnMut(i32, i32, u64, Option<Move>),
    {
        if let Some(mv) = self.book.pick(game, rng) {
            debug!(%mv, "opening book hit");
            return SearchResult {
                best_move: Some(mv),
                score: 0,
                depth: 0,
                nodes: 0,
                elapsed: control.elapsed(),
                source: MoveSource::Book,
            };
        }

        let max_depth = max_depth.clamp(1, MAX_DEPTH);
        let mut ctx = SearchContext::new(control);

        // Track completed iteration results (for abort-safety)
        let mut completed_move = None;
        let mut completed_score = 0;
        let mut completed_depth = 0;

        for depth in 1..=max_depth {
            // Depth 1 always runs; deeper depths need time left
            if depth > 1 && control.should_stop_iterating() {
                break;
            }

            match negamax(game, depth, -INFINITY, INFINITY, true, &mut ctx) {
                Ok((score, mv)) => {
                    if mv.is_some() {
                        completed_move = mv;
                    }
                    completed_score = score;
                    completed_depth = depth;

                    debug!(
                        depth,
                        score,
                        nodes = ctx.nodes,
                        best = ?completed_move.map(|m| m.to_uci()),
                        "depth complete"
                    );
                    on_iter(depth, score, ctx.nodes, completed_move);

                    if is_decisive(score) {
                        break;
                    }
                }
                Err(SearchError::Cancelled) => {
                    debug!(depth, nodes = ctx.nodes, "deadline reached mid-depth");
                    break;
                }
                Err(err) => {
                    warn!(depth, error = %err, "search failed; keeping last completed depth");
                    break;
                }
            }
        }

        let (best_move, source) = match completed_move {
            Some(mv) => (Some(mv), MoveSource::Search),
            None => (game.legal_moves().first().copied(), MoveSource::Fallback),
        };

        SearchResult {
            best_move,
            score: completed_score,
            depth: completed_depth,
            nodes: ctx.nodes,
            elapsed: control.elapsed(),
            source,
        }
    }
}

impl Default for Searcher {
    fn default() -> Self {
        Self::new()
    }
}

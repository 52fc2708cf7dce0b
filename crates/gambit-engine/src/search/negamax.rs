//! Negamax alpha-beta search with null-move pruning and quiescence.

use gambit_core::{Move, Rules};

use crate::error::SearchError;
use crate::eval::phase::is_endgame;
use crate::eval::score::INFINITY;
use crate::evaluate;
use crate::search::control::SearchControl;
use crate::search::heuristics::{HistoryTable, KillerTable};
use crate::search::ordering::order_moves;

/// Maximum nominal search depth (in plies).
pub const MAX_DEPTH: i32 = 60;

/// Quiescence stops extending once its depth counter drops below this.
pub const QUIESCENCE_FLOOR: i32 = -4;

/// Minimum remaining depth for a null-move probe.
pub const NULL_MOVE_MIN_DEPTH: i32 = 3;

/// Depth removed from a null-move probe.
pub const NULL_MOVE_REDUCTION: i32 = 3;

/// Windows are widened only above this depth.
pub const ASPIRATION_DEPTH: i32 = 6;

/// Amount added on each side of a widened window.
pub const ASPIRATION_MARGIN: i32 = 50;

/// Search state threaded through negamax calls.
///
/// Built fresh for every top-level search; nothing here outlives a request.
pub struct SearchContext<'a> {
    /// Total nodes visited (negamax and quiescence).
    pub nodes: u64,
    /// Killer moves indexed by remaining depth.
    pub killers: KillerTable,
    /// History heuristic scores.
    pub history: HistoryTable,
    /// Deadline control.
    pub control: &'a SearchControl,
}

impl<'a> SearchContext<'a> {
    /// Create an empty context driven by `control`.
    pub fn new(control: &'a SearchControl) -> Self {
        Self {
            nodes: 0,
            killers: KillerTable::new(),
            history: HistoryTable::new(),
            control,
        }
    }
}

/// Negamax alpha-beta search.
///
/// Returns the best score for the side to move and the move achieving it,
/// or no move at a leaf or after a null-move cutoff. A beta cutoff returns
/// `beta` itself, which is a bound and not an exact score.
///
/// Above [`ASPIRATION_DEPTH`] the incoming window is widened by
/// [`ASPIRATION_MARGIN`] on both sides and never re-searched, so scores
/// from those depths may be inexact.
///
/// Every push is undone before an error propagates, so the position is
/// unchanged whether the call succeeds, fails or is cancelled.
pub fn negamax<R: Rules + ?Sized>(
    game: &mut R,
    depth: i32,
    mut alpha: i32,
    mut beta: i32,
    allow_null: bool,
    ctx: &mut SearchContext<'_>,
) -> Result<(i32, Option<Move>), SearchError> {
    ctx.control.check()?;
    ctx.nodes += 1;

    // Leaf node: drop into quiescence search
    if depth <= 0 {
        let score = quiescence(game, alpha, beta, 0, ctx)?;
        return Ok((score, None));
    }

    // Null-move pruning, disabled for the whole probe subtree
    if allow_null && depth >= NULL_MOVE_MIN_DEPTH && !game.is_check() && !is_endgame(game) {
        game.push_null()?;
        let probe = negamax(game, depth - NULL_MOVE_REDUCTION, -beta, -beta + 1, false, ctx);
        game.undo()?;
        let null_score = -probe?.0;
        if null_score >= beta {
            return Ok((beta, None));
        }
    }

    let moves = game.legal_moves();
    if moves.is_empty() {
        let score = if game.is_check() { -INFINITY } else { 0 };
        return Ok((score, None));
    }

    let moves = order_moves(game, moves, depth, &ctx.killers, &ctx.history);

    if depth > ASPIRATION_DEPTH {
        alpha = (alpha - ASPIRATION_MARGIN).max(-INFINITY);
        beta = (beta + ASPIRATION_MARGIN).min(INFINITY);
    }

    let mut best_score = -INFINITY;
    let mut best_move = None;

    for mv in moves {
        let quiet = !game.is_capture(mv);

        game.push(mv)?;
        let child = negamax(game, depth - 1, -beta, -alpha, allow_null, ctx);
        game.undo()?;
        let score = -child?.0;

        if score > best_score {
            best_score = score;
            best_move = Some(mv);
            alpha = alpha.max(score);
            if quiet {
                ctx.history.credit(mv, depth);
            }
        }

        if alpha >= beta {
            if quiet {
                ctx.killers.store(depth, mv);
            }
            return Ok((beta, Some(mv)));
        }
    }

    Ok((best_score, best_move))
}

/// Quiescence search: resolve capture sequences before trusting the
/// static evaluation.
///
/// `depth` counts down from zero; once it falls below
/// [`QUIESCENCE_FLOOR`] the stand-pat bound is returned without looking
/// at captures.
pub fn quiescence<R: Rules + ?Sized>(
    game: &mut R,
    mut alpha: i32,
    beta: i32,
    depth: i32,
    ctx: &mut SearchContext<'_>,
) -> Result<i32, SearchError> {
    ctx.control.check()?;
    ctx.nodes += 1;

    // Stand-pat: the side to move can choose not to capture
    let stand_pat = evaluate(game);
    if stand_pat >= beta {
        return Ok(beta);
    }
    alpha = alpha.max(stand_pat);

    if depth < QUIESCENCE_FLOOR {
        return Ok(alpha);
    }

    let captures = game.capture_moves();
    let captures = order_moves(game, captures, depth, &ctx.killers, &ctx.history);

    for mv in captures {
        game.push(mv)?;
        let child = quiescence(game, -beta, -alpha, depth - 1, ctx);
        game.undo()?;
        let score = -child?;

        if score >= beta {
            return Ok(beta);
        }
        alpha = alpha.max(score);
    }

    Ok(alpha)
}

//! Move ordering via MVV-LVA, killer moves, and the history heuristic.

use gambit_core::{Move, PieceKind, Rules};

use crate::search::heuristics::{HistoryTable, KillerTable};

/// Base score for any capture, above every quiet move band.
const CAPTURE_BASE: i32 = 10_000;

/// Multiplier applied to the victim's ordinal.
const VICTIM_WEIGHT: i32 = 100;

/// Scores for the first and second killer slot.
const KILLER_SCORES: [i32; 2] = [9_000, 8_000];

/// Score a move for ordering purposes. Higher scores are searched first.
///
/// Score bands:
/// - Captures: `10_000 + 100 * victim - attacker` by ordinal (pawn 1 .. king 6),
///   en passant counting the victim as a pawn
/// - First killer at this depth: 9,000
/// - Second killer at this depth: 8,000
///
/// The history entry for the move's squares is added in every band.
pub fn score_move<R: Rules + ?Sized>(
    game: &R,
    mv: Move,
    depth: i32,
    killers: &KillerTable,
    history: &HistoryTable,
) -> i32 {
    let base = if game.is_capture(mv) {
        let victim = game
            .piece_at(mv.to())
            .map_or(PieceKind::Pawn, |p| p.kind)
            .ordinal();
        let attacker = game.piece_at(mv.from()).map_or(0, |p| p.kind.ordinal());
        CAPTURE_BASE + VICTIM_WEIGHT * victim - attacker
    } else {
        killers
            .slot_of(depth, mv)
            .map_or(0, |slot| KILLER_SCORES[slot])
    };
    base + history.score(mv)
}

/// Sort `moves` by descending [`score_move`].
///
/// The sort is stable: equally scored moves keep the rules engine's
/// enumeration order.
pub fn order_moves<R: Rules + ?Sized>(
    game: &R,
    moves: Vec<Move>,
    depth: i32,
    killers: &KillerTable,
    history: &HistoryTable,
) -> Vec<Move> {
    let mut scored: Vec<(i32, Move)> = moves
        .into_iter()
        .map(|mv| (score_move(game, mv, depth, killers, history), mv))
        .collect();
    scored.sort_by(|a, b| b.0.cmp(&a.0));
    scored.into_iter().map(|(_, mv)| mv).collect()
}

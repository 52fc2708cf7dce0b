//! Score scale shared by evaluation and search.
//!
//! Scores are centipawns from the point of view of the side to move.

/// Score of a position where the side to move has been checkmated, negated.
///
/// Also the outer bound of every search window.
pub const INFINITY: i32 = 1_000_000;

/// Magnitude above which a score means a forced win or loss.
pub const DECISIVE: i32 = 5_000;

/// Whether `score` signals a forced result.
#[inline]
pub const fn is_decisive(score: i32) -> bool {
    score.abs() > DECISIVE
}

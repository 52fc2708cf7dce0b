//! Material, placement, and bishop-pair evaluation.
//!
//! All scores are returned from White's perspective (positive = White ahead).

use gambit_core::{Color, PieceKind, Rules};

use crate::eval::pst::pst_value;

/// Base material values indexed by [`PieceKind::index()`].
///
/// | Piece  | Value |
/// |--------|-------|
/// | Pawn   |   100 |
/// | Knight |   325 |
/// | Bishop |   335 |
/// | Rook   |   500 |
/// | Queen  |   975 |
/// | King   | 20000 |
pub const MATERIAL_VALUE: [i32; PieceKind::COUNT] = [100, 325, 335, 500, 975, 20_000];

/// Bonus awarded to a side that has two or more bishops.
pub const BISHOP_PAIR_BONUS: i32 = 50;

/// Sum of base values and placement bonuses for every piece on the board.
pub fn material_and_placement<R: Rules + ?Sized>(game: &R, endgame: bool) -> i32 {
    let mut score = 0;

    for color in Color::ALL {
        let mut side = 0;
        for kind in PieceKind::ALL {
            for sq in game.pieces(color, kind) {
                side += MATERIAL_VALUE[kind.index()] + pst_value(kind, color, sq, endgame);
            }
        }
        score += side * color.sign();
    }

    score
}

/// [`BISHOP_PAIR_BONUS`] for each side owning at least two bishops.
pub fn bishop_pair<R: Rules + ?Sized>(game: &R) -> i32 {
    Color::ALL
        .into_iter()
        .filter(|&color| game.pieces(color, PieceKind::Bishop).len() >= 2)
        .map(|color| BISHOP_PAIR_BONUS * color.sign())
        .sum()
}

//! King safety: pawn shield and enemy piece tropism.
//!
//! Applied in the middlegame only. Scores are from White's perspective.

use gambit_core::{Color, Piece, PieceKind, Rules, Square};

/// Bonus per friendly pawn in the two ranks in front of the king.
const SHIELD_PAWN_BONUS: i32 = 10;

/// Numerator of the tropism penalty; divided by the distance to the king.
const TROPISM_WEIGHT: i32 = 15;

/// Pieces whose proximity to the enemy king is penalised.
const TROPISM_KINDS: [PieceKind; 4] = [
    PieceKind::Queen,
    PieceKind::Rook,
    PieceKind::Bishop,
    PieceKind::Knight,
];

/// Count friendly pawns on the king's file and both neighbours, one and two
/// ranks ahead.
fn shield_pawns<R: Rules + ?Sized>(game: &R, king: Square, color: Color) -> i32 {
    let pawn = Piece::new(PieceKind::Pawn, color);
    let mut count = 0;

    for step in 1..=2i8 {
        let rank = king.rank() as i8 + step * color.forward();
        for df in -1..=1i8 {
            let file = king.file() as i8 + df;
            if !(0..8).contains(&rank) || !(0..8).contains(&file) {
                continue;
            }
            if let Some(sq) = Square::from_coords(file as u8, rank as u8)
                && game.piece_at(sq) == Some(pawn)
            {
                count += 1;
            }
        }
    }

    count
}

/// Penalty from enemy pieces near the king, as a non-positive number.
fn tropism<R: Rules + ?Sized>(game: &R, king: Square, color: Color) -> i32 {
    let mut penalty = 0;
    for kind in TROPISM_KINDS {
        for sq in game.pieces(!color, kind) {
            let distance = i32::from(king.distance(sq).max(1));
            penalty -= TROPISM_WEIGHT / distance;
        }
    }
    penalty
}

/// Evaluate king safety from White's perspective.
pub fn evaluate_king_safety<R: Rules + ?Sized>(game: &R) -> i32 {
    let mut score = 0;

    for color in Color::ALL {
        let Some(king) = game.king_square(color) else {
            continue;
        };
        let side = shield_pawns(game, king, color) * SHIELD_PAWN_BONUS + tropism(game, king, color);
        score += side * color.sign();
    }

    score
}

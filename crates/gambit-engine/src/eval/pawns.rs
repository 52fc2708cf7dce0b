//! Pawn structure evaluation: doubled and isolated pawns.
//!
//! All scores are from White's perspective (positive = White advantage).

use gambit_core::{Color, PieceKind, Rules};

/// Penalty per file, multiplied by the square of the pawns beyond the first.
const DOUBLED_PAWN_PENALTY: i32 = -20;

/// Penalty per file holding pawns with no friendly pawn on an adjacent file.
const ISOLATED_PAWN_PENALTY: i32 = -15;

/// Number of pawns of `color` on each file.
fn file_counts<R: Rules + ?Sized>(game: &R, color: Color) -> [i32; 8] {
    let mut counts = [0; 8];
    for sq in game.pieces(color, PieceKind::Pawn) {
        counts[sq.file() as usize] += 1;
    }
    counts
}

/// Structure score for one side's pawns, as a (non-positive) penalty.
fn side_penalty(counts: &[i32; 8]) -> i32 {
    let mut penalty = 0;

    for file in 0..8 {
        let count = counts[file];
        if count == 0 {
            continue;
        }

        if count > 1 {
            let extra = count - 1;
            penalty += DOUBLED_PAWN_PENALTY * extra * extra;
        }

        let left = file > 0 && counts[file - 1] > 0;
        let right = file < 7 && counts[file + 1] > 0;
        if !left && !right {
            penalty += ISOLATED_PAWN_PENALTY;
        }
    }

    penalty
}

/// Evaluate pawn structure from White's perspective.
pub fn evaluate_pawns<R: Rules + ?Sized>(game: &R) -> i32 {
    Color::ALL
        .into_iter()
        .map(|color| side_penalty(&file_counts(game, color)) * color.sign())
        .sum()
}

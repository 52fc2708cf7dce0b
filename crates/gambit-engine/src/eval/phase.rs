//! Middlegame/endgame phase detection.

use gambit_core::{Color, PieceKind, Rules};

/// Largest number of non-pawn, non-king pieces (queens included) for which a
/// position with one queen per side still counts as an endgame.
pub const ENDGAME_PIECE_LIMIT: usize = 6;

/// Whether the position should be evaluated with endgame tables.
///
/// True when no queens remain, or when each side has exactly one queen and
/// at most [`ENDGAME_PIECE_LIMIT`] knights, bishops, rooks and queens are
/// left on the board in total.
pub fn is_endgame<R: Rules + ?Sized>(game: &R) -> bool {
    let white_queens = game.pieces(Color::White, PieceKind::Queen).len();
    let black_queens = game.pieces(Color::Black, PieceKind::Queen).len();

    if white_queens + black_queens == 0 {
        return true;
    }
    if white_queens != 1 || black_queens != 1 {
        return false;
    }

    let pieces: usize = Color::ALL
        .into_iter()
        .flat_map(|color| {
            [PieceKind::Knight, PieceKind::Bishop, PieceKind::Rook, PieceKind::Queen]
                .map(|kind| game.pieces(color, kind).len())
        })
        .sum();
    pieces <= ENDGAME_PIECE_LIMIT
}

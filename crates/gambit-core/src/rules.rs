//! The capability set the search requires from a rules engine.

use crate::chess_move::Move;
use crate::color::Color;
use crate::error::RulesError;
use crate::fen;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;

/// A mutable chess position driven through push/undo.
///
/// The position is the single source of truth: callers never hold a copy,
/// they push a move, inspect or recurse, then undo it. Pushes and undos
/// nest strictly (LIFO), and after a push/undo pair the position is
/// identical to what it was before the push.
pub trait Rules {
    /// All legal moves in the current position.
    ///
    /// The order is unspecified but deterministic for a given position.
    fn legal_moves(&self) -> Vec<Move>;

    /// Legal moves that capture a piece, en passant included.
    fn capture_moves(&self) -> Vec<Move> {
        self.legal_moves()
            .into_iter()
            .filter(|&mv| self.is_capture(mv))
            .collect()
    }

    /// Play `mv`, remembering the prior state for [`undo`](Rules::undo).
    fn push(&mut self, mv: Move) -> Result<(), RulesError>;

    /// Pass the turn without moving a piece.
    ///
    /// Fails with [`RulesError::NullMoveInCheck`] when the side to move is
    /// in check. Reverted with [`undo`](Rules::undo) like any other push.
    fn push_null(&mut self) -> Result<(), RulesError>;

    /// Revert the most recent push.
    fn undo(&mut self) -> Result<(), RulesError>;

    /// Whether the side to move is in check.
    fn is_check(&self) -> bool;

    /// Whether the side to move is checkmated.
    fn is_checkmate(&self) -> bool;

    /// Whether the side to move has no legal moves and is not in check.
    fn is_stalemate(&self) -> bool;

    /// Whether neither side can possibly deliver mate.
    fn is_insufficient_material(&self) -> bool;

    /// Whether `mv` captures a piece in the current position.
    fn is_capture(&self, mv: Move) -> bool;

    /// The piece standing on `sq`, if any.
    fn piece_at(&self, sq: Square) -> Option<Piece>;

    /// Which side moves next.
    fn side_to_move(&self) -> Color;

    /// Squares holding pieces of the given color and kind, in index order.
    fn pieces(&self, color: Color, kind: PieceKind) -> Vec<Square>;

    /// The king's square for `color`.
    fn king_square(&self, color: Color) -> Option<Square> {
        self.pieces(color, PieceKind::King).first().copied()
    }

    /// Canonical string form of the position (full FEN).
    fn canonical(&self) -> String;

    /// Placement and side-to-move fields of the canonical form.
    fn book_key(&self) -> String {
        fen::book_key(&self.canonical())
    }
}

//! Colored chess piece.

use std::fmt;

use crate::color::Color;
use crate::piece_kind::PieceKind;

/// A piece of a given kind belonging to a given side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    /// The owning side.
    pub color: Color,
    /// What kind of piece it is.
    pub kind: PieceKind,
}

impl Piece {
    /// Create a piece.
    #[inline]
    pub const fn new(kind: PieceKind, color: Color) -> Piece {
        Piece { color, kind }
    }

    /// FEN character: uppercase for White, lowercase for Black.
    pub const fn fen_char(self) -> char {
        let c = self.kind.fen_char();
        match self.color {
            Color::White => c.to_ascii_uppercase(),
            Color::Black => c,
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.fen_char())
    }
}

impl From<shakmaty::Piece> for Piece {
    fn from(piece: shakmaty::Piece) -> Piece {
        Piece::new(piece.role.into(), piece.color.into())
    }
}

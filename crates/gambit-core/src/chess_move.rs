//! Chess move as an origin/destination pair with optional promotion.

use std::fmt;

use crate::piece_kind::PieceKind;
use crate::square::Square;

/// A move from one square to another.
///
/// Moves are produced by a [`Rules`](crate::Rules) implementation and are
/// only ever compared by equality. Castling is encoded as the king's
/// two-square step (`e1g1`).
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    from: Square,
    to: Square,
    promotion: Option<PieceKind>,
}

impl Move {
    /// Create a move without promotion.
    #[inline]
    pub const fn new(from: Square, to: Square) -> Move {
        Move {
            from,
            to,
            promotion: None,
        }
    }

    /// Create a pawn move that promotes to `kind`.
    #[inline]
    pub const fn with_promotion(from: Square, to: Square, kind: PieceKind) -> Move {
        Move {
            from,
            to,
            promotion: Some(kind),
        }
    }

    /// Origin square.
    #[inline]
    pub const fn from(self) -> Square {
        self.from
    }

    /// Destination square.
    #[inline]
    pub const fn to(self) -> Square {
        self.to
    }

    /// Piece kind a pawn promotes to, if any.
    #[inline]
    pub const fn promotion(self) -> Option<PieceKind> {
        self.promotion
    }

    /// The square-for-square mirror of this move on a board turned half a
    /// revolution.
    pub const fn rotate(self) -> Move {
        Move {
            from: self.from.rotate(),
            to: self.to.rotate(),
            promotion: self.promotion,
        }
    }

    /// Format as UCI coordinate notation (e.g. "e2e4", "e7e8q").
    pub fn to_uci(self) -> String {
        self.to_string()
    }

    /// Parse UCI coordinate notation. Returns `None` on malformed input;
    /// whether the move is legal is up to the rules engine.
    pub fn from_uci(s: &str) -> Option<Move> {
        if !s.is_ascii() || !(4..=5).contains(&s.len()) {
            return None;
        }
        let from = Square::from_algebraic(&s[0..2])?;
        let to = Square::from_algebraic(&s[2..4])?;
        match s[4..].chars().next() {
            None => Some(Move::new(from, to)),
            Some(c) => match PieceKind::from_fen_char(c)? {
                PieceKind::Pawn | PieceKind::King => None,
                kind => Some(Move::with_promotion(from, to, kind)),
            },
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)?;
        if let Some(kind) = self.promotion {
            write!(f, "{}", kind.fen_char())?;
        }
        Ok(())
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({self})")
    }
}

//! Chess piece kinds.

use std::fmt;

/// The kind of a chess piece, without color information.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum PieceKind {
    Pawn = 0,
    Knight = 1,
    Bishop = 2,
    Rook = 3,
    Queen = 4,
    King = 5,
}

impl PieceKind {
    /// Total number of piece kinds.
    pub const COUNT: usize = 6;

    /// All piece kinds in index order.
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];

    /// Return the index (0..5).
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Ordinal rank of the kind, Pawn = 1 up to King = 6.
    ///
    /// Used by capture ordering where only relative worth matters.
    #[inline]
    pub const fn ordinal(self) -> i32 {
        self as i32 + 1
    }

    /// Return the UCI/FEN character for this piece kind (lowercase).
    #[inline]
    pub const fn fen_char(self) -> char {
        match self {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        }
    }

    /// Parse a FEN character (case-insensitive) into a piece kind.
    #[inline]
    pub fn from_fen_char(c: char) -> Option<PieceKind> {
        match c.to_ascii_lowercase() {
            'p' => Some(PieceKind::Pawn),
            'n' => Some(PieceKind::Knight),
            'b' => Some(PieceKind::Bishop),
            'r' => Some(PieceKind::Rook),
            'q' => Some(PieceKind::Queen),
            'k' => Some(PieceKind::King),
            _ => None,
        }
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.fen_char())
    }
}

impl From<shakmaty::Role> for PieceKind {
    fn from(role: shakmaty::Role) -> PieceKind {
        match role {
            shakmaty::Role::Pawn => PieceKind::Pawn,
            shakmaty::Role::Knight => PieceKind::Knight,
            shakmaty::Role::Bishop => PieceKind::Bishop,
            shakmaty::Role::Rook => PieceKind::Rook,
            shakmaty::Role::Queen => PieceKind::Queen,
            shakmaty::Role::King => PieceKind::King,
        }
    }
}

impl From<PieceKind> for shakmaty::Role {
    fn from(kind: PieceKind) -> shakmaty::Role {
        match kind {
            PieceKind::Pawn => shakmaty::Role::Pawn,
            PieceKind::Knight => shakmaty::Role::Knight,
            PieceKind::Bishop => shakmaty::Role::Bishop,
            PieceKind::Rook => shakmaty::Role::Rook,
            PieceKind::Queen => shakmaty::Role::Queen,
            PieceKind::King => shakmaty::Role::King,
        }
    }
}

//! Chess board squares using Little-Endian Rank-File (LERF) encoding.

use std::fmt;

/// A square on the chess board, encoded as a `u8` in LERF format.
///
/// Index = rank * 8 + file, so A1 = 0, B1 = 1, ..., H8 = 63.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square(u8);

impl Square {
    /// Total number of squares.
    pub const COUNT: usize = 64;

    /// Create a square from a zero-based file and rank, returning `None` if
    /// either is off the board.
    #[inline]
    pub const fn from_coords(file: u8, rank: u8) -> Option<Square> {
        if file < 8 && rank < 8 {
            Some(Square(rank * 8 + file))
        } else {
            None
        }
    }

    /// Create a square from a zero-based index, returning `None` if out of range.
    #[inline]
    pub const fn from_index(index: u8) -> Option<Square> {
        if index < 64 {
            Some(Square(index))
        } else {
            None
        }
    }

    /// Parse an algebraic notation string (e.g. "e4") into a square.
    pub fn from_algebraic(s: &str) -> Option<Square> {
        let &[file_byte, rank_byte] = s.as_bytes() else {
            return None;
        };
        if !(b'a'..=b'h').contains(&file_byte) || !(b'1'..=b'8').contains(&rank_byte) {
            return None;
        }
        Square::from_coords(file_byte - b'a', rank_byte - b'1')
    }

    /// Return the zero-based index (0..63).
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Zero-based file, 0 = a-file.
    #[inline]
    pub const fn file(self) -> u8 {
        self.0 % 8
    }

    /// Zero-based rank, 0 = first rank.
    #[inline]
    pub const fn rank(self) -> u8 {
        self.0 / 8
    }

    /// The square at `63 - index`: the board turned half a revolution.
    ///
    /// Black's placement lookups use this so both colors share one table.
    #[inline]
    pub const fn rotate(self) -> Square {
        Square(63 - self.0)
    }

    /// King-move (Chebyshev) distance between two squares.
    #[inline]
    pub const fn distance(self, other: Square) -> u8 {
        let df = self.file().abs_diff(other.file());
        let dr = self.rank().abs_diff(other.rank());
        if df > dr { df } else { dr }
    }

    /// Iterate over all 64 squares in index order (A1, B1, ..., H8).
    pub fn all() -> impl Iterator<Item = Square> {
        (0u8..64).map(Square)
    }

    pub const A1: Square = Square(0);
    pub const B1: Square = Square(1);
    pub const C1: Square = Square(2);
    pub const D1: Square = Square(3);
    pub const E1: Square = Square(4);
    pub const F1: Square = Square(5);
    pub const G1: Square = Square(6);
    pub const H1: Square = Square(7);
    pub const A2: Square = Square(8);
    pub const D2: Square = Square(11);
    pub const E2: Square = Square(12);
    pub const F2: Square = Square(13);
    pub const G2: Square = Square(14);
    pub const H2: Square = Square(15);
    pub const C3: Square = Square(18);
    pub const F3: Square = Square(21);
    pub const C4: Square = Square(26);
    pub const D4: Square = Square(27);
    pub const E4: Square = Square(28);
    pub const D5: Square = Square(35);
    pub const E5: Square = Square(36);
    pub const C6: Square = Square(42);
    pub const F6: Square = Square(45);
    pub const E7: Square = Square(52);
    pub const F7: Square = Square(53);
    pub const G7: Square = Square(54);
    pub const A8: Square = Square(56);
    pub const E8: Square = Square(60);
    pub const G8: Square = Square(62);
    pub const H8: Square = Square(63);
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (b'a' + self.file()) as char, (b'1' + self.rank()) as char)
    }
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Square({self})")
    }
}

impl From<shakmaty::Square> for Square {
    fn from(sq: shakmaty::Square) -> Square {
        Square(u32::from(sq) as u8)
    }
}

impl From<Square> for shakmaty::Square {
    fn from(sq: Square) -> shakmaty::Square {
        shakmaty::Square::new(u32::from(sq.0))
    }
}

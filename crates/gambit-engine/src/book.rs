//! Opening book keyed by piece placement and side to move.

use std::collections::HashMap;

use gambit_core::{Move, Rules};
use rand::Rng;
use rand::seq::SliceRandom;

/// Built-in book lines: placement + turn key, then candidate moves.
const STANDARD_LINES: &[(&str, &[&str])] = &[
    (
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w",
        &["e2e4", "d2d4", "c2c4", "g1f3"],
    ),
    (
        "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b",
        &["e7e5", "c7c5", "e7e6", "c7c6"],
    ),
    (
        "rnbqkbnr/pppppppp/8/8/3P4/8/PPP1PPPP/RNBQKBNR b",
        &["d7d5", "g8f6", "e7e6"],
    ),
    (
        "rnbqkbnr/pppppppp/8/8/2P5/8/PP1PPPPP/RNBQKBNR b",
        &["e7e5", "g8f6", "c7c5"],
    ),
    (
        "rnbqkbnr/pppppppp/8/8/8/5N2/PPPPPPPP/RNBQKB1R b",
        &["d7d5", "g8f6"],
    ),
];

/// Static table from position key to candidate moves.
#[derive(Debug, Clone, Default)]
pub struct OpeningBook {
    lines: HashMap<String, Vec<Move>>,
}

impl OpeningBook {
    /// The built-in book: the four main first moves and common replies.
    pub fn standard() -> Self {
        let mut book = Self::empty();
        for (key, moves) in STANDARD_LINES {
            for mv in moves.iter().filter_map(|uci| Move::from_uci(uci)) {
                book.insert(key, mv);
            }
        }
        book
    }

    /// A book with no entries.
    pub fn empty() -> Self {
        Self {
            lines: HashMap::new(),
        }
    }

    /// Add `mv` as a candidate for the position with the given key.
    pub fn insert(&mut self, key: &str, mv: Move) {
        let moves = self.lines.entry(key.to_string()).or_default();
        if !moves.contains(&mv) {
            moves.push(mv);
        }
    }

    /// Number of positions in the book.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Whether the book has no positions.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Listed moves for the current position that are also legal there.
    pub fn candidates<R: Rules + ?Sized>(&self, game: &R) -> Vec<Move> {
        let Some(listed) = self.lines.get(&game.book_key()) else {
            return Vec::new();
        };
        let legal = game.legal_moves();
        listed
            .iter()
            .copied()
            .filter(|mv| legal.contains(mv))
            .collect()
    }

    /// Choose uniformly among [`candidates`](Self::candidates).
    pub fn pick<R, G>(&self, game: &R, rng: &mut G) -> Option<Move>
    where
        R: Rules + ?Sized,
        G: Rng + ?Sized,
    {
        self.candidates(game).choose(rng).copied()
    }
}

//! FEN constants and helpers.

/// The FEN string for the standard starting position.
pub const STARTING_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Reduce a FEN to its piece placement and side-to-move fields.
///
/// `"rnbqkbnr/.../RNBQKBNR w KQkq - 0 1"` becomes
/// `"rnbqkbnr/.../RNBQKBNR w"`. Missing fields are simply left out.
pub fn book_key(fen: &str) -> String {
    fen.split_whitespace().take(2).collect::<Vec<_>>().join(" ")
}

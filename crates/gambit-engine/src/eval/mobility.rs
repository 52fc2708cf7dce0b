//! Mobility term.
//!
//! Only the side to move's legal moves are counted: the opponent's replies
//! are not generated. The count is credited to the mover in White-positive
//! orientation, so after the final re-orientation it always adds to the
//! mover's score.

use gambit_core::Color;

/// Mobility contribution from White's perspective.
#[inline]
pub fn mobility(legal_moves: usize, side_to_move: Color) -> i32 {
    legal_moves as i32 * side_to_move.sign()
}

#[cfg(test)]
mod tests {
    use gambit_core::Color;

    use super::mobility;

    #[test]
    fn credited_to_the_mover() {
        assert_eq!(mobility(20, Color::White), 20);
        assert_eq!(mobility(20, Color::Black), -20);
        assert_eq!(mobility(0, Color::Black), 0);
    }
}

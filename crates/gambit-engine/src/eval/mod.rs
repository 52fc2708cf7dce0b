//! Static evaluation.
//!
//! Every term is computed from White's perspective and the total is turned
//! around at the end, so [`evaluate`] always answers "how good is this for
//! the side about to move".

pub mod king_safety;
pub mod material;
pub mod mobility;
pub mod pawns;
pub mod phase;
pub mod pst;
pub mod score;

use gambit_core::Rules;

use king_safety::evaluate_king_safety;
use material::{bishop_pair, material_and_placement};
use mobility::mobility;
use pawns::evaluate_pawns;
use phase::is_endgame;
use score::INFINITY;

/// Score the current position without searching.
///
/// Checkmate is `-INFINITY` (the mover is the mated side); stalemate and
/// insufficient material are draws.
pub fn evaluate<R: Rules + ?Sized>(game: &R) -> i32 {
    let legal = game.legal_moves().len();
    if legal == 0 {
        return if game.is_check() { -INFINITY } else { 0 };
    }
    if game.is_insufficient_material() {
        return 0;
    }

    let side = game.side_to_move();
    let endgame = is_endgame(game);

    let mut score = material_and_placement(game, endgame);
    if !endgame {
        score += mobility(legal, side);
        score += evaluate_king_safety(game);
    }
    score += evaluate_pawns(game);
    score += bishop_pair(game);

    score * side.sign()
}

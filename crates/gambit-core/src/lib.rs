//! Core chess types and the rules-engine contract used by the search.

mod chess_move;
mod color;
mod error;
mod fen;
mod game;
mod piece;
mod piece_kind;
mod rules;
mod square;

pub use chess_move::Move;
pub use color::Color;
pub use error::{PositionError, RulesError};
pub use fen::{STARTING_FEN, book_key};
pub use game::Game;
pub use piece::Piece;
pub use piece_kind::PieceKind;
pub use rules::Rules;
pub use square::Square;

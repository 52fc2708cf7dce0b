//! [`Rules`] implementation backed by `shakmaty`.

use std::fmt;
use std::str::FromStr;

use shakmaty::fen::Fen;
use shakmaty::{CastlingMode, Chess, EnPassantMode, Position};
use tracing::debug;

use crate::chess_move::Move;
use crate::color::Color;
use crate::error::{PositionError, RulesError};
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::rules::Rules;
use crate::square::Square;

/// A standard-chess position with an undo stack.
///
/// `shakmaty` positions are immutable values, so each push saves the
/// previous position and each undo restores it. This makes undo exact by
/// construction, castling and en passant state included.
#[derive(Clone)]
pub struct Game {
    pos: Chess,
    history: Vec<Chess>,
}

impl Game {
    /// The standard starting position.
    pub fn starting_position() -> Game {
        Game {
            pos: Chess::default(),
            history: Vec::new(),
        }
    }

    /// Parse a FEN board description.
    pub fn from_fen(fen: &str) -> Result<Game, PositionError> {
        let fen = fen.trim();
        let parsed = Fen::from_str(fen).map_err(|e| {
            debug!(%fen, error = %e, "malformed FEN");
            PositionError::Malformed {
                fen: fen.to_string(),
                reason: e.to_string(),
            }
        })?;
        let pos: Chess = parsed.into_position(CastlingMode::Standard).map_err(|e| {
            debug!(%fen, error = %e, "illegal position");
            PositionError::Illegal {
                fen: fen.to_string(),
                reason: e.to_string(),
            }
        })?;
        Ok(Game {
            pos,
            history: Vec::new(),
        })
    }

    /// Number of pushes not yet undone.
    pub fn pushed(&self) -> usize {
        self.history.len()
    }

    /// Resolve one of our moves against the current position.
    fn resolve(&self, mv: Move) -> Option<shakmaty::Move> {
        self.pos
            .legal_moves()
            .into_iter()
            .find(|m| convert(m) == Some(mv))
    }
}

/// Convert a `shakmaty` move to the king-steps form used by [`Move`].
fn convert(mv: &shakmaty::Move) -> Option<Move> {
    match *mv {
        shakmaty::Move::Normal {
            from,
            to,
            promotion,
            ..
        } => Some(match promotion {
            Some(role) => Move::with_promotion(from.into(), to.into(), role.into()),
            None => Move::new(from.into(), to.into()),
        }),
        shakmaty::Move::EnPassant { from, to } => Some(Move::new(from.into(), to.into())),
        shakmaty::Move::Castle { king, rook } => {
            let king = Square::from(king);
            let file = if Square::from(rook).file() > king.file() { 6 } else { 2 };
            Square::from_coords(file, king.rank()).map(|to| Move::new(king, to))
        }
        _ => None,
    }
}

impl Rules for Game {
    fn legal_moves(&self) -> Vec<Move> {
        self.pos.legal_moves().iter().filter_map(convert).collect()
    }

    fn capture_moves(&self) -> Vec<Move> {
        self.pos
            .legal_moves()
            .iter()
            .filter(|m| m.is_capture())
            .filter_map(convert)
            .collect()
    }

    fn push(&mut self, mv: Move) -> Result<(), RulesError> {
        let resolved = self.resolve(mv).ok_or_else(|| RulesError::IllegalMove {
            mv,
            fen: self.canonical(),
        })?;
        self.history.push(self.pos.clone());
        self.pos.play_unchecked(&resolved);
        Ok(())
    }

    fn push_null(&mut self) -> Result<(), RulesError> {
        if self.pos.is_check() {
            return Err(RulesError::NullMoveInCheck);
        }
        let passed = self
            .pos
            .clone()
            .swap_turn()
            .map_err(|_| RulesError::NullMoveInCheck)?;
        self.history.push(std::mem::replace(&mut self.pos, passed));
        Ok(())
    }

    fn undo(&mut self) -> Result<(), RulesError> {
        self.pos = self.history.pop().ok_or(RulesError::NothingToUndo)?;
        Ok(())
    }

    fn is_check(&self) -> bool {
        self.pos.is_check()
    }

    fn is_checkmate(&self) -> bool {
        self.pos.is_checkmate()
    }

    fn is_stalemate(&self) -> bool {
        self.pos.is_stalemate()
    }

    fn is_insufficient_material(&self) -> bool {
        self.pos.is_insufficient_material()
    }

    fn is_capture(&self, mv: Move) -> bool {
        self.resolve(mv).is_some_and(|m| m.is_capture())
    }

    fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.pos.board().piece_at(sq.into()).map(Piece::from)
    }

    fn side_to_move(&self) -> Color {
        self.pos.turn().into()
    }

    fn pieces(&self, color: Color, kind: PieceKind) -> Vec<Square> {
        let board = self.pos.board();
        let set = board.by_color(color.into()) & board.by_role(kind.into());
        set.into_iter().map(Square::from).collect()
    }

    fn king_square(&self, color: Color) -> Option<Square> {
        self.pos.board().king_of(color.into()).map(Square::from)
    }

    fn canonical(&self) -> String {
        Fen::from_position(self.pos.clone(), EnPassantMode::Legal).to_string()
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::starting_position()
    }
}

impl FromStr for Game {
    type Err = PositionError;

    fn from_str(fen: &str) -> Result<Game, PositionError> {
        Game::from_fen(fen)
    }
}

impl fmt::Debug for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Game")
            .field("fen", &self.canonical())
            .field("pushed", &self.history.len())
            .finish()
    }
}

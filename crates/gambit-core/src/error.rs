//! Errors raised by position setup and the rules engine.

use crate::chess_move::Move;

/// A board description could not be turned into a playable position.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PositionError {
    /// The FEN text itself is malformed.
    #[error("invalid FEN \"{fen}\": {reason}")]
    Malformed {
        /// The rejected input.
        fen: String,
        /// Parser diagnostic.
        reason: String,
    },

    /// The FEN parses but describes an impossible position.
    #[error("invalid FEN \"{fen}\": illegal position: {reason}")]
    Illegal {
        /// The rejected input.
        fen: String,
        /// Setup validation diagnostic.
        reason: String,
    },
}

/// A request to mutate the position was rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RulesError {
    /// The move is not legal in the current position.
    #[error("illegal move {mv} in {fen}")]
    IllegalMove {
        /// The rejected move.
        mv: Move,
        /// Position it was tried in.
        fen: String,
    },

    /// `undo` was called with nothing pushed.
    #[error("undo with empty move stack")]
    NothingToUndo,

    /// A null move cannot be made while the side to move is in check.
    #[error("null move while in check")]
    NullMoveInCheck,
}

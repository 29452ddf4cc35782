//! Failure conditions of a move request.

use thiserror::Error;

use crate::fen::FenError;

/// Why a position could not be answered with a move.
///
/// `NoLegalMove` is a normal terminal outcome, not a fault; callers that
/// need to tell checkmate from stalemate ask `Position::status`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    #[error("malformed position: {0}")]
    Decode(#[from] FenError),

    #[error("no legal move available")]
    NoLegalMove,
}

impl MoveError {
    /// Stable identifier for wire formats.
    pub fn kind(&self) -> &'static str {
        match self {
            MoveError::Decode(_) => "decode_error",
            MoveError::NoLegalMove => "no_legal_move",
        }
    }
}

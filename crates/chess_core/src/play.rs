//! Decode, search, apply, encode: one engine turn against a FEN string.

use tracing::debug;

use crate::{Engine, board::Position, error::MoveError, types::Move, uci::move_to_uci};

/// A move an engine chose and the position it leads to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayedMove {
    pub mv: Move,
    /// Engine score for the chosen line.
    pub score: i32,
    pub nodes: u64,
    /// FEN after the move.
    pub fen: String,
}

impl PlayedMove {
    pub fn uci(&self) -> String {
        move_to_uci(self.mv)
    }
}

/// Runs `engine` on the position encoded by `fen` and plays its move.
///
/// The FEN is decoded before any search work; a malformed string yields
/// `MoveError::Decode`. A position without legal moves yields
/// `MoveError::NoLegalMove`.
pub fn play_move(engine: &mut dyn Engine, fen: &str, depth: u8) -> Result<PlayedMove, MoveError> {
    let mut pos = Position::from_fen(fen)?;
    let result = engine.search(&pos, depth);
    let mv = result.best_move.ok_or(MoveError::NoLegalMove)?;

    pos.make_move(mv);
    let played = PlayedMove {
        mv,
        score: result.score,
        nodes: result.nodes,
        fen: pos.to_fen(),
    };
    debug!(
        engine = engine.name(),
        mv = %played.uci(),
        score = played.score,
        nodes = played.nodes,
        "engine move played"
    );
    Ok(played)
}

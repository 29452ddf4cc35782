//! Entry point: FEN in, FEN out.

use chess_core::{play_move, MoveError, PlayedMove};

use crate::{config::EngineConfig, ClassicalEngine};

/// Picks and plays one move per call with a fixed configuration.
#[derive(Debug, Clone, Default)]
pub struct MoveSelector {
    config: EngineConfig,
}

impl MoveSelector {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    /// Searches the position and returns the move with its score and the
    /// resulting FEN.
    pub fn select(&self, fen: &str) -> Result<PlayedMove, MoveError> {
        let mut engine = ClassicalEngine::with_config(self.config.clone());
        play_move(&mut engine, fen, self.config.depth)
    }

    /// FEN of the position after the engine's move.
    pub fn choose_move(&self, fen: &str) -> Result<String, MoveError> {
        self.select(fen).map(|played| played.fen)
    }
}

/// Plays the default engine (depth 2, maximizing root) on `fen`.
pub fn choose_move(fen: &str) -> Result<String, MoveError> {
    MoveSelector::default().choose_move(fen)
}

#[cfg(test)]
#[path = "selector_tests.rs"]
mod selector_tests;

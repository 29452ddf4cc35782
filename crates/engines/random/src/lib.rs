//! Random Move Chess Engine
//!
//! Picks uniformly among the legal moves. Any real engine should beat it;
//! it also gives the HTTP and CLI layers a cheap opponent.

use chess_core::{legal_moves, play_move, Engine, MoveError, Position, SearchResult};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use tracing::trace;


/// A chess engine that plays random legal moves.
#[derive(Debug, Clone)]
pub struct RandomEngine {
    rng: StdRng,
    nodes: u64,
}

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomEngine {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
            nodes: 0,
        }
    }

    /// Reproducible move sequence for a given seed.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            nodes: 0,
        }
    }
}

impl Engine for RandomEngine {
    fn search(&mut self, pos: &Position, _depth: u8) -> SearchResult {
        let moves = legal_moves(pos);
        self.nodes = 1;

        let best_move = moves.choose(&mut self.rng).copied();
        trace!(candidates = moves.len(), "random move drawn");

        SearchResult {
            best_move,
            score: 0,
            depth: 1,
            nodes: self.nodes,
        }
    }

    fn name(&self) -> &str {
        "Random v1.0"
    }

    fn new_game(&mut self) {
        self.nodes = 0;
    }
}

/// Plays a uniformly random legal move on `fen` and returns the new FEN.
pub fn play_random(fen: &str) -> Result<String, MoveError> {
    play_move(&mut RandomEngine::new(), fen, 1).map(|played| played.fen)
}

//! Classical Chess Engine
//!
//! Minimax with alpha-beta pruning over a material-only evaluation.
//! One search per request, fixed depth, no state kept between calls.

mod config;
mod eval;
mod search;
mod selector;

use chess_core::{Engine, Position, SearchResult};
use tracing::debug;

pub use config::{ConfigError, DrawScoring, EngineConfig, RootPolicy, DEFAULT_DEPTH, MAX_DEPTH};
pub use eval::{evaluate, material, piece_value, Evaluator, MATE_SCORE};
pub use search::{alpha_beta, minimax, search, SearchOutcome, INFINITY};
pub use selector::{choose_move, MoveSelector};

/// Classical chess engine using minimax with alpha-beta pruning.
///
/// This engine uses:
/// - Minimax search with alpha-beta pruning, no move ordering
/// - Material evaluation with a checkmate sentinel
/// - A root maximizing flag chosen by `RootPolicy`
#[derive(Debug, Clone, Default)]
pub struct ClassicalEngine {
    config: EngineConfig,
    evaluator: Evaluator,
    /// Node counter for statistics
    nodes: u64,
}

impl ClassicalEngine {
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            evaluator: Evaluator::new(config.draws),
            config,
            nodes: 0,
        }
    }
}

impl Engine for ClassicalEngine {
    fn search(&mut self, pos: &Position, depth: u8) -> SearchResult {
        self.nodes = 0;
        let maximizing = self.config.root.maximizing(pos.side_to_move);

        let outcome = search::search(pos, depth, maximizing, &self.evaluator, &mut self.nodes);
        debug!(
            depth,
            maximizing,
            score = outcome.score,
            nodes = self.nodes,
            found = outcome.best_move.is_some(),
            "search finished"
        );

        SearchResult {
            best_move: outcome.best_move,
            score: outcome.score,
            depth,
            nodes: self.nodes,
        }
    }

    fn name(&self) -> &str {
        "Classical v1.0"
    }

    fn new_game(&mut self) {
        self.nodes = 0;
    }
}

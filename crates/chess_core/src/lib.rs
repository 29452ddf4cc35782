pub mod board;
pub mod error;
pub mod fen;
pub mod movegen;
pub mod perft;
pub mod play;
pub mod status;
pub mod types;
pub mod uci;

// Re-export core game logic (not engine-specific)
pub use board::*;
pub use error::MoveError;
pub use fen::{FenError, START_FEN};
pub use movegen::*;
pub use perft::{perft, perft_divide};
pub use play::{PlayedMove, play_move};
pub use status::{FIFTY_MOVE_LIMIT, GameStatus};
pub use types::*;
pub use uci::*;

// =============================================================================
// Engine trait, implemented by every move picker (minimax, random)
// =============================================================================

/// Result of a search operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    /// The best move found (None if no legal moves)
    pub best_move: Option<Move>,
    /// Evaluation score from White's perspective
    pub score: i32,
    /// Search depth used
    pub depth: u8,
    /// Number of nodes searched (for stats)
    pub nodes: u64,
}

/// Trait that all engines implement.
///
/// A search is a pure function of the position and depth: engines keep no
/// state between calls beyond counters.
pub trait Engine: Send {
    /// Search the position to the given depth in plies.
    fn search(&mut self, pos: &Position, depth: u8) -> SearchResult;

    /// Returns the engine's name for identification in logs and responses
    fn name(&self) -> &str;

    /// Returns the engine's author
    fn author(&self) -> &str {
        "ML-chess"
    }

    /// Reset counters for a new game
    fn new_game(&mut self) {}
}

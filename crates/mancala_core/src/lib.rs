pub mod board;
pub mod error;
pub mod eval;
pub mod rules;
pub mod search;
pub mod state;
pub mod types;

// Re-export core game logic (not engine-specific)
pub use board::*;
pub use error::*;
pub use eval::{evaluate, stone_term, Evaluator, StoreDifferential};
pub use search::{search, Pruning, SearchOutcome};
pub use state::GameState;
pub use types::*;

// =============================================================================
// Engine trait — implemented by every move picker (search, random, ...)
// =============================================================================

/// Result of a search operation
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// The chosen pit, 1-indexed (None if no legal moves)
    pub best_move: Option<usize>,
    /// Evaluation from the engine's own player's perspective
    pub score: i32,
    /// Search depth in plies
    pub depth: u8,
    /// Number of states visited (optional, for stats)
    pub nodes: u64,
}

/// Trait that all Mancala move pickers implement.
///
/// This allows swapping between plain minimax, alpha-beta, alternate
/// heuristics and the random baseline in the batch runner.
pub trait Engine: Send {
    /// Analyze `state` and pick a move for the side to move.
    ///
    /// `state` is not modified. A finished game or an empty side yields
    /// `best_move: None`.
    fn search(&mut self, state: &GameState) -> SearchResult;

    /// Shorthand for the chosen pit only.
    fn choose_move(&mut self, state: &GameState) -> Option<usize> {
        self.search(state).best_move
    }

    /// Returns the engine's display name
    fn name(&self) -> &str;

    /// Reset internal state for a new game
    fn new_game(&mut self) {}
}

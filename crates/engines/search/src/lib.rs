//! Search Engines
//!
//! Fixed-depth game-tree search over the Mancala rules:
//! - [`MinimaxEngine`]: plain minimax, visits the whole tree
//! - [`AlphaBetaEngine`]: the same walk with alpha-beta pruning
//! - [`HeuristicEngine`]: alpha-beta with a caller-supplied evaluator
//!
//! All three share [`mancala_core::search`] and differ only in pruning and
//! leaf evaluation.

pub mod eval;

use mancala_core::{
    search, Engine, Evaluator, GameState, Player, Pruning, SearchResult, StoreDifferential,
};
use tracing::trace;

pub use eval::{CaptureThreat, MobilityWeighted};

/// Default search depth in plies.
pub const DEFAULT_DEPTH: u8 = 5;

fn run<E: Evaluator + ?Sized>(
    state: &GameState,
    player: Player,
    depth: u8,
    evaluator: &E,
    pruning: Pruning,
    nodes: &mut u64,
) -> SearchResult {
    let outcome = search(state, depth, player, evaluator, pruning);
    *nodes = outcome.nodes;
    trace!(
        ?pruning,
        evaluator = evaluator.name(),
        best_move = ?outcome.best_move,
        score = outcome.score,
        nodes = outcome.nodes,
        "search finished"
    );

    SearchResult {
        best_move: outcome.best_move,
        score: outcome.score,
        depth,
        nodes: outcome.nodes,
    }
}

/// Plain minimax with the store-differential heuristic.
///
/// Visits every node down to `depth`; the reference the pruned engines are
/// checked against.
#[derive(Debug, Clone)]
pub struct MinimaxEngine {
    player: Player,
    depth: u8,
    /// Node counter for statistics
    nodes: u64,
}

impl MinimaxEngine {
    pub fn new(player: Player, depth: u8) -> Self {
        Self {
            player,
            depth,
            nodes: 0,
        }
    }

    /// States visited by the last search.
    pub fn nodes(&self) -> u64 {
        self.nodes
    }
}

impl Engine for MinimaxEngine {
    fn search(&mut self, state: &GameState) -> SearchResult {
        run(
            state,
            self.player,
            self.depth,
            &StoreDifferential,
            Pruning::None,
            &mut self.nodes,
        )
    }

    fn name(&self) -> &str {
        "Minimax"
    }

    fn new_game(&mut self) {
        self.nodes = 0;
    }
}

/// Minimax with alpha-beta pruning and the store-differential heuristic.
#[derive(Debug, Clone)]
pub struct AlphaBetaEngine {
    player: Player,
    depth: u8,
    nodes: u64,
}

impl AlphaBetaEngine {
    pub fn new(player: Player, depth: u8) -> Self {
        Self {
            player,
            depth,
            nodes: 0,
        }
    }

    pub fn nodes(&self) -> u64 {
        self.nodes
    }
}

impl Engine for AlphaBetaEngine {
    fn search(&mut self, state: &GameState) -> SearchResult {
        run(
            state,
            self.player,
            self.depth,
            &StoreDifferential,
            Pruning::AlphaBeta,
            &mut self.nodes,
        )
    }

    fn name(&self) -> &str {
        "Alpha-Beta"
    }

    fn new_game(&mut self) {
        self.nodes = 0;
    }
}

/// Alpha-beta search scored by any [`Evaluator`].
#[derive(Debug, Clone)]
pub struct HeuristicEngine<E> {
    player: Player,
    depth: u8,
    evaluator: E,
    name: String,
    nodes: u64,
}

impl<E: Evaluator> HeuristicEngine<E> {
    pub fn new(player: Player, depth: u8, evaluator: E) -> Self {
        let name = format!("Heuristic ({})", evaluator.name());
        Self {
            player,
            depth,
            evaluator,
            name,
            nodes: 0,
        }
    }

    pub fn evaluator(&self) -> &E {
        &self.evaluator
    }

    pub fn nodes(&self) -> u64 {
        self.nodes
    }
}

impl<E: Evaluator + Send> Engine for HeuristicEngine<E> {
    fn search(&mut self, state: &GameState) -> SearchResult {
        run(
            state,
            self.player,
            self.depth,
            &self.evaluator,
            Pruning::AlphaBeta,
            &mut self.nodes,
        )
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn new_game(&mut self) {
        self.nodes = 0;
    }
}

//! Random Move Mancala Engine
//!
//! A simple engine that selects pits uniformly at random from all legal moves.
//! Useful for:
//! - Baseline comparisons (any search engine should easily beat this)
//! - Stress testing the rules over many games

use mancala_core::{Engine, GameState, SearchResult};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;


/// A Mancala engine that plays random legal pits.
///
/// This engine provides no evaluation. Seed it with
/// [`with_seed`](RandomEngine::with_seed) for reproducible batches.
#[derive(Debug, Clone)]
pub struct RandomEngine {
    rng: StdRng,
}

impl RandomEngine {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for RandomEngine {
    fn search(&mut self, state: &GameState) -> SearchResult {
        let best_move = if state.is_over() {
            None
        } else {
            state.legal_moves().choose(&mut self.rng).copied()
        };

        SearchResult {
            best_move,
            score: 0,
            depth: 1,
            nodes: 1,
        }
    }

    fn name(&self) -> &str {
        "Random"
    }
}

//! Alternate leaf evaluations for [`HeuristicEngine`](crate::HeuristicEngine).

use mancala_core::{evaluate, stone_term, Evaluator, GameState, Player};

/// Store differential plus a smaller weight on stones still in play.
///
/// Stones left on a player's side go to that player's store at the end of
/// the game, so they count as future points at a discount.
#[derive(Debug, Clone, Copy)]
pub struct MobilityWeighted {
    pub store_weight: i32,
    pub side_weight: i32,
}

impl Default for MobilityWeighted {
    fn default() -> Self {
        Self {
            store_weight: 4,
            side_weight: 1,
        }
    }
}

impl Evaluator for MobilityWeighted {
    fn evaluate(&self, state: &GameState, perspective: Player) -> i32 {
        let board = state.board();
        let on_side = stone_term(board.side_stones(perspective))
            - stone_term(board.side_stones(perspective.other()));
        self.store_weight
            .saturating_mul(evaluate(state, perspective))
            .saturating_add(self.side_weight.saturating_mul(on_side))
    }

    fn name(&self) -> &str {
        "mobility-weighted"
    }
}

/// Store differential plus pending capture opportunities.
///
/// A side's opportunities are the stones sitting across from its empty pits:
/// a last stone landing in such a pit takes them.
#[derive(Debug, Clone, Copy)]
pub struct CaptureThreat {
    pub store_weight: i32,
    pub threat_weight: i32,
}

impl Default for CaptureThreat {
    fn default() -> Self {
        Self {
            store_weight: 2,
            threat_weight: 1,
        }
    }
}

impl CaptureThreat {
    /// Stones `player` could capture through its currently empty pits.
    pub fn exposed_to(state: &GameState, player: Player) -> u32 {
        let board = state.board();
        board
            .pit_range(player)
            .filter(|&idx| board.get(idx) == 0)
            .map(|idx| board.get(board.opposite(idx)))
            .sum()
    }
}

impl Evaluator for CaptureThreat {
    fn evaluate(&self, state: &GameState, perspective: Player) -> i32 {
        let threats = stone_term(Self::exposed_to(state, perspective))
            - stone_term(Self::exposed_to(state, perspective.other()));
        self.store_weight
            .saturating_mul(evaluate(state, perspective))
            .saturating_add(self.threat_weight.saturating_mul(threats))
    }

    fn name(&self) -> &str {
        "capture-threat"
    }
}

#[cfg(test)]
#[path = "eval_tests.rs"]
mod eval_tests;

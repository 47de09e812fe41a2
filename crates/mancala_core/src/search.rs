//! Fixed-depth minimax shared by every search engine.
//!
//! Tree levels alternate between maximizing (the searching player) and
//! minimizing (its opponent). Children are visited in ascending pit order and
//! the first child that strictly improves on the running best is kept, so ties
//! go to the lowest pit. With [`Pruning::AlphaBeta`] the same walk stops
//! visiting a node's children once `beta <= alpha`; the score and move at the
//! root are identical to the unpruned walk.

use crate::{eval::Evaluator, state::GameState, types::Player};

/// Whether the tree walk cuts branches that cannot change the result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pruning {
    None,
    AlphaBeta,
}

/// What a search found at the root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchOutcome {
    /// Best pit for the side to move, `None` if the root is finished or has
    /// no legal moves
    pub best_move: Option<usize>,
    /// Root value from the searching player's perspective
    pub score: i32,
    /// States visited, root included
    pub nodes: u64,
}

// Wider than the evaluator's i32 so the initial bounds are strictly worse
// than any value an evaluator can return.
type Score = i64;

/// Searches `depth` plies below `state` and picks a move for the side to
/// move, scoring positions for `player`.
///
/// The root is maximizing when `player` is on move and minimizing otherwise.
/// `state` is not modified.
pub fn search<E>(
    state: &GameState,
    depth: u8,
    player: Player,
    evaluator: &E,
    pruning: Pruning,
) -> SearchOutcome
where
    E: Evaluator + ?Sized,
{
    let mut walk = TreeWalk {
        player,
        evaluator,
        pruning,
        nodes: 0,
    };

    let mut root = state.clone();
    let maximizing = root.current_player() == player;
    let (score, best_move) = walk.node(&mut root, depth, maximizing, Score::MIN, Score::MAX);

    SearchOutcome {
        best_move,
        score: score as i32,
        nodes: walk.nodes,
    }
}

struct TreeWalk<'a, E: ?Sized> {
    player: Player,
    evaluator: &'a E,
    pruning: Pruning,
    nodes: u64,
}

impl<E: Evaluator + ?Sized> TreeWalk<'_, E> {
    fn leaf(&self, state: &GameState) -> Score {
        Score::from(self.evaluator.evaluate(state, self.player))
    }

    /// Returns the node's value and the move that first reached it.
    fn node(
        &mut self,
        state: &mut GameState,
        depth: u8,
        maximizing: bool,
        mut alpha: Score,
        mut beta: Score,
    ) -> (Score, Option<usize>) {
        self.nodes += 1;

        // `is_terminal` sweeps this node's own copy, so the evaluator sees
        // the settled stores.
        if depth == 0 || state.is_terminal() {
            return (self.leaf(state), None);
        }

        let moves = state.legal_moves();
        if moves.is_empty() {
            return (self.leaf(state), None);
        }

        let mut best = if maximizing { Score::MIN } else { Score::MAX };
        let mut best_move = None;

        for pit in moves {
            let mut child = state.clone();
            let applied = child.apply_move(pit).is_ok();
            debug_assert!(applied, "pit {pit} from legal_moves was rejected");

            let (score, _) = self.node(&mut child, depth - 1, !maximizing, alpha, beta);

            if maximizing {
                if score > best {
                    best = score;
                    best_move = Some(pit);
                }
                alpha = alpha.max(score);
            } else {
                if score < best {
                    best = score;
                    best_move = Some(pit);
                }
                beta = beta.min(score);
            }

            if self.pruning == Pruning::AlphaBeta && beta <= alpha {
                break;
            }
        }

        (best, best_move)
    }
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;

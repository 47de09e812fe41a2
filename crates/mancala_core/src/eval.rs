use crate::{state::GameState, types::Player};

/// Scores a position from one player's point of view. Higher is better for
/// `perspective`.
///
/// Search strategies call this at the depth limit and on finished games, so
/// it must be pure: it sees a shared reference and may not rely on the
/// end-of-game sweep having happened unless the search performed it.
pub trait Evaluator {
    fn evaluate(&self, state: &GameState, perspective: Player) -> i32;

    /// Short label used in engine names and reports.
    fn name(&self) -> &str;
}

/// `perspective`'s store minus the opponent's store.
pub fn evaluate(state: &GameState, perspective: Player) -> i32 {
    let board = state.board();
    stone_term(board.store(perspective)) - stone_term(board.store(perspective.other()))
}

/// Stone count as an evaluation term. Boards never hold more than
/// [`MAX_TOTAL_STONES`](crate::MAX_TOTAL_STONES), so this does not saturate in
/// practice.
pub fn stone_term(stones: u32) -> i32 {
    i32::try_from(stones).unwrap_or(i32::MAX)
}

/// The standard leaf heuristic: store differential.
#[derive(Debug, Clone, Copy, Default)]
pub struct StoreDifferential;

impl Evaluator for StoreDifferential {
    fn evaluate(&self, state: &GameState, perspective: Player) -> i32 {
        evaluate(state, perspective)
    }

    fn name(&self) -> &str {
        "store-differential"
    }
}

impl<E: Evaluator + ?Sized> Evaluator for &E {
    fn evaluate(&self, state: &GameState, perspective: Player) -> i32 {
        (**self).evaluate(state, perspective)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

impl<E: Evaluator + ?Sized> Evaluator for Box<E> {
    fn evaluate(&self, state: &GameState, perspective: Player) -> i32 {
        (**self).evaluate(state, perspective)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

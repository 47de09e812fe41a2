//! Kalah rules: legality, sowing with captures, and the end-of-game sweep.
//!
//! The active player always switches after a move, including when the last
//! stone lands in the mover's own store. There is no extra-turn rule.

use tracing::debug;

use crate::board::Board;
use crate::error::MoveError;
use crate::state::GameState;
use crate::types::{GameOutcome, MoveRecord, Player};

impl GameState {
    /// Whether the side to move may sow from the 1-indexed `pit`.
    pub fn is_legal_move(&self, pit: usize) -> bool {
        if pit == 0 || pit > self.pits_per_player() {
            return false;
        }
        let idx = self.board.pit_index(self.current_player, pit);
        self.board.get(idx) > 0
    }

    /// Non-empty pits on the side to move, in ascending pit order.
    pub fn legal_moves(&self) -> Vec<usize> {
        let mut moves = Vec::with_capacity(self.pits_per_player());
        self.legal_moves_into(&mut moves);
        moves
    }

    /// Like [`legal_moves`](Self::legal_moves) but reuses `moves`.
    pub fn legal_moves_into(&self, moves: &mut Vec<usize>) {
        moves.clear();
        let start = self.board.pit_range(self.current_player).start;
        moves.extend(
            (1..=self.pits_per_player()).filter(|&pit| self.board.get(start + pit - 1) > 0),
        );
    }

    /// Sows the stones of `pit` for the side to move and passes the turn.
    ///
    /// Illegal pits and finished games are rejected without touching the
    /// state. Legality is checked first, so an out-of-range pit on a finished
    /// game reports [`MoveError::IllegalMove`].
    pub fn apply_move(&mut self, pit: usize) -> Result<&Board, MoveError> {
        let player = self.current_player;
        if !self.is_legal_move(pit) {
            debug!(pit, %player, "rejected illegal move");
            return Err(MoveError::IllegalMove { pit, player });
        }
        if self.is_over() {
            debug!(pit, %player, "rejected move on finished game");
            return Err(MoveError::GameOver);
        }

        sow(&mut self.board, player, pit);

        self.moves.push(MoveRecord { player, pit });
        self.current_player = player.other();
        Ok(&self.board)
    }

    /// True once either side has no stones left in its pits.
    ///
    /// Unlike [`is_terminal`](Self::is_terminal) this never modifies the board.
    pub fn is_over(&self) -> bool {
        self.board.side_is_empty(Player::One) || self.board.side_is_empty(Player::Two)
    }

    /// Checks for the end of the game and settles the board if it has ended.
    ///
    /// When either side is empty, every stone left on *both* sides goes to
    /// that side's own store. Calling this again on a settled board returns
    /// `true` and moves nothing.
    pub fn is_terminal(&mut self) -> bool {
        if !self.is_over() {
            return false;
        }

        let swept_one = self.board.sweep_side(Player::One);
        let swept_two = self.board.sweep_side(Player::Two);
        if swept_one + swept_two > 0 {
            let (p1, p2) = self.final_scores();
            debug!(swept_one, swept_two, p1, p2, "game over, remaining stones swept");
        }
        true
    }

    /// Store contents as `(player 1, player 2)`.
    pub fn final_scores(&self) -> (u32, u32) {
        (self.board.store(Player::One), self.board.store(Player::Two))
    }

    /// Winner by store count. Only meaningful after [`is_terminal`](Self::is_terminal)
    /// has swept the board.
    pub fn outcome(&self) -> GameOutcome {
        let (p1, p2) = self.final_scores();
        match p1.cmp(&p2) {
            std::cmp::Ordering::Greater => GameOutcome::Winner(Player::One),
            std::cmp::Ordering::Less => GameOutcome::Winner(Player::Two),
            std::cmp::Ordering::Equal => GameOutcome::Tie,
        }
    }
}

/// Distributes the stones of a legal `pit` counter-clockwise, skipping the
/// opponent's store, and resolves the last stone.
fn sow(board: &mut Board, player: Player, pit: usize) {
    let own_store = board.store_index(player);
    let opp_store = board.store_index(player.other());

    let mut idx = board.pit_index(player, pit);
    let mut in_hand = board.take(idx);
    idx = board.next_index(idx);

    while in_hand > 1 {
        if idx != opp_store {
            board.add(idx, 1);
            in_hand -= 1;
        }
        idx = board.next_index(idx);
    }

    if idx == opp_store {
        idx = board.next_index(idx);
        board.add(idx, 1);
    } else if idx == own_store
        || board.get(idx) != 0
        || !board.pit_range(player).contains(&idx)
    {
        board.add(idx, 1);
    } else {
        // Last stone in an empty pit on the mover's side: it and the
        // facing pit go to the store. The landing pit stays empty.
        let captured = board.take(board.opposite(idx));
        board.add(own_store, 1 + captured);
    }
}

#[cfg(test)]
#[path = "rules_tests.rs"]
mod rules_tests;

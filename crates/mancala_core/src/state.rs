use std::fmt;

use crate::board::Board;
use crate::error::ConfigError;
use crate::types::{MoveRecord, Player};

/// A game in progress: board, side to move and the moves played so far.
///
/// Cloning produces a fully independent copy; search relies on this to give
/// every explored branch its own state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameState {
    pub(crate) board: Board,
    pub(crate) current_player: Player,
    pub(crate) moves: Vec<MoveRecord>,
}

impl GameState {
    /// Fresh game with `stones_per_pit` in every pit, Player 1 to move.
    pub fn new(pits_per_player: usize, stones_per_pit: u32) -> Result<Self, ConfigError> {
        Ok(Self::from_board(
            Board::new(pits_per_player, stones_per_pit)?,
            Player::One,
        ))
    }

    /// Start from an arbitrary board with an empty move log.
    pub fn from_board(board: Board, current_player: Player) -> Self {
        GameState {
            board,
            current_player,
            moves: Vec::new(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_player(&self) -> Player {
        self.current_player
    }

    pub fn pits_per_player(&self) -> usize {
        self.board.pits_per_player()
    }

    /// Every move applied so far, oldest first.
    pub fn moves(&self) -> &[MoveRecord] {
        &self.moves
    }

    pub fn move_count(&self) -> usize {
        self.moves.len()
    }
}

impl Default for GameState {
    /// The standard 6-pit, 4-stone game.
    fn default() -> Self {
        Self::from_board(Board::default(), Player::One)
    }
}

/// Renders the board as seen from Player 1's seat:
///
/// ```text
///        P2   4  4  4  4  4  4
///       0                      0
///        P1   4  4  4  4  4  4      Player 1 to move
/// ```
///
/// Player 2's row is printed right to left so sowing reads counter-clockwise.
/// Player 2's store sits on the left, Player 1's on the right.
impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let b = &self.board;
        let row = |player: Player, reversed: bool| -> String {
            let mut cells: Vec<u32> = b.pit_range(player).map(|i| b.get(i)).collect();
            if reversed {
                cells.reverse();
            }
            cells.iter().map(|n| format!("{n:>3}")).collect()
        };
        let width = 3 * b.pits_per_player();

        writeln!(f, "       P2 {}", row(Player::Two, true))?;
        writeln!(
            f,
            "  {:>3}   {:width$}   {:<3}",
            b.store(Player::Two),
            "",
            b.store(Player::One),
            width = width
        )?;
        write!(
            f,
            "       P1 {}      {} to move",
            row(Player::One, false),
            self.current_player
        )
    }
}

#[cfg(test)]
#[path = "state_tests.rs"]
mod state_tests;

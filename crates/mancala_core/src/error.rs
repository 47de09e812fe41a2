use crate::types::Player;

/// Soft failures from [`GameState::apply_move`](crate::GameState::apply_move).
///
/// Both leave the state untouched; a well-formed driver only ever passes pits
/// taken from `legal_moves`, so seeing one of these is a caller bug.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("illegal move: pit {pit} for {player}")]
    IllegalMove { pit: usize, player: Player },

    #[error("game over: no moves can be applied to a finished game")]
    GameOver,
}

/// Errors raised while building boards and game configurations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("pits per player must be in 1..={max}, got {got}")]
    PitCount { got: usize, max: usize },

    #[error("board length {0} does not describe two equal sides with a store each")]
    BoardLength(usize),

    #[error("board would hold {total} stones, at most {max} are supported")]
    TooManyStones { total: u64, max: u64 },
}

//! Match runner for playing games between engines

use mancala_core::{Engine, GameState, Player, DEFAULT_PITS_PER_PLAYER, DEFAULT_STONES_PER_PIT};
use tracing::{info, trace, warn};

use crate::config::BatchConfig;
use crate::error::HarnessError;
use crate::results::{BatchResults, GameRecord};

/// Configuration for a match
#[derive(Debug, Clone)]
pub struct MatchConfig {
    /// Number of games to play
    pub num_games: u32,
    /// Maximum moves per game before the game is cut off
    pub max_moves: u32,
    pub pits_per_player: usize,
    pub stones_per_pit: u32,
    /// Log progress every tenth game
    pub verbose: bool,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            num_games: 100,
            max_moves: 500,
            pits_per_player: DEFAULT_PITS_PER_PLAYER,
            stones_per_pit: DEFAULT_STONES_PER_PIT,
            verbose: false,
        }
    }
}

/// Runs batches of games between two engines
pub struct MatchRunner {
    config: MatchConfig,
}

impl MatchRunner {
    pub fn new(config: MatchConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Play `num_games` games with `player1` always moving first.
    ///
    /// Engines are bound to a side, so colours are never swapped.
    pub fn run_match(
        &self,
        player1: &mut dyn Engine,
        player2: &mut dyn Engine,
    ) -> Result<BatchResults, HarnessError> {
        let mut results = BatchResults::new(player1.name(), player2.name());

        for game_num in 1..=self.config.num_games {
            if self.config.verbose && game_num % 10 == 0 {
                info!("Playing game {}/{}...", game_num, self.config.num_games);
            }

            let record = self.play_game(player1, player2)?;
            trace!(
                game = game_num,
                status = record.status,
                moves = record.num_moves,
                "game finished"
            );
            results.add_game(record);
        }

        Ok(results)
    }

    /// Play a single game from the starting position
    fn play_game(
        &self,
        player1: &mut dyn Engine,
        player2: &mut dyn Engine,
    ) -> Result<GameRecord, HarnessError> {
        let mut state = GameState::new(self.config.pits_per_player, self.config.stones_per_pit)?;
        player1.new_game();
        player2.new_game();

        let mut num_moves = 0;
        let mut aborted = false;
        while !state.is_terminal() && num_moves < self.config.max_moves {
            let mover = state.current_player();
            let engine: &mut dyn Engine = match mover {
                Player::One => &mut *player1,
                Player::Two => &mut *player2,
            };

            let Some(pit) = engine.choose_move(&state) else {
                warn!(engine = engine.name(), "{mover} returned no move, ending game early");
                aborted = true;
                break;
            };
            if let Err(e) = state.apply_move(pit) {
                warn!(engine = engine.name(), "{e}, ending game early");
                aborted = true;
                break;
            }

            num_moves += 1;
            trace!("\n{state}");
        }

        if aborted {
            return Ok(GameRecord::aborted(state.outcome(), state.final_scores(), num_moves));
        }

        let hit_move_limit = !state.is_terminal() && num_moves >= self.config.max_moves;
        Ok(GameRecord::new(
            state.outcome(),
            state.final_scores(),
            num_moves,
            hit_move_limit,
        ))
    }
}

/// Build both engines from `config` and play the whole batch.
///
/// Results are labelled with the configured player types.
pub fn run_batch(config: &BatchConfig) -> Result<BatchResults, HarnessError> {
    config.validate()?;
    let (mut player1, mut player2) = config.create_engines();

    info!(
        "Playing {} games of {} vs {}...",
        config.num_games, config.player1, config.player2
    );
    let runner = MatchRunner::new(config.match_config());
    let mut results = runner.run_match(player1.as_mut(), player2.as_mut())?;
    results.player1 = config.player1.to_string();
    results.player2 = config.player2.to_string();
    Ok(results)
}

#[cfg(test)]
#[path = "match_runner_tests.rs"]
mod match_runner_tests;

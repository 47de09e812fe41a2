use std::path::Path;

use mancala_core::{
    Board, Engine, Player, DEFAULT_PITS_PER_PLAYER, DEFAULT_STONES_PER_PIT, MAX_PITS_PER_PLAYER,
};
use search_engine::DEFAULT_DEPTH;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::HarnessError;
use crate::match_runner::MatchConfig;
use crate::player::PlayerType;

/// Settings for one batch of games, loadable from TOML.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BatchConfig {
    pub pits_per_player: usize,
    pub stones_per_pit: u32,
    /// Search depth in plies for the search-based players
    pub depth: u8,
    pub player1: PlayerType,
    pub player2: PlayerType,
    pub num_games: u32,
    /// Move ceiling per game
    pub max_moves: u32,
    pub verbose: bool,
    /// Seed for random players; Player 2 uses `seed + 1`
    pub seed: Option<u64>,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            pits_per_player: DEFAULT_PITS_PER_PLAYER,
            stones_per_pit: DEFAULT_STONES_PER_PIT,
            depth: DEFAULT_DEPTH,
            player1: PlayerType::Random,
            player2: PlayerType::Random,
            num_games: 100,
            max_moves: 500,
            verbose: false,
            seed: None,
        }
    }
}

impl BatchConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, HarnessError> {
        let content = std::fs::read_to_string(path).map_err(|e| HarnessError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: BatchConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the
    /// file does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, HarnessError> {
        if path.exists() {
            Self::load(path)
        } else {
            warn!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    pub fn validate(&self) -> Result<(), HarnessError> {
        if self.pits_per_player == 0 || self.pits_per_player > MAX_PITS_PER_PLAYER {
            return Err(HarnessError::Validation(format!(
                "pits_per_player must be in 1..={MAX_PITS_PER_PLAYER}"
            )));
        }
        if self.stones_per_pit == 0 {
            return Err(HarnessError::Validation("stones_per_pit must be > 0".into()));
        }
        if self.depth == 0 {
            return Err(HarnessError::Validation("depth must be > 0".into()));
        }
        if self.num_games == 0 {
            return Err(HarnessError::Validation("num_games must be > 0".into()));
        }
        if self.max_moves == 0 {
            return Err(HarnessError::Validation("max_moves must be > 0".into()));
        }
        // board-level limits, such as the total stone count
        Board::new(self.pits_per_player, self.stones_per_pit)?;
        Ok(())
    }

    /// Defaults rendered as TOML, for `default-config`.
    pub fn default_toml() -> Result<String, HarnessError> {
        Ok(toml::to_string_pretty(&Self::default())?)
    }

    pub fn match_config(&self) -> MatchConfig {
        MatchConfig {
            num_games: self.num_games,
            max_moves: self.max_moves,
            pits_per_player: self.pits_per_player,
            stones_per_pit: self.stones_per_pit,
            verbose: self.verbose,
        }
    }

    /// Engines for Player 1 and Player 2, in that order.
    pub fn create_engines(&self) -> (Box<dyn Engine>, Box<dyn Engine>) {
        let p1 = self.player1.create_engine(Player::One, self.depth, self.seed);
        let p2 = self.player2.create_engine(
            Player::Two,
            self.depth,
            self.seed.map(|s| s.wrapping_add(1)),
        );
        (p1, p2)
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;

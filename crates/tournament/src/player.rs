//! Player-type labels and the engines they stand for.

use std::fmt;
use std::str::FromStr;

use mancala_core::{Engine, Player};
use random_engine::RandomEngine;
use search_engine::{AlphaBetaEngine, HeuristicEngine, MinimaxEngine, MobilityWeighted};
use serde::{Deserialize, Serialize};

use crate::error::HarnessError;

/// Which kind of engine plays a side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlayerType {
    /// Uniformly random legal pit
    Random,
    /// Plain minimax, store-differential heuristic
    Minimax,
    /// Alpha-beta pruned minimax, store-differential heuristic
    #[serde(rename = "abpruning", alias = "alphabeta")]
    AlphaBeta,
    /// Alpha-beta with the mobility-weighted heuristic
    Heuristic,
}

impl PlayerType {
    pub const ALL: [PlayerType; 4] = [
        PlayerType::Random,
        PlayerType::Minimax,
        PlayerType::AlphaBeta,
        PlayerType::Heuristic,
    ];

    pub fn label(self) -> &'static str {
        match self {
            PlayerType::Random => "random",
            PlayerType::Minimax => "minimax",
            PlayerType::AlphaBeta => "abpruning",
            PlayerType::Heuristic => "heuristic",
        }
    }

    /// Builds an engine playing `player`.
    ///
    /// `depth` is ignored by the random player. `seed` makes the random
    /// player reproducible; search engines are deterministic anyway.
    pub fn create_engine(self, player: Player, depth: u8, seed: Option<u64>) -> Box<dyn Engine> {
        match self {
            PlayerType::Random => match seed {
                Some(seed) => Box::new(RandomEngine::with_seed(seed)),
                None => Box::new(RandomEngine::new()),
            },
            PlayerType::Minimax => Box::new(MinimaxEngine::new(player, depth)),
            PlayerType::AlphaBeta => Box::new(AlphaBetaEngine::new(player, depth)),
            PlayerType::Heuristic => Box::new(HeuristicEngine::new(
                player,
                depth,
                MobilityWeighted::default(),
            )),
        }
    }
}

impl FromStr for PlayerType {
    type Err = HarnessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "random" => Ok(PlayerType::Random),
            "minimax" => Ok(PlayerType::Minimax),
            "abpruning" | "alphabeta" => Ok(PlayerType::AlphaBeta),
            "heuristic" => Ok(PlayerType::Heuristic),
            _ => Err(HarnessError::UnknownPlayerType(s.to_string())),
        }
    }
}

impl fmt::Display for PlayerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mancala_core::GameState;

    #[test]
    fn test_parse_labels() {
        assert_eq!("random".parse::<PlayerType>().unwrap(), PlayerType::Random);
        assert_eq!("Minimax".parse::<PlayerType>().unwrap(), PlayerType::Minimax);
        assert_eq!("abpruning".parse::<PlayerType>().unwrap(), PlayerType::AlphaBeta);
        assert_eq!("alphabeta".parse::<PlayerType>().unwrap(), PlayerType::AlphaBeta);
        assert_eq!("heuristic".parse::<PlayerType>().unwrap(), PlayerType::Heuristic);
        assert!(matches!(
            "greedy".parse::<PlayerType>(),
            Err(HarnessError::UnknownPlayerType(_))
        ));
    }

    #[test]
    fn test_label_roundtrip() {
        for kind in PlayerType::ALL {
            assert_eq!(kind.label().parse::<PlayerType>().unwrap(), kind);
            assert_eq!(kind.to_string(), kind.label());
        }
    }

    #[test]
    fn test_created_engines_pick_legal_moves() {
        let state = GameState::default();
        for kind in PlayerType::ALL {
            let mut engine = kind.create_engine(Player::One, 2, Some(1));
            let pit = engine.choose_move(&state).unwrap();
            assert!(state.is_legal_move(pit), "{kind} picked {pit}");
        }
    }
}

//! Batch results storage and reporting

use std::path::Path;

use mancala_core::{GameOutcome, Player};
use serde::{Deserialize, Serialize};

use crate::error::HarnessError;

/// Outcome of a single game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    /// 1 = Player 1 won, 2 = Player 2 won, 0 = tie
    pub status: u8,
    /// Final store contents `(player 1, player 2)`
    pub score: (u32, u32),
    pub num_moves: u32,
    /// The game was cut off by the move ceiling
    pub hit_move_limit: bool,
    /// An engine gave no move or an illegal one; the score is taken from the
    /// board as it was left
    #[serde(default)]
    pub aborted: bool,
}

impl GameRecord {
    pub fn new(
        outcome: GameOutcome,
        score: (u32, u32),
        num_moves: u32,
        hit_move_limit: bool,
    ) -> Self {
        Self {
            status: outcome.status(),
            score,
            num_moves,
            hit_move_limit,
            aborted: false,
        }
    }

    /// Record of a game an engine broke off before it finished.
    pub fn aborted(outcome: GameOutcome, score: (u32, u32), num_moves: u32) -> Self {
        Self {
            aborted: true,
            ..Self::new(outcome, score, num_moves, false)
        }
    }

    pub fn winner(&self) -> Option<Player> {
        Player::from_number(self.status)
    }
}

/// Every game of a batch plus the labels of the two sides.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BatchResults {
    pub player1: String,
    pub player2: String,
    pub games: Vec<GameRecord>,
}

impl BatchResults {
    pub fn new(player1: &str, player2: &str) -> Self {
        Self {
            player1: player1.to_string(),
            player2: player2.to_string(),
            games: Vec::new(),
        }
    }

    pub fn add_game(&mut self, record: GameRecord) {
        self.games.push(record);
    }

    pub fn total_games(&self) -> u32 {
        self.games.len() as u32
    }

    fn count_status(&self, status: u8) -> u32 {
        self.games.iter().filter(|g| g.status == status).count() as u32
    }

    pub fn player1_wins(&self) -> u32 {
        self.count_status(1)
    }

    pub fn player2_wins(&self) -> u32 {
        self.count_status(2)
    }

    pub fn ties(&self) -> u32 {
        self.count_status(0)
    }

    pub fn wins(&self, player: Player) -> u32 {
        match player {
            Player::One => self.player1_wins(),
            Player::Two => self.player2_wins(),
        }
    }

    /// Fraction of games won by `player` (0.0 for an empty batch)
    pub fn win_rate(&self, player: Player) -> f64 {
        if self.games.is_empty() {
            return 0.0;
        }
        self.wins(player) as f64 / self.games.len() as f64
    }

    /// Mean final store contents `(player 1, player 2)`
    pub fn average_score(&self) -> (f64, f64) {
        if self.games.is_empty() {
            return (0.0, 0.0);
        }
        let n = self.games.len() as f64;
        let (p1, p2) = self
            .games
            .iter()
            .fold((0u64, 0u64), |(a, b), g| (a + g.score.0 as u64, b + g.score.1 as u64));
        (p1 as f64 / n, p2 as f64 / n)
    }

    pub fn average_moves(&self) -> f64 {
        if self.games.is_empty() {
            return 0.0;
        }
        let total: u64 = self.games.iter().map(|g| g.num_moves as u64).sum();
        total as f64 / self.games.len() as f64
    }

    pub fn games_hitting_limit(&self) -> u32 {
        self.games.iter().filter(|g| g.hit_move_limit).count() as u32
    }

    pub fn aborted_games(&self) -> u32 {
        self.games.iter().filter(|g| g.aborted).count() as u32
    }

    /// Save results to a JSON file
    pub fn save(&self, path: &Path) -> Result<(), HarnessError> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Load results from a JSON file
    pub fn load(path: &Path) -> Result<Self, HarnessError> {
        let contents = std::fs::read_to_string(path).map_err(|e| HarnessError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Generate a text report
    pub fn generate_report(&self) -> String {
        let total = self.total_games();
        let (avg1, avg2) = self.average_score();

        let mut report = String::new();
        report.push_str(&format!(
            "=== {} vs {}: {} games ===\n\n",
            self.player1, self.player2, total
        ));
        report.push_str(&format!("{:<12} {:>6} {:>8}\n", "Result", "Games", "Rate"));
        report.push_str(&"-".repeat(28));
        report.push('\n');
        for (label, count) in [
            ("P1 wins", self.player1_wins()),
            ("P2 wins", self.player2_wins()),
            ("Ties", self.ties()),
        ] {
            let rate = if total == 0 {
                0.0
            } else {
                100.0 * count as f64 / total as f64
            };
            report.push_str(&format!("{label:<12} {count:>6} {rate:>7.1}%\n"));
        }
        report.push('\n');
        report.push_str(&format!("Average score: {avg1:.2} - {avg2:.2}\n"));
        report.push_str(&format!("Average moves: {:.2}\n", self.average_moves()));

        let cut = self.games_hitting_limit();
        if cut > 0 {
            report.push_str(&format!("Games stopped at the move limit: {cut}\n"));
        }
        let aborted = self.aborted_games();
        if aborted > 0 {
            report.push_str(&format!("Games aborted by an engine: {aborted}\n"));
        }

        report
    }

    /// Print report to stdout
    pub fn print_report(&self) {
        println!("{}", self.generate_report());
    }
}

#[cfg(test)]
#[path = "results_tests.rs"]
mod results_tests;

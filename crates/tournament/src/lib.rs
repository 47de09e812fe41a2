//! Tournament Runner for Mancala engines
//!
//! This crate provides infrastructure for:
//! - Configuring a batch of games from TOML or the command line
//! - Playing the batch between two player types
//! - Summarizing wins, scores and game lengths
//!
//! # Usage
//!
//! ```bash
//! # Alpha-beta against the random baseline
//! cargo run -p tournament -- run --player1 abpruning --player2 random --games 100
//!
//! # Start from a config file
//! cargo run -p tournament -- default-config > batch.toml
//! cargo run -p tournament -- run --config batch.toml --verbose
//! ```

mod config;
mod error;
mod match_runner;
mod player;
mod results;

pub use config::*;
pub use error::*;
pub use match_runner::*;
pub use player::*;
pub use results::*;

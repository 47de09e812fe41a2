//! Mancala Tournament CLI
//!
//! Play batches of games between two player types and report the results.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use tournament::{run_batch, BatchConfig, PlayerType};

#[derive(Parser)]
#[command(name = "mancala-tournament")]
#[command(version, about = "Batch runner for Mancala engines", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a batch of games and print a summary
    Run(RunArgs),
    /// Print the default configuration as TOML
    DefaultConfig,
}

/// Flags given here override values from `--config`.
#[derive(Args)]
struct RunArgs {
    /// TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Player 1 type: random, minimax, abpruning or heuristic
    #[arg(long)]
    player1: Option<PlayerType>,

    /// Player 2 type: random, minimax, abpruning or heuristic
    #[arg(long)]
    player2: Option<PlayerType>,

    /// Number of games
    #[arg(short, long)]
    games: Option<u32>,

    /// Search depth in plies
    #[arg(short, long)]
    depth: Option<u8>,

    /// Pits per player
    #[arg(long)]
    pits: Option<usize>,

    /// Stones per pit at the start
    #[arg(long)]
    stones: Option<u32>,

    /// Move ceiling per game
    #[arg(long)]
    max_moves: Option<u32>,

    /// Seed for random players
    #[arg(long)]
    seed: Option<u64>,

    /// Log progress every tenth game
    #[arg(short, long)]
    verbose: bool,

    /// Write the results as JSON
    #[arg(short, long)]
    output: Option<PathBuf>,
}

impl RunArgs {
    fn resolve(&self) -> Result<BatchConfig> {
        let mut config = match &self.config {
            Some(path) => BatchConfig::load(path)
                .with_context(|| format!("loading {}", path.display()))?,
            None => BatchConfig::default(),
        };

        if let Some(p) = self.player1 {
            config.player1 = p;
        }
        if let Some(p) = self.player2 {
            config.player2 = p;
        }
        if let Some(n) = self.games {
            config.num_games = n;
        }
        if let Some(d) = self.depth {
            config.depth = d;
        }
        if let Some(p) = self.pits {
            config.pits_per_player = p;
        }
        if let Some(s) = self.stones {
            config.stones_per_pit = s;
        }
        if let Some(m) = self.max_moves {
            config.max_moves = m;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        config.verbose |= self.verbose;

        config.validate()?;
        Ok(config)
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "info" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(args: RunArgs) -> Result<()> {
    let config = args.resolve()?;
    init_logging(config.verbose);

    let results = run_batch(&config)?;
    results.print_report();

    if let Some(path) = &args.output {
        results
            .save(path)
            .with_context(|| format!("writing {}", path.display()))?;
        println!("Results saved to {}", path.display());
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Run(args) => run(args),
        Commands::DefaultConfig => {
            print!("{}", BatchConfig::default_toml()?);
            Ok(())
        }
    }
}

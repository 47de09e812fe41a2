use std::path::PathBuf;

/// Errors from configuring or running a batch of games.
#[derive(Debug, thiserror::Error)]
pub enum HarnessError {
    #[error("invalid board: {0}")]
    Board(#[from] mancala_core::ConfigError),

    #[error("unknown player type '{0}' (expected random, minimax, abpruning or heuristic)")]
    UnknownPlayerType(String),

    #[error("config validation error: {0}")]
    Validation(String),

    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("failed to serialize TOML: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

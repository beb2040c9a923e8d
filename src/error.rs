use std::path::PathBuf;

/// Errors surfaced by the game engine.
///
/// Every variant reflects a caller error (bad coordinates, stale move); the
/// failing operation leaves the board and turn state untouched.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("board size must be at least 1, got {0}")]
    InvalidSize(usize),

    #[error("position ({row}, {col}) is out of bounds on a {size}x{size} board")]
    OutOfBounds { row: usize, col: usize, size: usize },

    #[error("position ({row}, {col}) is already occupied")]
    Occupied { row: usize, col: usize },
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Rejected grid dimensions.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Error)]
pub enum GridError {
    #[error("grid {cols}x{rows} is too small, both sides need at least {min} cells")]
    TooSmall { cols: i32, rows: i32, min: i32 },
    #[error("grid {cols}x{rows} is too large, both sides need at most {max} cells")]
    TooLarge { cols: i32, rows: i32, max: i32 },
}

/// Failure while loading or validating a [`crate::config::GameConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error(transparent)]
    Grid(#[from] GridError),
    #[error("base speed must be at least 1 tick per second, got {0}")]
    InvalidSpeed(u32),
    #[error("history view length must be at least 1, got {0}")]
    InvalidHistoryLen(usize),
}

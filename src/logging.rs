use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};

use simplelog::{Config, LevelFilter, WriteLogger};
use thiserror::Error;

const APP_DIR_NAME: &str = "serpent-rush";
const LOG_FILE_NAME: &str = "serpent-rush.log";

#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("failed to create log file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error(transparent)]
    Install(#[from] log::SetLoggerError),
}

/// Returns the platform-correct default log file path.
#[must_use]
pub fn default_log_path() -> PathBuf {
    let mut base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    base.push(APP_DIR_NAME);
    base.push(LOG_FILE_NAME);
    base
}

/// Routes `log` output to `path`. The terminal is in raw mode while the game
/// runs, so nothing is written to stderr.
pub fn init(path: &Path, level: LevelFilter) -> Result<(), LoggingError> {
    let io_error = |source: io::Error| LoggingError::Io {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(io_error)?;
    }
    let file = File::create(path).map_err(io_error)?;

    WriteLogger::init(level, Config::default(), file)?;
    Ok(())
}

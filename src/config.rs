use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::Deserialize;

use crate::error::ConfigError;
use crate::grid::Grid;

/// Window size the grid is derived from, in pixels.
pub const WINDOW_WIDTH: i32 = 800;
pub const WINDOW_HEIGHT: i32 = 600;

/// Side of one grid cell, in pixels.
pub const BLOCK_SIZE: i32 = 20;

pub const DEFAULT_GRID_COLS: i32 = WINDOW_WIDTH / BLOCK_SIZE;
pub const DEFAULT_GRID_ROWS: i32 = WINDOW_HEIGHT / BLOCK_SIZE;

/// Ticks per second at score zero.
pub const DEFAULT_BASE_SPEED: u32 = 5;

/// Score needed per extra tick per second.
pub const POINTS_PER_SPEED_STEP: u32 = 5;

/// Finished runs shown on the game-over and history screens.
pub const DEFAULT_HISTORY_VIEW_LEN: usize = 5;

/// Tunable game parameters. Missing fields in a config file take the defaults.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GameConfig {
    pub cols: i32,
    pub rows: i32,
    /// Border walls on; otherwise only the grid bounds stop the snake.
    pub walls: bool,
    pub base_speed: u32,
    pub history_view_len: usize,
    /// Fixed food RNG seed; `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            cols: DEFAULT_GRID_COLS,
            rows: DEFAULT_GRID_ROWS,
            walls: true,
            base_speed: DEFAULT_BASE_SPEED,
            history_view_len: DEFAULT_HISTORY_VIEW_LEN,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Reads a JSON config file.
    pub fn from_json_file(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        serde_json::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Checks the values and returns the grid they describe.
    pub fn validate(&self) -> Result<Grid, ConfigError> {
        if self.base_speed == 0 {
            return Err(ConfigError::InvalidSpeed(self.base_speed));
        }
        if self.history_view_len == 0 {
            return Err(ConfigError::InvalidHistoryLen(self.history_view_len));
        }

        self.grid()
    }

    /// Builds the board for a new session.
    pub fn grid(&self) -> Result<Grid, ConfigError> {
        let grid = if self.walls {
            Grid::bordered(self.cols, self.rows)?
        } else {
            Grid::open(self.cols, self.rows)?
        };
        Ok(grid)
    }
}

/// Tick rate for the current score: one extra tick per second every
/// [`POINTS_PER_SPEED_STEP`] points.
#[must_use]
pub fn ticks_per_second(base_speed: u32, score: u32) -> u32 {
    base_speed.saturating_add(score / POINTS_PER_SPEED_STEP).max(1)
}

/// Wall-clock gap between ticks for the current score.
#[must_use]
pub fn tick_interval(base_speed: u32, score: u32) -> Duration {
    Duration::from_secs(1) / ticks_per_second(base_speed, score)
}

use std::io;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use clap::Parser;
use log::{LevelFilter, info};
use serpent_rush::config::{GameConfig, tick_interval};
use serpent_rush::error::ConfigError;
use serpent_rush::input::{InputEvent, poll_input};
use serpent_rush::logging::{self, LoggingError};
use serpent_rush::mode::{Mode, ModeController};
use serpent_rush::renderer;
use serpent_rush::terminal_runtime::{TerminalSession, install_panic_hook};
use thiserror::Error;

/// Upper bound on how long one frame waits for input.
const FRAME_POLL: Duration = Duration::from_millis(16);

#[derive(Debug, Parser)]
#[command(version, about = "Snake on a walled grid, in your terminal")]
struct Cli {
    /// JSON config file; flags below override its values.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Grid columns.
    #[arg(long)]
    cols: Option<i32>,

    /// Grid rows.
    #[arg(long)]
    rows: Option<i32>,

    /// Ticks per second at score zero.
    #[arg(long = "base-speed")]
    base_speed: Option<u32>,

    /// Finished runs shown on the history screens.
    #[arg(long = "history")]
    history_view_len: Option<usize>,

    /// Seed for food placement.
    #[arg(long)]
    seed: Option<u64>,

    /// Play without border walls.
    #[arg(long = "no-walls")]
    no_walls: bool,

    /// Log file path.
    #[arg(long = "log-file")]
    log_file: Option<PathBuf>,

    /// Log level (off, error, warn, info, debug, trace).
    #[arg(long = "log-level", default_value = "info")]
    log_level: LevelFilter,
}

#[derive(Debug, Error)]
enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Logging(#[from] LoggingError),
    #[error("terminal error: {0}")]
    Io(#[from] io::Error),
}

fn main() -> Result<(), AppError> {
    let cli = Cli::parse();

    let log_path = cli.log_file.clone().unwrap_or_else(logging::default_log_path);
    logging::init(&log_path, cli.log_level)?;

    let config = resolve_config(&cli)?;
    info!("starting with {config:?}");
    let controller = ModeController::new(config)?;

    install_panic_hook();
    run(controller)?;

    info!("exiting");
    Ok(())
}

fn resolve_config(cli: &Cli) -> Result<GameConfig, ConfigError> {
    let mut config = match &cli.config {
        Some(path) => GameConfig::from_json_file(path)?,
        None => GameConfig::default(),
    };

    if let Some(cols) = cli.cols {
        config.cols = cols;
    }
    if let Some(rows) = cli.rows {
        config.rows = rows;
    }
    if let Some(base_speed) = cli.base_speed {
        config.base_speed = base_speed;
    }
    if let Some(history_view_len) = cli.history_view_len {
        config.history_view_len = history_view_len;
    }
    if cli.seed.is_some() {
        config.seed = cli.seed;
    }
    if cli.no_walls {
        config.walls = false;
    }

    Ok(config)
}

fn run(mut controller: ModeController) -> io::Result<()> {
    let mut session = TerminalSession::enter()?;
    let base_speed = controller.config().base_speed;
    let mut last_tick = Instant::now();

    loop {
        let model = controller.render_model();
        session
            .terminal_mut()
            .draw(|frame| renderer::render(frame, &model, base_speed))?;

        match poll_input(FRAME_POLL, controller.mode())? {
            Some(InputEvent::Quit) => break,
            Some(InputEvent::Command(command)) => {
                controller.handle(command);
            }
            None => {}
        }

        if controller.mode() != Mode::Playing {
            last_tick = Instant::now();
            continue;
        }

        let interval = tick_interval(base_speed, controller.scores().score());
        if last_tick.elapsed() >= interval {
            controller.tick();
            last_tick = Instant::now();
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::{Cli, resolve_config};

    #[test]
    fn flags_override_defaults() {
        let cli = Cli::parse_from([
            "serpent-rush",
            "--cols",
            "12",
            "--no-walls",
            "--seed",
            "9",
        ]);

        let config = resolve_config(&cli).expect("no config file to read");

        assert_eq!(config.cols, 12);
        assert_eq!(config.rows, 30);
        assert!(!config.walls);
        assert_eq!(config.seed, Some(9));
    }
}

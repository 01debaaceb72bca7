use log::{debug, info};

use crate::config::GameConfig;
use crate::error::ConfigError;
use crate::food::FoodPlacer;
use crate::grid::{Cell, Grid};
use crate::input::{Command, Direction};
use crate::score::ScoreTrack;
use crate::session::{DeathReason, GameSession, TickOutcome};

/// Top-level screen the game is on.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Mode {
    Menu,
    Playing,
    Paused,
    GameOver,
    HighScores,
}

/// Whether a command changed anything.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Handled {
    Applied,
    Ignored,
}

/// Board contents visible while a session is on screen.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct BoardView {
    pub cols: i32,
    pub rows: i32,
    /// Head first.
    pub snake: Vec<Cell>,
    pub heading: Direction,
    pub food: Cell,
    /// Sorted row-major.
    pub walls: Vec<Cell>,
    pub score: u32,
    pub outcome: Option<TickOutcome>,
}

impl BoardView {
    #[must_use]
    pub fn death_reason(&self) -> Option<DeathReason> {
        match self.outcome {
            Some(TickOutcome::Lost(reason)) => Some(reason),
            _ => None,
        }
    }
}

/// Snapshot a front end draws from.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct RenderModel {
    pub mode: Mode,
    pub high_score: u32,
    /// Present in Playing, Paused and GameOver.
    pub board: Option<BoardView>,
    /// Most recent first, bounded by the configured view length. Filled in
    /// GameOver and HighScores only.
    pub history: Vec<u32>,
    /// A suspended session can be resumed from the menu.
    pub can_resume: bool,
}

/// Mode state machine owning the score track and the current session.
#[derive(Debug)]
pub struct ModeController {
    config: GameConfig,
    grid: Grid,
    mode: Mode,
    scores: ScoreTrack,
    session: Option<GameSession>,
    sessions_started: u64,
}

impl ModeController {
    /// Validates `config` and opens on the menu.
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        let grid = config.validate()?;

        Ok(Self {
            config,
            grid,
            mode: Mode::Menu,
            scores: ScoreTrack::new(),
            session: None,
            sessions_started: 0,
        })
    }

    /// Applies one command. Commands that mean nothing in the current mode
    /// are ignored.
    pub fn handle(&mut self, command: Command) -> Handled {
        let next = match (self.mode, command) {
            (Mode::Menu, Command::Confirm) => {
                self.start_session();
                Mode::Playing
            }
            (Mode::Menu, Command::Resume) if self.can_resume() => Mode::Playing,
            (Mode::Menu, Command::ShowHistory) => Mode::HighScores,
            (Mode::HighScores, Command::Back) => Mode::Menu,
            (Mode::Playing, Command::Pause) => Mode::Paused,
            (Mode::Paused, Command::Resume) => Mode::Playing,
            (Mode::Paused, Command::Back) => Mode::Menu,
            (Mode::Playing, Command::Direction(direction)) => {
                if let Some(session) = self.session.as_mut() {
                    session.turn(direction);
                }
                Mode::Playing
            }
            (Mode::Playing, Command::Tick) => match self.tick_session() {
                Some(outcome) if outcome.is_terminal() => Mode::GameOver,
                Some(_) => Mode::Playing,
                None => return Handled::Ignored,
            },
            (Mode::GameOver, Command::Confirm) => Mode::Menu,
            _ => return Handled::Ignored,
        };

        if next != self.mode {
            debug!("mode {:?} -> {:?} on {:?}", self.mode, next, command);
        }
        self.mode = next;
        Handled::Applied
    }

    /// Shorthand for `handle(Command::Tick)`.
    pub fn tick(&mut self) -> Handled {
        self.handle(Command::Tick)
    }

    fn start_session(&mut self) {
        if self.session.as_ref().is_some_and(GameSession::is_active) {
            info!("abandoning suspended session for a new one");
        }

        let placer = match self.config.seed {
            Some(seed) => FoodPlacer::with_seed(seed.wrapping_add(self.sessions_started)),
            None => FoodPlacer::from_entropy(),
        };
        self.sessions_started += 1;
        self.scores.reset();
        self.session = Some(GameSession::new(self.grid.clone(), placer));
    }

    fn tick_session(&mut self) -> Option<TickOutcome> {
        let session = self.session.as_mut()?;
        Some(session.tick(&mut self.scores))
    }

    fn can_resume(&self) -> bool {
        self.session.as_ref().is_some_and(GameSession::is_active)
    }

    #[must_use]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    #[must_use]
    pub fn scores(&self) -> &ScoreTrack {
        &self.scores
    }

    #[must_use]
    pub fn session(&self) -> Option<&GameSession> {
        self.session.as_ref()
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Replaces the current session, for scripted scenarios.
    pub fn install_session(&mut self, session: GameSession) {
        self.session = Some(session);
    }

    /// Builds a snapshot of what should be on screen.
    #[must_use]
    pub fn render_model(&self) -> RenderModel {
        let board = match self.mode {
            Mode::Playing | Mode::Paused | Mode::GameOver => {
                self.session.as_ref().map(|session| self.board_view(session))
            }
            Mode::Menu | Mode::HighScores => None,
        };

        let history = match self.mode {
            Mode::GameOver | Mode::HighScores => self
                .scores
                .recent(self.config.history_view_len)
                .collect(),
            _ => Vec::new(),
        };

        RenderModel {
            mode: self.mode,
            high_score: self.scores.high_score(),
            board,
            history,
            can_resume: self.mode == Mode::Menu && self.can_resume(),
        }
    }

    fn board_view(&self, session: &GameSession) -> BoardView {
        let (cols, rows) = session.grid().dimensions();
        let mut walls: Vec<Cell> = session.grid().walls().collect();
        walls.sort_by_key(|cell| (cell.row, cell.col));

        BoardView {
            cols,
            rows,
            snake: session.snake().segments().collect(),
            heading: session.snake().heading(),
            food: session.food(),
            walls,
            score: self.scores.score(),
            outcome: session.outcome(),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::config::GameConfig;
    use crate::food::FoodPlacer;
    use crate::grid::{Cell, Grid};
    use crate::input::{Command, Direction};
    use crate::session::GameSession;
    use crate::snake::Snake;

    use super::{Handled, Mode, ModeController};

    fn controller() -> ModeController {
        ModeController::new(GameConfig {
            cols: 10,
            rows: 10,
            seed: Some(17),
            ..GameConfig::default()
        })
        .expect("10x10 config is valid")
    }

    fn doomed_session() -> GameSession {
        let grid = Grid::bordered(10, 10).expect("10x10 grid is valid");
        GameSession::from_parts(
            grid,
            Snake::new(Cell::new(8, 5), Direction::Right),
            Cell::new(2, 2),
            FoodPlacer::with_seed(1),
        )
    }

    #[test]
    fn opens_on_menu_without_board() {
        let controller = controller();
        let model = controller.render_model();

        assert_eq!(model.mode, Mode::Menu);
        assert!(model.board.is_none());
        assert!(!model.can_resume);
    }

    #[test]
    fn confirm_starts_a_fresh_session() {
        let mut controller = controller();

        assert_eq!(controller.handle(Command::Confirm), Handled::Applied);

        let model = controller.render_model();
        assert_eq!(model.mode, Mode::Playing);
        let board = model.board.expect("board is visible while playing");
        assert_eq!(board.snake, vec![Cell::new(5, 5)]);
        assert_eq!(board.heading, Direction::Right);
        assert_eq!(board.score, 0);
        assert_eq!(board.walls.len(), 36);
    }

    #[test]
    fn irrelevant_commands_are_ignored() {
        let mut controller = controller();

        for command in [
            Command::Tick,
            Command::Pause,
            Command::Resume,
            Command::Back,
            Command::Direction(Direction::Up),
        ] {
            assert_eq!(controller.handle(command), Handled::Ignored);
            assert_eq!(controller.mode(), Mode::Menu);
        }

        controller.handle(Command::Confirm);
        assert_eq!(controller.handle(Command::Confirm), Handled::Ignored);
        assert_eq!(controller.handle(Command::ShowHistory), Handled::Ignored);
        assert_eq!(controller.mode(), Mode::Playing);
    }

    #[test]
    fn pause_preserves_session_and_blocks_ticks_and_turns() {
        let mut controller = controller();
        controller.handle(Command::Confirm);
        controller.handle(Command::Pause);
        let before = controller.render_model().board;

        assert_eq!(controller.tick(), Handled::Ignored);
        assert_eq!(
            controller.handle(Command::Direction(Direction::Up)),
            Handled::Ignored
        );
        assert_eq!(controller.render_model().board, before);

        controller.handle(Command::Resume);
        assert_eq!(controller.mode(), Mode::Playing);
        assert_eq!(controller.render_model().board, before);
    }

    #[test]
    fn paused_session_can_be_continued_from_menu() {
        let mut controller = controller();
        controller.handle(Command::Confirm);
        controller.tick();
        controller.handle(Command::Pause);
        let before = controller.render_model().board;

        controller.handle(Command::Back);
        assert_eq!(controller.mode(), Mode::Menu);
        assert!(controller.render_model().can_resume);

        controller.handle(Command::Resume);
        assert_eq!(controller.mode(), Mode::Playing);
        assert_eq!(controller.render_model().board, before);
    }

    #[test]
    fn confirm_in_menu_discards_a_suspended_session() {
        let mut controller = controller();
        controller.handle(Command::Confirm);
        controller.tick();
        controller.handle(Command::Pause);
        controller.handle(Command::Back);
        assert!(controller.render_model().can_resume);

        assert_eq!(controller.handle(Command::Confirm), Handled::Applied);

        let model = controller.render_model();
        assert_eq!(model.mode, Mode::Playing);
        assert!(!model.can_resume);
        let board = model.board.expect("board is visible while playing");
        assert_eq!(board.snake, vec![Cell::new(5, 5)]);
        assert_eq!(board.score, 0);
        assert!(controller.scores().history().is_empty());
        assert_eq!(
            controller.session().map(|session| session.tick_count()),
            Some(0)
        );
    }

    #[test]
    fn losing_records_history_once_and_confirm_returns_to_menu() {
        let mut controller = controller();
        controller.handle(Command::Confirm);
        controller.install_session(doomed_session());

        controller.tick();
        assert_eq!(controller.mode(), Mode::GameOver);
        assert_eq!(controller.scores().history(), &[0]);

        // Ticks after the loss are not delivered.
        assert_eq!(controller.tick(), Handled::Ignored);
        assert_eq!(controller.scores().history(), &[0]);

        let model = controller.render_model();
        assert_eq!(model.history, vec![0]);
        assert!(model.board.is_some());

        controller.handle(Command::Confirm);
        assert_eq!(controller.mode(), Mode::Menu);
        assert!(!controller.render_model().can_resume);
        assert_eq!(controller.handle(Command::Resume), Handled::Ignored);
    }

    #[test]
    fn history_screen_round_trip() {
        let mut controller = controller();

        controller.handle(Command::ShowHistory);
        assert_eq!(controller.mode(), Mode::HighScores);
        assert!(controller.render_model().board.is_none());

        controller.handle(Command::Back);
        assert_eq!(controller.mode(), Mode::Menu);
    }

    #[test]
    fn history_view_is_newest_first_and_bounded() {
        let mut controller = ModeController::new(GameConfig {
            cols: 10,
            rows: 10,
            seed: Some(3),
            history_view_len: 2,
            ..GameConfig::default()
        })
        .expect("config is valid");

        for _ in 0..3 {
            controller.handle(Command::Confirm);
            controller.install_session(doomed_session());
            controller.tick();
            controller.handle(Command::Confirm);
        }

        controller.handle(Command::ShowHistory);
        assert_eq!(controller.render_model().history, vec![0, 0]);
        assert_eq!(controller.scores().history().len(), 3);
    }

    #[test]
    fn new_session_resets_score_but_keeps_high_score() {
        let mut controller = controller();
        controller.handle(Command::Confirm);
        let grid = Grid::bordered(10, 10).expect("10x10 grid is valid");
        controller.install_session(GameSession::from_parts(
            grid,
            Snake::new(Cell::new(7, 5), Direction::Right),
            Cell::new(8, 5),
            FoodPlacer::with_seed(2),
        ));

        controller.tick();
        controller.tick();
        assert_eq!(controller.mode(), Mode::GameOver);
        assert_eq!(controller.scores().high_score(), 1);

        controller.handle(Command::Confirm);
        controller.handle(Command::Confirm);
        let model = controller.render_model();
        assert_eq!(model.board.expect("board while playing").score, 0);
        assert_eq!(model.high_score, 1);
    }
}

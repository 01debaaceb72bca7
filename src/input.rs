use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::mode::Mode;

/// Canonical movement directions for snake input.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Self; 4] = [Self::Up, Self::Down, Self::Left, Self::Right];

    /// Returns the opposite direction.
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Column/row offset of one step; rows grow downwards.
    #[must_use]
    pub fn delta(self) -> (i32, i32) {
        match self {
            Self::Up => (0, -1),
            Self::Down => (0, 1),
            Self::Left => (-1, 0),
            Self::Right => (1, 0),
        }
    }
}

/// Returns whether a direction change is legal (no immediate 180° turns).
#[must_use]
pub fn direction_change_is_valid(current: Direction, next: Direction) -> bool {
    next != current.opposite()
}

/// Discrete commands consumed by [`crate::mode::ModeController`].
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Command {
    Direction(Direction),
    Confirm,
    Pause,
    Resume,
    ShowHistory,
    Back,
    Tick,
}

/// What a key press means to the front end.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum InputEvent {
    Command(Command),
    Quit,
}

/// Maps a key press to an input event. `mode` disambiguates the space bar,
/// which pauses while playing and resumes everywhere else.
#[must_use]
pub fn map_key(key: KeyEvent, mode: Mode) -> Option<InputEvent> {
    if key.kind == KeyEventKind::Release {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(InputEvent::Quit);
    }

    let command = match key.code {
        KeyCode::Up | KeyCode::Char('w' | 'W') => Command::Direction(Direction::Up),
        KeyCode::Down | KeyCode::Char('s' | 'S') => Command::Direction(Direction::Down),
        KeyCode::Left | KeyCode::Char('a' | 'A') => Command::Direction(Direction::Left),
        KeyCode::Right | KeyCode::Char('d' | 'D') => Command::Direction(Direction::Right),
        KeyCode::Enter => Command::Confirm,
        KeyCode::Char(' ') if mode == Mode::Playing => Command::Pause,
        KeyCode::Char(' ') => Command::Resume,
        KeyCode::Char('h' | 'H') => Command::ShowHistory,
        KeyCode::Esc | KeyCode::Backspace => Command::Back,
        KeyCode::Char('q' | 'Q') => return Some(InputEvent::Quit),
        _ => return None,
    };

    Some(InputEvent::Command(command))
}

/// Waits up to `timeout` for a key press and maps it.
pub fn poll_input(timeout: Duration, mode: Mode) -> io::Result<Option<InputEvent>> {
    if !event::poll(timeout)? {
        return Ok(None);
    }

    match event::read()? {
        Event::Key(key) => Ok(map_key(key, mode)),
        _ => Ok(None),
    }
}

use std::io::{self, Stdout, Write};
use std::panic;

use crossterm::cursor::{Hide, Show};
use crossterm::queue;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use log::{error, warn};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

/// Terminal the game draws into.
pub type AppTerminal = Terminal<CrosstermBackend<Stdout>>;

/// Raw-mode, alternate-screen terminal for the lifetime of the game loop.
/// Dropping it puts the user's shell back the way it was.
pub struct TerminalSession {
    terminal: AppTerminal,
}

impl TerminalSession {
    pub fn enter() -> io::Result<Self> {
        enable_raw_mode()?;

        let mut stdout = io::stdout();
        let terminal = write_game_screen(&mut stdout)
            .and_then(|()| Terminal::new(CrosstermBackend::new(stdout)));

        terminal.map(|terminal| Self { terminal }).inspect_err(|_| {
            let _ = restore_terminal();
        })
    }

    pub fn terminal_mut(&mut self) -> &mut AppTerminal {
        &mut self.terminal
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        if let Err(error) = restore_terminal() {
            warn!("failed to restore terminal: {error}");
        }
    }
}

/// Chains a hook that restores the terminal and logs the panic ahead of the
/// default report, so the message is readable in the shell.
pub fn install_panic_hook() {
    let report = panic::take_hook();

    panic::set_hook(Box::new(move |info| {
        let _ = restore_terminal();
        error!("panic: {info}");
        report(info);
    }));
}

fn restore_terminal() -> io::Result<()> {
    let raw_mode = disable_raw_mode();
    write_shell_screen(&mut io::stdout())?;
    raw_mode
}

/// Switches to the alternate screen with the cursor hidden.
fn write_game_screen(out: &mut impl Write) -> io::Result<()> {
    queue!(out, EnterAlternateScreen, Hide)?;
    out.flush()
}

/// Leaves the alternate screen and shows the cursor again.
fn write_shell_screen(out: &mut impl Write) -> io::Result<()> {
    queue!(out, Show, LeaveAlternateScreen)?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::{write_game_screen, write_shell_screen};

    #[test]
    fn game_screen_enters_alternate_buffer_and_hides_cursor() {
        let mut out = Vec::new();

        write_game_screen(&mut out).expect("writing to a buffer cannot fail");

        let text = String::from_utf8(out).expect("escape codes are ascii");
        assert!(text.contains("\x1b[?1049h"));
        assert!(text.contains("\x1b[?25l"));
    }

    #[test]
    fn shell_screen_shows_cursor_before_leaving_alternate_buffer() {
        let mut out = Vec::new();

        write_shell_screen(&mut out).expect("writing to a buffer cannot fail");

        let text = String::from_utf8(out).expect("escape codes are ascii");
        let show = text.find("\x1b[?25h").expect("cursor is shown");
        let leave = text.find("\x1b[?1049l").expect("alternate screen is left");
        assert!(show < leave);
    }
}

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::mode::BoardView;

/// Renders the one-line score bar and returns the remaining play area below it.
#[must_use]
pub fn render_hud(
    frame: &mut Frame<'_>,
    area: Rect,
    board: &BoardView,
    high_score: u32,
    ticks_per_second: u32,
) -> Rect {
    let [hud_area, play_area] =
        Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(area);

    frame.render_widget(
        Paragraph::new(score_line(
            board.score,
            high_score,
            board.snake.len(),
            ticks_per_second,
        ))
        .alignment(Alignment::Center),
        hud_area,
    );

    play_area
}

fn score_line(score: u32, high_score: u32, length: usize, speed: u32) -> Line<'static> {
    let label = Style::default().fg(Color::DarkGray);
    let value = Style::default()
        .fg(Color::White)
        .add_modifier(Modifier::BOLD);

    Line::from(vec![
        Span::styled("Score: ", label),
        Span::styled(score.to_string(), value),
        Span::styled("   High Score: ", label),
        Span::styled(high_score.to_string(), value),
        Span::styled("   Length: ", label),
        Span::styled(length.to_string(), value),
        Span::styled("   Speed: ", label),
        Span::styled(speed.to_string(), value),
    ])
}

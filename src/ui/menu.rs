use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Clear, Paragraph};

use crate::session::{DeathReason, TickOutcome};

/// Draws the main menu as a centered popup.
pub fn render_main_menu(frame: &mut Frame<'_>, area: Rect, high_score: u32, can_resume: bool) {
    let popup = centered_popup(area, 70, 50);
    frame.render_widget(Clear, popup);

    let [title_row, body_row, footer_row] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(3),
        Constraint::Length(2),
    ])
    .areas(popup);

    frame.render_widget(
        Paragraph::new(Line::from("SERPENT RUSH"))
            .alignment(Alignment::Center)
            .style(
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
        title_row,
    );

    let mut body = vec![
        Line::from(format!("High score: {high_score}")),
        Line::from(""),
        Line::from("[Enter] Start Game"),
    ];
    if can_resume {
        body.push(Line::from("[Space] Continue"));
    }
    body.push(Line::from("[H] High Scores"));
    body.push(Line::from("[Q] Quit"));

    frame.render_widget(
        Paragraph::new(body)
            .alignment(Alignment::Center)
            .block(Block::bordered().title(" menu ")),
        body_row,
    );

    frame.render_widget(
        Paragraph::new(Line::from("Use arrows/WASD to move, Space to pause"))
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::DarkGray)),
        footer_row,
    );
}

/// Draws the run history screen.
pub fn render_history_screen(frame: &mut Frame<'_>, area: Rect, history: &[u32]) {
    let popup = centered_popup(area, 50, 60);
    frame.render_widget(Clear, popup);

    let mut lines = vec![Line::from("")];
    if history.is_empty() {
        lines.push(Line::from("No scores yet!"));
    } else {
        lines.extend(history.iter().map(|score| Line::from(score.to_string())));
    }
    lines.push(Line::from(""));
    lines.push(Line::from("[Esc] Back"));

    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .style(Style::default().add_modifier(Modifier::BOLD))
            .block(Block::bordered().title(" high scores ")),
        popup,
    );
}

/// Draws the pause screen as a centered popup.
pub fn render_pause_menu(frame: &mut Frame<'_>, area: Rect) {
    let popup = centered_popup(area, 60, 30);
    frame.render_widget(Clear, popup);

    let lines = vec![
        Line::from("PAUSED"),
        Line::from(""),
        Line::from("[Space] Resume"),
        Line::from("[Esc] Menu"),
    ];
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Yellow))
            .block(Block::bordered().title(" pause ")),
        popup,
    );
}

/// Draws the game-over screen with the latest finished runs.
pub fn render_game_over_menu(
    frame: &mut Frame<'_>,
    area: Rect,
    score: u32,
    high_score: u32,
    outcome: Option<TickOutcome>,
    history: &[u32],
) {
    let popup = centered_popup(area, 70, 70);
    frame.render_widget(Clear, popup);

    let mut lines = vec![
        Line::from("GAME OVER"),
        Line::from(""),
        Line::from(format!("Score: {score}")),
        Line::from(format!("High score: {high_score}")),
        Line::from(match outcome {
            Some(TickOutcome::Lost(DeathReason::Wall)) => "Cause: hit wall",
            Some(TickOutcome::Lost(DeathReason::SelfCollision)) => "Cause: hit yourself",
            Some(TickOutcome::Cleared) => "Board cleared!",
            Some(TickOutcome::Continuing) | None => "",
        }),
        Line::from(""),
        Line::from("Last scores:"),
    ];
    lines.extend(history.iter().map(|score| Line::from(score.to_string())));
    lines.push(Line::from(""));
    lines.push(Line::from("[Enter] Menu"));

    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(Block::bordered().title(" game over ")),
        popup,
    );
}

fn centered_popup(area: Rect, width_percent: u16, height_percent: u16) -> Rect {
    let [_, mid, _] = Layout::vertical([
        Constraint::Percentage((100 - height_percent) / 2),
        Constraint::Percentage(height_percent),
        Constraint::Percentage((100 - height_percent) / 2),
    ])
    .areas(area);

    let [_, center, _] = Layout::horizontal([
        Constraint::Percentage((100 - width_percent) / 2),
        Constraint::Percentage(width_percent),
        Constraint::Percentage((100 - width_percent) / 2),
    ])
    .areas(mid);

    center
}

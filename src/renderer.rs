use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};

use crate::config::ticks_per_second;
use crate::grid::Cell;
use crate::mode::{BoardView, Mode, RenderModel};
use crate::ui::hud::render_hud;
use crate::ui::menu::{
    render_game_over_menu, render_history_screen, render_main_menu, render_pause_menu,
};

/// Terminal columns per grid cell; two keeps cells roughly square.
const CELL_WIDTH: u16 = 2;

const GLYPH_WALL: &str = "▓▓";
const GLYPH_SNAKE_HEAD: &str = "██";
const GLYPH_SNAKE_BODY: &str = "▒▒";
const GLYPH_FOOD: &str = "()";

const COLOR_WALL: Color = Color::Gray;
const COLOR_SNAKE: Color = Color::Green;
const COLOR_FOOD: Color = Color::Red;

/// Renders the full frame from a render model.
pub fn render(frame: &mut Frame<'_>, model: &RenderModel, base_speed: u32) {
    let area = frame.area();

    match model.mode {
        Mode::Menu => render_main_menu(frame, area, model.high_score, model.can_resume),
        Mode::HighScores => render_history_screen(frame, area, &model.history),
        Mode::Playing | Mode::Paused | Mode::GameOver => {
            let Some(board) = model.board.as_ref() else {
                return;
            };

            let speed = ticks_per_second(base_speed, board.score);
            let play_area = render_hud(frame, area, board, model.high_score, speed);
            render_board(frame, play_area, board);

            if model.mode == Mode::Paused {
                render_pause_menu(frame, play_area);
            } else if model.mode == Mode::GameOver {
                render_game_over_menu(
                    frame,
                    play_area,
                    board.score,
                    model.high_score,
                    board.outcome,
                    &model.history,
                );
            }
        }
    }
}

fn render_board(frame: &mut Frame<'_>, area: Rect, board: &BoardView) {
    let buffer = frame.buffer_mut();

    for wall in &board.walls {
        if let Some((x, y)) = logical_to_terminal(area, board, *wall) {
            buffer.set_string(x, y, GLYPH_WALL, Style::new().fg(COLOR_WALL));
        }
    }

    if let Some((x, y)) = logical_to_terminal(area, board, board.food) {
        buffer.set_string(x, y, GLYPH_FOOD, Style::new().fg(COLOR_FOOD));
    }

    for (index, segment) in board.snake.iter().enumerate() {
        let Some((x, y)) = logical_to_terminal(area, board, *segment) else {
            continue;
        };

        if index == 0 {
            buffer.set_string(
                x,
                y,
                GLYPH_SNAKE_HEAD,
                Style::new().fg(COLOR_SNAKE).add_modifier(Modifier::BOLD),
            );
        } else {
            buffer.set_string(x, y, GLYPH_SNAKE_BODY, Style::new().fg(COLOR_SNAKE));
        }
    }
}

/// Maps a grid cell to the top-left terminal position of its glyph, centering
/// the board in `area`. Cells that fall outside the area are skipped.
fn logical_to_terminal(area: Rect, board: &BoardView, cell: Cell) -> Option<(u16, u16)> {
    let col = u16::try_from(cell.col).ok()?;
    let row = u16::try_from(cell.row).ok()?;
    let board_width = u16::try_from(board.cols).ok()?.saturating_mul(CELL_WIDTH);
    let board_height = u16::try_from(board.rows).ok()?;

    let left = area.x + area.width.saturating_sub(board_width) / 2;
    let top = area.y + area.height.saturating_sub(board_height) / 2;

    let x = left.saturating_add(col.saturating_mul(CELL_WIDTH));
    let y = top.saturating_add(row);
    if x.saturating_add(CELL_WIDTH) > area.right() || y >= area.bottom() {
        return None;
    }

    Some((x, y))
}

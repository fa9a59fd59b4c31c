//! Stateless rendering of the puzzle screen.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use tilefold_core::Board;

use super::app::App;

const CELL_WIDTH: u16 = 8;
const CELL_HEIGHT: u16 = 3;

/// Renders the full screen: header, grid, and status line.
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let state = app.session().state();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title and score
            Constraint::Min(10),   // Grid
            Constraint::Length(3), // Status
        ])
        .split(area);

    draw_header(frame, chunks[0], app);
    draw_grid(frame, chunks[1], &state.board);

    let status = Paragraph::new(app.status_message())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[2]);
}

fn draw_header(frame: &mut Frame, area: Rect, app: &App) {
    let state = app.session().state();
    let target = app.session().config().win_value();

    let mut score_line = format!("score {}    target {}", state.score, target);
    if state.over {
        score_line.push_str("    GAME OVER");
    }

    let header = Paragraph::new(vec![
        Line::from(Span::styled(
            "tilefold",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(score_line),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(header, area);
}

fn draw_grid(frame: &mut Frame, area: Rect, board: &Board) {
    let row_count = board.row_count() as u16;
    let col_count = board.col_count() as u16;
    let grid_area = center_rect(area, col_count * CELL_WIDTH, row_count * CELL_HEIGHT);

    let row_constraints: Vec<Constraint> = (0..row_count)
        .map(|_| Constraint::Length(CELL_HEIGHT))
        .collect();
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(row_constraints)
        .split(grid_area);

    for (row_index, row_area) in rows.iter().enumerate() {
        let col_constraints: Vec<Constraint> = (0..col_count)
            .map(|_| Constraint::Length(CELL_WIDTH))
            .collect();
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(col_constraints)
            .split(*row_area);

        for (col_index, cell_area) in cols.iter().enumerate() {
            let value = board.get(row_index, col_index).flatten();
            draw_cell(frame, *cell_area, value);
        }
    }
}

fn draw_cell(frame: &mut Frame, area: Rect, value: Option<u32>) {
    let (text, style) = match value {
        None => (String::new(), Style::default().fg(Color::DarkGray)),
        Some(value) => (
            value.to_string(),
            Style::default()
                .fg(tile_color(value))
                .add_modifier(Modifier::BOLD),
        ),
    };

    let cell = Paragraph::new(Line::from(Span::styled(text, style)))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        );
    frame.render_widget(cell, area);
}

fn tile_color(value: u32) -> Color {
    match value {
        2 => Color::White,
        4 => Color::Gray,
        8 => Color::LightYellow,
        16 => Color::Yellow,
        32 => Color::LightRed,
        64 => Color::Red,
        128 => Color::LightMagenta,
        256 => Color::Magenta,
        512 => Color::LightCyan,
        1024 => Color::Cyan,
        _ => Color::LightGreen,
    }
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(area.height.saturating_sub(height) / 2),
            Constraint::Length(height),
            Constraint::Length(area.height.saturating_sub(height) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(area.width.saturating_sub(width) / 2),
            Constraint::Length(width),
            Constraint::Length(area.width.saturating_sub(width) / 2),
        ])
        .split(vert[1])[1]
}

//! Stateless UI rendering for the board.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use reverse_tiles_engine::{GameState, Tile};

use super::app::App;

const CELL_WIDTH: u16 = 7;

/// Renders title, board, move counter and status line.
pub fn draw(frame: &mut Frame, state: &GameState, app: &App) {
    let area = frame.area();
    let side = state.board().side() as u16;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),         // Title
            Constraint::Min(side * 2 + 2), // Board
            Constraint::Length(1),         // Moves
            Constraint::Length(3),         // Status
            Constraint::Length(1),         // Help
        ])
        .split(area);

    let title = Paragraph::new(format!(
        "Reverse {} Mode",
        state.config().reverse_base().value()
    ))
    .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
    .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    draw_board(frame, chunks[1], state);

    let moves = Paragraph::new(format!("Moves: {}", state.moves())).alignment(Alignment::Center);
    frame.render_widget(moves, chunks[2]);

    let status = Paragraph::new(app.status_message())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[3]);

    let help = Paragraph::new("w/a/s/d or arrows to slide, q to quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[4]);
}

fn draw_board(frame: &mut Frame, area: Rect, state: &GameState) {
    let board = state.board();
    let side = board.side() as u16;
    let board_area = center_rect(area, side * CELL_WIDTH + 2, side * 2 + 1);

    let mut lines = Vec::new();
    for row in board.rows() {
        let spans: Vec<Span> = row
            .iter()
            .map(|&value| Span::styled(cell_text(value), tile_style(value)))
            .collect();
        lines.push(Line::from(spans));
        lines.push(Line::default());
    }
    lines.pop();

    let grid = Paragraph::new(lines).block(Block::default().borders(Borders::ALL));
    frame.render_widget(grid, board_area);
}

fn cell_text(value: Tile) -> String {
    let label = if value == 0 {
        ".".to_string()
    } else {
        value.to_string()
    };
    format!("{:^width$}", label, width = CELL_WIDTH as usize)
}

fn tile_style(value: Tile) -> Style {
    let color = match value {
        0 => Color::DarkGray,
        1 => Color::Magenta,
        2 => Color::Green,
        4 | 8 => Color::LightGreen,
        16 | 32 => Color::Cyan,
        64 => Color::Blue,
        128 => Color::Yellow,
        _ => Color::Red,
    };
    let style = Style::default().fg(color);
    if value == 2 {
        style.add_modifier(Modifier::BOLD)
    } else {
        style
    }
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(vert[1])[1]
}

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::board_widget::{self, BoardGeometry};
use crate::config::DisplayConfig;
use crate::game::{Game, GameStatus, Player};

/// Split the screen into header, board, message and controls.
pub fn layout(area: Rect) -> [Rect; 4] {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(5),    // Board
            Constraint::Length(3), // Message
            Constraint::Length(3), // Controls
        ])
        .split(area);
    [chunks[0], chunks[1], chunks[2], chunks[3]]
}

pub fn render(
    frame: &mut Frame,
    game: &Game,
    geometry: &BoardGeometry,
    selected_column: usize,
    message: &Option<String>,
    display: &DisplayConfig,
) {
    let [header, _, message_area, controls] = layout(frame.area());

    render_header(frame, game, display, header);
    board_widget::render_board(frame, game, geometry, selected_column, &display.colors);
    render_message(frame, message, message_area);
    render_controls(frame, controls);
}

fn side_color(side: Player, display: &DisplayConfig) -> Color {
    match side {
        Player::A => board_widget::color(display.colors.player_a),
        Player::B => board_widget::color(display.colors.player_b),
    }
}

fn render_header(frame: &mut Frame, game: &Game, display: &DisplayConfig, area: Rect) {
    let (status, color) = match game.status() {
        GameStatus::InProgress => {
            let side = game.current_side();
            (
                format!("{} to move  |  Move {}", side.name(), game.move_count() + 1),
                side_color(side, display),
            )
        }
        GameStatus::Won(side) => (
            format!("{} wins!  |  Press R to play again", side.name()),
            side_color(side, display),
        ),
        GameStatus::Drawn => (
            "Draw: the board is full  |  Press R to play again".to_string(),
            Color::Gray,
        ),
    };

    let header = Paragraph::new(status)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Connect Four"),
        );

    frame.render_widget(header, area);
}

fn render_message(frame: &mut Frame, message: &Option<String>, area: Rect) {
    let text = message.as_deref().unwrap_or("");
    let msg_widget = Paragraph::new(text)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(msg_widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let line = Line::from(vec![
        Span::raw("\u{2190}/\u{2192}: Move  |  Enter/Click: Drop  |  1-9: Column  |  "),
        Span::styled("R", Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(": Restart  |  "),
        Span::styled("Q", Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(": Quit"),
    ]);

    let controls = Paragraph::new(line)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Controls"),
        );

    frame.render_widget(controls, area);
}

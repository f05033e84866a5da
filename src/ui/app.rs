use std::io;
use std::time::Duration;

use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use log::debug;
use ratatui::{backend::Backend, layout::Rect, Terminal};

use super::board_widget::BoardGeometry;
use super::game_view;
use crate::config::DisplayConfig;
use crate::game::{Game, GameStatus};

/// Interactive front end: owns the game and turns terminal events into
/// column drops, resets, and quitting.
pub struct App {
    game: Game,
    display: DisplayConfig,
    selected_column: usize,
    /// Board chunk of the last frame, for mapping mouse positions.
    board_area: Rect,
    should_quit: bool,
    message: Option<String>,
}

impl App {
    pub fn new(game: Game, display: DisplayConfig) -> Self {
        let selected_column = game.board().width() / 2; // Start in middle
        App {
            game,
            display,
            selected_column,
            board_area: Rect::default(),
            should_quit: false,
            message: None,
        }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()>
    where
        B::Error: Into<io::Error>,
    {
        loop {
            terminal
                .draw(|f| self.render(f))
                .map_err(Into::<io::Error>::into)?;

            if self.should_quit {
                break;
            }

            if event::poll(Duration::from_millis(100))? {
                let event = event::read()?;
                self.handle_event(event);
            }
        }
        Ok(())
    }

    /// Dispatch a terminal event
    pub fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(key),
            Event::Mouse(mouse) => self.handle_mouse(mouse),
            _ => {}
        }
    }

    fn geometry(&self) -> BoardGeometry {
        let board = self.game.board();
        BoardGeometry::fit(
            self.board_area,
            board.width(),
            board.height(),
            self.display.cell_size,
        )
    }

    /// Handle key press
    fn handle_key(&mut self, key: KeyEvent) {
        // Clear message on any key press
        self.message = None;

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Left => {
                self.selected_column = self.selected_column.saturating_sub(1);
            }
            KeyCode::Right => {
                if self.selected_column + 1 < self.game.board().width() {
                    self.selected_column += 1;
                }
            }
            KeyCode::Enter | KeyCode::Down => {
                self.drop_piece(self.selected_column);
            }
            KeyCode::Char(c @ '1'..='9') => {
                let column = c as usize - '1' as usize;
                if column < self.game.board().width() {
                    self.selected_column = column;
                }
                self.drop_piece(column);
            }
            KeyCode::Char('r') | KeyCode::Char(' ') => {
                self.game.reset();
                self.selected_column = self.game.board().width() / 2;
                self.message = Some("New game started!".to_string());
            }
            _ => {}
        }
    }

    /// Hover selects a column, left click drops into it
    fn handle_mouse(&mut self, mouse: MouseEvent) {
        let geometry = self.geometry();

        match mouse.kind {
            MouseEventKind::Moved => {
                if let Some(column) = geometry.column_at(mouse.column) {
                    self.selected_column = column;
                }
            }
            MouseEventKind::Down(MouseButton::Left) => {
                let Some(column) = geometry.clicked_column(mouse.column, mouse.row) else {
                    return;
                };
                self.message = None;
                self.selected_column = column;
                self.drop_piece(column);
            }
            _ => {}
        }
    }

    /// Drop the current side's token in `column`
    fn drop_piece(&mut self, column: usize) {
        if self.game.is_terminal() {
            self.message = Some("Game over! Press 'r' to restart.".to_string());
            return;
        }

        let result = self.game.drop_token(column);
        if !result.applied {
            debug!("drop in column {column} rejected");
            self.message = Some(if column < self.game.board().width() {
                format!("Column {} is full!", column + 1)
            } else {
                "Invalid column!".to_string()
            });
            return;
        }

        self.message = match result.status {
            GameStatus::InProgress => None,
            GameStatus::Won(side) => Some(format!("{} wins!", side.name())),
            GameStatus::Drawn => Some("It's a draw!".to_string()),
        };
    }

    /// Render the UI
    pub fn render(&mut self, frame: &mut ratatui::Frame) {
        let [_, board_area, _, _] = game_view::layout(frame.area());
        self.board_area = board_area;
        let geometry = self.geometry();
        game_view::render(
            frame,
            &self.game,
            &geometry,
            self.selected_column,
            &self.message,
            &self.display,
        );
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(Game::default(), DisplayConfig::default())
    }
}

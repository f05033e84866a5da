//! The board itself: where it sits on screen, how pointer positions map to
//! cells, and how cells are drawn.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::config::{ColorConfig, Rgb};
use crate::game::{Cell, Game};

/// Screen placement of a board, shared by rendering and mouse mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardGeometry {
    /// Area covered by the cells, one line per row, `cell_size` columns per cell.
    pub cells: Rect,
    columns: usize,
    rows: usize,
    cell_size: u16,
}

impl BoardGeometry {
    /// Center a `columns` x `rows` board (plus border and selector line) in `area`.
    pub fn fit(area: Rect, columns: usize, rows: usize, cell_size: u16) -> Self {
        let cell_size = cell_size.max(1);
        let inner_w = to_u16(columns).saturating_mul(cell_size);
        let inner_h = to_u16(rows);
        let outer_w = inner_w.saturating_add(2);
        let outer_h = inner_h.saturating_add(3);

        let x = area.x + area.width.saturating_sub(outer_w) / 2;
        let y = area.y + area.height.saturating_sub(outer_h) / 2;

        BoardGeometry {
            cells: Rect::new(x.saturating_add(1), y.saturating_add(1), inner_w, inner_h),
            columns,
            rows,
            cell_size,
        }
    }

    /// Bordered frame around the cells.
    pub fn frame(&self) -> Rect {
        Rect::new(
            self.cells.x.saturating_sub(1),
            self.cells.y.saturating_sub(1),
            self.cells.width.saturating_add(2),
            self.cells.height.saturating_add(2),
        )
    }

    /// Line under the frame used for the column selector.
    pub fn selector(&self) -> Rect {
        let frame = self.frame();
        Rect::new(self.cells.x, frame.bottom(), self.cells.width, 1)
    }

    /// Board column under screen column `x`, if any.
    pub fn column_at(&self, x: u16) -> Option<usize> {
        if x < self.cells.x || x >= self.cells.right() {
            return None;
        }
        let column = usize::from((x - self.cells.x) / self.cell_size);
        (column < self.columns).then_some(column)
    }

    /// Board cell `(column, row)` under the screen position, row 0 at the bottom.
    pub fn cell_at(&self, x: u16, y: u16) -> Option<(usize, usize)> {
        let column = self.column_at(x)?;
        if y < self.cells.y || y >= self.cells.bottom() {
            return None;
        }
        let from_top = usize::from(y - self.cells.y);
        Some((column, self.rows - 1 - from_top))
    }

    /// Column hit by a click: on a cell or on the selector line, nowhere else.
    pub fn clicked_column(&self, x: u16, y: u16) -> Option<usize> {
        if let Some((column, _)) = self.cell_at(x, y) {
            return Some(column);
        }
        if y == self.selector().y {
            return self.column_at(x);
        }
        None
    }
}

fn to_u16(n: usize) -> u16 {
    u16::try_from(n).unwrap_or(u16::MAX)
}

pub(crate) fn color(rgb: Rgb) -> Color {
    Color::Rgb(rgb.0, rgb.1, rgb.2)
}

fn cell_color(cell: Cell, colors: &ColorConfig) -> Color {
    match cell {
        Cell::Empty => color(colors.empty),
        Cell::PlayerA => color(colors.player_a),
        Cell::PlayerB => color(colors.player_b),
    }
}

fn centered(symbol: &str, width: u16) -> String {
    format!("{symbol:^width$}", width = usize::from(width))
}

/// Draw the board, the drop preview for `selected_column`, and the selector.
pub fn render_board(
    frame: &mut Frame,
    game: &Game,
    geometry: &BoardGeometry,
    selected_column: usize,
    colors: &ColorConfig,
) {
    let board = game.board();
    let background = Style::default().bg(color(colors.background));
    let winning = game.winning_line();

    // Landing cell of the selected column, shown while the game is live.
    let preview = (!game.is_terminal() && board.is_valid_move(selected_column))
        .then(|| (selected_column, board.column_height(selected_column)));

    let mut lines = Vec::with_capacity(board.height());
    for row in (0..board.height()).rev() {
        let mut spans = Vec::with_capacity(board.width());
        for col in 0..board.width() {
            let cell = board.get(col, row).unwrap_or(Cell::Empty);
            let mut style = background.fg(cell_color(cell, colors));
            let mut symbol = "\u{25cf}";

            if winning.is_some_and(|line| line.contains(&(col, row))) {
                style = style.add_modifier(Modifier::BOLD | Modifier::REVERSED);
            } else if game.last_move() == Some((col, row)) {
                style = style.add_modifier(Modifier::BOLD);
            } else if preview == Some((col, row)) {
                style = background.fg(cell_color(game.current_side().to_cell(), colors));
                symbol = "\u{25cb}";
            }

            spans.push(Span::styled(centered(symbol, geometry.cell_size), style));
        }
        lines.push(Line::from(spans));
    }

    let area = frame.area();
    let block = Block::default().borders(Borders::ALL).style(background);
    frame.render_widget(block, geometry.frame().intersection(area));
    frame.render_widget(Paragraph::new(lines), geometry.cells.intersection(area));

    if selected_column < board.width() {
        let mut selector = vec![Span::raw(centered("", geometry.cell_size)); board.width()];
        selector[selected_column] = Span::styled(
            centered("\u{25b2}", geometry.cell_size),
            Style::default().fg(Color::Cyan),
        );
        frame.render_widget(
            Paragraph::new(Line::from(selector)),
            geometry.selector().intersection(area),
        );
    }
}

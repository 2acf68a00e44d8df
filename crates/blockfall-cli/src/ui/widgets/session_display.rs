use blockfall_engine::{GameSession, SessionState};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Flex, Layout, Rect},
    style::{Color, Style},
    text::{Line, Text},
    widgets::{Block as BlockWidget, Clear, Padding, Widget},
};

use crate::ui::widgets::{BoardDisplay, PieceDisplay, StatsDisplay, color, style};

/// Full game screen: stats on the left, the board in the middle, the next piece on the right.
///
/// Panel borders take the color of the session state, and a banner is drawn over
/// the board while paused or after game over.
#[derive(Debug)]
pub struct SessionDisplay<'a> {
    session: &'a GameSession,
    show_grid: bool,
    panel_padding: Padding,
}

impl<'a> SessionDisplay<'a> {
    pub fn new(session: &'a GameSession) -> Self {
        Self {
            session,
            show_grid: true,
            panel_padding: Padding::horizontal(1),
        }
    }

    pub fn show_grid(self, show_grid: bool) -> Self {
        Self { show_grid, ..self }
    }

    /// Returns the number of rows the screen needs, which is the bordered board height.
    pub fn height(&self) -> u16 {
        self.board().height()
    }

    fn board(&self) -> BoardDisplay<'a> {
        BoardDisplay::new(self.session.board())
            .falling_piece(self.session.current_piece())
            .show_grid(self.show_grid)
            .block(BlockWidget::bordered().border_style(self.frame_color()))
    }

    fn panel(&self, title: &'static str) -> BlockWidget<'a> {
        BlockWidget::bordered()
            .title(Line::from(title).centered())
            .padding(self.panel_padding)
            .border_style(self.frame_color())
            .style(style::DEFAULT)
    }

    fn frame_color(&self) -> Color {
        match self.session.state() {
            SessionState::Playing | SessionState::Quit => color::WHITE,
            SessionState::Paused => color::YELLOW,
            SessionState::GameOver => color::RED,
        }
    }

    fn banner(&self) -> Option<(&'static str, Style)> {
        match self.session.state() {
            SessionState::Playing | SessionState::Quit => None,
            SessionState::Paused => Some(("PAUSED", style::PAUSED_BANNER)),
            SessionState::GameOver => Some(("GAME OVER!!", style::GAME_OVER_BANNER)),
        }
    }
}

/// Draws a three-row banner across `area`, vertically centered on it.
fn render_banner(area: Rect, text: &str, banner_style: Style, buf: &mut Buffer) {
    let area = area.centered_vertically(Constraint::Length(3));
    let block = BlockWidget::new().style(banner_style);
    let inner = block.inner(area);
    Clear.render(area, buf);
    block.render(area, buf);
    Text::styled(text, banner_style)
        .centered()
        .render(inner.centered_vertically(Constraint::Length(1)), buf);
}

impl Widget for SessionDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Widget::render(&self, area, buf);
    }
}

impl Widget for &SessionDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let board = self.board();
        let stats = StatsDisplay::new(self.session).block(self.panel("STATS"));
        let next = PieceDisplay::new()
            .piece(self.session.next_piece())
            .block(self.panel("NEXT"));

        let columns = Layout::horizontal([
            Constraint::Length(stats.width()),
            Constraint::Length(board.width()),
            Constraint::Length(next.width()),
        ])
        .flex(Flex::Center)
        .spacing(1);
        let [stats_column, board_column, next_column] = area.layout(&columns);

        // Each panel hangs from the top of its column.
        let top = |column: Rect, height: u16| Rect {
            height: height.min(column.height),
            ..column
        };
        let board_area = top(board_column, board.height());
        let stats_area = top(stats_column, stats.height());
        let next_area = top(next_column, next.height());

        stats.render(stats_area, buf);
        board.render(board_area, buf);
        next.render(next_area, buf);

        if let Some((text, banner_style)) = self.banner() {
            render_banner(board_area, text, banner_style, buf);
        }
    }
}

use std::iter;

use blockfall_engine::GameSession;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::Line,
    widgets::{Block as BlockWidget, BlockExt as _, Widget},
};

use crate::ui::widgets::style;

pub struct StatsDisplay<'a> {
    session: &'a GameSession,
    block: Option<BlockWidget<'a>>,
}

impl<'a> StatsDisplay<'a> {
    pub fn new(session: &'a GameSession) -> Self {
        Self {
            session,
            block: None,
        }
    }

    pub fn block(self, block: BlockWidget<'a>) -> Self {
        Self {
            block: Some(block),
            ..self
        }
    }

    pub fn width(&self) -> u16 {
        20 + super::block_horizontal_margin(self.block.as_ref())
    }

    pub fn height(&self) -> u16 {
        let rows = u16::try_from(ROWS.len()).unwrap_or(u16::MAX);
        rows + super::block_vertical_margin(self.block.as_ref())
    }
}

#[derive(Clone, Copy)]
enum Row {
    Empty,
    FullLabel(&'static str),
    FullValue(&'static dyn Fn(&GameSession) -> String),
    LabelValue(&'static str, &'static dyn Fn(&GameSession) -> String),
}

const ROWS: &[Row] = &[
    Row::FullLabel("SCORE:"),
    Row::FullValue(&|session| session.stats().score().to_string()),
    Row::Empty,
    Row::LabelValue("LEVEL:", &|session| session.stats().level().to_string()),
    Row::LabelValue("LINES:", &|session| {
        session.stats().total_cleared_lines().to_string()
    }),
    Row::LabelValue("PIECES:", &|session| {
        session.stats().completed_pieces().to_string()
    }),
    Row::LabelValue("SPEED:", &|session| {
        format!("{}ms", session.gravity_interval().as_millis())
    }),
    Row::Empty,
    Row::LabelValue("SINGLES:", &|session| {
        session.stats().line_cleared_counter()[1].to_string()
    }),
    Row::LabelValue("DOUBLES:", &|session| {
        session.stats().line_cleared_counter()[2].to_string()
    }),
    Row::LabelValue("TRIPLES:", &|session| {
        session.stats().line_cleared_counter()[3].to_string()
    }),
    Row::LabelValue("TETRIS:", &|session| {
        session.stats().line_cleared_counter()[4].to_string()
    }),
];

impl Widget for StatsDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.block.as_ref().render(area, buf);
        let area = self.block.inner_if_some(area);

        let style = style::DEFAULT;

        let rows_areas =
            Layout::vertical((0..ROWS.len()).map(|_| Constraint::Length(1))).split(area);

        for (row, area) in iter::zip(ROWS.iter().copied(), rows_areas[..].iter().copied()) {
            match row {
                Row::Empty => {}
                Row::FullLabel(label) => {
                    Line::styled(label, style).left_aligned().render(area, buf);
                }
                Row::FullValue(value) => {
                    Line::styled(value(self.session), style)
                        .right_aligned()
                        .render(area, buf);
                }
                Row::LabelValue(label, value) => {
                    let [label_area, value_area] = area.layout(&Layout::horizontal([
                        Constraint::Fill(1),
                        Constraint::Fill(1),
                    ]));
                    Line::styled(label, style)
                        .left_aligned()
                        .render(label_area, buf);
                    Line::styled(value(self.session), style)
                        .right_aligned()
                        .render(value_area, buf);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use blockfall_engine::GameConfig;

    use super::*;

    fn render_lines(session: &GameSession) -> Vec<String> {
        let display = StatsDisplay::new(session);
        let area = Rect::new(0, 0, display.width(), display.height());
        let mut buf = Buffer::empty(area);
        display.render(area, &mut buf);
        (0..area.height)
            .map(|y| (0..area.width).map(|x| buf[(x, y)].symbol()).collect())
            .collect()
    }

    #[test]
    fn test_rows_show_session_stats() {
        let config = GameConfig {
            base_interval: Duration::from_millis(800),
            interval_step: Duration::from_millis(30),
        };
        let session = GameSession::new(config);
        let lines = render_lines(&session);

        assert_eq!(lines.len(), ROWS.len());
        assert_eq!(lines[0].trim_end(), "SCORE:");
        assert_eq!(lines[1].trim_start(), "0");
        assert!(lines[2].trim().is_empty());
        assert!(lines[3].starts_with("LEVEL:") && lines[3].ends_with('0'));
        assert!(lines[6].starts_with("SPEED:") && lines[6].ends_with("800ms"));
        assert!(lines[11].starts_with("TETRIS:") && lines[11].ends_with('0'));
    }

    #[test]
    fn test_block_adds_margin() {
        let session = GameSession::new(GameConfig::default());
        let display = StatsDisplay::new(&session).block(BlockWidget::bordered());
        assert_eq!(display.width(), 22);
        assert_eq!(display.height(), 14);
    }
}

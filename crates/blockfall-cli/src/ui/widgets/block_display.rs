use blockfall_engine::Block;
use ratatui::{
    prelude::{Buffer, Rect},
    style::Style,
    widgets::{Paragraph, Widget},
};

use crate::ui::widgets::style;

/// One board cell, drawn two terminal columns wide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockDisplay {
    style: Style,
    symbol: &'static str,
}

impl BlockDisplay {
    pub const fn new(style: Style, symbol: &'static str) -> Self {
        Self { style, symbol }
    }

    pub fn width() -> u16 {
        2
    }

    pub fn height() -> u16 {
        1
    }

    pub fn from_block(block: Block, show_dots: bool) -> Self {
        let style = match block {
            Block::Empty => {
                return if show_dots {
                    Self::new(style::EMPTY_DOT, ".")
                } else {
                    Self::new(style::EMPTY, "")
                };
            }
            Block::Wall => style::WALL,
            Block::Gray => style::GRAY_BLOCK,
            Block::Cyan => style::CYAN_BLOCK,
            Block::Blue => style::BLUE_BLOCK,
            Block::Orange => style::ORANGE_BLOCK,
            Block::Yellow => style::YELLOW_BLOCK,
            Block::Green => style::GREEN_BLOCK,
            Block::Purple => style::PURPLE_BLOCK,
            Block::Red => style::RED_BLOCK,
        };
        Self::new(style, "")
    }
}

impl Widget for BlockDisplay {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        Widget::render(&self, area, buf);
    }
}

impl Widget for &BlockDisplay {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        // Use a Paragraph to fill the whole area, not just the cells with the symbol
        Paragraph::new(self.symbol)
            .style(self.style)
            .centered()
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_block_dots() {
        assert_eq!(BlockDisplay::from_block(Block::Empty, true).symbol, ".");
        assert_eq!(BlockDisplay::from_block(Block::Empty, false).symbol, "");
    }

    #[test]
    fn test_piece_colors_are_distinct() {
        let colors = [
            Block::Gray,
            Block::Cyan,
            Block::Blue,
            Block::Orange,
            Block::Yellow,
            Block::Green,
            Block::Purple,
            Block::Red,
        ];
        for (i, a) in colors.iter().enumerate() {
            for b in &colors[i + 1..] {
                assert_ne!(
                    BlockDisplay::from_block(*a, true).style,
                    BlockDisplay::from_block(*b, true).style,
                    "{a:?} and {b:?} share a style"
                );
            }
        }
    }
}

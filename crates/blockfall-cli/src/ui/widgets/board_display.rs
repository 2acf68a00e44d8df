use std::iter;

use blockfall_engine::{Board, Tetromino};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Flex, Layout, Rect},
    widgets::{Block as BlockWidget, BlockExt, Widget},
};

use crate::ui::widgets::BlockDisplay;

/// The visible board with the falling piece drawn over it.
#[derive(Debug)]
pub struct BoardDisplay<'a> {
    board: &'a Board,
    falling_piece: Option<&'a Tetromino>,
    show_grid: bool,
    block: Option<BlockWidget<'a>>,
}

impl<'a> BoardDisplay<'a> {
    pub fn new(board: &'a Board) -> Self {
        Self {
            board,
            falling_piece: None,
            show_grid: true,
            block: None,
        }
    }

    pub fn falling_piece(self, piece: &'a Tetromino) -> Self {
        Self {
            falling_piece: Some(piece),
            ..self
        }
    }

    pub fn show_grid(self, show_grid: bool) -> Self {
        Self { show_grid, ..self }
    }

    pub fn block(self, block: BlockWidget<'a>) -> Self {
        Self {
            block: Some(block),
            ..self
        }
    }

    pub fn width(&self) -> u16 {
        10 * BlockDisplay::width() + super::block_horizontal_margin(self.block.as_ref())
    }

    pub fn height(&self) -> u16 {
        20 * BlockDisplay::height() + super::block_vertical_margin(self.block.as_ref())
    }
}

impl Widget for BoardDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        Widget::render(&self, area, buf);
    }
}

impl Widget for &BoardDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.block.as_ref().render(area, buf);
        let area = self.block.inner_if_some(area);

        let mut board = self.board.clone();
        if let Some(piece) = self.falling_piece {
            board.paint_piece(piece);
        }

        let col_constraints =
            (0..Board::PLAYABLE_WIDTH).map(|_| Constraint::Length(BlockDisplay::width()));
        let row_constraints =
            (0..Board::PLAYABLE_HEIGHT).map(|_| Constraint::Length(BlockDisplay::height()));
        let horizontal = Layout::horizontal(col_constraints).flex(Flex::Center);
        let vertical = Layout::vertical(row_constraints);

        let grid_cells = area
            .layout::<{ Board::PLAYABLE_HEIGHT }>(&vertical)
            .into_iter()
            .map(|row| row.layout::<{ Board::PLAYABLE_WIDTH }>(&horizontal));

        for (grid_row, row) in iter::zip(grid_cells, board.playable_rows()) {
            for (grid_cell, block) in iter::zip(grid_row, row) {
                BlockDisplay::from_block(*block, self.show_grid).render(grid_cell, buf);
            }
        }
    }
}

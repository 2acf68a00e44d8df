use blockfall_engine::{Block, PieceShape, Tetromino};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Flex, Layout, Rect},
    widgets::{Block as BlockWidget, BlockExt as _, Widget},
};

use crate::ui::widgets::BlockDisplay;

/// Preview of a single piece, trimmed to its filled cells and centered.
#[derive(Debug)]
pub struct PieceDisplay<'a> {
    piece: Option<&'a Tetromino>,
    block: Option<BlockWidget<'a>>,
}

impl<'a> PieceDisplay<'a> {
    pub fn new() -> Self {
        Self {
            piece: None,
            block: None,
        }
    }

    pub fn piece(self, piece: &'a Tetromino) -> Self {
        Self {
            piece: Some(piece),
            ..self
        }
    }

    pub fn block(self, block: BlockWidget<'a>) -> Self {
        Self {
            block: Some(block),
            ..self
        }
    }

    pub fn width(&self) -> u16 {
        4 * BlockDisplay::width() + super::block_horizontal_margin(self.block.as_ref())
    }

    pub fn height(&self) -> u16 {
        3 * BlockDisplay::height() + super::block_vertical_margin(self.block.as_ref())
    }
}

/// Returns the filled part of `shape` as rows of cells.
fn trimmed(shape: &PieceShape) -> Vec<&[Block]> {
    let filled = |block: &Block| !block.is_empty();
    let rows = shape.iter().filter(|row| row.iter().any(filled));
    let first_col = shape
        .iter()
        .filter_map(|row| row.iter().position(filled))
        .min()
        .unwrap_or(0);
    let last_col = shape
        .iter()
        .filter_map(|row| row.iter().rposition(filled))
        .max()
        .unwrap_or(0);
    rows.map(|row| &row[first_col..=last_col]).collect()
}

impl Widget for PieceDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Widget::render(&self, area, buf);
    }
}

impl Widget for &PieceDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.block.as_ref().render(area, buf);
        let area = self.block.inner_if_some(area);

        let Some(piece) = self.piece else {
            return;
        };
        let cells = trimmed(piece.shape());
        let rows = u16::try_from(cells.len()).unwrap_or(0);
        let cols = cells
            .first()
            .and_then(|row| u16::try_from(row.len()).ok())
            .unwrap_or(0);

        let piece_area = area.centered(
            Constraint::Length(cols * BlockDisplay::width()),
            Constraint::Length(rows * BlockDisplay::height()),
        );
        let col_constraints = (0..cols).map(|_| Constraint::Length(BlockDisplay::width()));
        let row_constraints = (0..rows).map(|_| Constraint::Length(BlockDisplay::height()));
        let horizontal = Layout::horizontal(col_constraints).flex(Flex::Center);
        let vertical = Layout::vertical(row_constraints);
        let grid_rows = piece_area
            .layout_vec(&vertical)
            .into_iter()
            .map(|row| row.layout_vec(&horizontal));

        for (grid_row, row) in grid_rows.zip(cells) {
            for (grid_cell, block) in grid_row.into_iter().zip(row) {
                BlockDisplay::from_block(*block, false).render(grid_cell, buf);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use blockfall_engine::{PieceKind, PieceRotation};

    use super::*;

    fn trimmed_text(kind: PieceKind) -> Vec<String> {
        trimmed(&kind.shape(PieceRotation::default()))
            .into_iter()
            .map(|row| row.iter().map(|block| block.as_char()).collect())
            .collect()
    }

    #[test]
    fn test_trimmed_spawn_shapes() {
        assert_eq!(trimmed_text(PieceKind::I), ["IIII"]);
        assert_eq!(trimmed_text(PieceKind::O), ["OO", "OO"]);
        assert_eq!(trimmed_text(PieceKind::T), ["TTT", ".T."]);
        assert_eq!(trimmed_text(PieceKind::J), [".J", ".J", "JJ"]);
    }
}

use gravitris_engine::{Cell, PieceKind};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Flex, Layout, Rect},
    widgets::{Block as BlockWidget, BlockExt as _, Widget},
};

use crate::ui::widgets::CellDisplay;

/// A single piece in its spawn orientation, centered in a fixed 4×2 panel.
#[derive(Debug)]
pub struct PiecePreview<'a> {
    piece: Option<PieceKind>,
    block: Option<BlockWidget<'a>>,
}

impl<'a> PiecePreview<'a> {
    pub fn new() -> Self {
        Self {
            piece: None,
            block: None,
        }
    }

    pub fn piece(self, piece: PieceKind) -> Self {
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
        4 * CellDisplay::width() + super::block_horizontal_margin(self.block.as_ref())
    }

    pub fn height(&self) -> u16 {
        2 * CellDisplay::height() + super::block_vertical_margin(self.block.as_ref())
    }
}

impl Default for PiecePreview<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for PiecePreview<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Widget::render(&self, area, buf);
    }
}

impl Widget for &PiecePreview<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.block.as_ref().render(area, buf);
        let area = self.block.inner_if_some(area);

        let shape = self.piece.map(PieceKind::base_shape);
        let (piece_width, piece_height) = shape.as_ref().map_or((0, 0), |shape| {
            (
                u16::try_from(shape.width()).unwrap(),
                u16::try_from(shape.height()).unwrap(),
            )
        });
        let piece_area = area.centered(
            Constraint::Length(piece_width * CellDisplay::width()),
            Constraint::Length(piece_height * CellDisplay::height()),
        );

        let col_constraints = (0..piece_width).map(|_| Constraint::Length(CellDisplay::width()));
        let row_constraints = (0..piece_height).map(|_| Constraint::Length(CellDisplay::height()));
        let horizontal = Layout::horizontal(col_constraints).flex(Flex::Center);
        let vertical = Layout::vertical(row_constraints);
        let grid_rows = piece_area
            .layout_vec(&vertical)
            .into_iter()
            .map(|row| row.layout_vec(&horizontal));

        let empty_cell = CellDisplay::from_cell(Cell::Empty, false);

        if let (Some(piece), Some(shape)) = (self.piece, shape.as_ref()) {
            let occupied_cell = CellDisplay::from_cell(Cell::Piece(piece), false);
            for (y, grid_row) in grid_rows.enumerate() {
                for (x, grid_cell) in grid_row.into_iter().enumerate() {
                    if shape.is_filled(y, x) {
                        Widget::render(&occupied_cell, grid_cell, buf);
                    } else {
                        Widget::render(&empty_cell, grid_cell, buf);
                    }
                }
            }
        } else {
            for cell in grid_rows.flatten() {
                Widget::render(&empty_cell, cell, buf);
            }
        }
    }
}

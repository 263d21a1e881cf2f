use gravitris_engine::{Board, Cell, Piece};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Flex, Layout, Rect},
    widgets::{Block as BlockWidget, BlockExt, Widget},
};

use crate::ui::widgets::CellDisplay;

/// The playfield grid, with the falling piece overlaid on the locked cells.
#[derive(Debug)]
pub struct BoardDisplay<'a> {
    board: &'a Board,
    falling_piece: Option<&'a Piece>,
    block: Option<BlockWidget<'a>>,
}

impl<'a> BoardDisplay<'a> {
    pub fn new(board: &'a Board) -> Self {
        Self {
            board,
            falling_piece: None,
            block: None,
        }
    }

    pub fn falling_piece(self, piece: &'a Piece) -> Self {
        Self {
            falling_piece: Some(piece),
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
        u16::try_from(self.board.width()).unwrap() * CellDisplay::width()
            + super::block_horizontal_margin(self.block.as_ref())
    }

    pub fn height(&self) -> u16 {
        u16::try_from(self.board.height()).unwrap() * CellDisplay::height()
            + super::block_vertical_margin(self.block.as_ref())
    }

    /// The falling piece's cell at board coordinate `(x, y)`, if covered.
    fn piece_cell_at(&self, x: usize, y: usize) -> Option<Cell> {
        let piece = self.falling_piece?;
        let col = usize::try_from(i32::try_from(x).ok()? - piece.x()).ok()?;
        let row = usize::try_from(i32::try_from(y).ok()? - piece.y()).ok()?;
        let shape = piece.shape();
        (row < shape.height() && col < shape.width() && shape.is_filled(row, col))
            .then_some(Cell::Piece(piece.kind()))
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

        let col_constraints =
            (0..self.board.width()).map(|_| Constraint::Length(CellDisplay::width()));
        let row_constraints =
            (0..self.board.height()).map(|_| Constraint::Length(CellDisplay::height()));
        let horizontal = Layout::horizontal(col_constraints).flex(Flex::Center);
        let vertical = Layout::vertical(row_constraints);

        let grid_rows = area
            .layout_vec(&vertical)
            .into_iter()
            .map(|row| row.layout_vec(&horizontal));

        for (y, grid_row) in grid_rows.enumerate() {
            for (x, grid_cell) in grid_row.into_iter().enumerate() {
                let cell = self
                    .piece_cell_at(x, y)
                    .unwrap_or_else(|| self.board.cell(x, y));
                CellDisplay::from_cell(cell, true).render(grid_cell, buf);
            }
        }
    }
}

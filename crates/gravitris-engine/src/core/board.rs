use super::{piece::Piece, shape::Shape};
use crate::PieceKind;

/// A single cell of the board: empty, or locked with a piece's color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cell {
    /// Empty cell (no locked piece).
    #[default]
    Empty,
    /// Locked cell of a specific piece type.
    Piece(PieceKind),
}

impl Cell {
    #[must_use]
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}

/// The playfield: a fixed-dimension grid of locked cells.
///
/// Dimensions never change after construction and every row has exactly
/// `width` cells. Only the cell contents mutate; the board lives for the
/// whole game session.
///
/// Collision testing ([`Board::collides`]) is a pure query; merging
/// ([`Board::merge`]) is the only write path for a piece and bound-checks
/// every cell, so an out-of-range coordinate can never corrupt the grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: usize,
    height: usize,
    rows: Vec<Vec<Cell>>,
}

impl Board {
    /// Creates an entirely empty `height × width` board.
    #[must_use]
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            rows: vec![vec![Cell::Empty; width]; height],
        }
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns the cell at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinate is outside the grid.
    #[must_use]
    pub fn cell(&self, x: usize, y: usize) -> Cell {
        self.rows[y][x]
    }

    /// Iterates over the board rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.rows.iter().map(Vec::as_slice)
    }

    /// Tests whether `piece`, displaced by `(dx, dy)`, overlaps a boundary or
    /// an occupied cell.
    ///
    /// A filled shape cell collides when its absolute x leaves `[0, width)`,
    /// its absolute y reaches `height`, or it lands on an occupied cell at
    /// y ≥ 0. Rows above the board (y < 0) are exempt from occupancy checks
    /// so a piece may spawn partially above the visible grid.
    #[must_use]
    pub fn collides(&self, piece: &Piece, dx: i32, dy: i32) -> bool {
        self.shape_collides(piece.shape(), piece.x() + dx, piece.y() + dy)
    }

    /// [`Board::collides`] for a bare shape at an absolute anchor position.
    ///
    /// Used to test a rotation candidate before it is committed to the piece.
    #[must_use]
    #[expect(
        clippy::cast_possible_wrap,
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss
    )]
    pub fn shape_collides(&self, shape: &Shape, x: i32, y: i32) -> bool {
        shape.filled_cells().any(|(dx, dy)| {
            let cell_x = x + dx as i32;
            let cell_y = y + dy as i32;
            if cell_x < 0 || cell_x >= self.width as i32 || cell_y >= self.height as i32 {
                return true;
            }
            cell_y >= 0 && !self.rows[cell_y as usize][cell_x as usize].is_empty()
        })
    }

    /// Writes the piece's kind into every filled cell that lies within the
    /// grid; cells outside the grid are silently skipped.
    ///
    /// Caller precondition: the piece already rests in its final,
    /// non-colliding position (one more downward step would collide).
    /// [`Game`](crate::engine::Game) asserts this before calling.
    #[expect(
        clippy::cast_possible_wrap,
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss
    )]
    pub fn merge(&mut self, piece: &Piece) {
        for (dx, dy) in piece.shape().filled_cells() {
            let cell_x = piece.x() + dx as i32;
            let cell_y = piece.y() + dy as i32;
            if (0..self.width as i32).contains(&cell_x) && (0..self.height as i32).contains(&cell_y)
            {
                self.rows[cell_y as usize][cell_x as usize] = Cell::Piece(piece.kind());
            }
        }
    }

    /// Direct cell write for building board fixtures.
    #[cfg(test)]
    pub(crate) fn set_cell(&mut self, x: usize, y: usize, cell: Cell) {
        self.rows[y][x] = cell;
    }

    /// Removes every fully occupied row, inserting an empty row at the top
    /// for each removal, and returns the number of rows removed.
    ///
    /// The relative order of the remaining rows is preserved (classic
    /// collapse-downward semantics).
    pub fn clear_filled_rows(&mut self) -> usize {
        let mut cleared = 0;
        let mut y = self.height;
        while y > 0 {
            y -= 1;
            if self.rows[y].iter().all(|cell| !cell.is_empty()) {
                self.rows.remove(y);
                self.rows.insert(0, vec![Cell::Empty; self.width]);
                cleared += 1;
                // The rows above shifted down into this index; test it again.
                y += 1;
            }
        }
        cleared
    }
}

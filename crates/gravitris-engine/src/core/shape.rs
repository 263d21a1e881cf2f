use arrayvec::ArrayVec;

/// Maximum side length of a shape matrix (the I piece is 1×4).
pub const MAX_SHAPE_DIM: usize = 4;

type ShapeRow = ArrayVec<bool, MAX_SHAPE_DIM>;

/// A piece orientation as a rectangular boolean matrix.
///
/// Shapes are immutable: [`Shape::rotated`] returns a new matrix instead of
/// mutating in place, so a rotation candidate can be collision-tested before
/// it is committed. The matrix is rectangular, not padded to a square bounding
/// box — rotating a `rows × cols` shape yields a `cols × rows` shape.
///
/// # Example
///
/// ```
/// use gravitris_engine::PieceKind;
///
/// let horizontal = PieceKind::I.base_shape();
/// assert_eq!((horizontal.width(), horizontal.height()), (4, 1));
///
/// let vertical = horizontal.rotated();
/// assert_eq!((vertical.width(), vertical.height()), (1, 4));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shape {
    rows: ArrayVec<ShapeRow, MAX_SHAPE_DIM>,
}

impl Shape {
    /// Builds a shape from row slices.
    ///
    /// # Panics
    ///
    /// Panics if the matrix is empty, ragged, or larger than 4×4.
    pub(crate) fn from_rows(rows: &[&[bool]]) -> Self {
        assert!(!rows.is_empty() && !rows[0].is_empty());
        assert!(rows.iter().all(|row| row.len() == rows[0].len()));
        let rows = rows
            .iter()
            .map(|row| row.iter().copied().collect())
            .collect();
        Self { rows }
    }

    /// Number of columns in the matrix.
    #[must_use]
    pub fn width(&self) -> usize {
        self.rows[0].len()
    }

    /// Number of rows in the matrix.
    #[must_use]
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Whether the matrix cell at (row, col) is filled.
    #[must_use]
    pub fn is_filled(&self, row: usize, col: usize) -> bool {
        self.rows[row][col]
    }

    /// Returns the 90° clockwise rotation of this shape.
    ///
    /// The result has dimensions `cols × rows`, with
    /// `rotated[c][r] = self[rows - 1 - r][c]`.
    #[must_use]
    pub fn rotated(&self) -> Self {
        let (height, width) = (self.height(), self.width());
        let mut rows = ArrayVec::new();
        for col in 0..width {
            let mut row = ArrayVec::new();
            for src_row in (0..height).rev() {
                row.push(self.rows[src_row][col]);
            }
            rows.push(row);
        }
        Self { rows }
    }

    /// Iterates over the `(dx, dy)` offsets of every filled cell.
    pub fn filled_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.rows.iter().enumerate().flat_map(|(dy, row)| {
            row.iter()
                .enumerate()
                .filter_map(move |(dx, &filled)| filled.then_some((dx, dy)))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const C: bool = true;
    const E: bool = false;

    #[test]
    fn test_rotate_horizontal_bar_to_vertical() {
        let bar = Shape::from_rows(&[&[C, C, C, C]]);
        let rotated = bar.rotated();

        assert_eq!(rotated, Shape::from_rows(&[&[C], &[C], &[C], &[C]]));
        assert_eq!(rotated.width(), 1);
        assert_eq!(rotated.height(), 4);
    }

    #[test]
    fn test_rotate_swaps_dimensions() {
        let shape = Shape::from_rows(&[&[C, C, C], &[E, C, E]]);
        let rotated = shape.rotated();

        assert_eq!(rotated.width(), 2);
        assert_eq!(rotated.height(), 3);
        // Clockwise: the bottom row becomes the left column.
        assert_eq!(rotated, Shape::from_rows(&[&[E, C], &[C, C], &[E, C]]));
    }

    #[test]
    fn test_four_rotations_return_to_original() {
        let shape = Shape::from_rows(&[&[E, C, C], &[C, C, E]]);
        let full_turn = shape.rotated().rotated().rotated().rotated();
        assert_eq!(full_turn, shape);
    }

    #[test]
    fn test_filled_cells_offsets() {
        let shape = Shape::from_rows(&[&[C, C, C], &[E, C, E]]);
        let cells: Vec<_> = shape.filled_cells().collect();
        assert_eq!(cells, [(0, 0), (1, 0), (2, 0), (1, 1)]);
    }
}

use rand::{Rng, distr::StandardUniform, prelude::Distribution};

use super::shape::Shape;

/// Enum representing the type of piece.
///
/// The kind doubles as the color identifier stored in locked board cells;
/// the rendering layer maps each kind to a terminal color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum PieceKind {
    /// I-piece.
    I = 0,
    /// T-piece.
    T = 1,
    /// L-piece.
    L = 2,
    /// J-piece.
    J = 3,
    /// O-piece.
    O = 4,
    /// S-piece.
    S = 5,
    /// Z-piece.
    Z = 6,
}

/// Uniform independent sampling over the seven kinds.
///
/// Piece generation is deliberately not a 7-bag: every draw is an independent
/// uniform choice.
impl Distribution<PieceKind> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> PieceKind {
        match rng.random_range(0..=6) {
            0 => PieceKind::I,
            1 => PieceKind::T,
            2 => PieceKind::L,
            3 => PieceKind::J,
            4 => PieceKind::O,
            5 => PieceKind::S,
            _ => PieceKind::Z,
        }
    }
}

impl PieceKind {
    /// Number of piece types (7).
    pub const LEN: usize = 7;

    /// Returns the spawn orientation of this kind.
    #[must_use]
    pub fn base_shape(self) -> Shape {
        const C: bool = true;
        const E: bool = false;
        match self {
            PieceKind::I => Shape::from_rows(&[&[C, C, C, C]]),
            PieceKind::T => Shape::from_rows(&[&[C, C, C], &[E, C, E]]),
            PieceKind::L => Shape::from_rows(&[&[C, C, C], &[C, E, E]]),
            PieceKind::J => Shape::from_rows(&[&[C, C, C], &[E, E, C]]),
            PieceKind::O => Shape::from_rows(&[&[C, C], &[C, C]]),
            PieceKind::S => Shape::from_rows(&[&[E, C, C], &[C, C, E]]),
            PieceKind::Z => Shape::from_rows(&[&[C, C, E], &[E, C, C]]),
        }
    }

    /// Returns the single character representation of this piece kind.
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            PieceKind::I => 'I',
            PieceKind::T => 'T',
            PieceKind::L => 'L',
            PieceKind::J => 'J',
            PieceKind::O => 'O',
            PieceKind::S => 'S',
            PieceKind::Z => 'Z',
        }
    }
}

/// A falling piece: a shape, its kind, and an integer anchor position.
///
/// The anchor `(x, y)` is the board coordinate of the shape matrix's top-left
/// cell. `y` may be negative while the piece is partially above the visible
/// board during spawn. The [`Game`](crate::engine::Game) state machine is the
/// sole owner and mutator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Piece {
    kind: PieceKind,
    shape: Shape,
    x: i32,
    y: i32,
}

impl Piece {
    /// Creates a piece of the given kind, horizontally centered at the top row.
    #[must_use]
    #[expect(clippy::cast_possible_wrap, clippy::cast_possible_truncation)]
    pub fn spawn(kind: PieceKind, board_width: usize) -> Self {
        let shape = kind.base_shape();
        let x = board_width as i32 / 2 - shape.width() as i32 / 2;
        Self {
            kind,
            shape,
            x,
            y: 0,
        }
    }

    #[must_use]
    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    #[must_use]
    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    #[must_use]
    pub fn x(&self) -> i32 {
        self.x
    }

    #[must_use]
    pub fn y(&self) -> i32 {
        self.y
    }

    /// Shifts the anchor by the given delta.
    pub(crate) fn translate(&mut self, dx: i32, dy: i32) {
        self.x += dx;
        self.y += dy;
    }

    /// Replaces the shape, keeping the anchor position.
    pub(crate) fn set_shape(&mut self, shape: Shape) {
        self.shape = shape;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spawn_is_horizontally_centered() {
        // width 10: floor(10/2) - floor(shape_width/2)
        assert_eq!(Piece::spawn(PieceKind::I, 10).x(), 3);
        assert_eq!(Piece::spawn(PieceKind::O, 10).x(), 4);
        assert_eq!(Piece::spawn(PieceKind::T, 10).x(), 4);
        assert_eq!(Piece::spawn(PieceKind::S, 10).x(), 4);
    }

    #[test]
    fn test_spawn_starts_at_top_row() {
        for kind in [
            PieceKind::I,
            PieceKind::T,
            PieceKind::L,
            PieceKind::J,
            PieceKind::O,
            PieceKind::S,
            PieceKind::Z,
        ] {
            assert_eq!(Piece::spawn(kind, 10).y(), 0);
        }
    }

    #[test]
    fn test_base_shapes_have_four_cells() {
        for kind in [
            PieceKind::I,
            PieceKind::T,
            PieceKind::L,
            PieceKind::J,
            PieceKind::O,
            PieceKind::S,
            PieceKind::Z,
        ] {
            assert_eq!(kind.base_shape().filled_cells().count(), 4, "{kind:?}");
        }
    }
}

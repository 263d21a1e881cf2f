//! Core data structures for the game.
//!
//! These are plain value types with no knowledge of timing or commands:
//!
//! - [`Shape`] - A piece orientation as a boolean matrix
//! - [`PieceKind`] / [`Piece`] - The seven tetrominoes and a falling piece
//! - [`Cell`] / [`Board`] - The grid of locked cells
//!
//! The [`Game`](crate::engine::Game) state machine owns one [`Board`] and two
//! [`Piece`]s (current and next) and orchestrates them.

pub use self::{board::*, piece::*, shape::*};

mod board;
mod piece;
mod shape;

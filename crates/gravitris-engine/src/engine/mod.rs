//! Game orchestration: piece generation, scoring, commands, and the state
//! machine that ties them to the fall timer.
//!
//! - [`PieceGenerator`] - Uniform random piece generation with an injectable
//!   seed ([`PieceSeed`]) for deterministic play
//! - [`GameStats`] - Score, level, and cleared-line tracking
//! - [`Command`] - The closed set of player commands
//! - [`Game`] - The `Playing`/`GameOver` state machine
//!
//! # Driving the engine
//!
//! The engine is single-threaded and never blocks. A driving loop owns the
//! real-time clock and calls two independent entry points:
//!
//! 1. [`Game::handle`] for each discrete player command
//! 2. [`Game::tick`] with the milliseconds elapsed since the previous frame
//!
//! Within one frame, commands must be applied in a consistent order relative
//! to the tick (the bundled TUI drains all pending commands first, then
//! ticks) so behavior stays deterministic and testable.
//!
//! # Example
//!
//! ```
//! use gravitris_engine::{Command, Game};
//!
//! let mut game = Game::new();
//! game.handle(Command::MoveLeft);
//! game.tick(16);
//!
//! if game.phase().is_game_over() {
//!     game.handle(Command::Restart);
//! }
//! ```

pub use self::{command::*, game::*, game_stats::*, piece_generator::*};

mod command;
mod game;
mod game_stats;
mod piece_generator;

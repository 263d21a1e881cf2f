use std::mem;

use crate::{
    core::{Board, Piece},
    engine::{Command, GameStats, PieceGenerator, PieceSeed},
};

/// Standard playfield width in cells.
pub const BOARD_WIDTH: usize = 10;
/// Standard playfield height in cells.
pub const BOARD_HEIGHT: usize = 20;

/// Milliseconds between automatic one-row descents at the given level.
///
/// Monotonically decreasing, floored at 100 ms (reached at level 10).
#[must_use]
pub fn drop_interval_ms(level: usize) -> u64 {
    let level = level.max(1) as u64;
    1000_u64.saturating_sub((level - 1) * 100).max(100)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum GamePhase {
    Playing,
    GameOver,
}

/// The game state machine.
///
/// Owns the board, the current and next piece, the piece generator, the
/// score/level statistics, and a fall-timer accumulator. Two entry points
/// drive it: [`Game::tick`] with elapsed real time, and [`Game::handle`]
/// with discrete player commands. Both are synchronous and never block.
///
/// Every read accessor returns a borrow; the rendering layer cannot mutate
/// game state through them.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    current: Piece,
    next: Piece,
    generator: PieceGenerator,
    stats: GameStats,
    fall_timer_ms: u64,
    phase: GamePhase,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// Creates a game with an OS-seeded piece sequence.
    #[must_use]
    pub fn new() -> Self {
        Self::with_generator(PieceGenerator::new())
    }

    /// Like [`Self::new`], but with a deterministic piece sequence.
    #[must_use]
    pub fn with_seed(seed: PieceSeed) -> Self {
        Self::with_generator(PieceGenerator::with_seed(seed))
    }

    fn with_generator(mut generator: PieceGenerator) -> Self {
        let current = generator.next_piece(BOARD_WIDTH);
        let next = generator.next_piece(BOARD_WIDTH);
        Self {
            board: Board::new(BOARD_WIDTH, BOARD_HEIGHT),
            current,
            next,
            generator,
            stats: GameStats::new(),
            fall_timer_ms: 0,
            phase: GamePhase::Playing,
        }
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn current_piece(&self) -> &Piece {
        &self.current
    }

    #[must_use]
    pub fn next_piece(&self) -> &Piece {
        &self.next
    }

    #[must_use]
    pub fn stats(&self) -> &GameStats {
        &self.stats
    }

    #[must_use]
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Accumulates elapsed real time; once the accumulator exceeds the
    /// current fall interval it is reset to zero and one automatic downward
    /// step is performed.
    pub fn tick(&mut self, elapsed_ms: u64) {
        if self.phase.is_game_over() {
            return;
        }
        self.fall_timer_ms += elapsed_ms;
        if self.fall_timer_ms > drop_interval_ms(self.stats.level()) {
            self.fall_timer_ms = 0;
            self.step_down();
        }
    }

    /// Dispatches one player command.
    ///
    /// While the game is over, every command except [`Command::Restart`] is
    /// a no-op.
    pub fn handle(&mut self, command: Command) {
        if self.phase.is_game_over() && command != Command::Restart {
            return;
        }
        match command {
            Command::MoveLeft => self.shift_horizontal(-1),
            Command::MoveRight => self.shift_horizontal(1),
            Command::SoftDrop => self.step_down(),
            Command::Rotate => self.rotate(),
            Command::HardDrop => self.hard_drop(),
            Command::Restart => self.restart(),
        }
    }

    /// Reinitializes every field of the game together.
    ///
    /// The generator keeps consuming its RNG stream, so a seeded session
    /// stays reproducible across restarts.
    pub fn restart(&mut self) {
        self.board = Board::new(BOARD_WIDTH, BOARD_HEIGHT);
        self.current = self.generator.next_piece(BOARD_WIDTH);
        self.next = self.generator.next_piece(BOARD_WIDTH);
        self.stats = GameStats::new();
        self.fall_timer_ms = 0;
        self.phase = GamePhase::Playing;
    }

    fn shift_horizontal(&mut self, dx: i32) {
        if !self.board.collides(&self.current, dx, 0) {
            self.current.translate(dx, 0);
        }
    }

    /// Rotation commits only if the candidate shape fits at the unchanged
    /// anchor position; there is no wall-kick offset search.
    fn rotate(&mut self) {
        let candidate = self.current.shape().rotated();
        if !self
            .board
            .shape_collides(&candidate, self.current.x(), self.current.y())
        {
            self.current.set_shape(candidate);
        }
    }

    /// One downward step: shift if free, otherwise lock and advance.
    fn step_down(&mut self) {
        if self.board.collides(&self.current, 0, 1) {
            self.lock_current();
        } else {
            self.current.translate(0, 1);
        }
    }

    fn hard_drop(&mut self) {
        while !self.board.collides(&self.current, 0, 1) {
            self.current.translate(0, 1);
        }
        self.lock_current();
        self.fall_timer_ms = 0;
    }

    /// Merges the current piece, clears lines, and promotes the next piece.
    ///
    /// The asserted invariant is what makes hard-drop overwrites impossible:
    /// the piece must rest on a collision-free cell, one step above a
    /// colliding one, before any cell is written.
    fn lock_current(&mut self) {
        assert!(
            !self.board.collides(&self.current, 0, 0),
            "piece must rest in a collision-free position before merging",
        );
        self.board.merge(&self.current);
        let cleared = self.board.clear_filled_rows();
        self.stats.record_clear(cleared);

        self.current = mem::replace(&mut self.next, self.generator.next_piece(BOARD_WIDTH));
        if self.board.collides(&self.current, 0, 0) {
            self.phase = GamePhase::GameOver;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Cell, PieceKind};

    fn seeded_game() -> Game {
        Game::with_seed("000102030405060708090a0b0c0d0e0f".parse().unwrap())
    }

    /// Replaces the current piece, bypassing the generator.
    fn place_current(game: &mut Game, kind: PieceKind, x: i32, y: i32) {
        let mut piece = Piece::spawn(kind, BOARD_WIDTH);
        piece.translate(x - piece.x(), y - piece.y());
        game.current = piece;
    }

    fn fill_board_row(game: &mut Game, y: usize, kind: PieceKind) {
        for x in 0..BOARD_WIDTH {
            game.board.set_cell(x, y, Cell::Piece(kind));
        }
    }

    /// Occupies the spawn area so any promoted piece collides immediately.
    fn block_spawn_area(game: &mut Game) {
        for y in 0..2 {
            for x in 3..7 {
                game.board.set_cell(x, y, Cell::Piece(PieceKind::J));
            }
        }
    }

    #[test]
    fn test_drop_interval_curve() {
        assert_eq!(drop_interval_ms(1), 1000);
        assert_eq!(drop_interval_ms(5), 600);
        assert_eq!(drop_interval_ms(10), 100);
        assert_eq!(drop_interval_ms(20), 100);
    }

    #[test]
    fn test_initial_state() {
        let game = seeded_game();
        assert!(game.phase().is_playing());
        assert_eq!(game.stats().score(), 0);
        assert_eq!(game.stats().level(), 1);
        assert_eq!(game.stats().total_cleared_lines(), 0);
        assert!(game.board().rows().all(|row| row.iter().all(|c| c.is_empty())));
    }

    #[test]
    fn test_tick_accumulates_before_stepping() {
        let mut game = seeded_game();
        let start_y = game.current_piece().y();

        game.tick(500);
        assert_eq!(game.current_piece().y(), start_y);

        game.tick(501); // accumulator now 1001 > 1000
        assert_eq!(game.current_piece().y(), start_y + 1);

        // The accumulator was reset, so another short tick does nothing.
        game.tick(500);
        assert_eq!(game.current_piece().y(), start_y + 1);
    }

    #[test]
    fn test_horizontal_moves_stop_at_walls() {
        let mut game = seeded_game();
        place_current(&mut game, PieceKind::O, 0, 0);

        game.handle(Command::MoveLeft);
        assert_eq!(game.current_piece().x(), 0);

        for _ in 0..20 {
            game.handle(Command::MoveRight);
        }
        assert_eq!(game.current_piece().x(), 8);
    }

    #[test]
    fn test_rotation_reverts_when_blocked() {
        let mut game = seeded_game();
        place_current(&mut game, PieceKind::I, 0, 0);
        // Block the cell the vertical I would need.
        let mut obstacle = Piece::spawn(PieceKind::O, BOARD_WIDTH);
        obstacle.translate(-obstacle.x(), 2);
        game.board.merge(&obstacle);

        let before = game.current_piece().clone();
        game.handle(Command::Rotate);
        assert_eq!(*game.current_piece(), before);
    }

    #[test]
    fn test_rotation_commits_when_free() {
        let mut game = seeded_game();
        place_current(&mut game, PieceKind::I, 3, 5);

        game.handle(Command::Rotate);
        assert_eq!(game.current_piece().shape().width(), 1);
        assert_eq!(game.current_piece().shape().height(), 4);
        // Position is unchanged by rotation.
        assert_eq!(game.current_piece().x(), 3);
        assert_eq!(game.current_piece().y(), 5);
    }

    #[test]
    fn test_soft_drop_locks_on_contact() {
        let mut game = seeded_game();
        place_current(&mut game, PieceKind::O, 0, 18);

        game.handle(Command::SoftDrop);

        assert_eq!(game.board().cell(0, 18), Cell::Piece(PieceKind::O));
        assert_eq!(game.board().cell(1, 19), Cell::Piece(PieceKind::O));
        // A fresh piece was promoted to current.
        assert_eq!(game.current_piece().y(), 0);
    }

    #[test]
    fn test_hard_drop_rests_on_existing_stack() {
        let mut game = seeded_game();
        // Bottom row almost full: no line clear will fire.
        fill_board_row(&mut game, 19, PieceKind::I);
        game.board.set_cell(0, 19, Cell::Empty);

        place_current(&mut game, PieceKind::O, 4, 0);
        game.handle(Command::HardDrop);

        // The O rests on the stack, occupying rows 17 and 18.
        assert_eq!(game.board().cell(4, 17), Cell::Piece(PieceKind::O));
        assert_eq!(game.board().cell(5, 18), Cell::Piece(PieceKind::O));
        assert_eq!(game.stats().total_cleared_lines(), 0);
        // The occupied bottom row is untouched.
        for x in 1..BOARD_WIDTH {
            assert_eq!(game.board().cell(x, 19), Cell::Piece(PieceKind::I), "x = {x}");
        }
    }

    #[test]
    fn test_hard_drop_onto_full_row_clears_without_overwrite() {
        let mut game = seeded_game();
        fill_board_row(&mut game, 19, PieceKind::I);

        place_current(&mut game, PieceKind::O, 4, 0);
        game.handle(Command::HardDrop);

        // The full bottom row cleared; the O collapsed down one row.
        assert_eq!(game.stats().total_cleared_lines(), 1);
        assert_eq!(game.stats().score(), 100);
        assert_eq!(game.board().cell(4, 18), Cell::Piece(PieceKind::O));
        assert_eq!(game.board().cell(4, 19), Cell::Piece(PieceKind::O));
        assert_eq!(game.board().cell(0, 19), Cell::Empty);
    }

    #[test]
    fn test_hard_drop_resets_fall_timer() {
        let mut game = seeded_game();
        game.tick(900);
        game.handle(Command::HardDrop);
        let y = game.current_piece().y();
        game.tick(200); // would exceed the interval if 900 ms had survived
        assert_eq!(game.current_piece().y(), y);
    }

    #[test]
    fn test_blocked_spawn_ends_the_game() {
        let mut game = seeded_game();
        block_spawn_area(&mut game);
        place_current(&mut game, PieceKind::O, 0, 18);
        game.handle(Command::SoftDrop);

        assert!(game.phase().is_game_over());
    }

    #[test]
    fn test_commands_are_no_ops_after_game_over() {
        let mut game = seeded_game();
        block_spawn_area(&mut game);
        place_current(&mut game, PieceKind::O, 0, 18);
        game.handle(Command::SoftDrop);
        assert!(game.phase().is_game_over());

        let piece = game.current_piece().clone();
        let board = game.board().clone();
        for command in [
            Command::MoveLeft,
            Command::MoveRight,
            Command::SoftDrop,
            Command::Rotate,
            Command::HardDrop,
        ] {
            game.handle(command);
            assert_eq!(*game.current_piece(), piece);
            assert_eq!(*game.board(), board);
        }
        game.tick(10_000);
        assert_eq!(*game.current_piece(), piece);
    }

    #[test]
    fn test_restart_reinitializes_everything() {
        let mut game = seeded_game();
        fill_board_row(&mut game, 19, PieceKind::I);
        place_current(&mut game, PieceKind::O, 0, 16);
        game.handle(Command::HardDrop);
        game.tick(700);
        assert!(game.stats().score() > 0);

        game.handle(Command::Restart);

        assert!(game.phase().is_playing());
        assert_eq!(game.stats().score(), 0);
        assert_eq!(game.stats().level(), 1);
        assert_eq!(game.stats().total_cleared_lines(), 0);
        assert_eq!(game.fall_timer_ms, 0);
        assert!(game.board().rows().all(|row| row.iter().all(|c| c.is_empty())));
        assert_eq!(game.current_piece().y(), 0);
    }

    #[test]
    fn test_restart_is_allowed_while_playing() {
        let mut game = seeded_game();
        game.handle(Command::MoveLeft);
        game.handle(Command::Restart);
        assert!(game.phase().is_playing());
        assert_eq!(game.stats().score(), 0);
    }
}

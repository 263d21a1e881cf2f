/// A discrete player command dispatched to [`Game::handle`](super::Game::handle).
///
/// This is the complete command surface of the engine; the input layer maps
/// key presses onto it. Quitting the program is not an engine concern and is
/// handled by the caller.
///
/// While the game is over, every command except [`Command::Restart`] is a
/// no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Shift the current piece one column left.
    MoveLeft,
    /// Shift the current piece one column right.
    MoveRight,
    /// Perform one tick-style downward step immediately.
    SoftDrop,
    /// Rotate the current piece 90° clockwise.
    Rotate,
    /// Drop the current piece to its resting row and lock it.
    HardDrop,
    /// Reinitialize the game wholesale.
    Restart,
}

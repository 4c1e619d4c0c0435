//! Collaborator interfaces between the game core and the outside world.
//! The core reports cells to (re)paint and asks for input and tick gating;
//! everything terminal-specific lives behind these traits in `term.rs`.

use crate::snake::Direction;
use crate::Cell;

use crossterm::Result;

/// A cell-level painting surface. Implementations translate grid cells into
/// whatever the output medium needs; the game logic never touches pixels.
pub trait Canvas {
    fn fill_cell(&mut self, cell: Cell, glyph: char) -> Result<()>;
    fn erase_cell(&mut self, cell: Cell) -> Result<()>;
    fn clear_all(&mut self) -> Result<()>;
    fn present(&mut self) -> Result<()>;
}

/// Anything the driver knows how to put on a canvas.
pub trait Draw {
    fn draw(&self, canvas: &mut dyn Canvas) -> Result<()>;
}

/// Non-blocking keyboard collaborator.
pub trait InputSource {
    /// At most one direction candidate per call; the exact reverse of
    /// `current` is filtered out here, at capture time.
    fn poll_direction(&mut self, current: Direction) -> Result<Option<Direction>>;

    /// Whether an exit was requested since the last call.
    fn poll_quit(&mut self) -> Result<bool>;
}

/// Gates the game loop to a fixed tick rate.
pub trait Clock {
    fn wait_for_next_tick(&mut self);
}

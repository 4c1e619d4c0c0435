mod food;
mod game;
mod grid;
mod io;
mod snake;
mod term;

use anyhow::Result;
use tracing_subscriber::EnvFilter;

/// A grid-aligned position in pixels: `(x, y)`, both multiples of the
/// grid cell size.
pub type Cell = (i32, i32);

const SCREEN_WIDTH: i32 = 640;
const SCREEN_HEIGHT: i32 = 480;
const GRID_SIZE: i32 = 20;
const TICKS_PER_SECOND: u64 = 8;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let grid = grid::Grid::new(SCREEN_WIDTH, SCREEN_HEIGHT, GRID_SIZE);
    let mut canvas = term::TermCanvas::new(&grid)?;
    let mut input = term::TermInput::new();
    let mut clock = term::TickClock::new(TICKS_PER_SECOND);

    canvas.setup()?;
    let outcome = game::Game::new(grid).run(&mut input, &mut clock, &mut canvas);
    canvas.restore()?;

    outcome?;
    Ok(())
}

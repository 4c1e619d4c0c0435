use rand::rngs::ThreadRng;
use tracing::{debug, info};

use crate::food::Food;
use crate::grid::Grid;
use crate::io::{Canvas, Clock, Draw, InputSource};
use crate::snake::Snake;

/// Owns the two game entities and runs the tick loop. Rendering, input and
/// the tick clock are injected collaborators; the driver only decides what
/// happens each tick and in which order.
pub struct Game {
    grid: Grid,
    snake: Snake,
    food: Food,
    rng: ThreadRng,
}

impl Game {
    pub fn new(grid: Grid) -> Self {
        let mut rng = rand::thread_rng();
        let snake = Snake::new(&grid);
        let food = Food::spawn(&grid, &mut rng);
        Game { grid, snake, food, rng }
    }

    /// Runs until the input source reports a quit request. Each tick is
    /// strictly ordered: input capture, direction update, movement, food
    /// check, self-collision check, repaint.
    pub fn run<I, C>(&mut self, input: &mut I, clock: &mut C, canvas: &mut dyn Canvas) -> crossterm::Result<()>
    where
        I: InputSource,
        C: Clock,
    {
        info!(cols = self.grid.cols(), rows = self.grid.rows(), "game started");

        loop {
            clock.wait_for_next_tick();

            if input.poll_quit()? {
                info!("quit requested");
                return Ok(());
            }
            if let Some(dir) = input.poll_direction(self.snake.direction())? {
                self.snake.queue_direction(dir);
            }

            self.snake.apply_queued_direction();
            self.snake.advance(&self.grid);

            if self.snake.eat(&self.food) {
                debug!(target_len = self.snake.target_len(), "food eaten");
                self.food = Food::spawn(&self.grid, &mut self.rng);
            }

            if self.snake.reset_if_collided(&self.grid, &mut self.rng) {
                info!("self-collision, field reset");
                canvas.clear_all()?;
            }

            self.snake.draw(canvas)?;
            self.food.draw(canvas)?;
            canvas.present()?;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snake::Direction;
    use crate::Cell;

    struct NullClock;

    impl Clock for NullClock {
        fn wait_for_next_tick(&mut self) {}
    }

    /// Quits after a fixed number of ticks, never steering.
    struct QuitAfter {
        ticks_left: usize,
    }

    impl InputSource for QuitAfter {
        fn poll_direction(&mut self, _current: Direction) -> crossterm::Result<Option<Direction>> {
            Ok(None)
        }

        fn poll_quit(&mut self) -> crossterm::Result<bool> {
            if self.ticks_left == 0 {
                return Ok(true);
            }
            self.ticks_left -= 1;
            Ok(false)
        }
    }

    #[derive(Default)]
    struct RecordingCanvas {
        filled: Vec<(Cell, char)>,
        presents: usize,
    }

    impl Canvas for RecordingCanvas {
        fn fill_cell(&mut self, cell: Cell, glyph: char) -> crossterm::Result<()> {
            self.filled.push((cell, glyph));
            Ok(())
        }

        fn erase_cell(&mut self, cell: Cell) -> crossterm::Result<()> {
            self.filled.push((cell, ' '));
            Ok(())
        }

        fn clear_all(&mut self) -> crossterm::Result<()> {
            self.filled.clear();
            Ok(())
        }

        fn present(&mut self) -> crossterm::Result<()> {
            self.presents += 1;
            Ok(())
        }
    }

    #[test]
    fn quit_request_stops_the_loop_before_any_frame() {
        let mut game = Game::new(Grid::new(640, 480, 20));
        let mut canvas = RecordingCanvas::default();

        game.run(&mut QuitAfter { ticks_left: 0 }, &mut NullClock, &mut canvas)
            .unwrap();

        assert_eq!(canvas.presents, 0);
        assert!(canvas.filled.is_empty());
    }

    #[test]
    fn each_tick_advances_and_presents_one_frame() {
        let mut game = Game::new(Grid::new(640, 480, 20));
        let mut canvas = RecordingCanvas::default();

        game.run(&mut QuitAfter { ticks_left: 3 }, &mut NullClock, &mut canvas)
            .unwrap();

        assert_eq!(canvas.presents, 3);
        // Three ticks moving right from the center put the head at x=380,
        // drawn with the right-heading glyph.
        assert!(canvas.filled.contains(&(((380, 240)), '>')));
    }
}

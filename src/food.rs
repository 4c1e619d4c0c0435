use rand::Rng;

use crate::grid::Grid;
use crate::io::{Canvas, Draw};
use crate::Cell;

const FOOD_CHAR: char = 'O';

/// A single piece of food sitting on a random cell. It never moves; when
/// the snake consumes it, the driver replaces it with a fresh spawn.
pub struct Food {
    position: Cell,
}

impl Food {
    pub fn spawn<R: Rng>(grid: &Grid, rng: &mut R) -> Self {
        let position = (
            rng.gen_range(0..grid.cols()) * grid.cell_size(),
            rng.gen_range(0..grid.rows()) * grid.cell_size(),
        );
        Food { position }
    }

    pub fn position(&self) -> Cell {
        self.position
    }

    #[cfg(test)]
    pub fn at(position: Cell) -> Self {
        Food { position }
    }
}

impl Draw for Food {
    fn draw(&self, canvas: &mut dyn Canvas) -> crossterm::Result<()> {
        canvas.fill_cell(self.position, FOOD_CHAR)
    }
}

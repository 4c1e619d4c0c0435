use crate::snake::Direction;
use crate::Cell;

/// Playfield geometry: a fixed pixel area divided into square cells of
/// `cell` pixels per side. All coordinates are pixel values snapped to
/// cell boundaries; the playfield wraps around at every edge.
#[derive(Clone, Copy)]
pub struct Grid {
    width: i32,
    height: i32,
    cell: i32,
}

impl Grid {
    pub fn new(width: i32, height: i32, cell: i32) -> Self {
        debug_assert!(width % cell == 0 && height % cell == 0);
        Grid { width, height, cell }
    }

    pub fn cell_size(&self) -> i32 {
        self.cell
    }

    pub fn cols(&self) -> i32 {
        self.width / self.cell
    }

    pub fn rows(&self) -> i32 {
        self.height / self.cell
    }

    pub fn center(&self) -> Cell {
        (self.width / 2, self.height / 2)
    }

    /// One cell step from `from` in `dir`, re-entering from the opposite
    /// edge when the raw coordinate lands out of bounds.
    pub fn step(&self, from: Cell, dir: Direction) -> Cell {
        let (dx, dy) = dir.vector();
        self.wrap((from.0 + dx * self.cell, from.1 + dy * self.cell))
    }

    fn wrap(&self, (x, y): Cell) -> Cell {
        // Movement is exactly one cell per tick, so the only out-of-bounds
        // values a step can produce are one cell beyond each edge.
        let x = if x == self.width {
            0
        } else if x == -self.cell {
            self.width - self.cell
        } else {
            x
        };
        let y = if y == self.height {
            0
        } else if y == -self.cell {
            self.height - self.cell
        } else {
            y
        };

        debug_assert!((0..self.width).contains(&x) && (0..self.height).contains(&y));
        (x, y)
    }
}

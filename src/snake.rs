use std::collections::{HashSet, VecDeque};

use rand::Rng;

use crate::food::Food;
use crate::grid::Grid;
use crate::io::{Canvas, Draw};
use crate::Cell;

use Direction::*;

const BODY_CHAR: char = '█';

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

const ALL_DIRECTIONS: [Direction; 4] = [Up, Down, Left, Right];

impl Direction {
    pub fn vector(self) -> (i32, i32) {
        match self {
            Up => (0, -1),
            Down => (0, 1),
            Left => (-1, 0),
            Right => (1, 0),
        }
    }

    pub fn opposite(self) -> Direction {
        match self {
            Up => Down,
            Down => Up,
            Left => Right,
            Right => Left,
        }
    }
}

/// The snake: an ordered body (head first, tail last), its heading, and
/// the length it is growing toward. Movement never allocates a new snake;
/// a self-collision restarts this instance in place.
pub struct Snake {
    body: VecDeque<Cell>,
    direction: Direction,
    next_direction: Option<Direction>,
    target_len: usize,
    last_removed: Option<Cell>,
}

impl Snake {
    pub fn new(grid: &Grid) -> Self {
        let mut body = VecDeque::new();
        body.push_back(grid.center());

        Snake {
            body,
            direction: Right,
            next_direction: None,
            target_len: 1,
            last_removed: None,
        }
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn target_len(&self) -> usize {
        self.target_len
    }

    fn head(&self) -> Cell {
        *self.body.front().unwrap()
    }

    /// Records a direction change to take effect on the next tick. A change
    /// into the exact opposite of the current heading is dropped, so the
    /// head can never reverse into the second body segment.
    pub fn queue_direction(&mut self, dir: Direction) {
        if dir != self.direction.opposite() {
            self.next_direction = Some(dir);
        }
    }

    /// Promotes the queued direction, if any. Called once per tick, so at
    /// most one change takes effect per step no matter how many key events
    /// arrived since the last one.
    pub fn apply_queued_direction(&mut self) {
        if let Some(dir) = self.next_direction.take() {
            self.direction = dir;
        }
    }

    /// One movement step: the wrapped next-head cell goes in at the front,
    /// and the tail is dropped unless the body is still catching up to
    /// `target_len`. The dropped cell is kept so the renderer can erase it.
    pub fn advance(&mut self, grid: &Grid) {
        let next = grid.step(self.head(), self.direction);
        self.body.push_front(next);

        self.last_removed = if self.body.len() > self.target_len {
            self.body.pop_back()
        } else {
            None
        };
    }

    /// Consumes the food if the head sits exactly on its cell. Growth is
    /// deferred: only the length target moves here, the extra segment shows
    /// up on the next `advance`. The caller replaces the food on `true`.
    pub fn eat(&mut self, food: &Food) -> bool {
        if self.head() == food.position() {
            self.target_len += 1;
            true
        } else {
            false
        }
    }

    /// Checks for self-intersection and restarts in place when any cell
    /// occurs twice in the body: a single segment back at the center,
    /// length target 1, and a heading drawn uniformly at random. Returns
    /// whether a restart happened so the caller can repaint the field.
    pub fn reset_if_collided<R: Rng>(&mut self, grid: &Grid, rng: &mut R) -> bool {
        let mut seen = HashSet::with_capacity(self.body.len());
        if self.body.iter().all(|cell| seen.insert(*cell)) {
            return false;
        }

        self.body.clear();
        self.body.push_back(grid.center());
        self.target_len = 1;
        self.direction = ALL_DIRECTIONS[rng.gen_range(0..ALL_DIRECTIONS.len())];
        self.next_direction = None;
        self.last_removed = None;
        true
    }

    fn head_char(&self) -> char {
        match self.direction {
            Up => '^',
            Down => 'v',
            Left => '<',
            Right => '>',
        }
    }
}

impl Draw for Snake {
    fn draw(&self, canvas: &mut dyn Canvas) -> crossterm::Result<()> {
        if let Some(cell) = self.last_removed {
            canvas.erase_cell(cell)?;
        }

        for &cell in self.body.iter().skip(1) {
            canvas.fill_cell(cell, BODY_CHAR)?;
        }

        canvas.fill_cell(self.head(), self.head_char())
    }
}

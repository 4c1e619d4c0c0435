use std::io::{stdout, Stdout, Write};
use std::thread::sleep;
use std::time::{Duration, Instant};

use crossterm::event::{poll, read, Event, KeyCode, KeyEvent, KeyModifiers};
use crossterm::terminal::{self, ClearType, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{cursor, execute, queue, style};

use crate::grid::Grid;
use crate::io::{Canvas, Clock, InputSource};
use crate::snake::Direction;
use crate::Cell;

/// Draws the playfield in the terminal, one character per grid cell.
pub struct TermCanvas {
    stdout: Stdout,
    cell: i32,
}

impl TermCanvas {
    pub fn new(grid: &Grid) -> anyhow::Result<Self> {
        let (cols, rows) = terminal::size()?;
        anyhow::ensure!(
            i32::from(cols) >= grid.cols() && i32::from(rows) >= grid.rows(),
            "terminal too small: the playfield needs {}x{} characters, got {}x{}",
            grid.cols(),
            grid.rows(),
            cols,
            rows,
        );

        Ok(TermCanvas { stdout: stdout(), cell: grid.cell_size() })
    }

    pub fn setup(&mut self) -> crossterm::Result<()> {
        execute!(self.stdout, EnterAlternateScreen)?;
        terminal::enable_raw_mode()?;
        execute!(self.stdout, cursor::Hide, cursor::DisableBlinking)?;
        self.clear_all()?;
        self.present()
    }

    pub fn restore(&mut self) -> crossterm::Result<()> {
        execute!(self.stdout, cursor::Show, cursor::EnableBlinking)?;
        terminal::disable_raw_mode()?;
        execute!(self.stdout, LeaveAlternateScreen)
    }

    fn char_pos(&self, (x, y): Cell) -> (u16, u16) {
        ((x / self.cell) as u16, (y / self.cell) as u16)
    }
}

impl Canvas for TermCanvas {
    fn fill_cell(&mut self, cell: Cell, glyph: char) -> crossterm::Result<()> {
        let (col, row) = self.char_pos(cell);
        queue!(self.stdout, cursor::MoveTo(col, row), style::Print(glyph))
    }

    fn erase_cell(&mut self, cell: Cell) -> crossterm::Result<()> {
        self.fill_cell(cell, ' ')
    }

    fn clear_all(&mut self) -> crossterm::Result<()> {
        execute!(self.stdout, terminal::Clear(ClearType::All))
    }

    fn present(&mut self) -> crossterm::Result<()> {
        self.stdout.flush()?;
        Ok(())
    }
}

/// Polls the crossterm event queue. Both poll methods drain whatever keys
/// arrived since the last tick, so a quit check never swallows a pending
/// direction key or the other way around.
pub struct TermInput {
    pending: Option<Direction>,
    quit: bool,
}

impl TermInput {
    pub fn new() -> Self {
        TermInput { pending: None, quit: false }
    }

    fn pump(&mut self) -> crossterm::Result<()> {
        while poll(Duration::from_millis(0))? {
            if let Event::Key(ev) = read()? {
                if is_ctrl_c(&ev) {
                    self.quit = true;
                    continue;
                }

                match ev.code {
                    KeyCode::Char('w') | KeyCode::Up => self.pending = Some(Direction::Up),
                    KeyCode::Char('a') | KeyCode::Left => self.pending = Some(Direction::Left),
                    KeyCode::Char('s') | KeyCode::Down => self.pending = Some(Direction::Down),
                    KeyCode::Char('d') | KeyCode::Right => self.pending = Some(Direction::Right),
                    KeyCode::Char('q') | KeyCode::Esc => self.quit = true,
                    _ => {}
                }
            }
        }

        Ok(())
    }
}

impl InputSource for TermInput {
    fn poll_direction(&mut self, current: Direction) -> crossterm::Result<Option<Direction>> {
        self.pump()?;
        Ok(self.pending.take().filter(|dir| *dir != current.opposite()))
    }

    fn poll_quit(&mut self) -> crossterm::Result<bool> {
        self.pump()?;
        Ok(self.quit)
    }
}

fn is_ctrl_c(ev: &KeyEvent) -> bool {
    matches!(ev, KeyEvent { code: KeyCode::Char('c'), modifiers: KeyModifiers::CONTROL })
}

/// Fixed-rate tick clock on the monotonic system timer.
pub struct TickClock {
    period: Duration,
    next: Instant,
}

impl TickClock {
    pub fn new(ticks_per_second: u64) -> Self {
        let period = Duration::from_millis(1000 / ticks_per_second);
        TickClock { period, next: Instant::now() + period }
    }
}

impl Clock for TickClock {
    fn wait_for_next_tick(&mut self) {
        let now = Instant::now();
        if self.next > now {
            sleep(self.next - now);
        }

        self.next += self.period;
        // A long stall must not queue up a burst of instant ticks.
        if self.next < Instant::now() {
            self.next = Instant::now() + self.period;
        }
    }
}

use std::io::{stdout, Stdout, Write};
use std::time::Duration;

use anyhow::{Context as _, Result};
use crossterm::event::{poll, read, Event, KeyCode, KeyEvent, KeyModifiers};
use crossterm::style::{available_color_count, Color, Print, ResetColor, SetForegroundColor};
use crossterm::terminal::{ClearType, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{cursor, execute, queue, terminal};

use crate::context::Ctx;
use crate::glyph::Glyph;
use crate::grid::{Cell, Grid};

/// Already-decoded logical input. Scan codes never leave this module.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Input {
    Up,
    Down,
    Left,
    Right,
    Confirm,
    PauseToggle,
    None,
}

pub const APPLE_STR: &str = " Ö ";
pub const BACKGROUND_STR: &str = " ° ";

/// 3-column art per glyph, matching the cell block size.
pub fn glyph_str(glyph: Glyph) -> &'static str {
    match glyph {
        Glyph::HeadVertical => " ▉ ",
        Glyph::HeadLeft => "■■ ",
        Glyph::HeadRight => " ■■",
        Glyph::TailUp => " ╹ ",
        Glyph::TailDown => " ╻ ",
        Glyph::TailLeft => "═━ ",
        Glyph::TailRight => " ━═",
        Glyph::BodyHorizontal => "═══",
        Glyph::BodyVertical => " ║ ",
        Glyph::CornerBottomLeft => "═╗ ",
        Glyph::CornerBottomRight => " ╔═",
        Glyph::CornerTopLeft => "═╝ ",
        Glyph::CornerTopRight => " ╚═",
    }
}

/// The terminal the game draws on: raw mode, alternate screen, hidden
/// cursor, non-blocking input. Acquiring it is the only fatal failure
/// path in the program.
pub struct Term {
    stdout: Stdout,
    colors: bool,
    active: bool,
}

impl Term {
    pub fn new() -> Result<Self> {
        Ok(Term {
            stdout: stdout(),
            colors: available_color_count() >= 8,
            active: false,
        })
    }

    pub fn size() -> Result<(u16, u16)> {
        terminal::size().context("failed to read terminal size")
    }

    pub fn setup(&mut self) -> Result<()> {
        execute!(self.stdout, EnterAlternateScreen).context("failed to enter alternate screen")?;
        self.active = true;
        terminal::enable_raw_mode().context("failed to enable raw mode")?;
        execute!(self.stdout, cursor::Hide).context("failed to hide cursor")?;
        Ok(())
    }

    pub fn restore(&mut self) -> Result<()> {
        if !self.active {
            return Ok(());
        }
        self.active = false;
        execute!(self.stdout, cursor::Show)?;
        terminal::disable_raw_mode()?;
        execute!(self.stdout, LeaveAlternateScreen)?;
        Ok(())
    }

    /// Drains the event queue without blocking and returns the last
    /// decoded input, or `Input::None` when nothing relevant is queued.
    /// Resize and Ctrl+C are the asynchronous notification paths: they
    /// only write into the shared context atomics.
    pub fn poll_input(&self, ctx: &Ctx) -> Result<Input> {
        let mut input = Input::None;

        while poll(Duration::from_millis(1))? {
            match read()? {
                Event::Key(ev) if is_ctrl_c(&ev) => ctx.request_stop(),
                Event::Key(KeyEvent { code, .. }) => match code {
                    KeyCode::Char('w') | KeyCode::Up => input = Input::Up,
                    KeyCode::Char('s') | KeyCode::Down => input = Input::Down,
                    KeyCode::Char('a') | KeyCode::Left => input = Input::Left,
                    KeyCode::Char('d') | KeyCode::Right => input = Input::Right,
                    KeyCode::Enter => input = Input::Confirm,
                    KeyCode::Char('r') | KeyCode::Esc => input = Input::PauseToggle,
                    _ => {}
                },
                Event::Resize(cols, rows) => ctx.set_term_size(cols, rows),
                _ => {}
            }
        }

        Ok(input)
    }

    /// True when any key at all was pressed (used by the win screen).
    /// Still honors resize and stop.
    pub fn poll_any_key(&self, ctx: &Ctx) -> Result<bool> {
        let mut pressed = false;

        while poll(Duration::from_millis(1))? {
            match read()? {
                Event::Key(ev) if is_ctrl_c(&ev) => ctx.request_stop(),
                Event::Key(_) => pressed = true,
                Event::Resize(cols, rows) => ctx.set_term_size(cols, rows),
                _ => {}
            }
        }

        Ok(pressed)
    }

    /// Writes one grid cell's art, recomputing the screen transform from
    /// the current window size.
    pub fn draw_cell(&mut self, ctx: &Ctx, grid: Grid, cell: Cell, text: &str) -> Result<()> {
        let (cols, rows) = ctx.term_size();
        let (x, y) = grid.to_screen(cell, cols, rows);
        queue!(self.stdout, cursor::MoveTo(x, y), Print(text))?;
        Ok(())
    }

    /// Prints a line centered horizontally, `dy` rows below the vertical
    /// center of the window.
    pub fn print_centered(&mut self, ctx: &Ctx, dy: i32, text: &str) -> Result<()> {
        let (cols, rows) = ctx.term_size();
        let x = (cols as i32 / 2 - text.chars().count() as i32 / 2).max(0) as u16;
        let y = (rows as i32 / 2 + dy).max(0) as u16;
        queue!(self.stdout, cursor::MoveTo(x, y), Print(text))?;
        Ok(())
    }

    pub fn set_fg(&mut self, color: Color) -> Result<()> {
        if self.colors {
            queue!(self.stdout, SetForegroundColor(color))?;
        }
        Ok(())
    }

    pub fn reset_fg(&mut self) -> Result<()> {
        if self.colors {
            queue!(self.stdout, ResetColor)?;
        }
        Ok(())
    }

    pub fn clear(&mut self) -> Result<()> {
        queue!(self.stdout, terminal::Clear(ClearType::All))?;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.stdout.flush()?;
        Ok(())
    }
}

impl Drop for Term {
    fn drop(&mut self) {
        // Leave the terminal usable even on an error path.
        let _ = self.restore();
    }
}

fn is_ctrl_c(ev: &KeyEvent) -> bool {
    matches!(
        ev,
        KeyEvent {
            code: KeyCode::Char('c'),
            modifiers: KeyModifiers::CONTROL,
        }
    )
}

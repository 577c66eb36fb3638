use std::io::{self, Write};

use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{self, ClearType},
};
use gol::Simulator;

/// Keeps the terminal in raw mode until dropped.
pub struct RawMode;

impl RawMode {
    pub fn enable() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        Ok(RawMode)
    }
}

impl Drop for RawMode {
    fn drop(&mut self) {
        terminal::disable_raw_mode().ok();
    }
}

pub fn clear() -> io::Result<()> {
    execute!(io::stdout(), terminal::Clear(ClearType::All), cursor::MoveTo(0, 0))
}

/// Blocks until a key is pressed.
pub fn read_key() -> io::Result<KeyCode> {
    let _raw = RawMode::enable()?;
    loop {
        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                return Ok(key.code);
            }
        }
    }
}

/// Draws a generation from the top-left corner. Works in raw mode, where a
/// bare `\n` doesn't return the cursor.
pub fn draw(sim: &Simulator) -> io::Result<()> {
    let mut out = io::stdout().lock();
    execute!(out, terminal::Clear(ClearType::All), cursor::MoveTo(0, 0))?;
    for line in sim.to_string().lines() {
        write!(out, "{line}\r\n")?;
    }
    write!(out, "generation {}\r\n", sim.generation())?;
    out.flush()
}

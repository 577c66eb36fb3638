//! Console rendering: one line per row, `*` for a live cell and a space for
//! a dead one.

use std::fmt::{self, Display, Write};

use crate::{Grid, Simulator};

const ALIVE: char = '*';
const DEAD: char = ' ';

impl Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.height() {
            if y > 0 {
                f.write_char('\n')?;
            }
            for x in 0..self.width() {
                f.write_char(if self.get((x, y)) { ALIVE } else { DEAD })?;
            }
        }
        Ok(())
    }
}

impl Display for Simulator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.grid().fmt(f)
    }
}

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use crate::{Error, Grid};

/// Classic oscillators with a hard-coded starting grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Pattern {
    Blinker,
    Toad,
    Beacon,
    Pulsar,
}

struct Seed {
    name: &'static str,
    width: usize,
    height: usize,
    cells: &'static [(usize, usize)],
}

const BLINKER: Seed = Seed {
    name: "Blinker",
    width: 5,
    height: 5,
    cells: &[(1, 2), (2, 2), (3, 2)],
};

const TOAD: Seed = Seed {
    name: "Toad",
    width: 6,
    height: 6,
    cells: &[(2, 2), (3, 2), (4, 2), (1, 3), (2, 3), (3, 3)],
};

const BEACON: Seed = Seed {
    name: "Beacon",
    width: 6,
    height: 6,
    cells: &[(1, 1), (2, 1), (1, 2), (4, 3), (3, 4), (4, 4)],
};

#[rustfmt::skip]
const PULSAR: Seed = Seed {
    name: "Pulsar",
    width: 17,
    height: 17,
    cells: &[
        // Horizontal bars
        (4, 2), (5, 2), (6, 2), (10, 2), (11, 2), (12, 2),
        (4, 7), (5, 7), (6, 7), (10, 7), (11, 7), (12, 7),
        (4, 9), (5, 9), (6, 9), (10, 9), (11, 9), (12, 9),
        (4, 14), (5, 14), (6, 14), (10, 14), (11, 14), (12, 14),
        // Vertical bars
        (2, 4), (2, 5), (2, 6), (2, 10), (2, 11), (2, 12),
        (7, 4), (7, 5), (7, 6), (7, 10), (7, 11), (7, 12),
        (9, 4), (9, 5), (9, 6), (9, 10), (9, 11), (9, 12),
        (14, 4), (14, 5), (14, 6), (14, 10), (14, 11), (14, 12),
    ],
};

impl Pattern {
    pub const ALL: [Pattern; 4] = [
        Pattern::Blinker,
        Pattern::Toad,
        Pattern::Beacon,
        Pattern::Pulsar,
    ];

    pub fn name(self) -> &'static str {
        self.seed().name
    }

    /// Looks a pattern up by its position in [`Pattern::ALL`].
    pub fn from_index(i: usize) -> Result<Self, Error> {
        Self::ALL
            .get(i)
            .copied()
            .ok_or_else(|| Error::UnknownPattern(i.to_string()))
    }

    pub fn grid(self) -> Grid {
        let Seed {
            width,
            height,
            cells,
            ..
        } = *self.seed();
        let mut grid = Grid::new(width, height);
        for &p in cells {
            grid.set(p, true);
        }
        grid
    }
}

impl Pattern {
    fn seed(self) -> &'static Seed {
        match self {
            Pattern::Blinker => &BLINKER,
            Pattern::Toad => &TOAD,
            Pattern::Beacon => &BEACON,
            Pattern::Pulsar => &PULSAR,
        }
    }
}

impl Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Pattern {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|p| p.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| Error::UnknownPattern(s.to_owned()))
    }
}

use std::str::FromStr;

use log::{debug, trace};

use crate::{Error, Grid, Pattern, seed};

/// Steps a fixed-size Game of Life grid one generation at a time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Simulator {
    grid: Grid,
    generation: usize,
}

impl Simulator {
    /// Seeds the simulation with a matrix indexed `seed[x][y]`.
    pub fn new(seed: Vec<Vec<bool>>) -> Result<Self, Error> {
        Grid::from_matrix(seed).map(Self::from)
    }

    pub fn step(&mut self) {
        // Every decision is made against the grid as it was before the step.
        let mut births = vec![];
        let mut deaths = vec![];
        for p in self.grid.coords() {
            match (self.grid.get(p), self.grid.live_neighbours(p)) {
                (true, ..2 | 4..) => deaths.push(p),
                (false, 3) => births.push(p),
                _ => (),
            }
        }
        for &p in &births {
            self.grid.set(p, true);
        }
        for &p in &deaths {
            self.grid.set(p, false);
        }
        self.generation += 1;
        trace!(
            "generation {}: {} births, {} deaths",
            self.generation,
            births.len(),
            deaths.len()
        );
    }

    /// A copy of the current grid, indexed `[x][y]`.
    pub fn current_generation(&self) -> Vec<Vec<bool>> {
        self.grid.to_matrix()
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn width(&self) -> usize {
        self.grid.width()
    }

    pub fn height(&self) -> usize {
        self.grid.height()
    }

    /// How many times [`Simulator::step`] has run.
    pub fn generation(&self) -> usize {
        self.generation
    }

    pub fn population(&self) -> usize {
        self.grid.population()
    }

    pub fn is_alive(&self, x: usize, y: usize) -> bool {
        self.grid.get((x, y))
    }
}

impl From<Grid> for Simulator {
    fn from(grid: Grid) -> Self {
        debug!(
            "seeded {}x{} grid with {} live cells",
            grid.width(),
            grid.height(),
            grid.population()
        );
        Self {
            grid,
            generation: 0,
        }
    }
}

impl From<Pattern> for Simulator {
    fn from(pattern: Pattern) -> Self {
        debug!("seeding from {pattern}");
        pattern.grid().into()
    }
}

impl FromStr for Simulator {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        seed::parse(s).map(Self::from)
    }
}

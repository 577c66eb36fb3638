use itertools::Itertools;

use crate::Error;

/// A fixed-size rectangle of cells, stored column by column so that
/// `cells[x * height + y]` is the cell at `(x, y)`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<bool>,
}

impl Grid {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![false; width * height],
        }
    }

    /// Like [`Grid::new`], but fails instead of panicking when the grid
    /// can't be allocated.
    pub fn try_new(width: usize, height: usize) -> Result<Self, Error> {
        let len = width
            .checked_mul(height)
            .filter(|&len| len <= isize::MAX as usize)
            .ok_or(Error::InvalidSeed("seed is too large"))?;
        let mut cells = Vec::new();
        cells
            .try_reserve_exact(len)
            .map_err(|_| Error::InvalidSeed("seed is too large to allocate"))?;
        cells.resize(len, false);
        Ok(Self {
            width,
            height,
            cells,
        })
    }

    /// Builds a grid from a matrix indexed `matrix[x][y]`.
    pub fn from_matrix(matrix: Vec<Vec<bool>>) -> Result<Self, Error> {
        let width = matrix.len();
        let height = matrix.first().map_or(0, Vec::len);
        if width * height == 0 {
            return Err(Error::InvalidSeed("seed has no cells"));
        }
        if matrix.iter().any(|column| column.len() != height) {
            return Err(Error::InvalidSeed("seed columns differ in length"));
        }
        let cells = matrix.into_iter().flatten().collect();
        Ok(Self {
            width,
            height,
            cells,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Cells outside the grid are always dead.
    pub fn get(&self, (x, y): (usize, usize)) -> bool {
        self.index((x, y)).is_some_and(|i| self.cells[i])
    }

    pub fn set(&mut self, p: (usize, usize), alive: bool) {
        if let Some(i) = self.index(p) {
            self.cells[i] = alive;
        }
    }

    pub fn coords(&self) -> impl Iterator<Item = (usize, usize)> {
        (0..self.width).cartesian_product(0..self.height)
    }

    pub fn live_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.coords().filter(move |&p| self.get(p))
    }

    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&alive| alive).count()
    }

    pub fn live_neighbours(&self, p: (usize, usize)) -> usize {
        self.neighbours(p).filter(|&n| self.get(n)).count()
    }

    pub fn to_matrix(&self) -> Vec<Vec<bool>> {
        if self.height == 0 {
            return vec![vec![]; self.width];
        }
        self.cells
            .chunks(self.height)
            .map(<[bool]>::to_vec)
            .collect()
    }
}

impl Grid {
    fn index(&self, (x, y): (usize, usize)) -> Option<usize> {
        (x < self.width && y < self.height).then(|| x * self.height + y)
    }

    fn neighbours(&self, (x, y): (usize, usize)) -> impl Iterator<Item = (usize, usize)> + '_ {
        (-1..=1)
            .cartesian_product(-1..=1)
            .filter(|&d| d != (0, 0))
            .filter_map(move |(dx, dy)| Some((x.checked_add_signed(dx)?, y.checked_add_signed(dy)?)))
            .filter(move |&(x, y)| x < self.width && y < self.height)
    }
}

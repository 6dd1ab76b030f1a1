use super::Cell;
use crate::error::LifeError;
use rand::Rng;

/// Fraction of cells set alive by `randomize`
const LIVE_DENSITY: f64 = 0.3;

/// Grid is the 2D board of cells, `rows x cols`, zero-based, row-major.
/// Dimensions are fixed at construction. Neighbor lookups are bounded:
/// positions outside the grid read as dead, there is no wraparound.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a new grid with all cells initially dead
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![Cell::Dead; rows * cols],
        }
    }

    /// Get grid dimensions as (rows, cols)
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Convert 2D coordinates to the flat index
    const fn index(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    /// Get cell at position, None when out of bounds
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        (row < self.rows && col < self.cols).then(|| self.cells[self.index(row, col)])
    }

    /// Flip a single cell, returning its new state.
    /// Out-of-range coordinates are rejected before any mutation.
    pub fn toggle(&mut self, row: usize, col: usize) -> Result<Cell, LifeError> {
        if row >= self.rows || col >= self.cols {
            return Err(LifeError::OutOfBounds {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            });
        }
        let idx = self.index(row, col);
        self.cells[idx] = self.cells[idx].toggle();
        Ok(self.cells[idx])
    }

    /// Count live neighbors among the 8 adjacent positions.
    /// Positions outside the grid count as dead.
    fn live_neighbors(&self, row: usize, col: usize) -> u8 {
        (-1..=1)
            .flat_map(|dr| (-1..=1).map(move |dc| (dr, dc)))
            .filter(|&(dr, dc): &(isize, isize)| dr != 0 || dc != 0)
            .filter_map(|(dr, dc)| {
                let r = usize::try_from(row as isize + dr).ok()?;
                let c = usize::try_from(col as isize + dc).ok()?;
                self.get(r, c)
            })
            .filter(|cell| cell.is_alive())
            .count() as u8
    }

    /// Pure evolution: returns the next generation as a new grid,
    /// leaving `self` untouched.
    pub fn next_generation(&self) -> Self {
        let cells = (0..self.rows)
            .flat_map(|row| (0..self.cols).map(move |col| (row, col)))
            .map(|(row, col)| {
                let current = self.cells[self.index(row, col)];
                current.evolve(self.live_neighbors(row, col))
            })
            .collect();

        Self {
            rows: self.rows,
            cols: self.cols,
            cells,
        }
    }

    /// Reset every cell to dead
    pub fn clear(&mut self) {
        self.cells.iter_mut().for_each(|cell| *cell = Cell::Dead);
    }

    /// Scatter live cells over the grid at `LIVE_DENSITY`
    pub fn randomize(&mut self) {
        let mut rng = rand::rng();
        self.cells.iter_mut().for_each(|cell| {
            *cell = if rng.random_bool(LIVE_DENSITY) {
                Cell::Alive
            } else {
                Cell::Dead
            };
        });
    }

    /// Rows as slices of cells, top to bottom, for rendering
    pub fn iter_rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.cols.max(1))
    }

    /// Number of live cells on the board
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }
}

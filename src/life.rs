pub mod cell;

pub use cell::Cell;

/// Generate a pseudorandom seed for the game's PRNG.
fn generate_seed() -> Result<(u64, u64), GridError> {
    use byteorder::{ByteOrder, NativeEndian};

    let mut seed = [0_u8; 16];

    getrandom::getrandom(&mut seed).map_err(GridError::Seed)?;

    Ok((
        NativeEndian::read_u64(&seed[0..8]),
        NativeEndian::read_u64(&seed[8..16]),
    ))
}

#[derive(Debug, thiserror::Error)]
pub enum GridError {
    #[error("Grid dimensions must be non-zero and addressable, got {columns}x{rows}")]
    InvalidDimensions { columns: usize, rows: usize },
    #[error("Cell ({x}, {y}) is outside the {columns}x{rows} grid")]
    InvalidCoordinate {
        x: usize,
        y: usize,
        columns: usize,
        rows: usize,
    },
    #[error("Failed to seed the random generator: {0}")]
    Seed(getrandom::Error),
}

/// A fixed-size Life grid with a dead border ring.
///
/// Two buffers of identical size are kept: `cells` is the current generation and
/// `scratch_cells` receives the next one. [`LifeGrid::iterate`] swaps them, so the
/// grid is never reallocated after construction.
pub struct LifeGrid {
    columns: usize,
    rows: usize,
    cells: Vec<Cell>,
    scratch_cells: Vec<Cell>,
    rng: randomize::PCG32,
    generation: u64,
}

impl LifeGrid {
    /// Allocates an all-dead grid seeded from the OS entropy source.
    pub fn new(columns: usize, rows: usize) -> Result<Self, GridError> {
        Self::with_rng(columns, rows, generate_seed()?.into())
    }

    /// Allocates an all-dead grid that draws from the given generator on [`LifeGrid::randomize`].
    pub fn with_rng(
        columns: usize,
        rows: usize,
        rng: randomize::PCG32,
    ) -> Result<Self, GridError> {
        let len = match columns.checked_mul(rows) {
            Some(len) if len > 0 => len,
            _ => return Err(GridError::InvalidDimensions { columns, rows }),
        };
        Ok(Self {
            columns,
            rows,
            cells: vec![Cell::Dead; len],
            scratch_cells: vec![Cell::Dead; len],
            rng,
            generation: 0,
        })
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Generations computed since the last reset or clear.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// The current generation in row-major order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Iterates `(x, y, cell)` over the current generation.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        let columns = self.columns;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, cell)| (i % columns, i / columns, *cell))
    }

    pub fn is_border(&self, x: usize, y: usize) -> bool {
        on_border(x, y, self.columns, self.rows)
    }

    pub fn get(&self, x: usize, y: usize) -> Result<Cell, GridError> {
        let i = self.checked_index(x, y)?;
        Ok(self.cells[i])
    }

    pub fn set(&mut self, x: usize, y: usize, cell: Cell) -> Result<(), GridError> {
        let i = self.checked_index(x, y)?;
        self.cells[i] = cell;
        Ok(())
    }

    /// Flips one cell of the current generation and returns its new state.
    pub fn toggle(&mut self, x: usize, y: usize) -> Result<Cell, GridError> {
        let i = self.checked_index(x, y)?;
        self.cells[i] = self.cells[i].toggled();
        Ok(self.cells[i])
    }

    /// Kills every cell in both buffers.
    pub fn clear(&mut self) {
        self.cells.fill(Cell::Dead);
        self.scratch_cells.fill(Cell::Dead);
        self.generation = 0;
    }

    /// Scrambles the interior with 50/50 odds per cell, using the grid's own generator.
    pub fn randomize(&mut self) {
        scramble(&mut self.cells, self.columns, self.rows, &mut self.rng);
        self.restart();
    }

    /// Like [`LifeGrid::randomize`], drawing from a caller-owned generator instead.
    pub fn randomize_with(&mut self, rng: &mut randomize::PCG32) {
        scramble(&mut self.cells, self.columns, self.rows, rng);
        self.restart();
    }

    fn restart(&mut self) {
        self.scratch_cells.fill(Cell::Dead);
        self.generation = 0;
    }

    /// Computes the next generation from the current one, then swaps the buffers.
    ///
    /// Border cells are never evaluated. Every interior cell of the scratch buffer is
    /// rewritten before the swap, so stale values from two generations ago are never read.
    pub fn iterate(&mut self) {
        for y in 1..self.rows.saturating_sub(1) {
            for x in 1..self.columns.saturating_sub(1) {
                let i = self.index(x, y);
                let next = self.cells[i].next(self.live_neighbors(x, y));
                // Write into scratch_cells, since we're still reading from `self.cells`
                self.scratch_cells[i] = next;
            }
        }
        std::mem::swap(&mut self.scratch_cells, &mut self.cells);
        self.generation += 1;
    }

    /// Counts live Moore neighbors of an interior cell.
    fn live_neighbors(&self, x: usize, y: usize) -> u8 {
        let mut total = 0;
        for ny in y - 1..=y + 1 {
            for nx in x - 1..=x + 1 {
                if nx != x || ny != y {
                    total += self.cells[self.index(nx, ny)].weight();
                }
            }
        }
        total
    }

    fn index(&self, x: usize, y: usize) -> usize {
        y * self.columns + x
    }

    fn checked_index(&self, x: usize, y: usize) -> Result<usize, GridError> {
        if x < self.columns && y < self.rows {
            Ok(self.index(x, y))
        } else {
            Err(GridError::InvalidCoordinate {
                x,
                y,
                columns: self.columns,
                rows: self.rows,
            })
        }
    }
}

fn on_border(x: usize, y: usize, columns: usize, rows: usize) -> bool {
    x == 0 || y == 0 || x + 1 == columns || y + 1 == rows
}

fn scramble(cells: &mut [Cell], columns: usize, rows: usize, rng: &mut randomize::PCG32) {
    for (i, cell) in cells.iter_mut().enumerate() {
        let (x, y) = (i % columns, i / columns);
        *cell = if on_border(x, y, columns, rows) {
            Cell::Dead
        } else {
            Cell::from(randomize::f32_half_open_right(rng.next_u32()) < 0.5)
        };
    }
}

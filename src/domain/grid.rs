use super::{Cell, EngineError, Seed};

/// Largest cell count whose current and next generation both fit in one
/// address space (`Vec` is limited to `isize::MAX` bytes).
pub const MAX_CELLS: usize = isize::MAX as usize / 2;

/// CellGrid is the fixed-size 2D cellular automaton grid.
/// Cells are stored row-major: `(x, y)` lives at `y * width + x`.
/// The edges wrap, so every cell has exactly eight neighbors.
#[derive(Clone, Debug, PartialEq)]
pub struct CellGrid {
    width: u32,
    height: u32,
    cells: Vec<Cell>,
}

impl CellGrid {
    /// Create a grid and assign each cell its initial state from `seed`
    pub fn new(width: u32, height: u32, seed: &Seed) -> Result<Self, EngineError> {
        let len = Self::checked_len(width, height)?;
        let cells = seed.fill(width as usize, height as usize);
        debug_assert_eq!(cells.len(), len);

        Ok(Self { width, height, cells })
    }

    /// Number of cells for the given dimensions, rejecting zero and any
    /// count whose two generation buffers could not be allocated
    pub fn checked_len(width: u32, height: u32) -> Result<usize, EngineError> {
        if width == 0 || height == 0 {
            return Err(EngineError::InvalidDimension { width, height });
        }
        (width as usize)
            .checked_mul(height as usize)
            .filter(|&len| len <= MAX_CELLS)
            .ok_or(EngineError::InvalidDimension { width, height })
    }

    pub const fn width(&self) -> u32 {
        self.width
    }

    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Convert 2D coordinates to 1D index
    #[inline]
    pub const fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Get cell at position (with bounds checking)
    pub fn get(&self, x: u32, y: u32) -> Option<Cell> {
        (x < self.width && y < self.height).then(|| self.cells[self.index(x, y)])
    }

    /// Raw row-major cell storage
    pub fn as_slice(&self) -> &[Cell] {
        &self.cells
    }

    /// Count live neighbors using toroidal wrapping (grid wraps like a torus).
    /// On a 1-wide or 1-tall grid a cell can be its own neighbor.
    pub fn live_neighbor_count(&self, x: u32, y: u32) -> u8 {
        let w = self.width as i64;
        let h = self.height as i64;
        let mut count = 0;
        for dy in -1..=1_i64 {
            for dx in -1..=1_i64 {
                if dx == 0 && dy == 0 {
                    continue;
                }
                let nx = (x as i64 + dx).rem_euclid(w) as u32;
                let ny = (y as i64 + dy).rem_euclid(h) as u32;
                count += self.cells[self.index(nx, ny)] as u8;
            }
        }
        count
    }

    /// Write the next generation into `next` without touching `self`.
    /// `next` must be exactly as long as the grid.
    pub fn next_generation_into(&self, next: &mut [Cell]) {
        assert_eq!(next.len(), self.cells.len(), "scratch buffer length mismatch");

        for y in 0..self.height {
            for x in 0..self.width {
                let idx = self.index(x, y);
                next[idx] = self.cells[idx].evolve(self.live_neighbor_count(x, y));
            }
        }
    }

    /// Exchange the cell storage with `other`. Used to commit a
    /// generation computed by [`Self::next_generation_into`].
    pub(crate) fn swap_cells(&mut self, other: &mut Vec<Cell>) {
        debug_assert_eq!(other.len(), self.cells.len());
        std::mem::swap(&mut self.cells, other);
    }

    /// Count alive cells
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|c| c.is_alive()).count()
    }
}

use std::fmt;

use tracing::{debug, trace};

use super::CellView;
use crate::domain::{Cell, CellGrid, EngineError, Seed};

/// Engine owns one grid and advances it one generation per `step`.
///
/// The next generation is computed into a scratch buffer and then swapped
/// in, so a reader of `cells()` only ever sees complete generations.
pub struct Engine {
    grid: CellGrid,
    scratch: Vec<Cell>,
    generation: u64,
}

impl Engine {
    /// Create an engine seeded with [`Seed::Reference`]
    pub fn new(width: u32, height: u32) -> Result<Self, EngineError> {
        Self::with_seed(width, height, &Seed::Reference)
    }

    /// Create an engine with an explicit initial-pattern policy
    pub fn with_seed(width: u32, height: u32, seed: &Seed) -> Result<Self, EngineError> {
        let grid = CellGrid::new(width, height, seed)?;
        let scratch = vec![Cell::Dead; grid.as_slice().len()];

        debug!(
            width,
            height,
            seed = seed.kind(),
            population = grid.population(),
            "engine created"
        );

        Ok(Self { grid, scratch, generation: 0 })
    }

    pub const fn width(&self) -> u32 {
        self.grid.width()
    }

    pub const fn height(&self) -> u32 {
        self.grid.height()
    }

    /// Number of steps taken since construction
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// Borrow the live cell buffer. The view aliases the engine's storage
    /// and must be dropped before the next `step`.
    pub fn cells(&self) -> CellView<'_> {
        CellView::new(self.grid.as_slice(), self.width(), self.height())
    }

    /// Raw address of the live buffer (`width * height` bytes).
    ///
    /// Valid until the next `step` or until the engine is dropped. `step`
    /// alternates between two allocations, so the address changes every
    /// generation.
    pub fn cells_ptr(&self) -> *const u8 {
        self.grid.as_slice().as_ptr().cast()
    }

    /// Cell at `(x, y)`, or `None` out of bounds
    pub fn get(&self, x: u32, y: u32) -> Option<Cell> {
        self.grid.get(x, y)
    }

    pub fn population(&self) -> usize {
        self.grid.population()
    }

    /// Advance the whole grid by one generation
    pub fn step(&mut self) {
        self.grid.next_generation_into(&mut self.scratch);
        self.grid.swap_cells(&mut self.scratch);
        self.generation += 1;

        trace!(
            generation = self.generation,
            population = self.grid.population(),
            "step"
        );
    }

    /// Text rendering, one line per row
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Engine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.cells(), f)
    }
}

impl fmt::Debug for Engine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Engine")
            .field("width", &self.width())
            .field("height", &self.height())
            .field("generation", &self.generation)
            .finish()
    }
}

//! Initial-pattern policies.
//!
//! A [`Seed`] is passed explicitly at construction time. There is no
//! global RNG: the random policy carries its own seed, so the same
//! arguments always produce the same grid.

use rand::{Rng, SeedableRng, rngs::StdRng};

use super::Cell;

/// How the cells of a freshly constructed grid are assigned.
#[derive(Clone, Debug, PartialEq, Default)]
pub enum Seed {
    /// Alive when the flat index is divisible by 2 or by 7.
    #[default]
    Reference,
    /// Every cell dead.
    Empty,
    /// Exactly these `(x, y)` coordinates alive. Coordinates wrap around
    /// the grid edges.
    Cells(Vec<(u32, u32)>),
    /// Each cell alive with probability `density`, drawn in row-major
    /// order from a generator seeded with `seed`.
    Random { seed: u64, density: f64 },
}

impl Seed {
    /// Short name for logs
    pub fn kind(&self) -> &'static str {
        match self {
            Seed::Reference => "reference",
            Seed::Empty => "empty",
            Seed::Cells(_) => "cells",
            Seed::Random { .. } => "random",
        }
    }

    /// Reference rule as a pure function of the flat index
    pub const fn reference_cell(index: usize) -> Cell {
        if index % 2 == 0 || index % 7 == 0 {
            Cell::Alive
        } else {
            Cell::Dead
        }
    }

    /// Build the row-major cell buffer for a `width` x `height` grid.
    /// Dimensions are validated by the caller.
    pub(crate) fn fill(&self, width: usize, height: usize) -> Vec<Cell> {
        let len = width * height;
        match self {
            Seed::Reference => (0..len).map(Self::reference_cell).collect(),
            Seed::Empty => vec![Cell::Dead; len],
            Seed::Cells(coords) => {
                let mut cells = vec![Cell::Dead; len];
                for &(x, y) in coords {
                    let x = x as usize % width;
                    let y = y as usize % height;
                    cells[y * width + x] = Cell::Alive;
                }
                cells
            }
            Seed::Random { seed, density } => {
                let density = if density.is_nan() { 0.0 } else { density.clamp(0.0, 1.0) };
                let mut rng = StdRng::seed_from_u64(*seed);
                (0..len).map(|_| Cell::from(rng.random_bool(density))).collect()
            }
        }
    }
}

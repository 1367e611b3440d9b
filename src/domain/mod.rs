mod cell;
mod error;
mod grid;
mod patterns;
mod seed;

pub use cell::{CELL_BYTES, Cell};
pub use error::EngineError;
pub use grid::{CellGrid, MAX_CELLS};
pub use patterns::{Pattern, presets};
pub use seed::Seed;

// Domain layer - Cells, grid, seeding
pub mod domain;

// Application layer - Engine and the frame protocol
pub mod application;

// Infrastructure layer - host configuration and drawing
pub mod config;
pub mod rendering;

// Re-exports for convenience
pub use application::{CellView, Engine, FrameDriver};
pub use config::HostConfig;
pub use domain::{CELL_BYTES, Cell, EngineError, Pattern, Seed, presets};

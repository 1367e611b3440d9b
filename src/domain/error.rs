//! Error types for grid construction.

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    /// Zero width or height, or a cell count that does not fit in memory.
    #[error("invalid grid dimension: {width}x{height}")]
    InvalidDimension { width: u32, height: u32 },
}

//! Pixel geometry of the drawing surface.
//!
//! Every cell occupies `cell_size` pixels plus one pixel of grid line,
//! with one extra line closing the right and bottom edges.

/// Canvas size in pixels for a `width` x `height` grid, saturating at `u32::MAX`
pub const fn canvas_size(width: u32, height: u32, cell_size: u32) -> (u32, u32) {
    let pitch = cell_size.saturating_add(1);
    (
        pitch.saturating_mul(width).saturating_add(1),
        pitch.saturating_mul(height).saturating_add(1),
    )
}

/// Offset of grid line `i` (0..=width or 0..=height)
pub fn line_offset(i: u32, cell_size: u32) -> f32 {
    i as f32 * (cell_size as f32 + 1.0) + 1.0
}

/// Top-left pixel of cell `(x, y)`
pub fn cell_origin(x: u32, y: u32, cell_size: u32) -> (f32, f32) {
    (line_offset(x, cell_size), line_offset(y, cell_size))
}

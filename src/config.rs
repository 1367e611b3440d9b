use macroquad::color::Color;

use crate::domain::Seed;
use crate::rendering::canvas_size;

/// Settings for the host window and renderer.
/// There is no loading step; values are fixed at startup.
#[derive(Clone, Debug)]
pub struct HostConfig {
    pub grid_width: u32,
    pub grid_height: u32,
    /// Side of a cell in pixels, excluding the 1px grid line
    pub cell_size: u32,
    pub grid_color: Color,
    pub dead_color: Color,
    pub alive_color: Color,
    pub draw_grid_lines: bool,
    pub seed: Seed,
}

impl HostConfig {
    /// Drawing surface size in pixels for the configured grid
    pub fn canvas_size(&self) -> (u32, u32) {
        canvas_size(self.grid_width, self.grid_height, self.cell_size)
    }
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            grid_width: 128,
            grid_height: 64,
            cell_size: 10,
            grid_color: Color::from_rgba(0xCC, 0xCC, 0xCC, 255),
            dead_color: Color::from_rgba(0xFF, 0xFF, 0xFF, 255),
            alive_color: Color::from_rgba(0x00, 0x00, 0x00, 255),
            draw_grid_lines: true,
            seed: Seed::Reference,
        }
    }
}

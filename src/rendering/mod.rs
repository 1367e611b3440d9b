mod layout;

pub use layout::{canvas_size, cell_origin, line_offset};

use macroquad::prelude::*;

use crate::application::CellView;
use crate::config::HostConfig;

/// Draw the fixed grid lines around every cell
pub fn draw_grid_lines(grid_width: u32, grid_height: u32, config: &HostConfig) {
    let (canvas_w, canvas_h) = canvas_size(grid_width, grid_height, config.cell_size);

    for i in 0..=grid_width {
        let x = line_offset(i, config.cell_size);
        draw_line(x, 0.0, x, canvas_h as f32, 1.0, config.grid_color);
    }
    for j in 0..=grid_height {
        let y = line_offset(j, config.cell_size);
        draw_line(0.0, y, canvas_w as f32, y, 1.0, config.grid_color);
    }
}

/// Fill every cell straight from the engine's byte buffer
pub fn draw_cells(cells: CellView<'_>, config: &HostConfig) {
    let size = config.cell_size as f32;
    let width = cells.width() as usize;

    for (idx, &byte) in cells.as_bytes().iter().enumerate() {
        let x = (idx % width) as u32;
        let y = (idx / width) as u32;
        let color = if byte == 0 { config.dead_color } else { config.alive_color };
        let (px, py) = cell_origin(x, y, config.cell_size);
        draw_rectangle(px, py, size, size, color);
    }
}

/// Draw one full frame: background, grid lines, then cells
pub fn draw_frame(cells: CellView<'_>, config: &HostConfig) {
    clear_background(config.dead_color);
    if config.draw_grid_lines {
        draw_grid_lines(cells.width(), cells.height(), config);
    }
    draw_cells(cells, config);
}

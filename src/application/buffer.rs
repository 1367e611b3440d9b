//! Read-only, zero-copy view of an engine's live cell buffer.
//!
//! A [`CellView`] borrows the engine, so it has to be dropped before the
//! next `step`. Nothing is copied: `as_bytes` hands out the engine's own
//! storage, one byte per cell, row-major, values 0 (dead) or 1 (alive).

use std::fmt;

use crate::domain::Cell;

#[derive(Clone, Copy)]
pub struct CellView<'a> {
    cells: &'a [Cell],
    width: u32,
    height: u32,
}

impl<'a> CellView<'a> {
    pub(crate) fn new(cells: &'a [Cell], width: u32, height: u32) -> Self {
        debug_assert_eq!(cells.len(), width as usize * height as usize);
        Self { cells, width, height }
    }

    pub const fn width(&self) -> u32 {
        self.width
    }

    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Number of cells, `width * height`
    pub const fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always false for a view of a constructed engine
    pub const fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn as_cells(&self) -> &'a [Cell] {
        self.cells
    }

    /// The live buffer reinterpreted as raw bytes
    pub fn as_bytes(&self) -> &'a [u8] {
        // SAFETY: Cell is #[repr(u8)] and one byte wide, so the slice has the
        // same length and layout as a byte slice. Every Cell value is a valid u8.
        unsafe { std::slice::from_raw_parts(self.cells.as_ptr().cast::<u8>(), self.cells.len()) }
    }

    /// Address of the first cell, for hosts reading across an FFI boundary
    pub fn as_ptr(&self) -> *const u8 {
        self.cells.as_ptr().cast()
    }

    /// Get cell at position (with bounds checking)
    pub fn get(&self, x: u32, y: u32) -> Option<Cell> {
        (x < self.width && y < self.height)
            .then(|| self.cells[y as usize * self.width as usize + x as usize])
    }

    /// Iterate rows top to bottom
    pub fn rows(self) -> impl ExactSizeIterator<Item = &'a [Cell]> + 'a {
        self.cells.chunks_exact(self.width as usize)
    }

    /// Iterate all cells with their positions
    pub fn iter_cells(self) -> impl Iterator<Item = (u32, u32, Cell)> + 'a {
        let width = self.width;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, &cell)| ((i % width as usize) as u32, (i / width as usize) as u32, cell))
    }

    pub fn population(&self) -> usize {
        self.cells.iter().filter(|c| c.is_alive()).count()
    }
}

impl fmt::Display for CellView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for &cell in row {
                write!(f, "{}", cell.symbol())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl fmt::Debug for CellView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CellView")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("population", &self.population())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CELLS: [Cell; 6] = [
        Cell::Alive, Cell::Dead, Cell::Dead,
        Cell::Dead, Cell::Alive, Cell::Alive,
    ];

    #[test]
    fn test_bytes_alias_cells() {
        let view = CellView::new(&CELLS, 3, 2);
        assert_eq!(view.as_bytes(), &[1, 0, 0, 0, 1, 1]);
        assert_eq!(view.as_bytes().as_ptr(), CELLS.as_ptr().cast::<u8>());
        assert_eq!(view.as_ptr(), CELLS.as_ptr().cast::<u8>());
    }

    #[test]
    fn test_get_and_bounds() {
        let view = CellView::new(&CELLS, 3, 2);
        assert_eq!(view.get(0, 0), Some(Cell::Alive));
        assert_eq!(view.get(1, 1), Some(Cell::Alive));
        assert_eq!(view.get(1, 0), Some(Cell::Dead));
        assert_eq!(view.get(3, 0), None);
        assert_eq!(view.get(0, 2), None);
    }

    #[test]
    fn test_rows_and_positions() {
        let view = CellView::new(&CELLS, 3, 2);
        let rows: Vec<_> = view.rows().collect();
        assert_eq!(rows, vec![&CELLS[..3], &CELLS[3..]]);

        let alive: Vec<_> = view
            .iter_cells()
            .filter(|(_, _, c)| c.is_alive())
            .map(|(x, y, _)| (x, y))
            .collect();
        assert_eq!(alive, vec![(0, 0), (1, 1), (2, 1)]);
        assert_eq!(view.population(), 3);
    }

    #[test]
    fn test_display() {
        let view = CellView::new(&CELLS, 3, 2);
        assert_eq!(view.to_string(), "◼◻◻\n◻◼◼\n");
    }
}

/// Cell represents the fundamental unit in Conway's Game of Life.
/// Each cell is stored as a single byte so the grid can be read
/// directly as raw memory: 0 = Dead, 1 = Alive.
#[repr(u8)]
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Cell {
    #[default]
    Dead = 0,
    Alive = 1,
}

/// Byte width of one cell in an exported buffer.
pub const CELL_BYTES: usize = 1;

const _: () = assert!(std::mem::size_of::<Cell>() == CELL_BYTES);

impl Cell {
    /// Check if the cell is currently alive
    pub const fn is_alive(self) -> bool {
        matches!(self, Cell::Alive)
    }

    /// Pure function to compute the next state based on Conway's rules:
    /// 1. Live cell with fewer than 2 neighbors dies
    /// 2. Live cell with 2-3 neighbors survives
    /// 3. Live cell with more than 3 neighbors dies
    /// 4. Dead cell with exactly 3 neighbors becomes alive
    pub const fn evolve(self, neighbors: u8) -> Self {
        match (self, neighbors) {
            (Cell::Alive, n) if n < 2 => Cell::Dead,
            (Cell::Alive, 2 | 3) => Cell::Alive,
            (Cell::Alive, _) => Cell::Dead,
            (Cell::Dead, 3) => Cell::Alive,
            (otherwise, _) => otherwise,
        }
    }

    /// Glyph used by the text rendering
    pub const fn symbol(self) -> char {
        match self {
            Cell::Alive => '◼',
            Cell::Dead => '◻',
        }
    }
}

impl From<bool> for Cell {
    fn from(alive: bool) -> Self {
        if alive { Cell::Alive } else { Cell::Dead }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_underpopulation() {
        assert_eq!(Cell::Alive.evolve(0), Cell::Dead);
        assert_eq!(Cell::Alive.evolve(1), Cell::Dead);
    }

    #[test]
    fn test_survival() {
        assert_eq!(Cell::Alive.evolve(2), Cell::Alive);
        assert_eq!(Cell::Alive.evolve(3), Cell::Alive);
    }

    #[test]
    fn test_overpopulation() {
        for n in 4..=8 {
            assert_eq!(Cell::Alive.evolve(n), Cell::Dead, "{} neighbors", n);
        }
    }

    #[test]
    fn test_reproduction() {
        assert_eq!(Cell::Dead.evolve(3), Cell::Alive);
    }

    #[test]
    fn test_dead_stays_dead_otherwise() {
        for n in (0..=8).filter(|&n| n != 3) {
            assert_eq!(Cell::Dead.evolve(n), Cell::Dead, "{} neighbors", n);
        }
    }

    #[test]
    fn test_byte_values() {
        assert_eq!(Cell::Dead as u8, 0);
        assert_eq!(Cell::Alive as u8, 1);
        assert_eq!(Cell::default(), Cell::Dead);
        assert_eq!(Cell::from(true), Cell::Alive);
    }
}

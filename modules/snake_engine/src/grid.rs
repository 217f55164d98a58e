use rand::Rng;

use crate::direction::Direction;

pub const BOARD_WIDTH: i32 = 600;
pub const BOARD_HEIGHT: i32 = 400;
pub const SEGMENT_SIZE: i32 = 20;

/// One board position in logical pixels, snapped to the segment grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The neighbouring cell one segment away in `dir`.
    pub fn offset(self, dir: Direction) -> Self {
        let (dx, dy) = dir.delta();
        Self {
            x: self.x + dx * SEGMENT_SIZE,
            y: self.y + dy * SEGMENT_SIZE,
        }
    }
}

/// Board geometry and cell sampling.
#[derive(Debug, Clone, Copy)]
pub struct Grid {
    pub width: i32,
    pub height: i32,
    pub segment: i32,
}

impl Grid {
    pub fn new(width: i32, height: i32, segment: i32) -> Self {
        Self {
            width,
            height,
            segment,
        }
    }

    pub fn board() -> Self {
        Self::new(BOARD_WIDTH, BOARD_HEIGHT, SEGMENT_SIZE)
    }

    pub fn cols(&self) -> i32 {
        self.width / self.segment
    }

    pub fn rows(&self) -> i32 {
        self.height / self.segment
    }

    pub fn cell_count(&self) -> usize {
        (self.cols() * self.rows()) as usize
    }

    pub fn in_bounds(&self, cell: Cell) -> bool {
        cell.x >= 0 && cell.x < self.width && cell.y >= 0 && cell.y < self.height
    }

    /// Uniformly random grid-aligned cell.
    pub fn random_cell(&self, rng: &mut impl Rng) -> Cell {
        let x = rng.gen_range(0..self.cols()) * self.segment;
        let y = rng.gen_range(0..self.rows()) * self.segment;
        Cell::new(x, y)
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        let (cols, rows, segment) = (self.cols(), self.rows(), self.segment);
        (0..rows).flat_map(move |row| {
            (0..cols).map(move |col| Cell::new(col * segment, row * segment))
        })
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;

    #[test]
    fn board_is_30_by_20_cells() {
        let grid = Grid::board();
        assert_eq!(grid.cols(), 30);
        assert_eq!(grid.rows(), 20);
        assert_eq!(grid.cell_count(), 600);
    }

    #[test]
    fn bounds_are_half_open() {
        let grid = Grid::board();
        assert!(grid.in_bounds(Cell::new(0, 0)));
        assert!(grid.in_bounds(Cell::new(580, 380)));
        assert!(!grid.in_bounds(Cell::new(-20, 200)));
        assert!(!grid.in_bounds(Cell::new(600, 200)));
        assert!(!grid.in_bounds(Cell::new(300, 400)));
    }

    #[test]
    fn random_cells_are_aligned_and_in_bounds() {
        let grid = Grid::board();
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..200 {
            let cell = grid.random_cell(&mut rng);
            assert!(grid.in_bounds(cell));
            assert_eq!(cell.x % SEGMENT_SIZE, 0);
            assert_eq!(cell.y % SEGMENT_SIZE, 0);
        }
    }

    #[test]
    fn row_major_scan_visits_every_cell_once() {
        let grid = Grid::board();
        let cells: Vec<Cell> = grid.cells().collect();
        assert_eq!(cells.len(), grid.cell_count());
        assert_eq!(cells[0], Cell::new(0, 0));
        assert_eq!(cells[1], Cell::new(20, 0));
        assert_eq!(*cells.last().unwrap(), Cell::new(580, 380));
    }
}

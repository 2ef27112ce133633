//! Grid geometry
//!
//! Cells are addressed by integer (column, row). The grid itself holds no
//! state beyond its size; it is used for toroidal wrap-around, the spawn
//! point at its center and the bounds of random food placement.

/// One grid-aligned square, addressed by (column, row)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    pub col: i32,
    pub row: i32,
}

impl Cell {
    pub const fn new(col: i32, row: i32) -> Self {
        Cell { col, row }
    }
}

/// Direction the snake can move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Unit vector as (d_col, d_row); rows grow downward
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    pub fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Returns true if turning from self to other would be a 180-degree turn
    pub fn is_opposite(self, other: Direction) -> bool {
        self.opposite() == other
    }
}

/// Fixed-size playing field, measured in cells
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    pub width: i32,
    pub height: i32,
}

impl Grid {
    /// Both dimensions are clamped to `1..=i32::MAX` cells
    pub fn new(width: u32, height: u32) -> Self {
        let clamp = |cells: u32| cells.clamp(1, i32::MAX as u32) as i32;
        Grid {
            width: clamp(width),
            height: clamp(height),
        }
    }

    pub fn center(&self) -> Cell {
        Cell::new(self.width / 2, self.height / 2)
    }

    pub fn cell_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    pub fn contains(&self, cell: Cell) -> bool {
        (0..self.width).contains(&cell.col) && (0..self.height).contains(&cell.row)
    }

    /// Step one cell in `direction`, reappearing on the opposite edge
    pub fn step(&self, cell: Cell, direction: Direction) -> Cell {
        let (dc, dr) = direction.delta();
        Cell::new(
            (cell.col + dc).rem_euclid(self.width),
            (cell.row + dr).rem_euclid(self.height),
        )
    }

    /// All cells in row-major order
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        (0..self.height).flat_map(move |row| (0..self.width).map(move |col| Cell::new(col, row)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opposites() {
        assert!(Direction::Up.is_opposite(Direction::Down));
        assert!(Direction::Left.is_opposite(Direction::Right));
        assert!(!Direction::Up.is_opposite(Direction::Left));
        assert!(!Direction::Right.is_opposite(Direction::Right));
    }

    #[test]
    fn test_center() {
        assert_eq!(Grid::new(32, 24).center(), Cell::new(16, 12));
        assert_eq!(Grid::new(1, 1).center(), Cell::new(0, 0));
    }

    #[test]
    fn test_step_wraps_on_every_edge() {
        let grid = Grid::new(32, 24);

        assert_eq!(grid.step(Cell::new(31, 5), Direction::Right), Cell::new(0, 5));
        assert_eq!(grid.step(Cell::new(0, 5), Direction::Left), Cell::new(31, 5));
        assert_eq!(grid.step(Cell::new(7, 0), Direction::Up), Cell::new(7, 23));
        assert_eq!(grid.step(Cell::new(7, 23), Direction::Down), Cell::new(7, 0));
    }

    #[test]
    fn test_step_inside_grid() {
        let grid = Grid::new(10, 10);
        assert_eq!(grid.step(Cell::new(4, 4), Direction::Right), Cell::new(5, 4));
        assert_eq!(grid.step(Cell::new(4, 4), Direction::Up), Cell::new(4, 3));
    }

    #[test]
    fn test_cells_cover_grid() {
        let grid = Grid::new(3, 2);
        let cells: Vec<Cell> = grid.cells().collect();

        assert_eq!(cells.len(), grid.cell_count());
        assert_eq!(cells[0], Cell::new(0, 0));
        assert_eq!(cells[5], Cell::new(2, 1));
        assert!(cells.iter().all(|c| grid.contains(*c)));
    }

    #[test]
    fn test_zero_sized_grid_is_clamped() {
        let grid = Grid::new(0, 0);
        assert_eq!(grid.cell_count(), 1);
    }

    #[test]
    fn test_oversized_grid_is_clamped() {
        let grid = Grid::new(3_000_000_000, 2);

        assert_eq!(grid.width, i32::MAX);
        assert_eq!(grid.cell_count(), i32::MAX as usize * 2);
    }
}

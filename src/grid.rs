use std::collections::HashSet;

use crate::error::GridError;
use crate::input::Direction;

/// Smallest side length accepted for a grid; a bordered grid then keeps a 2x2 interior.
pub const MIN_GRID_SIDE: i32 = 4;

/// Largest side length accepted for a grid.
pub const MAX_GRID_SIDE: i32 = 1024;

/// Grid position in logical cell coordinates.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct Cell {
    pub col: i32,
    pub row: i32,
}

impl Cell {
    #[must_use]
    pub const fn new(col: i32, row: i32) -> Self {
        Self { col, row }
    }

    /// Returns the neighbouring cell one step in `direction`.
    #[must_use]
    pub fn step(self, direction: Direction) -> Self {
        let (dc, dr) = direction.delta();
        Self {
            col: self.col + dc,
            row: self.row + dr,
        }
    }
}

/// Fixed playing field with a static set of wall cells.
#[derive(Debug, Clone)]
pub struct Grid {
    cols: i32,
    rows: i32,
    walls: HashSet<Cell>,
}

impl Grid {
    /// Creates a grid walled on its outer ring.
    pub fn bordered(cols: i32, rows: i32) -> Result<Self, GridError> {
        check_dimensions(cols, rows)?;

        let mut walls = HashSet::new();
        for col in 0..cols {
            walls.insert(Cell::new(col, 0));
            walls.insert(Cell::new(col, rows - 1));
        }
        for row in 0..rows {
            walls.insert(Cell::new(0, row));
            walls.insert(Cell::new(cols - 1, row));
        }

        Ok(Self { cols, rows, walls })
    }

    /// Creates a grid without walls; only the bounds stop the snake.
    pub fn open(cols: i32, rows: i32) -> Result<Self, GridError> {
        Self::with_walls(cols, rows, std::iter::empty())
    }

    /// Creates a grid with a custom wall layout. Walls outside the bounds are dropped.
    pub fn with_walls(
        cols: i32,
        rows: i32,
        walls: impl IntoIterator<Item = Cell>,
    ) -> Result<Self, GridError> {
        check_dimensions(cols, rows)?;

        let walls = walls
            .into_iter()
            .filter(|cell| cell.col >= 0 && cell.row >= 0 && cell.col < cols && cell.row < rows)
            .collect();
        Ok(Self { cols, rows, walls })
    }

    #[must_use]
    pub fn dimensions(&self) -> (i32, i32) {
        (self.cols, self.rows)
    }

    #[must_use]
    pub fn in_bounds(&self, cell: Cell) -> bool {
        cell.col >= 0 && cell.row >= 0 && cell.col < self.cols && cell.row < self.rows
    }

    #[must_use]
    pub fn is_wall(&self, cell: Cell) -> bool {
        self.walls.contains(&cell)
    }

    /// Returns true when the snake may not enter `cell`.
    #[must_use]
    pub fn blocks(&self, cell: Cell) -> bool {
        !self.in_bounds(cell) || self.is_wall(cell)
    }

    /// Center cell, where fresh snakes start.
    #[must_use]
    pub fn center(&self) -> Cell {
        Cell::new(self.cols / 2, self.rows / 2)
    }

    /// Iterates all in-bounds cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        (0..self.rows).flat_map(move |row| (0..self.cols).map(move |col| Cell::new(col, row)))
    }

    /// Iterates wall cells in no particular order.
    pub fn walls(&self) -> impl Iterator<Item = Cell> + '_ {
        self.walls.iter().copied()
    }

    /// Counts cells that are neither walls nor matched by `occupied`.
    #[must_use]
    pub fn free_cell_count(&self, occupied: impl Fn(Cell) -> bool) -> usize {
        self.cells()
            .filter(|cell| !self.is_wall(*cell) && !occupied(*cell))
            .count()
    }
}

fn check_dimensions(cols: i32, rows: i32) -> Result<(), GridError> {
    if cols < MIN_GRID_SIDE || rows < MIN_GRID_SIDE {
        return Err(GridError::TooSmall {
            cols,
            rows,
            min: MIN_GRID_SIDE,
        });
    }
    if cols > MAX_GRID_SIDE || rows > MAX_GRID_SIDE {
        return Err(GridError::TooLarge {
            cols,
            rows,
            max: MAX_GRID_SIDE,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{Cell, Grid};
    use crate::error::GridError;

    #[test]
    fn bordered_grid_walls_the_outer_ring_only() {
        let grid = Grid::bordered(10, 10).expect("10x10 grid is valid");

        assert!(grid.is_wall(Cell::new(0, 0)));
        assert!(grid.is_wall(Cell::new(9, 4)));
        assert!(grid.is_wall(Cell::new(4, 9)));
        assert!(!grid.is_wall(Cell::new(1, 1)));
        assert!(!grid.is_wall(Cell::new(8, 8)));
        assert_eq!(grid.walls().count(), 36);
    }

    #[test]
    fn bounds_queries_are_total() {
        let grid = Grid::bordered(10, 8).expect("10x8 grid is valid");

        assert!(grid.in_bounds(Cell::new(9, 7)));
        assert!(!grid.in_bounds(Cell::new(10, 7)));
        assert!(!grid.in_bounds(Cell::new(-1, 3)));
        assert!(!grid.is_wall(Cell::new(-50, 1000)));
        assert!(grid.blocks(Cell::new(-50, 1000)));
        assert_eq!(grid.dimensions(), (10, 8));
    }

    #[test]
    fn custom_walls_outside_bounds_are_dropped() {
        let grid = Grid::with_walls(5, 5, [Cell::new(2, 2), Cell::new(7, 7)])
            .expect("5x5 grid is valid");

        assert!(grid.is_wall(Cell::new(2, 2)));
        assert_eq!(grid.walls().count(), 1);
    }

    #[test]
    fn tiny_grid_is_rejected() {
        assert_eq!(
            Grid::bordered(2, 10).unwrap_err(),
            GridError::TooSmall {
                cols: 2,
                rows: 10,
                min: 4
            }
        );
    }

    #[test]
    fn huge_grid_is_rejected_before_building_walls() {
        assert_eq!(
            Grid::bordered(2_000_000_000, 10).unwrap_err(),
            GridError::TooLarge {
                cols: 2_000_000_000,
                rows: 10,
                max: 1024
            }
        );
        assert!(Grid::open(1024, 1024).is_ok());
    }

    #[test]
    fn free_cell_count_excludes_walls_and_occupied() {
        let grid = Grid::bordered(5, 5).expect("5x5 grid is valid");
        let occupied = Cell::new(2, 2);

        assert_eq!(grid.free_cell_count(|_| false), 9);
        assert_eq!(grid.free_cell_count(|cell| cell == occupied), 8);
    }
}

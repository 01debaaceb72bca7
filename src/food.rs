use log::debug;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::grid::{Cell, Grid};
use crate::snake::Snake;

/// Random draws tried before falling back to enumerating free cells.
pub const MAX_REJECTION_SAMPLES: usize = 64;

/// Chooses food cells that are neither walls nor snake.
#[derive(Debug, Clone)]
pub struct FoodPlacer {
    rng: StdRng,
}

impl FoodPlacer {
    /// Creates a placer seeded from OS entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Creates a deterministic placer for tests and reproducible runs.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Picks a free cell.
    ///
    /// # Panics
    ///
    /// Panics when the board has no free cell left.
    #[must_use]
    pub fn place(&mut self, grid: &Grid, snake: &Snake) -> Cell {
        let (cols, rows) = grid.dimensions();
        self.try_place(grid, snake).unwrap_or_else(|| {
            panic!("FoodPlacer::place: no free cells on the board ({cols}×{rows})")
        })
    }

    /// Picks a free cell, or `None` when walls and snake cover the board.
    pub fn try_place(&mut self, grid: &Grid, snake: &Snake) -> Option<Cell> {
        let (cols, rows) = grid.dimensions();
        let is_free = |cell: Cell| !grid.is_wall(cell) && !snake.occupies(cell);

        for _ in 0..MAX_REJECTION_SAMPLES {
            let cell = Cell::new(self.rng.gen_range(0..cols), self.rng.gen_range(0..rows));
            if is_free(cell) {
                return Some(cell);
            }
        }

        debug!("food sampling fell back to free-cell scan (snake length {})", snake.len());
        let candidates: Vec<Cell> = grid.cells().filter(|cell| is_free(*cell)).collect();
        if candidates.is_empty() {
            return None;
        }

        let index = self.rng.gen_range(0..candidates.len());
        Some(candidates[index])
    }
}

#[cfg(test)]
mod tests {
    use crate::grid::{Cell, Grid};
    use crate::input::Direction;
    use crate::snake::Snake;

    use super::FoodPlacer;

    #[test]
    fn food_never_lands_on_walls_or_snake() {
        let grid = Grid::bordered(8, 6).expect("8x6 grid is valid");
        let snake = Snake::from_segments(
            vec![Cell::new(3, 2), Cell::new(2, 2), Cell::new(1, 2)],
            Direction::Right,
        );
        let mut placer = FoodPlacer::with_seed(7);

        for _ in 0..200 {
            let food = placer.place(&grid, &snake);
            assert!(grid.in_bounds(food));
            assert!(!grid.is_wall(food));
            assert!(!snake.occupies(food));
        }
    }

    #[test]
    fn crowded_board_still_finds_the_last_free_cell() {
        // 5x5 bordered leaves a 3x3 interior; the snake covers all but (3,3).
        let grid = Grid::bordered(5, 5).expect("5x5 grid is valid");
        let snake = Snake::from_segments(
            vec![
                Cell::new(1, 1),
                Cell::new(2, 1),
                Cell::new(3, 1),
                Cell::new(3, 2),
                Cell::new(2, 2),
                Cell::new(1, 2),
                Cell::new(1, 3),
                Cell::new(2, 3),
            ],
            Direction::Left,
        );
        let mut placer = FoodPlacer::with_seed(11);

        for _ in 0..20 {
            assert_eq!(placer.place(&grid, &snake), Cell::new(3, 3));
        }
    }

    #[test]
    fn full_board_yields_none() {
        let grid = Grid::bordered(4, 4).expect("4x4 grid is valid");
        let snake = Snake::from_segments(
            vec![
                Cell::new(1, 1),
                Cell::new(2, 1),
                Cell::new(2, 2),
                Cell::new(1, 2),
            ],
            Direction::Left,
        );

        assert_eq!(FoodPlacer::with_seed(1).try_place(&grid, &snake), None);
    }

    #[test]
    #[should_panic(expected = "no free cells")]
    fn place_asserts_on_full_board() {
        let grid = Grid::bordered(4, 4).expect("4x4 grid is valid");
        let snake = Snake::from_segments(
            vec![
                Cell::new(1, 1),
                Cell::new(2, 1),
                Cell::new(2, 2),
                Cell::new(1, 2),
            ],
            Direction::Left,
        );

        let _ = FoodPlacer::with_seed(1).place(&grid, &snake);
    }

    #[test]
    fn same_seed_places_same_food() {
        let grid = Grid::bordered(20, 20).expect("20x20 grid is valid");
        let snake = Snake::new(grid.center(), Direction::Right);

        let first = FoodPlacer::with_seed(99).place(&grid, &snake);
        let second = FoodPlacer::with_seed(99).place(&grid, &snake);

        assert_eq!(first, second);
    }
}

use log::debug;

use crate::food::FoodPlacer;
use crate::grid::{Cell, Grid};
use crate::input::Direction;
use crate::score::ScoreTrack;
use crate::snake::Snake;

/// Why a session was lost.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum DeathReason {
    Wall,
    SelfCollision,
}

/// Result of one simulation tick.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum TickOutcome {
    Continuing,
    Lost(DeathReason),
    /// The snake filled every free cell.
    Cleared,
}

impl TickOutcome {
    #[must_use]
    pub fn is_terminal(self) -> bool {
        !matches!(self, Self::Continuing)
    }
}

/// One play-through: board, snake, food and the RNG that places it.
#[derive(Debug, Clone)]
pub struct GameSession {
    grid: Grid,
    snake: Snake,
    food: Cell,
    placer: FoodPlacer,
    tick_count: u64,
    finished: Option<TickOutcome>,
}

impl GameSession {
    /// Starts a session with a one-cell snake at the grid center heading right.
    ///
    /// # Panics
    ///
    /// Panics when the grid has no free cell for the first food.
    #[must_use]
    pub fn new(grid: Grid, mut placer: FoodPlacer) -> Self {
        let snake = Snake::new(grid.center(), Direction::Right);
        let food = placer.place(&grid, &snake);
        debug!(
            "session started on {:?} grid, snake at {:?}, food at {:?}",
            grid.dimensions(),
            snake.head(),
            food
        );

        Self::from_parts(grid, snake, food, placer)
    }

    /// Builds a session from explicit state, for scenarios and tests.
    #[must_use]
    pub fn from_parts(grid: Grid, snake: Snake, food: Cell, placer: FoodPlacer) -> Self {
        Self {
            grid,
            snake,
            food,
            placer,
            tick_count: 0,
            finished: None,
        }
    }

    /// Forwards a turn request to the snake; ignored once the session is over.
    pub fn turn(&mut self, direction: Direction) {
        if self.is_active() {
            self.snake.turn(direction);
        }
    }

    /// Advances the simulation by one tick.
    ///
    /// Walls and bounds are checked against the projected head before the
    /// snake moves; self-collision is checked on the moved body. On a
    /// terminal outcome `score.finish()` runs once and later ticks return the
    /// same outcome without touching any state.
    pub fn tick(&mut self, score: &mut ScoreTrack) -> TickOutcome {
        if let Some(outcome) = self.finished {
            return outcome;
        }

        self.tick_count += 1;
        let heading = self.snake.heading();
        let next_head = self.snake.projected_head(heading);

        if self.grid.blocks(next_head) {
            return self.finish(TickOutcome::Lost(DeathReason::Wall), score);
        }

        let ate = next_head == self.food;
        let mut board_full = false;
        if ate {
            self.snake.extend(heading);
            score.increment();
            match self.placer.try_place(&self.grid, &self.snake) {
                Some(food) => self.food = food,
                None => board_full = true,
            }
        } else {
            self.snake.advance(heading);
        }

        if self.snake.self_collides() {
            return self.finish(TickOutcome::Lost(DeathReason::SelfCollision), score);
        }
        if board_full {
            return self.finish(TickOutcome::Cleared, score);
        }

        TickOutcome::Continuing
    }

    fn finish(&mut self, outcome: TickOutcome, score: &mut ScoreTrack) -> TickOutcome {
        debug!("session ended after {} ticks: {outcome:?}", self.tick_count);
        score.finish();
        self.finished = Some(outcome);
        outcome
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.finished.is_none()
    }

    /// Terminal outcome, once the session has ended.
    #[must_use]
    pub fn outcome(&self) -> Option<TickOutcome> {
        self.finished
    }

    #[must_use]
    pub fn death_reason(&self) -> Option<DeathReason> {
        match self.finished {
            Some(TickOutcome::Lost(reason)) => Some(reason),
            _ => None,
        }
    }

    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[must_use]
    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    #[must_use]
    pub fn food(&self) -> Cell {
        self.food
    }

    #[must_use]
    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }
}

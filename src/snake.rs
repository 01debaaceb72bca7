use std::collections::VecDeque;

use crate::grid::Cell;
use crate::input::{Direction, direction_change_is_valid};

/// Snake body (head first) and heading.
#[derive(Debug, Clone)]
pub struct Snake {
    body: VecDeque<Cell>,
    heading: Direction,
}

impl Snake {
    /// Creates a one-cell snake at `start` with the provided heading.
    #[must_use]
    pub fn new(start: Cell, heading: Direction) -> Self {
        let mut body = VecDeque::new();
        body.push_front(start);

        Self { body, heading }
    }

    /// Creates a snake from explicit body segments (front is head).
    ///
    /// # Panics
    ///
    /// Panics when `segments` is empty.
    #[must_use]
    pub fn from_segments(segments: Vec<Cell>, heading: Direction) -> Self {
        assert!(!segments.is_empty(), "snake needs at least one segment");

        Self {
            body: VecDeque::from(segments),
            heading,
        }
    }

    /// Changes heading unless `direction` reverses the current one.
    pub fn turn(&mut self, direction: Direction) {
        if direction_change_is_valid(self.heading, direction) {
            self.heading = direction;
        }
    }

    /// Returns the cell the head would enter moving in `direction`.
    #[must_use]
    pub fn projected_head(&self, direction: Direction) -> Cell {
        self.head().step(direction)
    }

    /// Moves one cell in `direction`, keeping the length.
    pub fn advance(&mut self, direction: Direction) {
        self.extend(direction);
        let _ = self.body.pop_back();
    }

    /// Moves one cell in `direction`, leaving the tail in place.
    pub fn extend(&mut self, direction: Direction) {
        let next_head = self.projected_head(direction);
        self.body.push_front(next_head);
        self.heading = direction;
    }

    /// Returns true if the head overlaps any non-head segment.
    #[must_use]
    pub fn self_collides(&self) -> bool {
        let head = self.head();
        self.body.iter().skip(1).any(|segment| *segment == head)
    }

    /// Returns the current head cell.
    #[must_use]
    pub fn head(&self) -> Cell {
        // The body is created non-empty and only `advance` pops, right after a push.
        self.body[0]
    }

    /// Returns true if any segment occupies `cell`.
    #[must_use]
    pub fn occupies(&self, cell: Cell) -> bool {
        self.body.contains(&cell)
    }

    /// Returns current segment count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Always false; kept for the `len` convention.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    #[must_use]
    pub fn heading(&self) -> Direction {
        self.heading
    }

    /// Iterates over body segments from head to tail.
    pub fn segments(&self) -> impl Iterator<Item = Cell> + '_ {
        self.body.iter().copied()
    }
}

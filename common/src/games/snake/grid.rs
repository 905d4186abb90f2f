use std::collections::HashSet;

use crate::games::SessionRng;
use super::error::SnakeError;
use super::types::{Direction, Point};

const MAX_SAMPLING_ATTEMPTS: usize = 100;

/// Toroidal board measured in pixels and divided into square cells.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    pub board_width: i32,
    pub board_height: i32,
    pub cell_size: i32,
}

impl Grid {
    pub fn new(board_width: i32, board_height: i32, cell_size: i32) -> Self {
        Self {
            board_width,
            board_height,
            cell_size,
        }
    }

    pub fn width_cells(&self) -> i32 {
        self.board_width / self.cell_size
    }

    pub fn height_cells(&self) -> i32 {
        self.board_height / self.cell_size
    }

    pub fn cell_count(&self) -> usize {
        (self.width_cells().max(0) as usize) * (self.height_cells().max(0) as usize)
    }

    /// Adds `delta` pixels to `coord` on an axis `extent` pixels long.
    /// Falling off the low edge lands on the last cell, falling off the high
    /// edge lands on 0.
    pub fn wrap(&self, coord: i32, delta: i32, extent: i32) -> i32 {
        let moved = coord + delta;
        if moved < 0 {
            extent - self.cell_size
        } else if moved >= extent {
            0
        } else {
            moved
        }
    }

    pub fn step(&self, from: Point, direction: Direction) -> Point {
        let (dx, dy) = direction.delta();
        Point::new(
            self.wrap(from.x, dx * self.cell_size, self.board_width),
            self.wrap(from.y, dy * self.cell_size, self.board_height),
        )
    }

    pub fn contains(&self, point: Point) -> bool {
        point.x >= 0
            && point.y >= 0
            && point.x < self.width_cells() * self.cell_size
            && point.y < self.height_cells() * self.cell_size
            && point.x % self.cell_size == 0
            && point.y % self.cell_size == 0
    }

    pub fn cell_at(&self, column: i32, row: i32) -> Point {
        Point::new(column * self.cell_size, row * self.cell_size)
    }

    /// Every cell, row by row.
    pub fn cells(&self) -> impl Iterator<Item = Point> + '_ {
        (0..self.height_cells())
            .flat_map(move |row| (0..self.width_cells()).map(move |column| self.cell_at(column, row)))
    }

    pub fn random_cell(&self, rng: &mut SessionRng) -> Point {
        self.cell_at(
            rng.random_range(0..self.width_cells()),
            rng.random_range(0..self.height_cells()),
        )
    }

    /// Uniformly random cell outside `exclude`.
    ///
    /// Rejection sampling is tried a bounded number of times; after that the
    /// free cells are enumerated, which also detects a full board.
    pub fn random_free_cell(
        &self,
        rng: &mut SessionRng,
        exclude: &HashSet<Point>,
    ) -> Result<Point, SnakeError> {
        if self.cell_count() == 0 {
            return Err(SnakeError::NoFreeCell { excluded: exclude.len() });
        }

        for _ in 0..MAX_SAMPLING_ATTEMPTS {
            let candidate = self.random_cell(rng);
            if !exclude.contains(&candidate) {
                return Ok(candidate);
            }
        }

        let free: Vec<Point> = self.cells().filter(|cell| !exclude.contains(cell)).collect();
        rng.pick(&free)
            .copied()
            .ok_or(SnakeError::NoFreeCell { excluded: exclude.len() })
    }
}

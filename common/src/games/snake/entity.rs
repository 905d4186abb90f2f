use std::collections::HashSet;

use crate::games::SessionRng;
use super::error::SnakeError;
use super::grid::Grid;
use super::types::{Color, EntityKind, Point};

/// A single-cell board object: the apple or an obstacle block.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Entity {
    pub kind: EntityKind,
    pub position: Point,
    pub color: Color,
}

impl Entity {
    pub fn new(kind: EntityKind, position: Point, color: Color) -> Self {
        Self {
            kind,
            position,
            color,
        }
    }

    /// An apple anywhere on the board. It may land under the snake.
    pub fn apple(grid: &Grid, rng: &mut SessionRng, color: Color) -> Result<Self, SnakeError> {
        let mut apple = Self::new(EntityKind::Apple, Point::new(0, 0), color);
        apple.randomize_position(grid, rng, &HashSet::new())?;
        Ok(apple)
    }

    pub fn randomize_position(
        &mut self,
        grid: &Grid,
        rng: &mut SessionRng,
        exclude: &HashSet<Point>,
    ) -> Result<(), SnakeError> {
        self.position = grid.random_free_cell(rng, exclude)?;
        Ok(())
    }
}

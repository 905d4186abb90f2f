use std::collections::VecDeque;

use crate::games::SessionRng;
use super::grid::Grid;
use super::types::{Color, Direction, Point};

#[derive(Clone, Debug)]
pub struct Snake {
    body: VecDeque<Point>,
    length: usize,
    direction: Direction,
    next_direction: Option<Direction>,
    color: Color,
}

impl Snake {
    pub const START_DIRECTION: Direction = Direction::Right;

    pub fn new(start_pos: Point, color: Color) -> Self {
        Self {
            body: VecDeque::from([start_pos]),
            length: 1,
            direction: Self::START_DIRECTION,
            next_direction: None,
            color,
        }
    }

    pub fn head(&self) -> Point {
        // The body is never empty: it is created with one cell and `advance`
        // pushes before it pops.
        self.body[0]
    }

    pub fn body(&self) -> &VecDeque<Point> {
        &self.body
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Target body size. The body catches up to it one `advance` at a time.
    pub fn length(&self) -> usize {
        self.length
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    #[cfg(test)]
    pub(crate) fn next_direction(&self) -> Option<Direction> {
        self.next_direction
    }

    pub fn color(&self) -> Color {
        self.color
    }

    /// Buffers a turn for the next tick. Reversing onto the neck is ignored;
    /// a later valid call before the tick replaces an earlier one.
    pub fn set_next_direction(&mut self, direction: Direction) {
        if !direction.is_opposite(&self.direction) {
            self.next_direction = Some(direction);
        }
    }

    pub fn update_direction(&mut self) {
        if let Some(next) = self.next_direction.take()
            && !next.is_opposite(&self.direction)
        {
            self.direction = next;
        }
    }

    pub fn advance(&mut self, grid: &Grid) {
        let new_head = grid.step(self.head(), self.direction);
        debug_assert!(grid.contains(new_head), "head left the board: {:?}", new_head);
        self.body.push_front(new_head);
        while self.body.len() > self.length {
            self.body.pop_back();
        }
    }

    pub fn grow(&mut self) {
        self.length += 1;
    }

    pub fn is_self_collided(&self) -> bool {
        let head = self.head();
        self.body.iter().skip(1).any(|segment| *segment == head)
    }

    /// Back to a single cell at a random spot, moving right. The spot is not
    /// checked against blocks or the apple.
    pub fn reset(&mut self, grid: &Grid, rng: &mut SessionRng) {
        let start = grid.random_cell(rng);
        self.body.clear();
        self.body.push_back(start);
        self.length = 1;
        self.direction = Self::START_DIRECTION;
        self.next_direction = None;
    }

    #[cfg(test)]
    pub(crate) fn with_body(body: Vec<Point>, direction: Direction) -> Self {
        assert!(!body.is_empty());
        Self {
            length: body.len(),
            body: body.into(),
            direction,
            next_direction: None,
            color: Color::rgb(0, 255, 0),
        }
    }
}

use std::collections::HashSet;

use crate::games::SessionRng;
use super::entity::Entity;
use super::error::SnakeError;
use super::grid::Grid;
use super::types::{Color, EntityKind, Point};

/// Places `count` blocks on distinct cells that avoid the snake body and the
/// apple.
pub fn generate_blocks<'a>(
    count: usize,
    snake_body: impl IntoIterator<Item = &'a Point>,
    apple: Point,
    grid: &Grid,
    rng: &mut SessionRng,
    color: Color,
) -> Result<Vec<Entity>, SnakeError> {
    let mut exclude: HashSet<Point> = snake_body.into_iter().copied().collect();
    exclude.insert(apple);

    let mut blocks = Vec::with_capacity(count);
    for _ in 0..count {
        let position = grid.random_free_cell(rng, &exclude)?;
        exclude.insert(position);
        blocks.push(Entity::new(EntityKind::Block, position, color));
    }
    Ok(blocks)
}

use std::collections::HashSet;

use crate::config::Validate;
use crate::games::SessionRng;
use crate::{log, trace};
use super::entity::Entity;
use super::error::SnakeError;
use super::grid::Grid;
use super::obstacles::generate_blocks;
use super::settings::SnakeSettings;
use super::snake::Snake;
use super::types::{Color, DrawRect, ExitReason, GameInput, Point, TickEvents, TickOutcome};

/// Everything a running game owns: board, snake, apple and the current blocks.
#[derive(Clone, Debug)]
pub struct SnakeGameState {
    pub grid: Grid,
    pub snake: Snake,
    pub apple: Entity,
    pub blocks: Vec<Entity>,
    block_color: Color,
    min_blocks: usize,
    max_blocks: usize,
}

impl SnakeGameState {
    pub fn new(settings: &SnakeSettings, rng: &mut SessionRng) -> Result<Self, SnakeError> {
        settings.validate().map_err(SnakeError::InvalidSettings)?;

        let grid = settings.grid();
        let snake = Snake::new(Point::new(0, 0), settings.snake_color);
        let apple = Entity::apple(&grid, rng, settings.apple_color)?;

        let mut state = Self {
            grid,
            snake,
            apple,
            blocks: Vec::new(),
            block_color: settings.block_color,
            min_blocks: settings.min_blocks,
            max_blocks: settings.max_blocks,
        };
        state.regenerate_blocks(rng)?;
        Ok(state)
    }

    /// Returns the exit reason when the input ends the run.
    pub fn apply_input(&mut self, input: GameInput) -> Option<ExitReason> {
        match input {
            GameInput::Turn(direction) => {
                self.snake.set_next_direction(direction);
                None
            }
            GameInput::Quit => Some(ExitReason::Quit),
        }
    }

    /// Advances the game by one step.
    ///
    /// The checks run in a fixed order: apple, then self-collision, then
    /// blocks. If the snake eats the apple and bites itself in the same tick,
    /// the block set produced by the reset is the one that stays.
    pub fn tick(&mut self, rng: &mut SessionRng) -> Result<TickOutcome, SnakeError> {
        self.snake.update_direction();
        self.snake.advance(&self.grid);

        let mut events = TickEvents::default();

        if self.snake.head() == self.apple.position {
            self.snake.grow();
            let body: HashSet<Point> = self.snake.body().iter().copied().collect();
            self.apple.randomize_position(&self.grid, rng, &body)?;
            log!(
                "Apple eaten, length is now {}. Next apple at ({}, {})",
                self.snake.length(),
                self.apple.position.x,
                self.apple.position.y
            );
            self.regenerate_blocks(rng)?;
            events.ate_apple = true;
        }

        if self.snake.is_self_collided() {
            self.snake.reset(&self.grid, rng);
            let head = self.snake.head();
            log!("Snake bit itself, restarting at ({}, {})", head.x, head.y);
            self.regenerate_blocks(rng)?;
            events.reset = true;
        }

        let head = self.snake.head();
        if self.blocks.iter().any(|block| block.position == head) {
            log!("Snake hit a block at ({}, {})", head.x, head.y);
            return Ok(TickOutcome::Finished(ExitReason::BlockCollision(head)));
        }

        Ok(TickOutcome::Running(events))
    }

    fn regenerate_blocks(&mut self, rng: &mut SessionRng) -> Result<(), SnakeError> {
        let count = rng.random_range(self.min_blocks..=self.max_blocks);
        self.blocks = generate_blocks(
            count,
            self.snake.body(),
            self.apple.position,
            &self.grid,
            rng,
            self.block_color,
        )?;
        trace!("Placed {} blocks", self.blocks.len());
        Ok(())
    }

    /// Rectangles to paint, back to front: background, apple, blocks, snake.
    /// The head is painted last so it stays on top.
    pub fn frame(&self, background: Color) -> Vec<DrawRect> {
        let cell = self.grid.cell_size;
        let tile = |position: Point, color: Color| DrawRect {
            position,
            width: cell,
            height: cell,
            color,
        };

        let mut rects = Vec::with_capacity(2 + self.blocks.len() + self.snake.len());
        rects.push(DrawRect {
            position: Point::new(0, 0),
            width: self.grid.board_width,
            height: self.grid.board_height,
            color: background,
        });
        rects.push(tile(self.apple.position, self.apple.color));
        rects.extend(self.blocks.iter().map(|block| tile(block.position, block.color)));
        rects.extend(
            self.snake
                .body()
                .iter()
                .skip(1)
                .map(|segment| tile(*segment, self.snake.color())),
        );
        rects.push(tile(self.snake.head(), self.snake.color()));
        rects
    }

    #[cfg(test)]
    fn with_parts(snake: Snake, apple: Point, blocks: &[Point]) -> Self {
        use super::types::EntityKind;

        let settings = SnakeSettings::default();
        Self {
            grid: settings.grid(),
            snake,
            apple: Entity::new(EntityKind::Apple, apple, settings.apple_color),
            blocks: blocks
                .iter()
                .map(|p| Entity::new(EntityKind::Block, *p, settings.block_color))
                .collect(),
            block_color: settings.block_color,
            min_blocks: settings.min_blocks,
            max_blocks: settings.max_blocks,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::snake::Direction;

    fn block_positions(state: &SnakeGameState) -> HashSet<Point> {
        state.blocks.iter().map(|b| b.position).collect()
    }

    fn assert_blocks_clear(state: &SnakeGameState) {
        let blocks = block_positions(state);
        assert_eq!(blocks.len(), state.blocks.len());
        assert!((1..=5).contains(&blocks.len()));
        assert!(!blocks.contains(&state.apple.position));
        assert!(state.snake.body().iter().all(|cell| !blocks.contains(cell)));
    }

    #[test]
    fn test_new_game_layout() {
        let mut rng = SessionRng::new(42);
        let state = SnakeGameState::new(&SnakeSettings::default(), &mut rng).unwrap();
        assert_eq!(state.snake.head(), Point::new(0, 0));
        assert_eq!(state.snake.len(), 1);
        assert_eq!(state.snake.direction(), Direction::Right);
        assert!(state.grid.contains(state.apple.position));
        assert_blocks_clear(&state);
    }

    #[test]
    fn test_new_game_rejects_invalid_settings() {
        let mut rng = SessionRng::new(42);
        let settings = SnakeSettings {
            cell_size: 0,
            ..SnakeSettings::default()
        };
        assert!(matches!(
            SnakeGameState::new(&settings, &mut rng),
            Err(SnakeError::InvalidSettings(_))
        ));
    }

    #[test]
    fn test_three_ticks_without_input() {
        let mut rng = SessionRng::new(1);
        let snake = Snake::with_body(vec![Point::new(0, 0)], Direction::Right);
        let mut state = SnakeGameState::with_parts(snake, Point::new(300, 300), &[]);
        for _ in 0..3 {
            let outcome = state.tick(&mut rng).unwrap();
            assert_eq!(outcome, TickOutcome::Running(TickEvents::default()));
        }
        assert_eq!(state.snake.head(), Point::new(60, 0));
        assert_eq!(state.snake.body().iter().copied().collect::<Vec<_>>(), vec![Point::new(60, 0)]);
    }

    #[test]
    fn test_tick_wraps_right_edge() {
        let mut rng = SessionRng::new(1);
        let snake = Snake::with_body(vec![Point::new(620, 0)], Direction::Right);
        let mut state = SnakeGameState::with_parts(snake, Point::new(300, 300), &[]);
        state.tick(&mut rng).unwrap();
        assert_eq!(state.snake.head(), Point::new(0, 0));
    }

    #[test]
    fn test_eating_apple_grows_and_relocates() {
        let mut rng = SessionRng::new(5);
        let snake = Snake::with_body(vec![Point::new(100, 100), Point::new(80, 100)], Direction::Right);
        let mut state = SnakeGameState::with_parts(snake, Point::new(120, 100), &[Point::new(400, 400)]);

        let outcome = state.tick(&mut rng).unwrap();
        assert_eq!(
            outcome,
            TickOutcome::Running(TickEvents {
                ate_apple: true,
                reset: false
            })
        );
        assert_eq!(state.snake.length(), 3);
        assert!(state.snake.body().iter().all(|cell| *cell != state.apple.position));
        assert_blocks_clear(&state);

        state.tick(&mut rng).unwrap();
        assert_eq!(state.snake.len(), 3);
    }

    #[test]
    fn test_self_collision_resets_snake_and_blocks() {
        let mut rng = SessionRng::new(8);
        let snake = Snake::with_body(
            vec![
                Point::new(40, 40),
                Point::new(60, 40),
                Point::new(60, 20),
                Point::new(40, 20),
                Point::new(20, 20),
            ],
            Direction::Up,
        );
        let mut state = SnakeGameState::with_parts(snake, Point::new(300, 300), &[Point::new(400, 400)]);

        let outcome = state.tick(&mut rng).unwrap();
        assert_eq!(
            outcome,
            TickOutcome::Running(TickEvents {
                ate_apple: false,
                reset: true
            })
        );
        assert_eq!(state.snake.len(), 1);
        assert_eq!(state.snake.direction(), Direction::Right);
        assert_blocks_clear(&state);
    }

    #[test]
    fn test_apple_and_self_collision_in_same_tick() {
        let mut rng = SessionRng::new(13);
        let snake = Snake::with_body(
            vec![
                Point::new(40, 40),
                Point::new(60, 40),
                Point::new(60, 20),
                Point::new(40, 20),
                Point::new(20, 20),
            ],
            Direction::Up,
        );
        let mut state = SnakeGameState::with_parts(snake, Point::new(40, 20), &[]);

        let outcome = state.tick(&mut rng).unwrap();
        assert_eq!(
            outcome,
            TickOutcome::Running(TickEvents {
                ate_apple: true,
                reset: true
            })
        );
        assert_eq!(state.snake.length(), 1);
        assert_blocks_clear(&state);
    }

    #[test]
    fn test_block_collision_finishes_run() {
        let mut rng = SessionRng::new(1);
        let snake = Snake::with_body(vec![Point::new(0, 0)], Direction::Right);
        let mut state = SnakeGameState::with_parts(snake, Point::new(300, 300), &[Point::new(20, 0)]);
        assert_eq!(
            state.tick(&mut rng).unwrap(),
            TickOutcome::Finished(ExitReason::BlockCollision(Point::new(20, 0)))
        );
    }

    #[test]
    fn test_apply_input() {
        let snake = Snake::with_body(vec![Point::new(0, 0)], Direction::Right);
        let mut state = SnakeGameState::with_parts(snake, Point::new(300, 300), &[]);

        assert_eq!(state.apply_input(GameInput::Turn(Direction::Left)), None);
        assert_eq!(state.snake.next_direction(), None);
        assert_eq!(state.apply_input(GameInput::Turn(Direction::Down)), None);
        assert_eq!(state.snake.next_direction(), Some(Direction::Down));
        assert_eq!(state.apply_input(GameInput::Quit), Some(ExitReason::Quit));
    }

    #[test]
    fn test_turn_applies_on_next_tick() {
        let mut rng = SessionRng::new(1);
        let snake = Snake::with_body(vec![Point::new(100, 100)], Direction::Right);
        let mut state = SnakeGameState::with_parts(snake, Point::new(300, 300), &[]);
        state.apply_input(GameInput::Turn(Direction::Down));
        state.tick(&mut rng).unwrap();
        assert_eq!(state.snake.head(), Point::new(100, 120));
    }

    #[test]
    fn test_frame_order() {
        let snake = Snake::with_body(vec![Point::new(40, 0), Point::new(20, 0)], Direction::Right);
        let state = SnakeGameState::with_parts(snake, Point::new(300, 300), &[Point::new(400, 400)]);
        let background = Color::rgb(0, 0, 0);
        let rects = state.frame(background);

        assert_eq!(rects.len(), 5);
        assert_eq!(rects[0].position, Point::new(0, 0));
        assert_eq!((rects[0].width, rects[0].height), (640, 480));
        assert_eq!(rects[0].color, background);
        assert_eq!(rects[1].position, Point::new(300, 300));
        assert_eq!(rects[1].color, Color::rgb(255, 0, 0));
        assert_eq!(rects[2].position, Point::new(400, 400));
        assert_eq!(rects[3].position, Point::new(20, 0));
        assert_eq!(rects[4].position, Point::new(40, 0));
        assert!(rects[1..].iter().all(|r| r.width == 20 && r.height == 20));
    }

    #[test]
    fn test_same_seed_replays_identically() {
        let settings = SnakeSettings::default();
        let mut rng_a = SessionRng::new(99);
        let mut rng_b = SessionRng::new(99);
        let mut a = SnakeGameState::new(&settings, &mut rng_a).unwrap();
        let mut b = SnakeGameState::new(&settings, &mut rng_b).unwrap();

        let turns = [Direction::Down, Direction::Left, Direction::Up, Direction::Right];
        for step in 0..40 {
            let turn = GameInput::Turn(turns[step % turns.len()]);
            a.apply_input(turn);
            b.apply_input(turn);
            let outcome_a = a.tick(&mut rng_a).unwrap();
            let outcome_b = b.tick(&mut rng_b).unwrap();
            assert_eq!(outcome_a, outcome_b);
            assert_eq!(a.snake.body(), b.snake.body());
            assert_eq!(a.apple, b.apple);
            assert_eq!(a.blocks, b.blocks);
            if matches!(outcome_a, TickOutcome::Finished(_)) {
                break;
            }
        }
    }
}

mod entity;
mod error;
mod game_state;
mod grid;
mod obstacles;
mod settings;
mod snake;
mod types;

pub use entity::Entity;
pub use error::SnakeError;
pub use game_state::SnakeGameState;
pub use grid::Grid;
pub use obstacles::generate_blocks;
pub use settings::SnakeSettings;
pub use snake::Snake;
pub use types::{
    Color, Direction, DrawRect, EntityKind, ExitReason, GameInput, Point, TickEvents, TickOutcome,
};

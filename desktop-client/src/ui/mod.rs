mod snake_app;

pub use snake_app::{RunResult, SnakeApp};

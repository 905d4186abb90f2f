use common::games::snake::{Direction, GameInput};
use egui::{Context, Event, Key};

pub fn map_key(key: Key) -> Option<GameInput> {
    match key {
        Key::ArrowUp | Key::W => Some(GameInput::Turn(Direction::Up)),
        Key::ArrowDown | Key::S => Some(GameInput::Turn(Direction::Down)),
        Key::ArrowLeft | Key::A => Some(GameInput::Turn(Direction::Left)),
        Key::ArrowRight | Key::D => Some(GameInput::Turn(Direction::Right)),
        Key::Escape => Some(GameInput::Quit),
        _ => None,
    }
}

/// Game inputs from this frame's key presses, in the order they happened.
pub fn collect_inputs(ctx: &Context) -> Vec<GameInput> {
    ctx.input(|i| {
        let mut inputs: Vec<GameInput> = i
            .events
            .iter()
            .filter_map(|event| match event {
                Event::Key {
                    key,
                    pressed: true,
                    repeat: false,
                    ..
                } => map_key(*key),
                _ => None,
            })
            .collect();
        if i.viewport().close_requested() {
            inputs.push(GameInput::Quit);
        }
        inputs
    })
}

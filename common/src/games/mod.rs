mod session_rng;
mod tick_timer;

pub mod snake;

pub use session_rng::SessionRng;
pub use tick_timer::TickTimer;

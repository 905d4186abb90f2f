mod main_config;
mod window_config;

pub use main_config::{get_config_manager, Config};
pub use window_config::WindowConfig;

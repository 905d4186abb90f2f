use common::config::Validate;
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct WindowConfig {
    pub title: String,
}

impl Validate for WindowConfig {
    fn validate(&self) -> Result<(), String> {
        if self.title.trim().is_empty() {
            return Err("window title must not be empty".to_string());
        }
        Ok(())
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Snake".to_string(),
        }
    }
}

use serde::{Deserialize, Serialize};

use crate::config::Validate;
use super::grid::Grid;
use super::types::Color;

/// Startup parameters of a game run. They are read once and never change
/// while the game is running.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SnakeSettings {
    pub board_width: i32,
    pub board_height: i32,
    pub cell_size: i32,
    pub ticks_per_second: u32,
    pub min_blocks: usize,
    pub max_blocks: usize,
    pub background_color: Color,
    pub apple_color: Color,
    pub snake_color: Color,
    pub block_color: Color,
}

impl SnakeSettings {
    pub fn grid(&self) -> Grid {
        Grid::new(self.board_width, self.board_height, self.cell_size)
    }
}

impl Default for SnakeSettings {
    fn default() -> Self {
        Self {
            board_width: 640,
            board_height: 480,
            cell_size: 20,
            ticks_per_second: 10,
            min_blocks: 1,
            max_blocks: 5,
            background_color: Color::rgb(0, 0, 0),
            apple_color: Color::rgb(255, 0, 0),
            snake_color: Color::rgb(0, 255, 0),
            block_color: Color::rgb(100, 100, 100),
        }
    }
}

impl Validate for SnakeSettings {
    fn validate(&self) -> Result<(), String> {
        if self.cell_size < 4 || self.cell_size > 200 {
            return Err("cell_size must be between 4 and 200".to_string());
        }
        if self.board_width <= 0 || self.board_height <= 0 {
            return Err("board dimensions must be positive".to_string());
        }
        if self.board_width % self.cell_size != 0 || self.board_height % self.cell_size != 0 {
            return Err("board dimensions must be multiples of cell_size".to_string());
        }
        let grid = self.grid();
        if grid.width_cells() < 2 || grid.height_cells() < 2 {
            return Err("board must be at least 2x2 cells".to_string());
        }
        if self.ticks_per_second < 1 || self.ticks_per_second > 60 {
            return Err("ticks_per_second must be between 1 and 60".to_string());
        }
        if self.min_blocks > self.max_blocks {
            return Err("min_blocks must not exceed max_blocks".to_string());
        }
        // One cell for the snake head and one for the apple.
        if self.max_blocks + 2 > grid.cell_count() {
            return Err("max_blocks leaves no room for the snake and the apple".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings_are_valid() {
        assert!(SnakeSettings::default().validate().is_ok());
        assert_eq!(SnakeSettings::default().grid().cell_count(), 32 * 24);
    }

    #[test]
    fn test_unaligned_board_is_rejected() {
        let settings = SnakeSettings {
            board_width: 650,
            ..SnakeSettings::default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_block_range_is_checked() {
        let inverted = SnakeSettings {
            min_blocks: 4,
            max_blocks: 2,
            ..SnakeSettings::default()
        };
        assert!(inverted.validate().is_err());

        let crowded = SnakeSettings {
            board_width: 40,
            board_height: 40,
            min_blocks: 1,
            max_blocks: 3,
            ..SnakeSettings::default()
        };
        assert!(crowded.validate().is_err());

        let tight = SnakeSettings {
            max_blocks: 2,
            ..crowded
        };
        assert!(tight.validate().is_ok());
    }

    #[test]
    fn test_tick_rate_bounds() {
        let stopped = SnakeSettings {
            ticks_per_second: 0,
            ..SnakeSettings::default()
        };
        assert!(stopped.validate().is_err());
        let frantic = SnakeSettings {
            ticks_per_second: 61,
            ..SnakeSettings::default()
        };
        assert!(frantic.validate().is_err());
    }
}

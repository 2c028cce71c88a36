//! Game configuration resource.
//!
//! Manages game settings loaded from an INI configuration file. Provides
//! defaults for safe startup and a loader that keeps defaults for any
//! missing value.
//!
//! # Configuration File Format
//!
//! ```ini
//! [grid]
//! width = 32
//! height = 24
//!
//! [game]
//! speed = 0.25
//! target_fps = 30
//! ```

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::info;
use std::path::PathBuf;

/// Default safe values for startup
const DEFAULT_GRID_WIDTH: u32 = 32;
const DEFAULT_GRID_HEIGHT: u32 = 24;
const DEFAULT_SPEED: f32 = 0.25;
const DEFAULT_TARGET_FPS: u32 = 30;
const DEFAULT_CONFIG_PATH: &str = "./config.ini";

/// Game configuration resource.
///
/// Stores the arena dimensions, starting snake speed, and frame pacing.
#[derive(Resource, Debug, Clone)]
pub struct GameConfig {
    /// Arena width in grid cells, border included.
    pub grid_width: u32,
    /// Arena height in grid cells, border included.
    pub grid_height: u32,
    /// Starting snake speed in cells per tick.
    pub speed: f32,
    /// Target ticks per second for the main loop.
    pub target_fps: u32,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl GameConfig {
    /// Create a new configuration with safe default values.
    pub fn new() -> Self {
        Self {
            grid_width: DEFAULT_GRID_WIDTH,
            grid_height: DEFAULT_GRID_HEIGHT,
            speed: DEFAULT_SPEED,
            target_fps: DEFAULT_TARGET_FPS,
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a new configuration with a custom config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Load configuration from the INI file.
    ///
    /// Missing values retain their current (default) values.
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| format!("Failed to load config file: {}", e))?;

        // [grid] section
        if let Some(width) = config.getuint("grid", "width").ok().flatten() {
            self.grid_width = width as u32;
        }
        if let Some(height) = config.getuint("grid", "height").ok().flatten() {
            self.grid_height = height as u32;
        }

        // [game] section
        if let Some(speed) = config.getfloat("game", "speed").ok().flatten() {
            self.speed = speed as f32;
        }
        if let Some(fps) = config.getuint("game", "target_fps").ok().flatten() {
            self.target_fps = fps as u32;
        }

        info!(
            "Loaded config: {}x{} grid, speed={}, fps={}",
            self.grid_width, self.grid_height, self.speed, self.target_fps
        );

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_safe() {
        let config = GameConfig::new();
        assert_eq!(config.grid_width, DEFAULT_GRID_WIDTH);
        assert_eq!(config.grid_height, DEFAULT_GRID_HEIGHT);
        assert!(config.speed > 0.0);
        assert!(config.target_fps > 0);
    }

    #[test]
    fn load_from_missing_file_is_an_error() {
        let mut config = GameConfig::with_path("/nonexistent/config.ini");
        assert!(config.load_from_file().is_err());
        // Defaults survive a failed load.
        assert_eq!(config.grid_width, DEFAULT_GRID_WIDTH);
    }
}

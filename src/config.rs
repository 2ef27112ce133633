//! Game configuration
//!
//! Settings live in an optional JSON file. Every field has a default, so a
//! partial file only overrides what it names and a missing file means "use the
//! defaults". The file is looked up in the platform config directory
//! (`~/.config/snake/config.json` on Linux).

use crate::grid::Grid;
use crate::render::Palette;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// RGB triple as stored in the config file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl From<Rgb> for sdl2::pixels::Color {
    fn from(rgb: Rgb) -> Self {
        sdl2::pixels::Color::RGB(rgb.0, rgb.1, rgb.2)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub grid_width: u32,
    pub grid_height: u32,
    /// Edge length of one cell in pixels
    pub cell_size: u32,
    pub ticks_per_second: u32,
    pub window_title: String,
    pub background_color: Rgb,
    pub border_color: Rgb,
    pub snake_color: Rgb,
    pub food_color: Rgb,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            grid_width: 32,
            grid_height: 24,
            cell_size: 20,
            ticks_per_second: 20,
            window_title: "Snake".to_string(),
            background_color: Rgb(0, 0, 0),
            border_color: Rgb(93, 216, 228),
            snake_color: Rgb(0, 255, 0),
            food_color: Rgb(255, 0, 0),
        }
    }
}

/// Errors that can occur while loading the configuration
#[derive(Debug)]
pub enum ConfigError {
    IoError(std::io::Error),
    ParseError(serde_json::Error),
    /// A field is present but unusable
    InvalidValue { field: &'static str, reason: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::IoError(e) => write!(f, "IO error: {}", e),
            ConfigError::ParseError(e) => write!(f, "Invalid config JSON: {}", e),
            ConfigError::InvalidValue { field, reason } => {
                write!(f, "Invalid value for '{}': {}", field, reason)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(err: std::io::Error) -> Self {
        ConfigError::IoError(err)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::ParseError(err)
    }
}

impl GameConfig {
    /// Default location of the config file
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .map(|p| p.join("snake").join("config.json"))
            .unwrap_or_else(|| PathBuf::from("./config.json"))
    }

    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load the config file if there is one, otherwise fall back to defaults.
    ///
    /// A broken file is reported and ignored rather than aborting the game.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();

        if !path.exists() {
            log::info!("No config at {}, using defaults", path.display());
            return Self::default();
        }

        match Self::load_from_file(path) {
            Ok(config) => {
                log::info!("Loaded config from {}", path.display());
                config
            }
            Err(e) => {
                log::error!("Failed to load config {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("grid_width", self.grid_width),
            ("grid_height", self.grid_height),
            ("cell_size", self.cell_size),
            ("ticks_per_second", self.ticks_per_second),
        ];

        for (field, value) in positive {
            if value == 0 {
                return Err(ConfigError::InvalidValue {
                    field,
                    reason: "must be at least 1".to_string(),
                });
            }
        }

        // Pixel coordinates end up as i32 in SDL rects
        let extents = [
            ("grid_width", self.grid_width),
            ("grid_height", self.grid_height),
        ];

        for (field, cells) in extents {
            let fits = cells
                .checked_mul(self.cell_size)
                .is_some_and(|pixels| pixels <= i32::MAX as u32);
            if !fits {
                return Err(ConfigError::InvalidValue {
                    field,
                    reason: format!("{} cells of {} px do not fit in a window", cells, self.cell_size),
                });
            }
        }

        Ok(())
    }

    pub fn grid(&self) -> Grid {
        Grid::new(self.grid_width, self.grid_height)
    }

    pub fn window_size(&self) -> (u32, u32) {
        (
            self.grid_width.saturating_mul(self.cell_size),
            self.grid_height.saturating_mul(self.cell_size),
        )
    }

    pub fn tick_duration(&self) -> Duration {
        Duration::from_secs(1) / self.ticks_per_second.max(1)
    }

    pub fn palette(&self) -> Palette {
        Palette {
            background: self.background_color.into(),
            border: self.border_color.into(),
        }
    }
}

//! Level and balance settings
//!
//! Loaded from JSON; every field is optional and falls back to `consts`.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Settings loading/validation failures
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("failed to read settings: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse settings: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid setting `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Game settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Level ===
    pub level_width: f32,
    pub level_height: f32,

    // === Items ===
    /// Seconds between spawns
    pub spawn_cooldown: f32,
    /// Pixels per second
    pub fall_speed: f32,
    pub item_width: f32,
    pub item_height: f32,

    // === Player ===
    pub player_width: f32,
    pub player_height: f32,
    /// Top of the player box (the platform line)
    pub player_y: f32,
    /// Pixels per second
    pub player_speed: f32,
    pub starting_health: u8,
    pub healthy_points: u64,

    /// Frame-rate assumption for per-frame updates
    pub fps: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            level_width: LEVEL_WIDTH,
            level_height: LEVEL_HEIGHT,

            spawn_cooldown: SPAWN_COOLDOWN,
            fall_speed: FALL_SPEED,
            item_width: ITEM_WIDTH,
            item_height: ITEM_HEIGHT,

            player_width: PLAYER_WIDTH,
            player_height: PLAYER_HEIGHT,
            player_y: PLATFORM_Y,
            player_speed: PLAYER_SPEED,
            starting_health: STARTING_HEALTH,
            healthy_points: HEALTHY_POINTS,

            fps: FPS,
        }
    }
}

fn positive(field: &'static str, value: f32) -> Result<(), SettingsError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(SettingsError::Invalid {
            field,
            reason: format!("must be positive and finite, got {value}"),
        })
    }
}

impl Settings {
    /// Parse and validate JSON settings
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load and validate settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    pub fn to_json(&self) -> Result<String, SettingsError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        positive("level_width", self.level_width)?;
        positive("level_height", self.level_height)?;
        positive("spawn_cooldown", self.spawn_cooldown)?;
        positive("fall_speed", self.fall_speed)?;
        positive("item_width", self.item_width)?;
        positive("item_height", self.item_height)?;
        positive("player_width", self.player_width)?;
        positive("player_height", self.player_height)?;
        positive("player_speed", self.player_speed)?;
        positive("fps", self.fps)?;

        if self.item_width > self.level_width {
            return Err(SettingsError::Invalid {
                field: "item_width",
                reason: format!("wider than the level ({})", self.level_width),
            });
        }
        if self.player_width > self.level_width {
            return Err(SettingsError::Invalid {
                field: "player_width",
                reason: format!("wider than the level ({})", self.level_width),
            });
        }
        if !self.player_y.is_finite() {
            return Err(SettingsError::Invalid {
                field: "player_y",
                reason: "must be finite".to_string(),
            });
        }
        if self.starting_health == 0 {
            return Err(SettingsError::Invalid {
                field: "starting_health",
                reason: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }

    /// Seconds per frame
    pub fn frame_dt(&self) -> f32 {
        1.0 / self.fps
    }
}

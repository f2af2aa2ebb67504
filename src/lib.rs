//! Brick It - A 2D arcade catching game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (item spawning, collisions, player state)
//! - `settings`: Data-driven level and balance configuration
//!
//! Rendering, input polling and asset loading live outside this crate. The
//! simulation consumes a player collider and produces classified collision
//! events plus the live set of falling items for drawing.

pub mod settings;
pub mod sim;

pub use settings::{Settings, SettingsError};

/// Game configuration constants
pub mod consts {
    /// Assumed frame rate used to turn per-frame updates into `dt`
    pub const FPS: f32 = 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Level dimensions (y grows downward)
    pub const LEVEL_WIDTH: f32 = 1600.0;
    pub const LEVEL_HEIGHT: f32 = 600.0;

    /// Seconds between spawns
    pub const SPAWN_COOLDOWN: f32 = 1.0;
    /// Falling speed in pixels/s
    pub const FALL_SPEED: f32 = 100.0;
    /// Falling item box
    pub const ITEM_WIDTH: f32 = 32.0;
    pub const ITEM_HEIGHT: f32 = 32.0;

    /// Player box and platform line
    pub const PLAYER_WIDTH: f32 = 80.0;
    pub const PLAYER_HEIGHT: f32 = 80.0;
    pub const PLATFORM_Y: f32 = 450.0;
    /// Horizontal player speed in pixels/s
    pub const PLAYER_SPEED: f32 = 400.0;

    pub const STARTING_HEALTH: u8 = 3;
    /// Score awarded per healthy item caught
    pub const HEALTHY_POINTS: u64 = 10;
}

//! The player character
//!
//! The collider is re-synced from the player's transform every frame; the
//! collision engine only reads it.

use glam::Vec2;

use super::collider::AabbCollider;
use super::collision::Classification;
use crate::settings::Settings;

/// Player transform, collider and run stats
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    /// Top-left corner, world space
    pub pos: Vec2,
    pub collider: AabbCollider,
    pub score: u64,
    pub health: u8,
    /// Set after catching junk; the renderer distorts the background
    pub tripped: bool,
    speed: f32,
    min_x: f32,
    max_x: f32,
    healthy_points: u64,
}

impl Player {
    /// Player centered horizontally on the platform line
    pub fn new(settings: &Settings) -> Self {
        let size = Vec2::new(settings.player_width, settings.player_height);
        let collider = AabbCollider::new(Vec2::ZERO, size).unwrap_or_else(|err| {
            log::warn!("Invalid player size ({err}), using unit box");
            AabbCollider::default()
        });
        let max_x = (settings.level_width - settings.player_width).max(0.0);

        let mut player = Self {
            pos: Vec2::new(max_x / 2.0, settings.player_y),
            collider,
            score: 0,
            health: settings.starting_health,
            tripped: false,
            speed: settings.player_speed,
            min_x: 0.0,
            max_x,
            healthy_points: settings.healthy_points,
        };
        player.sync_collider();
        player
    }

    /// Copy the transform into the collider
    #[inline]
    pub fn sync_collider(&mut self) {
        self.collider.set_position(self.pos);
    }

    /// Teleport horizontally (clamped to the level)
    pub fn set_x(&mut self, x: f32) {
        self.pos.x = x.clamp(self.min_x, self.max_x);
        self.sync_collider();
    }

    /// Move horizontally. `direction` is clamped to [-1, 1].
    pub fn move_by(&mut self, direction: f32, dt: f32) {
        if !direction.is_finite() {
            return;
        }
        let dt = dt.max(0.0);
        let direction = direction.clamp(-1.0, 1.0);
        self.set_x(self.pos.x + direction * self.speed * dt);
    }

    /// Apply one collision outcome
    pub fn apply(&mut self, classification: Classification) {
        match classification {
            Classification::Healthy => {
                self.score += self.healthy_points;
            }
            Classification::Junk => {
                self.health = self.health.saturating_sub(1);
                self.tripped = true;
            }
            Classification::None => {}
        }
    }

    pub fn is_dead(&self) -> bool {
        self.health == 0
    }

    /// Horizontal center, used for steering
    pub fn center_x(&self) -> f32 {
        self.collider.center().x
    }
}

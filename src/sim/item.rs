//! Falling items

use glam::Vec2;

use super::collider::AabbCollider;

/// What an item does to the player when caught
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemCategory {
    /// Adds score
    Healthy,
    /// Costs health and trips the player
    Junk,
}

impl ItemCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemCategory::Healthy => "healthy",
            ItemCategory::Junk => "junk",
        }
    }
}

/// A falling entity.
///
/// Items live in the generator's sequence while falling. They leave it exactly
/// once: consumed by the player or expired off the bottom of the level.
#[derive(Debug, Clone, PartialEq)]
pub struct FallingItem {
    /// Stable id, assigned in spawn order
    pub id: u32,
    pub collider: AabbCollider,
    pub category: ItemCategory,
    /// Pixels per second, downward
    pub fall_speed: f32,
}

impl FallingItem {
    pub fn new(id: u32, collider: AabbCollider, category: ItemCategory, fall_speed: f32) -> Self {
        Self {
            id,
            collider,
            category,
            fall_speed,
        }
    }

    #[inline]
    pub fn position(&self) -> Vec2 {
        self.collider.position()
    }

    /// Move down by `fall_speed * dt`. Non-positive `dt` is no movement.
    pub fn advance(&mut self, dt: f32) {
        let dt = dt.max(0.0);
        let pos = self.collider.position();
        self.collider
            .set_position(Vec2::new(pos.x, pos.y + self.fall_speed * dt));
    }

    /// Inclusive bottom bound: an item exactly at `level_height` has left the level
    #[inline]
    pub fn is_below(&self, level_height: f32) -> bool {
        self.position().y >= level_height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item_at(y: f32) -> FallingItem {
        let collider = AabbCollider::new(Vec2::ZERO, Vec2::splat(32.0))
            .unwrap()
            .with_position(Vec2::new(50.0, y));
        FallingItem::new(1, collider, ItemCategory::Healthy, 100.0)
    }

    #[test]
    fn test_advance_moves_down_only() {
        let mut item = item_at(0.0);
        item.advance(0.5);
        assert_eq!(item.position(), Vec2::new(50.0, 50.0));
    }

    #[test]
    fn test_negative_or_nan_dt_does_not_move() {
        let mut item = item_at(10.0);
        item.advance(-1.0);
        item.advance(0.0);
        item.advance(f32::NAN);
        assert_eq!(item.position().y, 10.0);
    }

    #[test]
    fn test_is_below_is_inclusive() {
        assert!(!item_at(599.9).is_below(600.0));
        assert!(item_at(600.0).is_below(600.0));
        assert!(item_at(601.0).is_below(600.0));
    }
}

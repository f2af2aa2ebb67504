//! Collision detection and classification
//!
//! The manager never owns items. Each call borrows the generator, moves and
//! evicts through the generator's owner API, and never appends.

use super::collider::AabbCollider;
use super::generator::ItemGenerator;
use super::item::{FallingItem, ItemCategory};

/// Outcome of a player-vs-items check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Classification {
    #[default]
    None,
    Healthy,
    Junk,
}

impl From<ItemCategory> for Classification {
    fn from(category: ItemCategory) -> Self {
        match category {
            ItemCategory::Healthy => Classification::Healthy,
            ItemCategory::Junk => Classification::Junk,
        }
    }
}

impl From<Option<ItemCategory>> for Classification {
    fn from(category: Option<ItemCategory>) -> Self {
        category.map_or(Classification::None, Classification::from)
    }
}

/// Moves items and resolves player overlaps
#[derive(Debug, Clone, Copy)]
pub struct CollisionManager {
    level_height: f32,
}

impl CollisionManager {
    pub fn new(level_height: f32) -> Self {
        Self { level_height }
    }

    pub fn level_height(&self) -> f32 {
        self.level_height
    }

    /// Advance every item by `dt` and drop those that left the level.
    ///
    /// This is the only place items move. Returns the expired items in spawn
    /// order.
    pub fn tick(&self, generator: &mut ItemGenerator, dt: f32) -> Vec<FallingItem> {
        for item in generator.items_mut() {
            item.advance(dt);
        }
        let expired = generator.drain_expired(self.level_height);
        for item in &expired {
            log::debug!("Item {} expired at y={:.1}", item.id, item.position().y);
        }
        expired
    }

    /// Consume the first item (in spawn order) overlapping `player`.
    ///
    /// At most one item is consumed per call, so the player's state changes by
    /// a single delta per frame. Other overlapping items stay live.
    pub fn resolve(&self, generator: &mut ItemGenerator, player: &AabbCollider) -> Option<FallingItem> {
        let index = generator
            .items()
            .iter()
            .position(|item| item.collider.overlaps(player))?;
        let item = generator.take(index);
        log::debug!("Player caught {} item {}", item.category.as_str(), item.id);
        Some(item)
    }

    /// Category of the consumed item, or `Classification::None`
    pub fn check_collision_with(&self, generator: &mut ItemGenerator, player: &AabbCollider) -> Classification {
        self.resolve(generator, player)
            .map(|item| item.category)
            .into()
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec2;

    use super::*;
    use crate::settings::Settings;
    use crate::sim::spawn::FixedSpawnSource;

    fn setup(cooldown: f32) -> (ItemGenerator, CollisionManager) {
        let settings = Settings {
            level_height: 600.0,
            fall_speed: 100.0,
            spawn_cooldown: cooldown,
            ..Settings::default()
        };
        let generator = ItemGenerator::new(
            &settings,
            Box::new(FixedSpawnSource::constant(ItemCategory::Healthy, 0.0)),
        )
        .unwrap();
        (generator, CollisionManager::new(settings.level_height))
    }

    fn player_at(x: f32, y: f32) -> AabbCollider {
        AabbCollider::new(Vec2::ZERO, Vec2::new(80.0, 80.0))
            .unwrap()
            .with_position(Vec2::new(x, y))
    }

    #[test]
    fn test_empty_set_is_noop() {
        let (mut generator, manager) = setup(1.0);
        assert!(manager.tick(&mut generator, 1.0).is_empty());
        assert_eq!(
            manager.check_collision_with(&mut generator, &player_at(0.0, 0.0)),
            Classification::None
        );
    }

    #[test]
    fn test_tick_moves_all_items() {
        let (mut generator, manager) = setup(100.0);
        generator.place(ItemCategory::Healthy, Vec2::new(0.0, 0.0));
        generator.place(ItemCategory::Junk, Vec2::new(200.0, 50.0));
        manager.tick(&mut generator, 0.5);
        let ys: Vec<_> = generator.items().iter().map(|i| i.position().y).collect();
        assert_eq!(ys, [50.0, 100.0]);
    }

    #[test]
    fn test_consumes_at_most_one_item() {
        let (mut generator, manager) = setup(100.0);
        generator.place(ItemCategory::Junk, Vec2::new(100.0, 100.0));
        generator.place(ItemCategory::Healthy, Vec2::new(110.0, 110.0));
        let player = player_at(90.0, 90.0);

        let result = manager.check_collision_with(&mut generator, &player);
        assert_eq!(result, Classification::Junk);
        assert_eq!(generator.len(), 1);
        assert_eq!(generator.items()[0].category, ItemCategory::Healthy);

        // The remaining overlap resolves on the next call
        assert_eq!(
            manager.check_collision_with(&mut generator, &player),
            Classification::Healthy
        );
        assert!(generator.is_empty());
    }

    #[test]
    fn test_miss_leaves_items() {
        let (mut generator, manager) = setup(100.0);
        generator.place(ItemCategory::Junk, Vec2::new(500.0, 0.0));
        let result = manager.check_collision_with(&mut generator, &player_at(0.0, 450.0));
        assert_eq!(result, Classification::None);
        assert_eq!(generator.len(), 1);
    }

    #[test]
    fn test_offscreen_item_expires_without_collision() {
        let (mut generator, manager) = setup(100.0);
        generator.place(ItemCategory::Healthy, Vec2::new(0.0, 650.0));
        generator.place(ItemCategory::Healthy, Vec2::new(0.0, 10.0));
        let expired = manager.tick(&mut generator, 0.0);
        assert_eq!(expired.len(), 1);
        assert_eq!(expired[0].id, 1);
        assert_eq!(generator.items()[0].id, 2);
    }

    #[test]
    fn test_item_expires_on_sixth_tick() {
        let (mut generator, manager) = setup(100.0);
        generator.place(ItemCategory::Healthy, Vec2::new(0.0, 0.0));
        for tick in 1..=5 {
            assert!(manager.tick(&mut generator, 1.0).is_empty(), "tick {tick}");
            assert_eq!(generator.items()[0].position().y, tick as f32 * 100.0);
        }
        let expired = manager.tick(&mut generator, 1.0);
        assert_eq!(expired.len(), 1);
        assert_eq!(expired[0].position().y, 600.0);
        assert!(generator.is_empty());
    }

    #[test]
    fn test_classification_from_category() {
        assert_eq!(Classification::from(ItemCategory::Healthy), Classification::Healthy);
        assert_eq!(Classification::from(None::<ItemCategory>), Classification::None);
        assert_eq!(Classification::from(Some(ItemCategory::Junk)), Classification::Junk);
    }
}

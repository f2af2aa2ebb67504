//! Item generation
//!
//! The generator owns every falling item. It only ever grows the sequence
//! (one spawn per elapsed cooldown); movement and removal go through the
//! collision manager using the owner API below.

use std::fmt;

use glam::Vec2;

use super::collider::AabbCollider;
use super::item::{FallingItem, ItemCategory};
use super::spawn::SpawnSource;
use crate::settings::{Settings, SettingsError};

/// Fraction of the cooldown treated as already elapsed. Frame times like 1/60
/// don't sum exactly in f32; without slack a full cooldown's worth of frames
/// can leave a sub-microsecond remainder and slip the spawn by a frame.
const COOLDOWN_TOLERANCE: f32 = 1e-4;

/// Spawns falling items on a fixed cooldown
pub struct ItemGenerator {
    /// Live items in spawn order
    items: Vec<FallingItem>,
    cooldown_remaining: f32,
    cooldown_duration: f32,
    /// Local box shared by every spawned item
    item_box: AabbCollider,
    item_width: f32,
    level_width: f32,
    fall_speed: f32,
    source: Box<dyn SpawnSource>,
    next_id: u32,
}

impl fmt::Debug for ItemGenerator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ItemGenerator")
            .field("items", &self.items.len())
            .field("cooldown_remaining", &self.cooldown_remaining)
            .field("cooldown_duration", &self.cooldown_duration)
            .finish_non_exhaustive()
    }
}

impl ItemGenerator {
    /// Create a generator. Rejects settings that fail validation.
    pub fn new(settings: &Settings, source: Box<dyn SpawnSource>) -> Result<Self, SettingsError> {
        settings.validate()?;
        let item_box = AabbCollider::new(
            Vec2::ZERO,
            Vec2::new(settings.item_width, settings.item_height),
        )
        .map_err(|err| SettingsError::Invalid {
            field: "item_width",
            reason: err.to_string(),
        })?;

        Ok(Self {
            items: Vec::new(),
            cooldown_remaining: settings.spawn_cooldown,
            cooldown_duration: settings.spawn_cooldown,
            item_box,
            item_width: settings.item_width,
            level_width: settings.level_width,
            fall_speed: settings.fall_speed,
            source,
            next_id: 1,
        })
    }

    /// Count down the cooldown and spawn at most one item.
    ///
    /// The new item is placed at the top of the level and does not move until
    /// the next collision pass. Returns the spawned item's id and category.
    pub fn tick(&mut self, dt: f32) -> Option<(u32, ItemCategory)> {
        self.cooldown_remaining -= dt.max(0.0);
        if self.cooldown_remaining > self.cooldown_duration * COOLDOWN_TOLERANCE {
            return None;
        }
        self.cooldown_remaining = self.cooldown_duration;

        let category = self.source.next_category();
        let x = self
            .source
            .next_spawn_x((self.level_width - self.item_width).max(0.0));
        let id = self.push(category, Vec2::new(x, 0.0));
        log::debug!("Spawned {} item {} at x={:.1}", category.as_str(), id, x);
        Some((id, category))
    }

    fn push(&mut self, category: ItemCategory, position: Vec2) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        let collider = self.item_box.with_position(position);
        self.items
            .push(FallingItem::new(id, collider, category, self.fall_speed));
        id
    }

    /// Live items in spawn order (for drawing)
    pub fn items(&self) -> &[FallingItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn cooldown_remaining(&self) -> f32 {
        self.cooldown_remaining
    }

    pub fn cooldown_duration(&self) -> f32 {
        self.cooldown_duration
    }

    /// Mutable view that cannot add or remove items
    pub(crate) fn items_mut(&mut self) -> &mut [FallingItem] {
        &mut self.items
    }

    /// Remove the item at `index`, keeping the order of the rest
    pub(crate) fn take(&mut self, index: usize) -> FallingItem {
        self.items.remove(index)
    }

    /// Remove every item at or past `level_height`, keeping survivor order
    pub(crate) fn drain_expired(&mut self, level_height: f32) -> Vec<FallingItem> {
        if !self.items.iter().any(|item| item.is_below(level_height)) {
            return Vec::new();
        }
        let (expired, kept): (Vec<_>, Vec<_>) = std::mem::take(&mut self.items)
            .into_iter()
            .partition(|item| item.is_below(level_height));
        self.items = kept;
        expired
    }

    /// Place an item directly, bypassing the cooldown
    #[cfg(test)]
    pub(crate) fn place(&mut self, category: ItemCategory, position: Vec2) -> u32 {
        self.push(category, position)
    }
}

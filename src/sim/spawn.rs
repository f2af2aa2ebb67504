//! Random sources for item spawning
//!
//! The generator never touches a global RNG. Production runs use a PCG stream
//! seeded from the clock; tests inject a fixed sequence.

use std::time::{SystemTime, UNIX_EPOCH};

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::item::ItemCategory;

/// Source of spawn decisions
pub trait SpawnSource {
    /// Category of the next item (healthy or junk, 50/50 for random sources)
    fn next_category(&mut self) -> ItemCategory;

    /// Horizontal spawn position in `[0, max_x]`
    fn next_spawn_x(&mut self, max_x: f32) -> f32;
}

/// Seeded PCG source
#[derive(Debug, Clone)]
pub struct PcgSpawnSource {
    seed: u64,
    rng: Pcg32,
}

impl PcgSpawnSource {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Seed from the system clock
    pub fn from_time() -> Self {
        let seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or_default();
        Self::from_seed(seed)
    }

    /// Seed this source was created with, for replaying a run
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl SpawnSource for PcgSpawnSource {
    fn next_category(&mut self) -> ItemCategory {
        if self.rng.random_bool(0.5) {
            ItemCategory::Healthy
        } else {
            ItemCategory::Junk
        }
    }

    fn next_spawn_x(&mut self, max_x: f32) -> f32 {
        // NaN, infinite and negative widths collapse to the left edge
        if !max_x.is_finite() || max_x <= 0.0 {
            return 0.0;
        }
        self.rng.random_range(0.0..=max_x)
    }
}

/// Replays fixed sequences, cycling when exhausted
#[derive(Debug, Clone)]
pub struct FixedSpawnSource {
    categories: Vec<ItemCategory>,
    xs: Vec<f32>,
    next_category: usize,
    next_x: usize,
}

impl FixedSpawnSource {
    pub fn new(categories: Vec<ItemCategory>, xs: Vec<f32>) -> Self {
        Self {
            categories,
            xs,
            next_category: 0,
            next_x: 0,
        }
    }

    /// Always the same category and position
    pub fn constant(category: ItemCategory, x: f32) -> Self {
        Self::new(vec![category], vec![x])
    }
}

impl SpawnSource for FixedSpawnSource {
    fn next_category(&mut self) -> ItemCategory {
        if self.categories.is_empty() {
            return ItemCategory::Healthy;
        }
        let category = self.categories[self.next_category % self.categories.len()];
        self.next_category += 1;
        category
    }

    fn next_spawn_x(&mut self, max_x: f32) -> f32 {
        if self.xs.is_empty() {
            return 0.0;
        }
        let x = self.xs[self.next_x % self.xs.len()];
        self.next_x += 1;
        x.clamp(0.0, max_x.max(0.0))
    }
}

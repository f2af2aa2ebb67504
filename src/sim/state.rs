//! Game state and per-frame events

use super::collision::CollisionManager;
use super::generator::ItemGenerator;
use super::item::{FallingItem, ItemCategory};
use super::player::Player;
use super::spawn::{PcgSpawnSource, SpawnSource};
use crate::settings::{Settings, SettingsError};

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Game is paused
    Paused,
    /// Health ran out
    GameOver,
}

/// Something that happened during a tick, for renderer/audio collaborators
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameEvent {
    Spawned { id: u32, category: ItemCategory },
    Caught { id: u32, category: ItemCategory },
    Expired { id: u32 },
    GameOver { score: u64 },
}

/// Complete simulation state
#[derive(Debug)]
pub struct GameState {
    pub settings: Settings,
    /// Seed of the spawn stream, when known
    pub seed: Option<u64>,
    pub phase: GamePhase,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub player: Player,
    pub generator: ItemGenerator,
    pub collision: CollisionManager,
}

impl GameState {
    /// New run with a seeded spawn stream
    pub fn new(settings: Settings, seed: u64) -> Result<Self, SettingsError> {
        let mut state = Self::with_source(settings, Box::new(PcgSpawnSource::from_seed(seed)))?;
        state.seed = Some(seed);
        Ok(state)
    }

    /// New run with an injected spawn source. Settings are validated here so
    /// the tick never sees an impossible level.
    pub fn with_source(settings: Settings, source: Box<dyn SpawnSource>) -> Result<Self, SettingsError> {
        let generator = ItemGenerator::new(&settings, source)?;
        let player = Player::new(&settings);
        let collision = CollisionManager::new(settings.level_height);
        Ok(Self {
            settings,
            seed: None,
            phase: GamePhase::Playing,
            time_ticks: 0,
            player,
            generator,
            collision,
        })
    }

    /// Items currently falling, in spawn order
    pub fn items(&self) -> &[FallingItem] {
        self.generator.items()
    }

    pub fn is_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }
}

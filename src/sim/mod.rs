//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Randomness only through an injected `SpawnSource`
//! - Stable item order (spawn order, stable removal)
//! - No rendering or platform dependencies

pub mod collider;
pub mod collision;
pub mod generator;
pub mod item;
pub mod player;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collider::{AabbCollider, ColliderError};
pub use collision::{Classification, CollisionManager};
pub use generator::ItemGenerator;
pub use item::{FallingItem, ItemCategory};
pub use player::Player;
pub use spawn::{FixedSpawnSource, PcgSpawnSource, SpawnSource};
pub use state::{GameEvent, GamePhase, GameState};
pub use tick::{TickInput, tick};

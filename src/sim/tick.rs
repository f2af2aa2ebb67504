//! Per-frame simulation tick
//!
//! Frame order: pause handling, player movement, generator (may spawn one
//! item that stays put this frame), collision pass (moves everything, expires
//! off-screen items, consumes at most one overlap), player update, game-over
//! check.

use super::item::{FallingItem, ItemCategory};
use super::state::{GameEvent, GamePhase, GameState};

/// Input commands for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Horizontal movement in [-1, 1] (left/right keys)
    pub move_dir: f32,
    /// Pause toggle
    pub pause: bool,
    /// Demo mode - AI steers the player
    pub autopilot: bool,
}

/// Advance the game by `dt` seconds
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) -> Vec<GameEvent> {
    let mut events = Vec::new();

    if input.pause {
        match state.phase {
            GamePhase::Playing => {
                state.phase = GamePhase::Paused;
                log::info!("Paused");
                return events;
            }
            GamePhase::Paused => {
                state.phase = GamePhase::Playing;
                log::info!("Resumed");
            }
            GamePhase::GameOver => {}
        }
    }

    if state.phase != GamePhase::Playing {
        return events;
    }

    let dt = dt.max(0.0);
    state.time_ticks += 1;

    let move_dir = if input.autopilot {
        autopilot_direction(state)
    } else {
        input.move_dir
    };
    state.player.move_by(move_dir, dt);

    if let Some((id, category)) = state.generator.tick(dt) {
        events.push(GameEvent::Spawned { id, category });
    }

    let expired = state.collision.tick(&mut state.generator, dt);
    events.extend(expired.iter().map(|item| GameEvent::Expired { id: item.id }));

    if let Some(item) = state
        .collision
        .resolve(&mut state.generator, &state.player.collider)
    {
        state.player.apply(item.category.into());
        events.push(GameEvent::Caught {
            id: item.id,
            category: item.category,
        });
    }

    if state.player.is_dead() {
        state.phase = GamePhase::GameOver;
        log::info!(
            "Game over after {} ticks, score {}",
            state.time_ticks,
            state.player.score
        );
        events.push(GameEvent::GameOver {
            score: state.player.score,
        });
    }

    events
}

/// Horizontal distance within which the autopilot stops steering
const AUTOPILOT_DEADZONE: f32 = 4.0;
/// How far above the player the autopilot watches for junk
const AUTOPILOT_LOOKAHEAD: f32 = 200.0;

/// Dodge junk about to land on the player, otherwise chase the lowest
/// healthy item still above the platform.
fn autopilot_direction(state: &GameState) -> f32 {
    let player = &state.player;
    let center = player.center_x();
    let reach = player.collider.half_extents().x;
    let (_, player_max) = player.collider.bounds();
    let top = player.pos.y;

    let incoming = |item: &&FallingItem| {
        let (_, item_max) = item.collider.bounds();
        item_max.y >= top - AUTOPILOT_LOOKAHEAD && item.position().y <= player_max.y
    };

    let threat = state
        .items()
        .iter()
        .filter(|item| item.category == ItemCategory::Junk)
        .filter(incoming)
        .find(|item| {
            let dx = (item.collider.center().x - center).abs();
            dx <= reach + item.collider.half_extents().x
        });

    if let Some(junk) = threat {
        // Run away from the junk, turning back when pinned against a wall
        let away = if junk.collider.center().x > center { -1.0 } else { 1.0 };
        let blocked = (away < 0.0 && player.pos.x <= 0.0)
            || (away > 0.0 && player_max.x >= state.settings.level_width);
        return if blocked { -away } else { away };
    }

    let target = state
        .items()
        .iter()
        .filter(|item| item.category == ItemCategory::Healthy)
        .filter(|item| item.position().y <= player_max.y)
        .max_by(|a, b| {
            a.position()
                .y
                .partial_cmp(&b.position().y)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

    match target {
        Some(item) => {
            let delta = item.collider.center().x - center;
            if delta.abs() <= AUTOPILOT_DEADZONE {
                0.0
            } else {
                delta.signum()
            }
        }
        None => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec2;

    use super::*;
    use crate::settings::Settings;
    use crate::sim::spawn::FixedSpawnSource;

    fn settings() -> Settings {
        Settings {
            level_width: 800.0,
            level_height: 600.0,
            spawn_cooldown: 1.0,
            fall_speed: 100.0,
            ..Settings::default()
        }
    }

    fn state_with(category: ItemCategory, x: f32) -> GameState {
        GameState::with_source(settings(), Box::new(FixedSpawnSource::constant(category, x))).unwrap()
    }

    #[test]
    fn test_spawned_item_moves_in_its_spawn_frame_collision_pass() {
        // Park the player far away from the spawn column
        let mut state = state_with(ItemCategory::Healthy, 700.0);
        state.player.set_x(0.0);

        let events = tick(&mut state, &TickInput::default(), 1.0);
        assert_eq!(
            events,
            [GameEvent::Spawned {
                id: 1,
                category: ItemCategory::Healthy
            }]
        );
        // Spawned at y=0, then moved once by the collision pass
        assert_eq!(state.items()[0].position(), Vec2::new(700.0, 100.0));
    }

    #[test]
    fn test_item_expires_without_player_interaction() {
        let mut state = state_with(ItemCategory::Junk, 700.0);
        state.player.set_x(0.0);

        // First item spawns on tick 1 at y=0 and is moved to 100 in the same frame,
        // so it reaches y=600 on tick 6.
        let mut expired_on = None;
        for n in 1..=6 {
            let events = tick(&mut state, &TickInput::default(), 1.0);
            if events.contains(&GameEvent::Expired { id: 1 }) {
                expired_on = Some(n);
                break;
            }
        }
        assert_eq!(expired_on, Some(6));
        assert_eq!(state.player.score, 0);
        assert_eq!(state.player.health, settings().starting_health);
        assert!(state.items().iter().all(|item| item.id != 1));
    }

    #[test]
    fn test_catching_healthy_scores() {
        let mut state = state_with(ItemCategory::Healthy, 0.0);
        state.player.set_x(0.0);
        // Place an item just above the player so the next pass overlaps
        let y = state.player.pos.y - 10.0;
        let id = state.generator.place(ItemCategory::Healthy, Vec2::new(10.0, y));

        let events = tick(&mut state, &TickInput::default(), 0.01);
        assert!(events.contains(&GameEvent::Caught {
            id,
            category: ItemCategory::Healthy
        }));
        assert_eq!(state.player.score, settings().healthy_points);
    }

    #[test]
    fn test_junk_ends_the_run() {
        let mut state = state_with(ItemCategory::Junk, 0.0);
        state.player.set_x(0.0);
        state.player.health = 1;
        let y = state.player.pos.y;
        state.generator.place(ItemCategory::Junk, Vec2::new(10.0, y));
        state.generator.place(ItemCategory::Junk, Vec2::new(20.0, y));

        let events = tick(&mut state, &TickInput::default(), 0.0);
        assert_eq!(state.phase, GamePhase::GameOver);
        assert!(state.player.tripped);
        assert!(events.contains(&GameEvent::GameOver { score: 0 }));
        // Only one item consumed this frame
        assert_eq!(state.items().len(), 1);

        // Nothing happens after game over
        let ticks = state.time_ticks;
        assert!(tick(&mut state, &TickInput::default(), 1.0).is_empty());
        assert_eq!(state.time_ticks, ticks);
    }

    #[test]
    fn test_pause_freezes_simulation() {
        let mut state = state_with(ItemCategory::Healthy, 700.0);
        let pause = TickInput {
            pause: true,
            ..Default::default()
        };
        tick(&mut state, &pause, 1.0);
        assert_eq!(state.phase, GamePhase::Paused);

        tick(&mut state, &TickInput::default(), 5.0);
        assert!(state.items().is_empty());
        assert_eq!(state.time_ticks, 0);

        tick(&mut state, &pause, 1.0);
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.items().len(), 1);
    }

    #[test]
    fn test_player_moves_with_input() {
        let mut state = state_with(ItemCategory::Healthy, 0.0);
        let start = state.player.pos.x;
        let input = TickInput {
            move_dir: 1.0,
            ..Default::default()
        };
        tick(&mut state, &input, 0.1);
        assert!(state.player.pos.x > start);
        assert_eq!(state.player.collider.position(), state.player.pos);
    }

    #[test]
    fn test_autopilot_chases_healthy() {
        let mut state = state_with(ItemCategory::Healthy, 0.0);
        state.player.set_x(400.0);
        state.generator.place(ItemCategory::Healthy, Vec2::new(100.0, 50.0));
        assert_eq!(autopilot_direction(&state), -1.0);
    }

    #[test]
    fn test_autopilot_dodges_junk_overhead() {
        let mut state = state_with(ItemCategory::Healthy, 0.0);
        state.player.set_x(400.0);
        let y = state.player.pos.y - 50.0;
        // Junk slightly right of center, healthy far right
        state.generator.place(ItemCategory::Junk, Vec2::new(430.0, y));
        state.generator.place(ItemCategory::Healthy, Vec2::new(700.0, 0.0));
        assert_eq!(autopilot_direction(&state), -1.0);
    }

    #[test]
    fn test_same_seed_same_run() {
        let mut a = GameState::new(settings(), 4242).unwrap();
        let mut b = GameState::new(settings(), 4242).unwrap();
        let input = TickInput {
            autopilot: true,
            ..Default::default()
        };
        for _ in 0..600 {
            let ea = tick(&mut a, &input, 1.0 / 60.0);
            let eb = tick(&mut b, &input, 1.0 / 60.0);
            assert_eq!(ea, eb);
        }
        assert_eq!(a.player, b.player);
        assert_eq!(a.items(), b.items());
    }
}

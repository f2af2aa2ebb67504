//! Brick It entry point
//!
//! Runs the simulation headless under autopilot and logs what happens.
//! Drawing, input and assets belong to a frontend built on top of the library.
//!
//! Usage: `brick-it [settings.json]` (log level via `RUST_LOG`)

use std::process::ExitCode;

use brick_it::{Settings, SettingsError};
use brick_it::consts::MAX_SUBSTEPS;
use brick_it::sim::{GameEvent, GameState, PcgSpawnSource, TickInput, tick};

/// Ten minutes of play at the assumed frame rate
const MAX_SECONDS: f32 = 600.0;

/// Fixed-step driver around the simulation
struct Game {
    state: GameState,
    accumulator: f32,
    input: TickInput,
}

impl Game {
    fn new(settings: Settings, seed: u64) -> Result<Self, SettingsError> {
        Ok(Self {
            state: GameState::new(settings, seed)?,
            accumulator: 0.0,
            input: TickInput {
                autopilot: true,
                ..Default::default()
            },
        })
    }

    /// Run simulation ticks for one rendered frame
    fn update(&mut self, dt: f32) -> Vec<GameEvent> {
        let dt = dt.min(0.1);
        self.accumulator += dt;
        let step = self.state.settings.frame_dt();

        let mut events = Vec::new();
        let mut substeps = 0;
        while self.accumulator >= step && substeps < MAX_SUBSTEPS {
            events.extend(tick(&mut self.state, &self.input, step));
            self.accumulator -= step;
            substeps += 1;
        }
        events
    }
}

fn main() -> ExitCode {
    env_logger::init();

    let settings = match std::env::args().nth(1) {
        Some(path) => match Settings::load(&path) {
            Ok(settings) => settings,
            Err(e) => {
                log::error!("{}: {}", path, e);
                return ExitCode::FAILURE;
            }
        },
        None => Settings::default(),
    };

    let seed = PcgSpawnSource::from_time().seed();
    let frame_dt = settings.frame_dt();
    let max_frames = (MAX_SECONDS / frame_dt) as u64;
    let mut game = match Game::new(settings, seed) {
        Ok(game) => game,
        Err(e) => {
            log::error!("{}", e);
            return ExitCode::FAILURE;
        }
    };
    log::info!("Brick It starting with seed: {}", seed);

    for _ in 0..max_frames {
        for event in game.update(frame_dt) {
            match event {
                GameEvent::Spawned { id, category } => {
                    log::trace!("Spawned {} #{}", category.as_str(), id)
                }
                GameEvent::Caught { id, category } => {
                    log::info!("Caught {} #{}", category.as_str(), id)
                }
                GameEvent::Expired { id } => log::trace!("Missed #{}", id),
                GameEvent::GameOver { score } => log::info!("Game over, score {}", score),
            }
        }
        if game.state.is_over() {
            break;
        }
    }

    let player = &game.state.player;
    println!(
        "seed {} | score {} | health {} | {} ticks",
        seed, player.score, player.health, game.state.time_ticks
    );
    ExitCode::SUCCESS
}

//! Tile Platformer entry point
//!
//! Native headless runner: the demo autopilot plays the configured level at a
//! fixed tick rate while events are logged.

use std::path::Path;
use std::time::{Duration, Instant};

use tile_platformer::consts::MAX_SUBSTEPS;
use tile_platformer::demo::DemoPilot;
use tile_platformer::renderer::Frame;
use tile_platformer::settings::{SETTINGS_FILE, Settings};
use tile_platformer::sim::{GameEvent, GameState, tick};

/// Runner holding the session and its pacing state
struct Game {
    state: GameState,
    pilot: DemoPilot,
    tick_dt: f32,
    accumulator: f32,
    ticks: u64,
    coins: u64,
    deaths: u64,
}

impl Game {
    fn new(settings: &Settings) -> Self {
        Self {
            state: GameState::new(settings.level(), settings.tuning.clone()),
            pilot: DemoPilot::new(settings.seed),
            tick_dt: 1.0 / settings.tick_rate.max(1) as f32,
            accumulator: 0.0,
            ticks: 0,
            coins: 0,
            deaths: 0,
        }
    }

    fn step(&mut self) {
        let input = self.pilot.next_input(&self.state);
        let was_over = self.state.is_game_over();
        tick(&mut self.state, &input);
        self.ticks += 1;

        for event in &self.state.events {
            match event {
                GameEvent::CoinCollected { .. } => self.coins += 1,
                GameEvent::Jumped | GameEvent::Landed | GameEvent::HeadBump => {
                    log::trace!("tick {}: {:?}", self.ticks, event)
                }
                _ => log::debug!("tick {}: {:?}", self.ticks, event),
            }
        }
        if !was_over && self.state.is_game_over() {
            self.deaths += 1;
        }
    }

    /// Run as many ticks as the elapsed wall time calls for
    fn update(&mut self, dt: f32, limit: u64) {
        self.accumulator += dt.min(0.1);

        let mut substeps = 0;
        while self.accumulator >= self.tick_dt && substeps < MAX_SUBSTEPS && self.ticks < limit {
            self.step();
            self.accumulator -= self.tick_dt;
            substeps += 1;
        }
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Tile Platformer (native) starting...");

    let settings = Settings::load_or_default(Path::new(SETTINGS_FILE));
    let mut game = Game::new(&settings);
    log::info!(
        "Level {}x{} with {} tiles, seed {}",
        game.state.level.columns(),
        game.state.level.rows(),
        game.state.tiles.len(),
        settings.seed
    );

    if settings.realtime {
        let mut last = Instant::now();
        while game.ticks < settings.demo_ticks {
            let now = Instant::now();
            game.update(now.duration_since(last).as_secs_f32(), settings.demo_ticks);
            last = now;
            std::thread::sleep(Duration::from_secs_f32(game.tick_dt / 2.0));
        }
    } else {
        while game.ticks < settings.demo_ticks {
            game.step();
        }
    }

    let frame = Frame::capture(&game.state);
    let vertices = frame.vertices(
        game.state.tuning.screen_width,
        game.state.tuning.screen_height,
    );
    log::info!(
        "Final frame: {} sprites, {} vertices, \"{}\"{}",
        frame.sprites.len(),
        vertices.len(),
        frame.hud.score,
        frame.hud.prompt.map(|p| format!(", \"{}\"", p)).unwrap_or_default()
    );
    log::info!(
        "Played {} ticks: {} coins collected, {} game overs",
        game.ticks,
        game.coins,
        game.deaths
    );
}

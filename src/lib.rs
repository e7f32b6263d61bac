//! Tile Platformer - a tile-based 2D platformer
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, game state)
//! - `tuning`: Data-driven gameplay constants
//! - `settings`: Native runner configuration
//! - `renderer`: Render-surface contract (sprite lists, vertices)
//! - `demo`: Seeded autopilot for headless play

pub mod demo;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use settings::{Settings, SettingsError};
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Simulation rate (one tick per rendered frame)
    pub const TICK_RATE: u32 = 60;
    /// Maximum ticks run per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Tile edge length in world units
    pub const TILE_SIZE: f32 = 30.0;

    /// Player sprite dimensions
    pub const PLAYER_WIDTH: f32 = 30.0;
    pub const PLAYER_HEIGHT: f32 = 40.0;

    /// Goomba dimensions
    pub const ENEMY_SIZE: f32 = 30.0;
    /// Coin dimensions (coins are positioned by their center)
    pub const COIN_SIZE: f32 = 12.0;
    /// Question block dimensions
    pub const BLOCK_SIZE: f32 = 30.0;

    /// HUD prompt shown while the game is over
    pub const RESTART_PROMPT: &str = "Game Over! Press R to restart";
}

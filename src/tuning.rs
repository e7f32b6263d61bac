//! Data-driven gameplay tuning
//!
//! All rates are per tick; distances are world units.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Gameplay constants consumed by the simulation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Downward acceleration added to vertical velocity each tick
    pub gravity: f32,
    /// Vertical velocity cap while under player control
    pub max_fall_speed: f32,
    /// Vertical velocity set when a jump fires (negative = up)
    pub jump_velocity: f32,
    /// Horizontal distance per tick while a direction is held
    pub move_speed: f32,
    /// Goomba patrol speed
    pub enemy_speed: f32,
    /// Ticks a goomba walks before turning around
    pub enemy_patrol_ticks: u32,
    /// Height of the band above a question block's top that counts as a hit
    pub block_hit_band: f32,
    /// Playfield width
    pub screen_width: f32,
    /// Playfield height
    pub screen_height: f32,
    /// Player top-left corner at session start
    pub player_spawn: Vec2,
    /// Horizontal drift applied to the player during the game-over fall
    pub world_shift: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            gravity: 0.5,
            max_fall_speed: 10.0,
            jump_velocity: -12.0,
            move_speed: 5.0,
            enemy_speed: 1.0,
            enemy_patrol_ticks: 50,
            block_hit_band: 10.0,
            screen_width: 600.0,
            screen_height: 400.0,
            player_spawn: Vec2::new(100.0, 270.0),
            world_shift: 0.0,
        }
    }
}

impl Tuning {
    /// Parse a (possibly partial) JSON tuning object
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

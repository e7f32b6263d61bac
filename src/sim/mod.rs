//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only, one tick per frame
//! - Stable iteration order (level row-major order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod interact;
pub mod level;
pub mod rect;
pub mod state;
pub mod tick;

pub use collision::{Resolution, clamp_to_screen, resolve_tiles};
pub use level::{Level, LevelError, SpawnDescriptor, SpawnKind, Tile, TileCode, TileGrid, TileKind};
pub use rect::Rect;
pub use state::{Coin, Enemy, GameEvent, GamePhase, GameState, Player, QuestionBlock};
pub use tick::{TickInput, tick};

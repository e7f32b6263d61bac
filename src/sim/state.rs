//! Game state and core simulation types
//!
//! The whole session lives in [`GameState`]; update functions receive it (or
//! the collections they need) explicitly.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::level::{Level, SpawnDescriptor, SpawnKind, TileGrid};
use super::rect::Rect;
use crate::consts::*;
use crate::tuning::Tuning;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Player is under control
    Playing,
    /// Enemy contact or fell off the map; waiting for restart
    GameOver,
}

/// Things that happened during a tick, for presentation layers
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    Jumped,
    /// Touched down after being airborne
    Landed,
    HeadBump,
    CoinCollected { score: u32 },
    /// Question block at this index was spent; a coin appeared at `coin`
    BlockHit { index: usize, coin: Vec2 },
    EnemyContact,
    FellOffMap,
    Restarted,
}

/// The player character
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
    pub vel_y: f32,
    /// No supporting tile was found beneath the player this tick
    pub airborne: bool,
    /// Jump input was held last tick (jumps fire on press only)
    pub jump_held: bool,
    /// Sprite is mirrored (facing left)
    pub facing_left: bool,
}

impl Player {
    pub fn new(spawn: Vec2) -> Self {
        Self {
            pos: spawn,
            size: Vec2::new(PLAYER_WIDTH, PLAYER_HEIGHT),
            vel_y: 0.0,
            airborne: true,
            jump_held: false,
            facing_left: false,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect {
            pos: self.pos,
            size: self.size,
        }
    }
}

/// A goomba walking back and forth in place
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Enemy {
    pub rect: Rect,
    /// -1 (left) or +1 (right)
    pub direction: f32,
    /// Ticks spent walking in the current direction
    pub counter: u32,
}

impl Enemy {
    pub fn new(pos: Vec2) -> Self {
        Self {
            rect: Rect::new(pos.x, pos.y, ENEMY_SIZE, ENEMY_SIZE),
            direction: 1.0,
            counter: 0,
        }
    }

    /// Advance one tick of patrol. Enemies ignore terrain entirely.
    pub fn patrol(&mut self, speed: f32, period: u32) {
        self.rect.pos.x += self.direction * speed;
        self.counter += 1;
        if self.counter >= period {
            self.direction = -self.direction;
            self.counter = 0;
        }
    }
}

/// A collectible coin
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Coin {
    pub rect: Rect,
}

impl Coin {
    /// Coins are placed by their center point
    pub fn new(center: Vec2) -> Self {
        Self {
            rect: Rect::from_center(center, Vec2::splat(COIN_SIZE)),
        }
    }
}

/// A question block; spends itself into a plain block on its first hit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionBlock {
    pub rect: Rect,
    pub spent: bool,
}

impl QuestionBlock {
    pub fn new(pos: Vec2) -> Self {
        Self {
            rect: Rect::new(pos.x, pos.y, BLOCK_SIZE, BLOCK_SIZE),
            spent: false,
        }
    }

    /// Where the reward coin appears (centered one tile above the corner)
    pub fn coin_spawn_point(&self) -> Vec2 {
        Vec2::new(self.rect.left(), self.rect.top() - TILE_SIZE)
    }
}

/// Complete session state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Level the session was built from (re-consumed on restart)
    pub level: Level,
    pub tuning: Tuning,
    /// Static terrain
    pub tiles: TileGrid,
    pub player: Player,
    pub enemies: Vec<Enemy>,
    pub coins: Vec<Coin>,
    pub blocks: Vec<QuestionBlock>,
    pub score: u32,
    pub phase: GamePhase,
    /// Ticks simulated since the last reset
    pub time_ticks: u64,
    /// Events recorded during the most recent tick
    #[serde(skip)]
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Build a fresh session from a level
    pub fn new(level: Level, tuning: Tuning) -> Self {
        let player = Player::new(tuning.player_spawn);
        let mut state = Self {
            level,
            tuning,
            tiles: TileGrid::default(),
            player,
            enemies: Vec::new(),
            coins: Vec::new(),
            blocks: Vec::new(),
            score: 0,
            phase: GamePhase::Playing,
            time_ticks: 0,
            events: Vec::new(),
        };
        state.populate();
        state
    }

    /// Fresh session on the compiled-in level with default tuning
    pub fn classic() -> Self {
        Self::new(Level::classic(), Tuning::default())
    }

    /// Discard everything dynamic and rebuild from the level definition
    pub fn reset(&mut self) {
        self.player = Player::new(self.tuning.player_spawn);
        self.score = 0;
        self.phase = GamePhase::Playing;
        self.time_ticks = 0;
        self.events.clear();
        self.populate();
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    fn populate(&mut self) {
        let (tiles, spawns) = TileGrid::build(&self.level);
        self.tiles = tiles;
        self.enemies.clear();
        self.coins.clear();
        self.blocks.clear();

        for SpawnDescriptor { kind, pos } in spawns {
            match kind {
                SpawnKind::Enemy => self.enemies.push(Enemy::new(pos)),
                SpawnKind::Coin => self.coins.push(Coin::new(pos)),
                SpawnKind::QuestionBlock => self.blocks.push(QuestionBlock::new(pos)),
            }
        }

        log::debug!(
            "World built: {} tiles, {} enemies, {} coins, {} blocks",
            self.tiles.len(),
            self.enemies.len(),
            self.coins.len(),
            self.blocks.len()
        );
    }
}

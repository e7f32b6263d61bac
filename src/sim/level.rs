//! Level definitions and the static tile grid
//!
//! A level is a rectangular grid of tile codes:
//! - 0 empty, 1 dirt, 2 grass (solid terrain)
//! - 3 enemy spawn, 4 coin spawn, 5 question block spawn
//!
//! Levels are validated on construction, so every [`Level`] value is
//! rectangular and contains only known codes.

use glam::Vec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::rect::Rect;
use crate::consts::TILE_SIZE;

/// Reasons a grid of tile codes is rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LevelError {
    #[error("row {row} has {found} columns, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("unknown tile code {code} at row {row}, column {column}")]
    UnknownTileCode { row: usize, column: usize, code: u8 },
}

/// A single cell of a level definition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TileCode {
    Empty,
    Dirt,
    Grass,
    EnemySpawn,
    CoinSpawn,
    BlockSpawn,
}

impl TryFrom<u8> for TileCode {
    type Error = u8;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(TileCode::Empty),
            1 => Ok(TileCode::Dirt),
            2 => Ok(TileCode::Grass),
            3 => Ok(TileCode::EnemySpawn),
            4 => Ok(TileCode::CoinSpawn),
            5 => Ok(TileCode::BlockSpawn),
            other => Err(other),
        }
    }
}

impl From<TileCode> for u8 {
    fn from(code: TileCode) -> Self {
        match code {
            TileCode::Empty => 0,
            TileCode::Dirt => 1,
            TileCode::Grass => 2,
            TileCode::EnemySpawn => 3,
            TileCode::CoinSpawn => 4,
            TileCode::BlockSpawn => 5,
        }
    }
}

/// An immutable, validated level definition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<u8>>", into = "Vec<Vec<u8>>")]
pub struct Level {
    rows: Vec<Vec<TileCode>>,
}

impl Level {
    /// Validate a grid of raw tile codes
    pub fn new(grid: Vec<Vec<u8>>) -> Result<Self, LevelError> {
        let expected = grid.first().map_or(0, Vec::len);
        let mut rows = Vec::with_capacity(grid.len());

        for (row, codes) in grid.into_iter().enumerate() {
            if codes.len() != expected {
                return Err(LevelError::RaggedRow {
                    row,
                    expected,
                    found: codes.len(),
                });
            }
            let cells = codes
                .into_iter()
                .enumerate()
                .map(|(column, code)| {
                    TileCode::try_from(code)
                        .map_err(|code| LevelError::UnknownTileCode { row, column, code })
                })
                .collect::<Result<Vec<_>, _>>()?;
            rows.push(cells);
        }

        Ok(Self { rows })
    }

    /// The compiled-in level: a grass floor over dirt, three two-tile-thick
    /// platforms, two goombas, three coins and two question blocks.
    pub fn classic() -> Self {
        use TileCode::*;

        let mut rows = vec![vec![Empty; 20]; 15];
        rows[12] = vec![Grass; 20];
        rows[13] = vec![Dirt; 20];
        rows[14] = vec![Dirt; 20];

        for col in 5..=8 {
            rows[10][col] = Grass;
            rows[11][col] = Grass;
        }
        for col in 10..=12 {
            rows[8][col] = Grass;
            rows[9][col] = Grass;
        }
        for col in 15..=17 {
            rows[6][col] = Grass;
            rows[7][col] = Grass;
        }

        rows[10][3] = EnemySpawn;
        rows[9][14] = EnemySpawn;

        rows[8][5] = CoinSpawn;
        rows[7][10] = CoinSpawn;
        // Overwrites a platform tile: that cell holds a coin, not grass
        rows[6][15] = CoinSpawn;

        rows[7][5] = BlockSpawn;
        rows[6][10] = BlockSpawn;

        Self { rows }
    }

    pub fn rows(&self) -> usize {
        self.rows.len()
    }

    pub fn columns(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    pub fn get(&self, row: usize, column: usize) -> Option<TileCode> {
        self.rows.get(row).and_then(|r| r.get(column)).copied()
    }

    /// Iterate cells in row-major order as (row, column, code)
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, TileCode)> + '_ {
        self.rows.iter().enumerate().flat_map(|(row, codes)| {
            codes
                .iter()
                .enumerate()
                .map(move |(column, &code)| (row, column, code))
        })
    }
}

impl TryFrom<Vec<Vec<u8>>> for Level {
    type Error = LevelError;

    fn try_from(grid: Vec<Vec<u8>>) -> Result<Self, Self::Error> {
        Level::new(grid)
    }
}

impl From<Level> for Vec<Vec<u8>> {
    fn from(level: Level) -> Self {
        level
            .rows
            .into_iter()
            .map(|row| row.into_iter().map(u8::from).collect())
            .collect()
    }
}

/// Solid terrain kinds (no physics difference between them)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TileKind {
    Dirt,
    Grass,
}

/// A solid terrain tile
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tile {
    pub rect: Rect,
    pub kind: TileKind,
}

/// Dynamic entity kinds that spawn from level markers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpawnKind {
    Enemy,
    Coin,
    QuestionBlock,
}

/// Where a dynamic entity starts (world coordinates of its cell's corner)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpawnDescriptor {
    pub kind: SpawnKind,
    pub pos: Vec2,
}

/// The static terrain of a level
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TileGrid {
    pub tiles: Vec<Tile>,
}

impl TileGrid {
    /// Convert a level into solid tiles plus spawn descriptors, in row-major
    /// order. Cell (row, column) maps to world (column * 30, row * 30).
    pub fn build(level: &Level) -> (TileGrid, Vec<SpawnDescriptor>) {
        let mut tiles = Vec::new();
        let mut spawns = Vec::new();

        for (row, column, code) in level.cells() {
            let pos = Vec2::new(column as f32 * TILE_SIZE, row as f32 * TILE_SIZE);
            let solid = |kind| Tile {
                rect: Rect::new(pos.x, pos.y, TILE_SIZE, TILE_SIZE),
                kind,
            };
            let spawn = |kind| SpawnDescriptor { kind, pos };

            match code {
                TileCode::Empty => {}
                TileCode::Dirt => tiles.push(solid(TileKind::Dirt)),
                TileCode::Grass => tiles.push(solid(TileKind::Grass)),
                TileCode::EnemySpawn => spawns.push(spawn(SpawnKind::Enemy)),
                TileCode::CoinSpawn => spawns.push(spawn(SpawnKind::Coin)),
                TileCode::BlockSpawn => spawns.push(spawn(SpawnKind::QuestionBlock)),
            }
        }

        (TileGrid { tiles }, spawns)
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }
}

//! Per-frame snapshot handed to the render surface

use serde::Serialize;

use super::shapes::{outline, quad};
use super::vertex::{Vertex, colors};
use crate::consts::RESTART_PROMPT;
use crate::sim::{GameState, Rect, TileKind};

const BORDER: [f32; 4] = [0.0, 0.0, 0.0, 1.0];

/// How a sprite should look
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum VisualKind {
    Dirt,
    Grass,
    Goomba,
    Coin,
    QuestionBlock,
    SpentBlock,
    Player,
}

impl VisualKind {
    pub fn color(&self) -> [f32; 4] {
        match self {
            VisualKind::Dirt => colors::DIRT,
            VisualKind::Grass => colors::GRASS,
            VisualKind::Goomba => colors::GOOMBA,
            VisualKind::Coin => colors::COIN,
            VisualKind::QuestionBlock => colors::QUESTION_BLOCK,
            VisualKind::SpentBlock => colors::SPENT_BLOCK,
            VisualKind::Player => colors::PLAYER,
        }
    }

    /// Blocky sprites get a dark border
    fn bordered(&self) -> bool {
        !matches!(self, VisualKind::Goomba | VisualKind::Coin)
    }
}

/// One drawable rectangle
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Sprite {
    pub rect: Rect,
    pub kind: VisualKind,
    /// Mirror horizontally
    pub flip: bool,
}

/// Overlay text
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Hud {
    pub score: String,
    /// Present only while the game is over
    pub prompt: Option<&'static str>,
}

/// Everything the render surface needs for one frame
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Frame {
    /// Draw order: terrain, enemies, coins, blocks, player
    pub sprites: Vec<Sprite>,
    pub hud: Hud,
}

impl Frame {
    pub fn capture(state: &GameState) -> Self {
        let sprite = |rect, kind| Sprite {
            rect,
            kind,
            flip: false,
        };

        let terrain = state.tiles.tiles.iter().map(|t| {
            let kind = match t.kind {
                TileKind::Dirt => VisualKind::Dirt,
                TileKind::Grass => VisualKind::Grass,
            };
            sprite(t.rect, kind)
        });
        let enemies = state.enemies.iter().map(|e| sprite(e.rect, VisualKind::Goomba));
        let coins = state.coins.iter().map(|c| sprite(c.rect, VisualKind::Coin));
        let blocks = state.blocks.iter().map(|b| {
            let kind = if b.spent {
                VisualKind::SpentBlock
            } else {
                VisualKind::QuestionBlock
            };
            sprite(b.rect, kind)
        });
        let player = Sprite {
            rect: state.player.rect(),
            kind: VisualKind::Player,
            flip: state.player.facing_left,
        };

        let sprites = terrain
            .chain(enemies)
            .chain(coins)
            .chain(blocks)
            .chain(std::iter::once(player))
            .collect();

        Self {
            sprites,
            hud: Hud {
                score: format!("Score: {}", state.score),
                prompt: state.is_game_over().then_some(RESTART_PROMPT),
            },
        }
    }

    /// Tessellate the sprite list into a triangle list, background first
    pub fn vertices(&self, width: f32, height: f32) -> Vec<Vertex> {
        let mut vertices = Vec::with_capacity((self.sprites.len() + 1) * 30);
        vertices.extend(quad(&Rect::new(0.0, 0.0, width, height), colors::SKY));

        for sprite in &self.sprites {
            vertices.extend(quad(&sprite.rect, sprite.kind.color()));
            if sprite.kind.bordered() {
                vertices.extend(outline(&sprite.rect, 1.0, BORDER));
            }
        }

        vertices
    }
}

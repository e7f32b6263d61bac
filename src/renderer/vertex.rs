//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

/// Simple 2D vertex with position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }
}

/// Colors for game elements
pub mod colors {
    const fn rgb(r: u8, g: u8, b: u8) -> [f32; 4] {
        [r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, 1.0]
    }

    pub const SKY: [f32; 4] = rgb(107, 140, 255);
    pub const DIRT: [f32; 4] = rgb(139, 69, 19);
    pub const GRASS: [f32; 4] = rgb(0, 168, 0);
    pub const GOOMBA: [f32; 4] = rgb(139, 69, 19);
    pub const COIN: [f32; 4] = rgb(255, 216, 0);
    pub const QUESTION_BLOCK: [f32; 4] = rgb(255, 216, 0);
    pub const SPENT_BLOCK: [f32; 4] = rgb(255, 128, 0);
    pub const PLAYER: [f32; 4] = rgb(255, 0, 0);
}

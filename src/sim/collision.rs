//! Collision response against static terrain
//!
//! Movement is resolved one axis at a time against the pre-tick rectangle:
//! the horizontal probe is the body shifted by `dx` only, the vertical probe
//! the body shifted by `dy` only.

use super::level::Tile;
use super::rect::Rect;

/// Outcome of resolving a desired move against the tile grid
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Resolution {
    /// Horizontal delta to apply (0 if blocked)
    pub dx: f32,
    /// Vertical delta to apply (snapped to a tile edge on contact)
    pub dy: f32,
    /// Vertical velocity after contacts
    pub vel_y: f32,
    /// False if the player came to rest on a tile this tick
    pub airborne: bool,
    /// True if the player's head hit the underside of a tile
    pub head_bump: bool,
}

/// Resolve a desired (dx, dy) move for `body` against every solid tile.
///
/// Tiles are visited in order and each contact updates the running deltas
/// and velocity:
/// - any horizontal overlap cancels `dx` entirely
/// - a vertical overlap while rising puts the body's top on the tile's
///   bottom; while falling or at rest it puts the body's bottom on the
///   tile's top and grounds the body
///
/// Either way the vertical velocity is zeroed.
pub fn resolve_tiles(body: &Rect, dx: f32, dy: f32, vel_y: f32, tiles: &[Tile]) -> Resolution {
    let mut res = Resolution {
        dx,
        dy,
        vel_y,
        airborne: true,
        head_bump: false,
    };

    for tile in tiles {
        if tile.rect.intersects(&body.offset(res.dx, 0.0)) {
            res.dx = 0.0;
        }

        if tile.rect.intersects(&body.offset(0.0, res.dy)) {
            if res.vel_y < 0.0 {
                res.dy = tile.rect.bottom() - body.top();
                res.vel_y = 0.0;
                res.head_bump = true;
            } else {
                res.dy = tile.rect.top() - body.bottom();
                res.vel_y = 0.0;
                res.airborne = false;
            }
        }
    }

    res
}

/// Result of keeping the player inside the playfield
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenClamp {
    /// The bottom edge acted as ground
    pub on_floor: bool,
}

/// Clamp `rect` to the left, right and bottom edges of the screen.
/// The top edge is open.
pub fn clamp_to_screen(rect: &mut Rect, width: f32, height: f32) -> ScreenClamp {
    if rect.left() < 0.0 {
        rect.pos.x = 0.0;
    }
    if rect.right() > width {
        rect.pos.x = width - rect.size.x;
    }

    let on_floor = rect.bottom() > height;
    if on_floor {
        rect.pos.y = height - rect.size.y;
    }

    ScreenClamp { on_floor }
}

//! Render-surface contract
//!
//! The simulation never draws. Each frame a [`Frame`] is captured from the
//! game state: an ordered sprite list plus HUD text, which a backend can
//! draw directly or tessellate into [`Vertex`] data.

pub mod frame;
pub mod shapes;
pub mod vertex;

pub use frame::{Frame, Hud, Sprite, VisualKind};
pub use vertex::Vertex;

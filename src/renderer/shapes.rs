//! Shape generation for 2D primitives

use super::vertex::Vertex;
use crate::sim::Rect;

/// Generate vertices for a filled rectangle (two triangles)
pub fn quad(rect: &Rect, color: [f32; 4]) -> [Vertex; 6] {
    let (l, r, t, b) = (rect.left(), rect.right(), rect.top(), rect.bottom());
    [
        Vertex::new(l, t, color),
        Vertex::new(r, t, color),
        Vertex::new(l, b, color),
        Vertex::new(l, b, color),
        Vertex::new(r, t, color),
        Vertex::new(r, b, color),
    ]
}

/// Generate vertices for a rectangle outline of the given thickness
/// (four quads hugging the inside of `rect`)
pub fn outline(rect: &Rect, thickness: f32, color: [f32; 4]) -> Vec<Vertex> {
    let t = thickness.min(rect.size.x / 2.0).min(rect.size.y / 2.0);
    let inner_h = rect.size.y - 2.0 * t;
    let edges = [
        Rect::new(rect.left(), rect.top(), rect.size.x, t),
        Rect::new(rect.left(), rect.bottom() - t, rect.size.x, t),
        Rect::new(rect.left(), rect.top() + t, t, inner_h),
        Rect::new(rect.right() - t, rect.top() + t, t, inner_h),
    ];

    edges.iter().flat_map(|edge| quad(edge, color)).collect()
}

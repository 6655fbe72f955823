//! Hexagon geometry

use glam::Vec2;

/// Vertices of a pointy-top hexagon, starting at -30° and stepping 60°.
///
/// The outline is closed by joining the last vertex back to the first.
pub fn hexagon_outline(center: Vec2, radius: f32) -> [Vec2; 6] {
    std::array::from_fn(|i| {
        let theta = (60.0 * i as f32 - 30.0).to_radians();
        center + Vec2::new(radius * theta.cos(), radius * theta.sin())
    })
}

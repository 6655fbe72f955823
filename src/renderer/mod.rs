//! Drawing-surface abstraction and hexagon rendering
//!
//! The animator only ever talks to a [`Surface`]. The browser gets a Canvas
//! 2D implementation; tests and the native demo use [`RecordingSurface`].

#[cfg(target_arch = "wasm32")]
pub mod canvas2d;
pub mod color;
pub mod recording;
pub mod shapes;

#[cfg(target_arch = "wasm32")]
pub use canvas2d::CanvasSurface;
pub use color::{Rgb, StrokeStyle};
pub use recording::{DrawCall, RecordingSurface};
pub use shapes::hexagon_outline;

use crate::config::HexConfig;
use crate::sim::Shape;
use glam::Vec2;

/// A 2D target the background can be painted on
pub trait Surface {
    fn width(&self) -> u32;
    fn set_width(&mut self, width: u32);
    fn height(&self) -> u32;
    fn set_height(&mut self, height: u32);

    /// Erase the whole surface
    fn clear(&mut self);

    /// Stroke a closed polygon through `points` (last point joins the first)
    fn stroke_polygon(&mut self, points: &[Vec2], style: StrokeStyle);
}

/// Repaint the surface: clear it, then outline every shape at its opacity
pub fn render_frame<S: Surface + ?Sized>(surface: &mut S, shapes: &[Shape], config: &HexConfig) {
    surface.clear();
    for shape in shapes {
        let outline = hexagon_outline(shape.center, shape.size);
        let style = StrokeStyle::new(config.stroke_color, shape.opacity, config.line_width);
        surface.stroke_polygon(&outline, style);
    }
}

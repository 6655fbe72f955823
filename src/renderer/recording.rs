//! Headless surface that records draw calls instead of painting

use glam::Vec2;

use super::{StrokeStyle, Surface};

/// One recorded drawing operation
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    Clear,
    /// A stroked polygon; `closed` when the path joins back to its start
    Stroke {
        points: Vec<Vec2>,
        style: StrokeStyle,
        closed: bool,
    },
}

impl DrawCall {
    /// Line segments of a stroke in drawing order, including the closing one
    pub fn edges(&self) -> Vec<(Vec2, Vec2)> {
        let DrawCall::Stroke { points, closed, .. } = self else {
            return Vec::new();
        };
        let mut edges: Vec<_> = points.windows(2).map(|pair| (pair[0], pair[1])).collect();
        if let (true, [first, .., last]) = (*closed, points.as_slice()) {
            edges.push((*last, *first));
        }
        edges
    }
}

/// In-memory [`Surface`] for tests and the native demo.
///
/// Like a canvas, resizing wipes what was drawn.
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    width: u32,
    height: u32,
    calls: Vec<DrawCall>,
    frames: u64,
}

impl RecordingSurface {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            calls: Vec::new(),
            frames: 0,
        }
    }

    /// Calls since the last clear (the clear included)
    pub fn calls(&self) -> &[DrawCall] {
        &self.calls
    }

    /// Number of clears so far, i.e. frames started
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Stroke styles of the current frame
    pub fn strokes(&self) -> impl Iterator<Item = (&[Vec2], &StrokeStyle)> {
        self.calls.iter().filter_map(|call| match call {
            DrawCall::Stroke { points, style, .. } => Some((points.as_slice(), style)),
            DrawCall::Clear => None,
        })
    }
}

impl Surface for RecordingSurface {
    fn width(&self) -> u32 {
        self.width
    }

    fn set_width(&mut self, width: u32) {
        self.width = width;
        self.calls.clear();
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn set_height(&mut self, height: u32) {
        self.height = height;
        self.calls.clear();
    }

    fn clear(&mut self) {
        self.calls.clear();
        self.calls.push(DrawCall::Clear);
        self.frames += 1;
    }

    fn stroke_polygon(&mut self, points: &[Vec2], style: StrokeStyle) {
        self.calls.push(DrawCall::Stroke {
            points: points.to_vec(),
            style,
            closed: true,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::Rgb;

    #[test]
    fn test_clear_starts_new_frame() {
        let mut surface = RecordingSurface::new(100, 100);
        let style = StrokeStyle::new(Rgb::new(0, 0, 0), 0.5, 1.0);
        surface.clear();
        surface.stroke_polygon(&[Vec2::ZERO, Vec2::X, Vec2::Y], style);
        assert_eq!(surface.calls().len(), 2);

        surface.clear();
        assert_eq!(surface.calls(), &[DrawCall::Clear]);
        assert_eq!(surface.frames(), 2);
    }

    #[test]
    fn test_stroke_recorded_closed() {
        let mut surface = RecordingSurface::new(100, 100);
        let style = StrokeStyle::new(Rgb::new(0, 0, 0), 0.5, 1.0);
        surface.stroke_polygon(&[Vec2::ZERO, Vec2::X, Vec2::Y], style);

        let call = &surface.calls()[0];
        assert!(matches!(call, DrawCall::Stroke { closed: true, .. }));
        assert_eq!(
            call.edges(),
            vec![
                (Vec2::ZERO, Vec2::X),
                (Vec2::X, Vec2::Y),
                (Vec2::Y, Vec2::ZERO),
            ]
        );
        assert!(DrawCall::Clear.edges().is_empty());
    }

    #[test]
    fn test_resize_wipes() {
        let mut surface = RecordingSurface::new(100, 100);
        surface.clear();
        surface.set_width(300);
        surface.set_height(200);
        assert!(surface.calls().is_empty());
        assert_eq!((surface.width(), surface.height()), (300, 200));
    }
}

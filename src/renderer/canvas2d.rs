//! Canvas 2D implementation of [`Surface`]

use glam::Vec2;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::{StrokeStyle, Surface};

/// A `<canvas>` element and its 2D context
#[derive(Debug, Clone)]
pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    /// Wrap a canvas; `None` if it has no 2D context
    pub fn new(canvas: HtmlCanvasElement) -> Option<Self> {
        let ctx = canvas
            .get_context("2d")
            .ok()
            .flatten()?
            .dyn_into::<CanvasRenderingContext2d>()
            .ok()?;
        Some(Self { canvas, ctx })
    }

    pub fn canvas(&self) -> &HtmlCanvasElement {
        &self.canvas
    }
}

impl Surface for CanvasSurface {
    fn width(&self) -> u32 {
        self.canvas.width()
    }

    fn set_width(&mut self, width: u32) {
        self.canvas.set_width(width);
    }

    fn height(&self) -> u32 {
        self.canvas.height()
    }

    fn set_height(&mut self, height: u32) {
        self.canvas.set_height(height);
    }

    fn clear(&mut self) {
        self.ctx.clear_rect(
            0.0,
            0.0,
            self.canvas.width() as f64,
            self.canvas.height() as f64,
        );
    }

    fn stroke_polygon(&mut self, points: &[Vec2], style: StrokeStyle) {
        let Some((first, rest)) = points.split_first() else {
            return;
        };

        self.ctx.begin_path();
        self.ctx.move_to(first.x as f64, first.y as f64);
        for p in rest {
            self.ctx.line_to(p.x as f64, p.y as f64);
        }
        self.ctx.close_path();
        self.ctx.set_stroke_style_str(&style.css());
        self.ctx.set_line_width(style.line_width as f64);
        self.ctx.stroke();
    }
}

//! Stroke colors

use serde::{Deserialize, Serialize};

/// An opaque RGB color; alpha is supplied per shape
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "[u8; 3]", into = "[u8; 3]")]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// CSS `rgba(...)` string with the given alpha
    pub fn css_rgba(&self, alpha: f32) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, alpha)
    }
}

impl From<[u8; 3]> for Rgb {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self { r, g, b }
    }
}

impl From<Rgb> for [u8; 3] {
    fn from(c: Rgb) -> Self {
        [c.r, c.g, c.b]
    }
}

/// How an outline is stroked
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokeStyle {
    pub color: Rgb,
    pub alpha: f32,
    pub line_width: f32,
}

impl StrokeStyle {
    pub fn new(color: Rgb, alpha: f32, line_width: f32) -> Self {
        Self {
            color,
            alpha,
            line_width,
        }
    }

    /// CSS color for canvas `strokeStyle`
    pub fn css(&self) -> String {
        self.color.css_rgba(self.alpha)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_css_rgba() {
        let style = StrokeStyle::new(Rgb::new(159, 238, 28), 0.05, 1.0);
        assert_eq!(style.css(), "rgba(159, 238, 28, 0.05)");
    }

    #[test]
    fn test_rgb_serializes_as_triple() {
        let json = serde_json::to_string(&Rgb::new(1, 2, 3)).unwrap();
        assert_eq!(json, "[1,2,3]");
        let back: Rgb = serde_json::from_str("[9,8,7]").unwrap();
        assert_eq!(back, Rgb::new(9, 8, 7));
    }
}

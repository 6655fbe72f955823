//! The hexagon tile and its opacity pulse

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// One hexagon outline on the background
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shape {
    /// Center in surface pixels
    pub center: Vec2,
    /// Circumradius, shared by every shape of a layout pass
    pub size: f32,
    /// Current stroke alpha
    pub opacity: f32,
    /// Opacity change per frame (always positive)
    pub pulse_rate: f32,
    /// +1.0 while brightening, -1.0 while fading
    pub pulse_dir: f32,
}

impl Shape {
    pub fn new(center: Vec2, size: f32, opacity: f32, pulse_rate: f32) -> Self {
        Self {
            center,
            size,
            opacity,
            pulse_rate,
            pulse_dir: 1.0,
        }
    }

    /// Advance the pulse by one frame.
    ///
    /// The band check runs after the increment, so opacity may sit up to one
    /// `pulse_rate` outside `[min, max]` for a frame before turning back.
    pub fn pulse(&mut self, min: f32, max: f32) {
        self.opacity += self.pulse_rate * self.pulse_dir;
        if self.opacity > max || self.opacity < min {
            self.pulse_dir = -self.pulse_dir;
        }
    }
}

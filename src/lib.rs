//! hexa-bg - pulsing hexagon background for the studio site
//!
//! Core modules:
//! - `sim`: Shape model, grid layout and pulse stepping (pure, seedable)
//! - `renderer`: Drawing-surface abstraction, hexagon geometry, colors
//! - `animator`: Owns the surface and shapes, drives layout and frames
//! - `platform`: Host lookup, stop flag, RNG seeding, frame loops
//! - `config`: Visual configuration and its defaults
//! - `page`: The rest of the page's behaviours (menu, scroll, form, ...)

pub mod animator;
pub mod config;
pub mod page;
pub mod platform;
pub mod renderer;
pub mod sim;

pub use animator::Animator;
pub use config::{ConfigError, HexConfig};

/// Default visual constants
pub mod consts {
    /// Hexagon circumradius in pixels
    pub const HEX_RADIUS: f32 = 50.0;
    /// Smallest accepted radius; the candidate grid grows with 1/r²
    pub const MIN_RADIUS: f32 = 1.0;
    /// Chance that a grid cell gets a hexagon
    pub const INCLUSION_PROBABILITY: f64 = 0.15;

    /// Opacity band the pulse oscillates in
    pub const OPACITY_MIN: f32 = 0.02;
    pub const OPACITY_MAX: f32 = 0.15;
    /// Upper bound of the initial opacity draw (lower bound is OPACITY_MIN)
    pub const INITIAL_OPACITY_MAX: f32 = 0.12;

    /// Opacity change per frame
    pub const PULSE_RATE_MIN: f32 = 0.002;
    pub const PULSE_RATE_MAX: f32 = 0.007;

    /// Brand green
    pub const STROKE_COLOR: [u8; 3] = [159, 238, 28];
    pub const LINE_WIDTH: f32 = 1.0;

    /// Element id of the background canvas on the site
    pub const CANVAS_ID: &str = "hexa-bg";
}

/// Horizontal spacing of a pointy-top hex grid (hexagon width)
#[inline]
pub fn hex_width(radius: f32) -> f32 {
    3.0_f32.sqrt() * radius
}

/// Vertical size of a pointy-top hexagon
#[inline]
pub fn hex_height(radius: f32) -> f32 {
    2.0 * radius
}

/// Distance between row origins (rows overlap by a quarter)
#[inline]
pub fn row_stride(radius: f32) -> f32 {
    hex_height(radius) * 0.75
}

//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Finding the drawing surface and reading the viewport size (`Host`)
//! - Stopping the frame loop (`StopHandle`)
//! - Seeding randomness
//! - Driving frames (requestAnimationFrame on web, a plain loop natively)

pub mod headless;
#[cfg(not(target_arch = "wasm32"))]
pub mod native;
#[cfg(target_arch = "wasm32")]
pub mod web;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::renderer::Surface;

pub use headless::HeadlessHost;
#[cfg(not(target_arch = "wasm32"))]
pub use native::run_frames;

/// The environment an animator is bound into
pub trait Host {
    type Surface: Surface;

    /// Look up a drawing surface by element id
    fn surface_by_id(&self, id: &str) -> Option<Self::Surface>;

    /// Current viewport size in pixels
    fn viewport_size(&self) -> (u32, u32);
}

/// Shared "keep animating" flag.
///
/// Starts active. Clearing it stops the frame loop before its next frame;
/// it cannot be re-armed.
#[derive(Debug, Clone)]
pub struct StopHandle(Arc<AtomicBool>);

impl Default for StopHandle {
    fn default() -> Self {
        Self::new()
    }
}

impl StopHandle {
    pub fn new() -> Self {
        Self(Arc::new(AtomicBool::new(true)))
    }

    pub fn stop(&self) {
        self.0.store(false, Ordering::Release);
    }

    pub fn is_active(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}

/// Deterministic generator, for tests and reproducible demos
pub fn seeded_rng(seed: u64) -> Pcg32 {
    Pcg32::seed_from_u64(seed)
}

/// Generator seeded from the OS entropy source
#[cfg(not(target_arch = "wasm32"))]
pub fn entropy_rng() -> Pcg32 {
    Pcg32::from_os_rng()
}

/// Generator seeded from the clock and `Math.random()`
#[cfg(target_arch = "wasm32")]
pub fn entropy_rng() -> Pcg32 {
    let now = js_sys::Date::now() as u64;
    let noise = (js_sys::Math::random() * (1u64 << 53) as f64) as u64;
    Pcg32::seed_from_u64(now ^ noise.rotate_left(17))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn test_stop_handle_shared() {
        let handle = StopHandle::new();
        let other = handle.clone();
        assert!(other.is_active());
        handle.stop();
        assert!(!other.is_active());
    }

    #[test]
    fn test_seeded_rng_repeats() {
        let mut a = seeded_rng(9);
        let mut b = seeded_rng(9);
        let xs: Vec<u32> = (0..8).map(|_| a.random()).collect();
        let ys: Vec<u32> = (0..8).map(|_| b.random()).collect();
        assert_eq!(xs, ys);
    }
}

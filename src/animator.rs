//! The hexagon background animator
//!
//! Owns the drawing surface, the shape collection and the RNG. The platform
//! layer calls [`Animator::frame`] once per display refresh and
//! [`Animator::resize`] on every viewport change.

use rand::RngCore;
use rand_pcg::Pcg32;

use crate::config::HexConfig;
use crate::platform::{Host, StopHandle};
use crate::renderer::{Surface, render_frame};
use crate::sim::{Shape, layout, tick};

/// Pulsing hexagon grid bound to one surface
#[derive(Debug)]
pub struct Animator<S: Surface, R: RngCore = Pcg32> {
    surface: S,
    config: HexConfig,
    rng: R,
    shapes: Vec<Shape>,
    /// Layout passes run so far
    generation: u64,
    active: StopHandle,
}

impl<S: Surface, R: RngCore> Animator<S, R> {
    /// Size the surface to the viewport and lay out the first grid.
    ///
    /// An invalid `config` is replaced by the defaults.
    pub fn new(surface: S, viewport: (u32, u32), config: HexConfig, rng: R) -> Self {
        let mut animator = Self {
            surface,
            config: config.validated(),
            rng,
            shapes: Vec::new(),
            generation: 0,
            active: StopHandle::new(),
        };
        animator.resize(viewport.0, viewport.1);
        animator
    }

    /// Bind to the host's surface named `id`.
    ///
    /// Returns `None`, without side effects, when no such surface exists;
    /// the background is decorative and must never block the page.
    pub fn bind<H>(host: &H, id: &str, config: HexConfig, rng: R) -> Option<Self>
    where
        H: Host<Surface = S>,
    {
        let surface = host.surface_by_id(id)?;
        Some(Self::new(surface, host.viewport_size(), config, rng))
    }

    /// Match the surface to a new viewport size and rebuild the grid
    pub fn resize(&mut self, width: u32, height: u32) {
        self.surface.set_width(width);
        self.surface.set_height(height);
        self.relayout();
    }

    /// Replace the shape collection with a fresh layout of the current surface
    pub fn relayout(&mut self) {
        let (width, height) = (self.surface.width(), self.surface.height());
        self.shapes = layout(width, height, &self.config, &mut self.rng);
        self.generation += 1;
        log::debug!(
            "Hexagon layout #{}: {} shapes on {}x{}",
            self.generation,
            self.shapes.len(),
            width,
            height
        );
    }

    /// Advance every pulse one step and repaint.
    ///
    /// Returns `false` (and draws nothing) once stopped.
    pub fn frame(&mut self) -> bool {
        if !self.active.is_active() {
            return false;
        }
        tick(&mut self.shapes, &self.config);
        render_frame(&mut self.surface, &self.shapes, &self.config);
        true
    }

    /// Stop animating; later frames are no-ops
    pub fn stop(&self) {
        self.active.stop();
    }

    pub fn is_active(&self) -> bool {
        self.active.is_active()
    }

    /// A handle that can stop this animator from elsewhere
    pub fn stop_handle(&self) -> StopHandle {
        self.active.clone()
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    /// Number of layout passes run (1 after construction)
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn config(&self) -> &HexConfig {
        &self.config
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }
}

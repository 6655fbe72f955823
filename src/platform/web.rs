//! Browser binding: canvas lookup, resize listener, requestAnimationFrame loop

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use rand_pcg::Pcg32;
use wasm_bindgen::prelude::*;
use web_sys::{HtmlCanvasElement, Window};

use super::{Host, entropy_rng};
use crate::animator::Animator;
use crate::config::HexConfig;
use crate::renderer::CanvasSurface;

/// Canvas attribute holding an optional JSON [`HexConfig`]
pub const CONFIG_ATTRIBUTE: &str = "data-hex-config";

type SharedAnimator = Rc<RefCell<Animator<CanvasSurface, Pcg32>>>;
type FrameSlot = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// The browser window as a [`Host`]
#[derive(Debug, Clone)]
pub struct BrowserHost {
    window: Window,
}

impl BrowserHost {
    pub fn new() -> Option<Self> {
        Some(Self {
            window: web_sys::window()?,
        })
    }
}

impl Host for BrowserHost {
    type Surface = CanvasSurface;

    fn surface_by_id(&self, id: &str) -> Option<CanvasSurface> {
        let canvas: HtmlCanvasElement = self
            .window
            .document()?
            .get_element_by_id(id)?
            .dyn_into()
            .ok()?;
        CanvasSurface::new(canvas)
    }

    fn viewport_size(&self) -> (u32, u32) {
        inner_size(&self.window)
    }
}

fn inner_size(window: &Window) -> (u32, u32) {
    let dim = |v: Result<JsValue, JsValue>| {
        v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0).max(0.0) as u32
    };
    (dim(window.inner_width()), dim(window.inner_height()))
}

/// A running background: the animator plus the browser callbacks driving it.
///
/// Dropping it stops the animation; call [`BackgroundLoop::forget`] to let it
/// run for the rest of the page's life.
pub struct BackgroundLoop {
    window: Window,
    animator: SharedAnimator,
    frame: FrameSlot,
    frame_id: Rc<Cell<Option<i32>>>,
    on_resize: Option<Closure<dyn FnMut()>>,
}

impl BackgroundLoop {
    /// Stop animating, cancel the pending frame and detach from `resize`
    pub fn stop(&mut self) {
        self.animator.borrow().stop();

        if let Some(id) = self.frame_id.take() {
            let _ = self.window.cancel_animation_frame(id);
        }
        if let Some(on_resize) = self.on_resize.take() {
            let _ = self
                .window
                .remove_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref());
        }
        // Breaks the closure's reference to itself
        self.frame.borrow_mut().take();
    }

    pub fn is_running(&self) -> bool {
        self.animator.borrow().is_active()
    }

    /// Keep animating until the page unloads
    pub fn forget(self) {
        std::mem::forget(self);
    }
}

impl Drop for BackgroundLoop {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Start the background on the canvas with id `canvas_id`.
///
/// Returns `None` when there is no such canvas (or it has no 2D context);
/// nothing is scheduled in that case.
pub fn start(canvas_id: &str) -> Option<BackgroundLoop> {
    let host = BrowserHost::new()?;
    let surface = host.surface_by_id(canvas_id)?;

    let config = surface
        .canvas()
        .get_attribute(CONFIG_ATTRIBUTE)
        .map(|json| HexConfig::from_json_or_default(&json))
        .unwrap_or_default();

    let animator = Animator::new(surface, host.viewport_size(), config, entropy_rng());
    log::info!(
        "Hexagon background on #{}: {} shapes",
        canvas_id,
        animator.shapes().len()
    );
    let animator: SharedAnimator = Rc::new(RefCell::new(animator));
    let window = host.window.clone();

    // Resize: resize the canvas and rebuild the grid on every event
    let on_resize = {
        let animator = animator.clone();
        let window = window.clone();
        Closure::<dyn FnMut()>::new(move || {
            let (width, height) = inner_size(&window);
            animator.borrow_mut().resize(width, height);
        })
    };
    let _ = window.add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref());

    // Frame loop: the closure reschedules itself until the animator stops
    let frame: FrameSlot = Rc::new(RefCell::new(None));
    let frame_id = Rc::new(Cell::new(None));
    {
        let animator = animator.clone();
        let slot = frame.clone();
        let frame_id = frame_id.clone();
        let window = window.clone();
        *frame.borrow_mut() = Some(Closure::<dyn FnMut()>::new(move || {
            frame_id.set(None);
            if !animator.borrow_mut().frame() {
                return;
            }
            if let Some(callback) = slot.borrow().as_ref() {
                frame_id.set(
                    window
                        .request_animation_frame(callback.as_ref().unchecked_ref())
                        .ok(),
                );
            }
        }));
    }
    if let Some(callback) = frame.borrow().as_ref() {
        frame_id.set(
            window
                .request_animation_frame(callback.as_ref().unchecked_ref())
                .ok(),
        );
    }

    Some(BackgroundLoop {
        window,
        animator,
        frame,
        frame_id,
        on_resize: Some(on_resize),
    })
}

/// JavaScript entry point: `new HexagonBackground("hexa-bg")`.
///
/// Inert when the canvas is missing.
#[wasm_bindgen]
pub struct HexagonBackground {
    running: Option<BackgroundLoop>,
}

#[wasm_bindgen]
impl HexagonBackground {
    #[wasm_bindgen(constructor)]
    pub fn new(canvas_id: &str) -> HexagonBackground {
        Self {
            running: start(canvas_id),
        }
    }

    /// Stop the animation for good
    pub fn stop(&mut self) {
        if let Some(running) = self.running.as_mut() {
            running.stop();
        }
    }

    #[wasm_bindgen(js_name = isRunning)]
    pub fn is_running(&self) -> bool {
        self.running.as_ref().is_some_and(BackgroundLoop::is_running)
    }
}

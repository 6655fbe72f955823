//! hexa-bg entry point
//!
//! In the browser this wires up the page; natively it runs the background
//! headless and logs what it drew.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_app {
    use hexa_bg::consts::CANVAS_ID;
    use hexa_bg::page::dom;
    use hexa_bg::platform::web;

    pub fn run() {
        console_error_panic_hook::set_once();
        let _ = console_log::init_with_level(log::Level::Info);

        let Some(window) = web_sys::window() else {
            return;
        };
        let Some(document) = window.document() else {
            return;
        };

        dom::init_preloader(&window, &document);

        if let Some(background) = web::start(CANVAS_ID) {
            background.forget();
        }

        dom::init_mobile_menu(&document);
        dom::init_smooth_scroll(&window, &document);
        dom::init_custom_cursor(&window, &document);
        dom::init_scroll_animations(&document);
        dom::init_sticky_header(&window, &document);
        dom::init_form_validation(&window, &document);
        dom::init_back_to_top(&window, &document);
        dom::init_counter_animation(&window, &document);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_app::run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use std::time::Duration;

    use hexa_bg::consts::CANVAS_ID;
    use hexa_bg::platform::{HeadlessHost, entropy_rng, run_frames};
    use hexa_bg::{Animator, HexConfig};

    env_logger::init();

    let config = match std::env::args().nth(1) {
        Some(path) => load_config(&path),
        None => HexConfig::default(),
    };

    let host = HeadlessHost::new(1280, 720).with_surface(CANVAS_ID);
    let Some(mut animator) = Animator::bind(&host, CANVAS_ID, config, entropy_rng()) else {
        log::error!("No surface named {}", CANVAS_ID);
        return;
    };

    let frames = run_frames(&mut animator, Some(120), Duration::ZERO);
    report(&animator, frames);

    animator.resize(800, 600);
    let frames = run_frames(&mut animator, Some(120), Duration::ZERO);
    report(&animator, frames);
}

#[cfg(not(target_arch = "wasm32"))]
fn load_config(path: &str) -> hexa_bg::HexConfig {
    use hexa_bg::HexConfig;

    match std::fs::read_to_string(path) {
        Ok(json) => HexConfig::from_json(&json).unwrap_or_else(|e| {
            log::warn!("Ignoring {}: {}", path, e);
            HexConfig::default()
        }),
        Err(e) => {
            log::warn!("Could not read {}: {}", path, e);
            HexConfig::default()
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn report(animator: &hexa_bg::Animator<hexa_bg::renderer::RecordingSurface>, frames: u64) {
    use hexa_bg::renderer::Surface;

    let surface = animator.surface();
    let shapes = animator.shapes();
    let (min, max) = shapes
        .iter()
        .map(|s| s.opacity)
        .fold((f32::INFINITY, f32::NEG_INFINITY), |(lo, hi), o| {
            (lo.min(o), hi.max(o))
        });

    log::info!(
        "{}x{} layout #{}: {} shapes, {} frames, {} strokes last frame",
        surface.width(),
        surface.height(),
        animator.generation(),
        shapes.len(),
        frames,
        surface.strokes().count()
    );
    if !shapes.is_empty() {
        log::info!("Opacity range {:.3}..{:.3}", min, max);
    }
}

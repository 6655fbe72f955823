//! Page behaviours besides the background
//!
//! Each one is attached once at startup and skipped when its elements are
//! missing. The decisions (thresholds, labels, counter steps) live in plain
//! modules so they can be tested natively; `dom` wires them to the document.

pub mod counter;
pub mod cursor;
#[cfg(target_arch = "wasm32")]
pub mod dom;
pub mod form;
pub mod preloader;
pub mod scroll;

pub use counter::{Counter, CounterStep};
pub use form::{SubmitButton, SubmitPhase};
pub use scroll::HeaderStyle;

/// Visible fraction at which a `.reveal` element animates in
pub const REVEAL_THRESHOLD: f64 = 0.1;
/// Class added to revealed elements and to the open mobile menu
pub const ACTIVE_CLASS: &str = "active";

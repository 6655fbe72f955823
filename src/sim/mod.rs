//! Hexagon simulation module
//!
//! Everything that decides *what* is on screen lives here. It must stay pure:
//! - Randomness only through a caller-supplied RNG
//! - No rendering or platform dependencies
//! - A layout pass always builds a fresh collection

pub mod layout;
pub mod shape;
pub mod tick;

pub use layout::{candidate_cells, layout};
pub use shape::Shape;
pub use tick::tick;

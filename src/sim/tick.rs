//! Per-frame update of the shape collection

use super::shape::Shape;
use crate::config::HexConfig;

/// Advance every shape's pulse by one frame
pub fn tick(shapes: &mut [Shape], config: &HexConfig) {
    for shape in shapes {
        shape.pulse(config.opacity_min, config.opacity_max);
    }
}

//! Grid layout: tile the surface with pointy-top hexagons, then thin it out
//!
//! Rows run from one hexagon height above the surface to one below it, and
//! columns from one hexagon width left of it to one right of it, so tiles on
//! the edges are drawn whole even when clipped.

use glam::Vec2;
use rand::Rng;

use super::shape::Shape;
use crate::config::HexConfig;
use crate::{hex_height, hex_width, row_stride};

/// Every grid center for a `width` x `height` surface, before sparsification.
///
/// Odd rows (by floored `y / stride`) are shifted right by half a hexagon.
/// A shifted center past `width + w` is skipped; its left edge would already
/// be beyond `width + w/2`.
pub fn candidate_cells(width: u32, height: u32, radius: f32) -> Vec<Vec2> {
    if !radius.is_finite() || radius <= 0.0 {
        return Vec::new();
    }

    let w = hex_width(radius);
    let h = hex_height(radius);
    let stride = row_stride(radius);
    let x_end = width as f32 + w;
    let y_end = height as f32 + h;

    let mut cells = Vec::new();
    let mut row = 0u32;
    loop {
        let y = -h + row as f32 * stride;
        if y >= y_end {
            break;
        }

        let odd = ((y / stride).floor() as i64).rem_euclid(2) == 1;
        let x_offset = if odd { w / 2.0 } else { 0.0 };

        let mut col = 0u32;
        loop {
            let x = -w + col as f32 * w;
            if x >= x_end {
                break;
            }
            let cx = x + x_offset;
            if cx <= x_end {
                cells.push(Vec2::new(cx, y));
            }
            col += 1;
        }
        row += 1;
    }

    cells
}

/// Build a fresh shape collection for the surface.
///
/// Each candidate cell is kept independently with
/// `config.inclusion_probability`. Kept shapes start brightening, with
/// opacity in `[opacity_min, initial_opacity_max]` and pulse rate in
/// `[pulse_rate_min, pulse_rate_max]`.
///
/// A config that fails [`HexConfig::validate`] lays out nothing.
pub fn layout<R: Rng + ?Sized>(
    width: u32,
    height: u32,
    config: &HexConfig,
    rng: &mut R,
) -> Vec<Shape> {
    if config.validate().is_err() {
        return Vec::new();
    }

    candidate_cells(width, height, config.radius)
        .into_iter()
        .filter_map(|center| {
            if !rng.random_bool(config.inclusion_probability) {
                return None;
            }
            let opacity = rng.random_range(config.opacity_min..=config.initial_opacity_max);
            let pulse_rate = rng.random_range(config.pulse_rate_min..=config.pulse_rate_max);
            Some(Shape::new(center, config.radius, opacity, pulse_rate))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_rows_alternate_offset() {
        let radius = 50.0;
        let w = hex_width(radius);
        let stride = row_stride(radius);
        let cells = candidate_cells(400, 300, radius);

        // First row (y = -h) is even, second row is shifted by w/2
        let first_row: Vec<_> = cells.iter().filter(|c| c.y == -100.0).collect();
        let second_row: Vec<_> = cells
            .iter()
            .filter(|c| (c.y - (-100.0 + stride)).abs() < 1e-3)
            .collect();
        assert!((first_row[0].x - (-w)).abs() < 1e-3);
        assert!((second_row[0].x - (-w / 2.0)).abs() < 1e-3);
    }

    #[test]
    fn test_empty_surface_still_has_margin_tiles() {
        let cells = candidate_cells(0, 0, 50.0);
        assert!(!cells.is_empty());
        let w = hex_width(50.0);
        for c in &cells {
            assert!(c.x >= -w && c.x <= w);
            assert!(c.y >= -100.0 && c.y <= 100.0);
        }
    }

    #[test]
    fn test_degenerate_radius_yields_nothing() {
        assert!(candidate_cells(800, 600, 0.0).is_empty());
        assert!(candidate_cells(800, 600, -5.0).is_empty());
        assert!(candidate_cells(800, 600, f32::NAN).is_empty());
    }

    #[test]
    fn test_probability_extremes() {
        let mut rng = Pcg32::seed_from_u64(7);
        let all = candidate_cells(640, 480, 50.0).len();

        let config = HexConfig {
            inclusion_probability: 0.0,
            ..Default::default()
        };
        assert!(layout(640, 480, &config, &mut rng).is_empty());

        let config = HexConfig {
            inclusion_probability: 1.0,
            ..Default::default()
        };
        assert_eq!(layout(640, 480, &config, &mut rng).len(), all);
    }

    #[test]
    fn test_invalid_config_lays_out_nothing() {
        let mut rng = Pcg32::seed_from_u64(8);
        let configs = [
            HexConfig {
                inclusion_probability: f64::NAN,
                ..Default::default()
            },
            HexConfig {
                pulse_rate_min: f32::NAN,
                ..Default::default()
            },
            HexConfig {
                initial_opacity_max: f32::NAN,
                ..Default::default()
            },
        ];
        for config in &configs {
            assert!(layout(1280, 720, config, &mut rng).is_empty());
        }
    }

    #[test]
    fn test_initial_shape_values() {
        let mut rng = Pcg32::seed_from_u64(42);
        let config = HexConfig::default();
        let shapes = layout(1920, 1080, &config, &mut rng);
        assert!(!shapes.is_empty());

        for shape in &shapes {
            assert_eq!(shape.size, 50.0);
            assert_eq!(shape.pulse_dir, 1.0);
            assert!(shape.opacity >= 0.02 && shape.opacity <= 0.12);
            assert!(shape.pulse_rate >= 0.002 && shape.pulse_rate <= 0.007);
        }
    }

    #[test]
    fn test_inclusion_rate_converges() {
        let mut rng = Pcg32::seed_from_u64(2024);
        let config = HexConfig::default();

        let mut candidates = 0usize;
        let mut kept = 0usize;
        while candidates < 10_000 {
            candidates += candidate_cells(1920, 1080, config.radius).len();
            kept += layout(1920, 1080, &config, &mut rng).len();
        }

        let rate = kept as f64 / candidates as f64;
        assert!((0.13..=0.17).contains(&rate), "inclusion rate {rate}");
    }

    #[test]
    fn test_same_seed_same_layout() {
        let config = HexConfig::default();
        let a = layout(1024, 768, &config, &mut Pcg32::seed_from_u64(5));
        let b = layout(1024, 768, &config, &mut Pcg32::seed_from_u64(5));
        assert_eq!(a, b);
    }

    proptest! {
        #[test]
        fn prop_centers_within_margin(
            width in 0u32..2500,
            height in 0u32..1600,
            radius in 4.0f32..120.0,
        ) {
            let w = hex_width(radius);
            let h = hex_height(radius);
            let eps = 1e-2;
            for c in candidate_cells(width, height, radius) {
                prop_assert!(c.x >= -w - eps && c.x <= width as f32 + w + eps);
                prop_assert!(c.y >= -h - eps && c.y <= height as f32 + h + eps);
            }
        }
    }
}

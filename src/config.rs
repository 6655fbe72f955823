//! Background configuration
//!
//! Defaults reproduce the site's look. A page can override any subset as JSON
//! in the canvas's `data-hex-config` attribute.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;
use crate::renderer::Rgb;

/// Errors from loading or validating a [`HexConfig`]
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid `{field}`: {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

/// Visual configuration of the hexagon background
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HexConfig {
    /// Hexagon circumradius (pixels)
    pub radius: f32,
    /// Per-cell chance of drawing a hexagon (0.0 - 1.0)
    pub inclusion_probability: f64,

    // === Pulse ===
    /// Lower edge of the opacity band
    pub opacity_min: f32,
    /// Upper edge of the opacity band
    pub opacity_max: f32,
    /// Initial opacity is drawn from [opacity_min, initial_opacity_max]
    pub initial_opacity_max: f32,
    /// Slowest per-frame opacity change
    pub pulse_rate_min: f32,
    /// Fastest per-frame opacity change
    pub pulse_rate_max: f32,

    // === Stroke ===
    pub stroke_color: Rgb,
    pub line_width: f32,
}

impl Default for HexConfig {
    fn default() -> Self {
        Self {
            radius: HEX_RADIUS,
            inclusion_probability: INCLUSION_PROBABILITY,

            opacity_min: OPACITY_MIN,
            opacity_max: OPACITY_MAX,
            initial_opacity_max: INITIAL_OPACITY_MAX,
            pulse_rate_min: PULSE_RATE_MIN,
            pulse_rate_max: PULSE_RATE_MAX,

            stroke_color: Rgb::from(STROKE_COLOR),
            line_width: LINE_WIDTH,
        }
    }
}

impl HexConfig {
    /// Parse and validate a JSON config; missing fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Like [`HexConfig::from_json`], but falls back to the defaults
    pub fn from_json_or_default(json: &str) -> Self {
        match Self::from_json(json) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("Ignoring hexagon config: {}", e);
                Self::default()
            }
        }
    }

    /// `self` if it validates, otherwise the defaults (with a warning)
    pub fn validated(self) -> Self {
        match self.validate() {
            Ok(()) => self,
            Err(e) => {
                log::warn!("Ignoring hexagon config: {}", e);
                Self::default()
            }
        }
    }

    /// Check that the values describe a drawable, bounded animation
    pub fn validate(&self) -> Result<(), ConfigError> {
        fn invalid(field: &'static str, reason: &'static str) -> Result<(), ConfigError> {
            Err(ConfigError::Invalid { field, reason })
        }

        if !self.radius.is_finite() || self.radius < MIN_RADIUS {
            return invalid("radius", "must be a number of at least 1");
        }
        if !(0.0..=1.0).contains(&self.inclusion_probability) {
            return invalid("inclusion_probability", "must be within 0..=1");
        }
        if !(0.0..=1.0).contains(&self.opacity_min) || !(0.0..=1.0).contains(&self.opacity_max) {
            return invalid("opacity_min", "opacity band must be within 0..=1");
        }
        if self.opacity_min >= self.opacity_max {
            return invalid("opacity_max", "must be greater than opacity_min");
        }
        if !(self.opacity_min..=self.opacity_max).contains(&self.initial_opacity_max) {
            return invalid("initial_opacity_max", "must lie inside the opacity band");
        }
        if !self.pulse_rate_min.is_finite() || self.pulse_rate_min <= 0.0 {
            return invalid("pulse_rate_min", "must be positive");
        }
        if !(self.pulse_rate_max >= self.pulse_rate_min) || !self.pulse_rate_max.is_finite() {
            return invalid("pulse_rate_max", "must be at least pulse_rate_min");
        }
        if !self.line_width.is_finite() || self.line_width <= 0.0 {
            return invalid("line_width", "must be a positive number");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_consts() {
        let config = HexConfig::default();
        assert_eq!(config.radius, 50.0);
        assert_eq!(config.inclusion_probability, 0.15);
        assert_eq!(config.opacity_min, 0.02);
        assert_eq!(config.opacity_max, 0.15);
        assert_eq!(config.initial_opacity_max, 0.12);
        assert_eq!(config.pulse_rate_min, 0.002);
        assert_eq!(config.pulse_rate_max, 0.007);
        assert_eq!(config.stroke_color, Rgb::new(159, 238, 28));
        assert_eq!(config.line_width, 1.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = HexConfig::from_json(r#"{ "radius": 30, "stroke_color": [255, 0, 0] }"#)
            .expect("valid config");
        assert_eq!(config.radius, 30.0);
        assert_eq!(config.stroke_color, Rgb::new(255, 0, 0));
        assert_eq!(config.opacity_max, OPACITY_MAX);
    }

    #[test]
    fn test_malformed_json() {
        let err = HexConfig::from_json("{ radius: ").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_rejects_bad_values() {
        let cases = [
            (r#"{ "radius": 0 }"#, "radius"),
            (r#"{ "radius": -4 }"#, "radius"),
            (r#"{ "radius": 0.01 }"#, "radius"),
            (r#"{ "inclusion_probability": 1.5 }"#, "inclusion_probability"),
            (r#"{ "opacity_min": 0.2, "opacity_max": 0.1 }"#, "opacity_max"),
            (r#"{ "initial_opacity_max": 0.5 }"#, "initial_opacity_max"),
            (r#"{ "pulse_rate_min": 0 }"#, "pulse_rate_min"),
            (r#"{ "pulse_rate_max": 0.001 }"#, "pulse_rate_max"),
            (r#"{ "line_width": 0 }"#, "line_width"),
        ];

        for (json, expected) in cases {
            match HexConfig::from_json(json) {
                Err(ConfigError::Invalid { field, .. }) => assert_eq!(field, expected, "{json}"),
                other => panic!("expected invalid {expected} for {json}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_rejects_nan_fields() {
        let nan_configs = [
            HexConfig { radius: f32::NAN, ..HexConfig::default() },
            HexConfig { inclusion_probability: f64::NAN, ..HexConfig::default() },
            HexConfig { opacity_min: f32::NAN, ..HexConfig::default() },
            HexConfig { opacity_max: f32::NAN, ..HexConfig::default() },
            HexConfig { initial_opacity_max: f32::NAN, ..HexConfig::default() },
            HexConfig { pulse_rate_min: f32::NAN, ..HexConfig::default() },
            HexConfig { pulse_rate_max: f32::NAN, ..HexConfig::default() },
            HexConfig { line_width: f32::NAN, ..HexConfig::default() },
        ];
        for config in nan_configs {
            assert!(config.validate().is_err(), "{config:?}");
            assert_eq!(config.validated(), HexConfig::default());
        }
    }

    #[test]
    fn test_radius_floor() {
        let config = HexConfig { radius: MIN_RADIUS, ..HexConfig::default() };
        assert!(config.validate().is_ok());
        let config = HexConfig { radius: 0.5, ..HexConfig::default() };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validated_keeps_good_config() {
        let config = HexConfig { radius: 30.0, ..HexConfig::default() };
        assert_eq!(config.clone().validated(), config);
    }

    #[test]
    fn test_fallback_to_default() {
        assert_eq!(HexConfig::from_json_or_default("nope"), HexConfig::default());
        assert_eq!(
            HexConfig::from_json_or_default(r#"{ "radius": -1 }"#),
            HexConfig::default()
        );
    }
}

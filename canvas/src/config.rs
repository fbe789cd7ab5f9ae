//! Diagram configuration parsed from environment variables.
//!
//! Every knob has a default matching the stock diagrams. Overrides that are
//! present but malformed are errors, never silently replaced by the default.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use kernel::Tolerances;

use crate::consts::{CANVAS_MAX, CANVAS_MIN};
use crate::hinge::HingeLimits;

pub const ENV_SIDE_TOLERANCE: &str = "TRIGON_SIDE_TOLERANCE";
pub const ENV_RIGHT_ANGLE_BAND: &str = "TRIGON_RIGHT_ANGLE_BAND_DEG";
pub const ENV_OBTUSE_THRESHOLD: &str = "TRIGON_OBTUSE_THRESHOLD_DEG";
pub const ENV_CANVAS_MIN: &str = "TRIGON_CANVAS_MIN";
pub const ENV_CANVAS_MAX: &str = "TRIGON_CANVAS_MAX";
pub const ENV_SNAP_THRESHOLD: &str = "TRIGON_SNAP_THRESHOLD";
pub const ENV_ARM_MIN: &str = "TRIGON_ARM_MIN";
pub const ENV_ARM_MAX: &str = "TRIGON_ARM_MAX";

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} is not a number: {value:?}")]
    Invalid { var: &'static str, value: String },
    #[error("{var} must be positive and finite, got {value}")]
    OutOfRange { var: &'static str, value: f64 },
    #[error("{min_var} ({min}) must be less than {max_var} ({max})")]
    InconsistentBounds { min_var: &'static str, min: f64, max_var: &'static str, max: f64 },
}

/// Inclusive clamp region for dragged vertices.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasBounds {
    pub min: f64,
    pub max: f64,
}

impl Default for CanvasBounds {
    fn default() -> Self {
        Self { min: CANVAS_MIN, max: CANVAS_MAX }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DiagramConfig {
    pub tolerances: Tolerances,
    pub bounds: CanvasBounds,
    pub hinge: HingeLimits,
}

impl DiagramConfig {
    /// Build diagram config from environment variables.
    ///
    /// Optional:
    /// - `TRIGON_SIDE_TOLERANCE`: default 5
    /// - `TRIGON_RIGHT_ANGLE_BAND_DEG`: default 2
    /// - `TRIGON_OBTUSE_THRESHOLD_DEG`: default 92
    /// - `TRIGON_CANVAS_MIN` / `TRIGON_CANVAS_MAX`: default 10 / 390
    /// - `TRIGON_SNAP_THRESHOLD`: default 15
    /// - `TRIGON_ARM_MIN` / `TRIGON_ARM_MAX`: default 30 / 200
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| match std::env::var(key) {
            Ok(value) => Some(value),
            Err(_) => None,
        })
    }

    /// Same as [`Self::from_env`], reading variables through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let positive = |var, default| parse_positive(&lookup, var, default);

        let tolerances = Tolerances {
            side_equality: positive(ENV_SIDE_TOLERANCE, defaults.tolerances.side_equality)?,
            right_angle_band_deg: positive(ENV_RIGHT_ANGLE_BAND, defaults.tolerances.right_angle_band_deg)?,
            obtuse_threshold_deg: positive(ENV_OBTUSE_THRESHOLD, defaults.tolerances.obtuse_threshold_deg)?,
        };

        let bounds = CanvasBounds {
            min: parse_finite(&lookup, ENV_CANVAS_MIN, defaults.bounds.min)?,
            max: parse_finite(&lookup, ENV_CANVAS_MAX, defaults.bounds.max)?,
        };
        ordered(ENV_CANVAS_MIN, bounds.min, ENV_CANVAS_MAX, bounds.max)?;

        let hinge = HingeLimits {
            arm_min: positive(ENV_ARM_MIN, defaults.hinge.arm_min)?,
            arm_max: positive(ENV_ARM_MAX, defaults.hinge.arm_max)?,
            snap_threshold: positive(ENV_SNAP_THRESHOLD, defaults.hinge.snap_threshold)?,
        };
        ordered(ENV_ARM_MIN, hinge.arm_min, ENV_ARM_MAX, hinge.arm_max)?;

        Ok(Self { tolerances, bounds, hinge })
    }
}

fn parse_finite(lookup: &impl Fn(&str) -> Option<String>, var: &'static str, default: f64) -> Result<f64, ConfigError> {
    let Some(raw) = lookup(var) else {
        return Ok(default);
    };
    let value = raw
        .trim()
        .parse::<f64>()
        .map_err(|_| ConfigError::Invalid { var, value: raw.clone() })?;
    if value.is_finite() { Ok(value) } else { Err(ConfigError::OutOfRange { var, value }) }
}

fn parse_positive(lookup: &impl Fn(&str) -> Option<String>, var: &'static str, default: f64) -> Result<f64, ConfigError> {
    let value = parse_finite(lookup, var, default)?;
    if value > 0.0 { Ok(value) } else { Err(ConfigError::OutOfRange { var, value }) }
}

fn ordered(min_var: &'static str, min: f64, max_var: &'static str, max: f64) -> Result<(), ConfigError> {
    if min < max { Ok(()) } else { Err(ConfigError::InconsistentBounds { min_var, min, max_var, max }) }
}

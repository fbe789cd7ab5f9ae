//! Playback configuration.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use crate::error::SequencerError;

pub const ENV_ANIMATION_SPEED: &str = "TRIGON_ANIMATION_SPEED";

pub const MIN_TIME_SCALE: f64 = 0.01;
pub const MAX_TIME_SCALE: f64 = 100.0;

/// How fast timelines play. A scale of 2.0 halves every offset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SequencerConfig {
    time_scale: f64,
}

impl Default for SequencerConfig {
    fn default() -> Self {
        Self { time_scale: 1.0 }
    }
}

impl SequencerConfig {
    /// Validated constructor.
    ///
    /// # Errors
    ///
    /// Returns [`SequencerError::InvalidTimeScale`] for a scale outside
    /// `MIN_TIME_SCALE..=MAX_TIME_SCALE` (including NaN).
    pub fn new(time_scale: f64) -> Result<Self, SequencerError> {
        if (MIN_TIME_SCALE..=MAX_TIME_SCALE).contains(&time_scale) {
            Ok(Self { time_scale })
        } else {
            Err(SequencerError::InvalidTimeScale { value: time_scale, min: MIN_TIME_SCALE, max: MAX_TIME_SCALE })
        }
    }

    /// Build playback config from the environment.
    ///
    /// Optional:
    /// - `TRIGON_ANIMATION_SPEED`: default 1.0
    ///
    /// # Errors
    ///
    /// A present but malformed or out-of-range value is an error.
    pub fn from_env() -> Result<Self, SequencerError> {
        Self::from_lookup(|key| match std::env::var(key) {
            Ok(value) => Some(value),
            Err(_) => None,
        })
    }

    /// Same as [`Self::from_env`], reading variables through `lookup`.
    ///
    /// # Errors
    ///
    /// See [`Self::from_env`].
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, SequencerError> {
        let Some(raw) = lookup(ENV_ANIMATION_SPEED) else {
            return Ok(Self::default());
        };
        let value = raw
            .trim()
            .parse::<f64>()
            .map_err(|_| SequencerError::Invalid { var: ENV_ANIMATION_SPEED, value: raw.clone() })?;
        Self::new(value)
    }

    #[must_use]
    pub fn time_scale(&self) -> f64 {
        self.time_scale
    }
}

//! Flight tuning loaded from YAML.
//!
//! Every field has a default, so an empty document yields the stock game.
//! Key bindings are fixed and deliberately absent here.

use asteroids_common::{Color, Palette};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("half_extent must be positive and finite, got {0}")]
    HalfExtent(f32),
    #[error("{field} must be greater than zero")]
    ZeroInterval { field: &'static str },
    #[error("{field} must be finite, got {value}")]
    NotFinite { field: &'static str, value: f32 },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FlightConfig {
    /// Starting value of every velocity component.
    pub initial_velocity: f32,
    pub thrust_step: f32,
    pub yaw_step: f32,
    pub azimuth_step: f32,
    /// Added to every velocity component once per `accel_interval_ms`.
    pub accel: f32,
    pub accel_interval_ms: u64,
    pub sample_interval_ms: u64,
    pub half_extent: f32,
    pub palette: Palette,
    /// Drawn for segments without a palette color.
    pub fallback_color: Color,
    pub seed: u64,
    pub star_count: usize,
}

impl Default for FlightConfig {
    fn default() -> Self {
        Self {
            initial_velocity: 0.05,
            thrust_step: 0.001,
            yaw_step: 0.05,
            azimuth_step: 0.05,
            accel: 0.0,
            accel_interval_ms: 1000,
            sample_interval_ms: 10,
            half_extent: 5.0,
            palette: Palette::default(),
            fallback_color: Color::rgb(0xdb, 0x30, 0x69),
            seed: 0,
            star_count: 100,
        }
    }
}

impl FlightConfig {
    pub fn from_yaml_str(text: &str) -> Result<Self, ConfigError> {
        // serde_yaml reads an empty document as unit, not an empty map
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_yaml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let config = Self::from_yaml_str(&text)?;
        tracing::debug!(path = %path.display(), "loaded flight config");
        Ok(config)
    }

    pub fn to_yaml(&self) -> Result<String, ConfigError> {
        Ok(serde_yaml::to_string(self)?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.half_extent.is_finite() && self.half_extent > 0.0) {
            return Err(ConfigError::HalfExtent(self.half_extent));
        }
        if self.sample_interval_ms == 0 {
            return Err(ConfigError::ZeroInterval {
                field: "sample_interval_ms",
            });
        }
        if self.accel_interval_ms == 0 {
            return Err(ConfigError::ZeroInterval {
                field: "accel_interval_ms",
            });
        }
        let scalars = [
            ("initial_velocity", self.initial_velocity),
            ("thrust_step", self.thrust_step),
            ("yaw_step", self.yaw_step),
            ("azimuth_step", self.azimuth_step),
            ("accel", self.accel),
        ];
        for (field, value) in scalars {
            if !value.is_finite() {
                return Err(ConfigError::NotFinite { field, value });
            }
        }
        Ok(())
    }
}

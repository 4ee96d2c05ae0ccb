//! World configuration
//!
//! Toggles mutated by the UI plus the fixed constants of the pit.
//! Deserialized from camelCase JSON; every field falls back to the default
//! page setup, so `{}` is a valid config.

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const WORLD_SIZE: f32 = 500.0;
pub const DEFAULT_RADIUS: f32 = 10.0;
pub const GRAVITY_ACCEL: f32 = 0.4;
pub const FRICTION_COEFF: f32 = 0.90;
pub const MAX_BODIES: usize = 100;
pub const SPAWN_INTERVAL_MS: u32 = 1000;
pub const STATS_INTERVAL_MS: u32 = 100;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WorldConfig {
    pub gravity_enabled: bool,
    pub autospawn_enabled: bool,
    pub autoclear_enabled: bool,
    pub max_bodies: usize,

    pub world_size: f32,
    pub default_radius: f32,
    pub gravity_accel: f32,
    pub friction_coeff: f32,

    pub spawn_interval_ms: u32,
    pub stats_interval_ms: u32,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            gravity_enabled: false,
            autospawn_enabled: true,
            autoclear_enabled: true,
            max_bodies: MAX_BODIES,
            world_size: WORLD_SIZE,
            default_radius: DEFAULT_RADIUS,
            gravity_accel: GRAVITY_ACCEL,
            friction_coeff: FRICTION_COEFF,
            spawn_interval_ms: SPAWN_INTERVAL_MS,
            stats_interval_ms: STATS_INTERVAL_MS,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("max_bodies must be greater than zero")]
    ZeroCapacity,
    #[error("default radius must be positive, got {0}")]
    InvalidRadius(f32),
    #[error("world size {size} cannot hold a body of radius {radius}")]
    WorldTooSmall { size: f32, radius: f32 },
    #[error("friction coefficient must lie strictly between 0 and 1, got {0}")]
    InvalidFriction(f32),
    #[error("gravity acceleration must be positive, got {0}")]
    InvalidGravity(f32),
    #[error("{0} interval must be at least 1 ms")]
    ZeroInterval(&'static str),
    #[error("malformed config JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl WorldConfig {
    /// Parse and validate a JSON config
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: WorldConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }

    /// Reject configurations the simulation cannot run with.
    /// Comparisons are written so NaN fails them.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_bodies == 0 {
            return Err(ConfigError::ZeroCapacity);
        }
        if !(self.default_radius > 0.0) {
            return Err(ConfigError::InvalidRadius(self.default_radius));
        }
        if !(self.world_size > self.default_radius * 2.0) {
            return Err(ConfigError::WorldTooSmall {
                size: self.world_size,
                radius: self.default_radius,
            });
        }
        if !(self.friction_coeff > 0.0 && self.friction_coeff < 1.0) {
            return Err(ConfigError::InvalidFriction(self.friction_coeff));
        }
        if !(self.gravity_accel > 0.0) {
            return Err(ConfigError::InvalidGravity(self.gravity_accel));
        }
        if self.spawn_interval_ms == 0 {
            return Err(ConfigError::ZeroInterval("spawn"));
        }
        if self.stats_interval_ms == 0 {
            return Err(ConfigError::ZeroInterval("stats"));
        }
        Ok(())
    }

    /// Lowest centre height before a body counts as resting on the floor
    #[inline]
    pub fn floor(&self) -> f32 {
        self.world_size - self.default_radius
    }

    #[inline]
    pub fn center(&self) -> f32 {
        self.world_size / 2.0
    }

    /// Side length of the square of legal centre positions
    #[inline]
    pub fn spawn_region(&self) -> f32 {
        self.world_size - self.default_radius * 2.0
    }
}

use bevy::prelude::*;
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::resources::errors::ConfigError;

/// Where spawn and reset commands put the vehicle.
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LaunchConfig {
    /// Launch point on the runway [units]
    pub position: Vector3<f64>,
    pub spawn_throttle: f64,
    pub reset_throttle: f64,
}

impl Default for LaunchConfig {
    fn default() -> Self {
        Self {
            position: Vector3::new(0.0, 2.0, -50.0),
            spawn_throttle: 0.2,
            reset_throttle: 0.0,
        }
    }
}

impl LaunchConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [
            ("launch.spawn_throttle", self.spawn_throttle),
            ("launch.reset_throttle", self.reset_throttle),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::invalid(name, value));
            }
        }
        Ok(())
    }
}

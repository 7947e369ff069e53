use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::resources::errors::ConfigError;

/// Axis magnitudes produced by held keys and the virtual joystick.
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    pub key_pitch: f64,
    pub key_roll: f64,
    pub key_yaw: f64,
    /// Throttle change per tap of a touch throttle button
    pub touch_throttle_step: f64,
    /// Stick travel that maps to full deflection [px]
    pub joystick_radius: f64,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            key_pitch: 0.6,
            key_roll: 0.9,
            key_yaw: 0.5,
            touch_throttle_step: 0.15,
            joystick_radius: 50.0,
        }
    }
}

impl InputConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [
            ("input.key_pitch", self.key_pitch),
            ("input.key_roll", self.key_roll),
            ("input.key_yaw", self.key_yaw),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::invalid(name, value));
            }
        }
        if !(0.0..=1.0).contains(&self.touch_throttle_step) {
            return Err(ConfigError::invalid(
                "input.touch_throttle_step",
                self.touch_throttle_step,
            ));
        }
        if !(self.joystick_radius > 0.0) {
            return Err(ConfigError::invalid(
                "input.joystick_radius",
                self.joystick_radius,
            ));
        }
        Ok(())
    }
}

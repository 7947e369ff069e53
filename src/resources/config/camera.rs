use bevy::prelude::*;
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::resources::errors::ConfigError;

/// How the chase camera closes the gap to its anchor each frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum CameraSmoothing {
    /// Step factor `min(1, rate·dt)`; frame-rate dependent.
    Linear { rate: f64 },
    /// Step factor `1 - exp(-rate·dt)`; frame-rate independent.
    Exponential { rate: f64 },
}

impl CameraSmoothing {
    /// Fraction of the remaining distance covered in a step of `dt` seconds.
    pub fn factor(&self, dt: f64) -> f64 {
        match *self {
            CameraSmoothing::Linear { rate } => (rate * dt).clamp(0.0, 1.0),
            CameraSmoothing::Exponential { rate } => (1.0 - (-rate * dt).exp()).clamp(0.0, 1.0),
        }
    }

    fn rate(&self) -> f64 {
        match *self {
            CameraSmoothing::Linear { rate } | CameraSmoothing::Exponential { rate } => rate,
        }
    }
}

impl Default for CameraSmoothing {
    fn default() -> Self {
        CameraSmoothing::Linear { rate: 3.0 }
    }
}

#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChaseCameraConfig {
    /// Anchor offset in the vehicle's body frame
    pub offset: Vector3<f64>,
    pub smoothing: CameraSmoothing,
    /// Camera position before the first follow step
    pub initial_position: Vector3<f64>,
}

impl Default for ChaseCameraConfig {
    fn default() -> Self {
        Self {
            offset: Vector3::new(0.0, 4.0, 14.0),
            smoothing: CameraSmoothing::default(),
            initial_position: Vector3::new(0.0, 8.0, 20.0),
        }
    }
}

impl ChaseCameraConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let rate = self.smoothing.rate();
        if !(rate > 0.0 && rate.is_finite()) {
            return Err(ConfigError::invalid("camera.smoothing.rate", rate));
        }
        Ok(())
    }
}

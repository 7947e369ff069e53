use bevy::prelude::*;
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

/// Chase camera state. Only the position is smoothed; `look_at` is
/// recomputed every frame from the followed vehicle.
#[derive(Component, Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CameraComponent {
    pub position: Vector3<f64>,
    pub look_at: Vector3<f64>,
}

impl Default for CameraComponent {
    fn default() -> Self {
        Self {
            position: Vector3::new(0.0, 8.0, 20.0),
            look_at: Vector3::zeros(),
        }
    }
}

impl CameraComponent {
    pub fn new(position: Vector3<f64>) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }

    /// Distance from the camera to the point it looks at.
    pub fn distance_to_target(&self) -> f64 {
        (self.look_at - self.position).norm()
    }
}

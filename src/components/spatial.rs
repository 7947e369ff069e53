use nalgebra::{UnitQuaternion, Vector3};
use serde::{Deserialize, Serialize};

use crate::utils::{euler_xyz, forward_vector};

/// Rigid-body pose and linear velocity in a Y-up world frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpatialComponent {
    /// Position in world space [units]
    pub position: Vector3<f64>,

    /// Linear velocity in world space [units/s]
    pub velocity: Vector3<f64>,

    /// Attitude quaternion (rotation from body to world frame)
    pub attitude: UnitQuaternion<f64>,
}

impl Default for SpatialComponent {
    fn default() -> Self {
        Self {
            position: Vector3::zeros(),
            velocity: Vector3::zeros(),
            attitude: UnitQuaternion::identity(),
        }
    }
}

impl SpatialComponent {
    pub fn new(
        position: Vector3<f64>,
        velocity: Vector3<f64>,
        attitude: UnitQuaternion<f64>,
    ) -> Self {
        Self {
            position,
            velocity,
            attitude,
        }
    }

    /// Create a new spatial component at rest at a specific position
    pub fn at_position(position: Vector3<f64>) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }

    pub fn speed(&self) -> f64 {
        self.velocity.norm()
    }

    /// Unit vector along the nose.
    pub fn forward(&self) -> Vector3<f64> {
        forward_vector(&self.attitude)
    }

    /// Rotation about the lateral axis, positive nose up [rad]
    pub fn pitch(&self) -> f64 {
        euler_xyz(&self.attitude).x
    }

    /// Rotation about the vertical axis [rad]
    pub fn yaw(&self) -> f64 {
        euler_xyz(&self.attitude).y
    }

    /// Rotation about the longitudinal axis [rad]
    pub fn roll(&self) -> f64 {
        euler_xyz(&self.attitude).z
    }
}

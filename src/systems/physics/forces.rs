use nalgebra::Vector3;

use crate::components::{AircraftConfig, SpatialComponent};
use crate::resources::FlightPhysicsConfig;

/// Per-category accelerations acting on the vehicle, world frame [units/s²].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ForceBreakdown {
    pub thrust: Vector3<f64>,
    pub gravity: Vector3<f64>,
    pub lift: Vector3<f64>,
    pub drag: Vector3<f64>,
}

impl ForceBreakdown {
    pub fn total(&self) -> Vector3<f64> {
        self.thrust + self.gravity + self.lift + self.drag
    }
}

/// Accumulate thrust, gravity, lift and drag for the current pose.
///
/// Lift only acts upward and only while the nose is below the horizon with
/// positive forward speed; the pitch angle stands in for angle of attack.
pub fn accumulate_forces(
    spatial: &SpatialComponent,
    throttle: f64,
    aircraft: &AircraftConfig,
    physics: &FlightPhysicsConfig,
) -> ForceBreakdown {
    let forward = spatial.forward();

    let thrust = forward * (throttle * aircraft.max_thrust_acceleration());
    let gravity = Vector3::new(0.0, -physics.gravity, 0.0);

    let forward_speed = spatial.velocity.dot(&forward).max(0.0);
    let lift_magnitude =
        (aircraft.lift_coefficient * forward_speed * (-spatial.pitch()).sin()).max(0.0);
    let lift = Vector3::new(0.0, lift_magnitude, 0.0);

    let drag = -physics.drag_coefficient * spatial.velocity.norm() * spatial.velocity;

    ForceBreakdown {
        thrust,
        gravity,
        lift,
        drag,
    }
}

use bevy::prelude::*;
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::components::SpatialComponent;

/// Whether the vehicle is resting on the ground or flying.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FlightPhase {
    #[default]
    Grounded,
    Airborne,
}

impl fmt::Display for FlightPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FlightPhase::Grounded => f.write_str("grounded"),
            FlightPhase::Airborne => f.write_str("airborne"),
        }
    }
}

/// Rigid-body state of the controlled vehicle.
///
/// Mutated only by the flight integrator and by spawn/reset commands.
#[derive(Component, Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VehicleState {
    /// Position, velocity and attitude.
    pub spatial: SpatialComponent,
    /// Engine setting in [0, 1], persists across frames.
    pub throttle: f64,
    /// Ground contact state after the last step.
    pub phase: FlightPhase,
}

impl Default for VehicleState {
    fn default() -> Self {
        Self {
            spatial: SpatialComponent::default(),
            throttle: 0.0,
            phase: FlightPhase::Grounded,
        }
    }
}

impl VehicleState {
    /// Vehicle at rest at `position` with the given throttle setting.
    pub fn at_rest(position: Vector3<f64>, throttle: f64) -> Self {
        Self {
            spatial: SpatialComponent::at_position(position),
            throttle: throttle.clamp(0.0, 1.0),
            phase: FlightPhase::Grounded,
        }
    }

    /// Move back to `position` and stop, keeping the attitude.
    pub fn relaunch(&mut self, position: Vector3<f64>, throttle: f64) {
        self.spatial.position = position;
        self.spatial.velocity = Vector3::zeros();
        self.throttle = throttle.clamp(0.0, 1.0);
    }

    pub fn speed(&self) -> f64 {
        self.spatial.speed()
    }

    pub fn altitude(&self) -> f64 {
        self.spatial.position.y
    }

    pub fn is_airborne(&self) -> bool {
        self.phase == FlightPhase::Airborne
    }
}

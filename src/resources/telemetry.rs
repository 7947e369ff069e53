use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::components::{FlightPhase, VehicleState};
use crate::utils::{rad_to_deg, wrap_degrees};

/// Read-only values shown on the HUD, refreshed after the camera update.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct FlightTelemetry {
    /// |velocity| [units/s]
    pub speed: f64,
    /// position.y [units]
    pub altitude: f64,
    /// Yaw in degrees, in [0, 360)
    pub heading: f64,
    pub throttle: f64,
    pub phase: FlightPhase,
}

impl FlightTelemetry {
    pub fn from_state(state: &VehicleState) -> Self {
        Self {
            speed: state.speed(),
            altitude: state.altitude(),
            heading: wrap_degrees(rad_to_deg(state.spatial.yaw())),
            throttle: state.throttle,
            phase: state.phase,
        }
    }
}

impl fmt::Display for FlightTelemetry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Rounding can carry 359.6 up to 360
        let heading = self.heading.round() as u32 % 360;
        write!(
            f,
            "SPD {:.1}  ALT {:.1}  HDG {}  THR {:.0}%",
            self.speed,
            self.altitude,
            heading,
            self.throttle * 100.0
        )
    }
}

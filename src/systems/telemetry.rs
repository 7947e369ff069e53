use bevy::prelude::*;

use crate::components::{single_active, PlayerController, VehicleState};
use crate::resources::FlightTelemetry;

/// Publishes the piloted vehicle's HUD values after the camera update.
/// The HUD holds its last values while no single pilot is active.
pub fn telemetry_system(
    query: Query<(&VehicleState, &PlayerController)>,
    mut telemetry: ResMut<FlightTelemetry>,
) {
    if let Ok(state) = single_active(query.iter().map(|(state, c)| (state, *c))) {
        *telemetry = FlightTelemetry::from_state(state);
    }
}

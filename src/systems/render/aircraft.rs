use bevy::prelude::*;

use super::{to_render_quat, to_render_vec};
use crate::components::VehicleState;

/// Copies each vehicle's pose into its render transform.
pub fn vehicle_transform_system(mut query: Query<(&VehicleState, &mut Transform)>) {
    for (state, mut transform) in query.iter_mut() {
        transform.translation = to_render_vec(&state.spatial.position);
        transform.rotation = to_render_quat(&state.spatial.attitude);
    }
}

use bevy::prelude::*;
use nalgebra::Vector3;

use crate::components::{
    single_active, CameraComponent, PilotLookupError, PlayerController, VehicleState,
};
use crate::resources::{ChaseCameraConfig, FrameDelta};
use crate::utils::lerp_vector;

/// Moves every chase camera toward its anchor behind the active pilot's
/// vehicle. Must run after the integrator so cameras see this frame's pose.
pub fn camera_follow_system(
    mut cameras: Query<&mut CameraComponent>,
    target_query: Query<(&VehicleState, &PlayerController)>,
    config: Res<ChaseCameraConfig>,
    delta: Res<FrameDelta>,
) {
    let targets = target_query.iter().map(|(state, c)| (state, *c));
    let vehicle = match single_active(targets) {
        Ok(vehicle) => vehicle,
        Err(PilotLookupError::NoActivePilot) => {
            debug!("Camera holds position, {}", PilotLookupError::NoActivePilot);
            return;
        }
        Err(e) => {
            warn!("Camera cannot pick a target: {}", e);
            return;
        }
    };

    for mut camera in cameras.iter_mut() {
        *camera = follow(&camera, vehicle, &config, delta.seconds);
    }
}

/// World-space point the camera is pulled toward: the body-frame offset
/// rotated with the vehicle and attached to its position.
pub fn chase_anchor(vehicle: &VehicleState, offset: &Vector3<f64>) -> Vector3<f64> {
    vehicle.spatial.position + vehicle.spatial.attitude * offset
}

/// Advance the camera by one frame of `dt` seconds.
pub fn follow(
    camera: &CameraComponent,
    vehicle: &VehicleState,
    config: &ChaseCameraConfig,
    dt: f64,
) -> CameraComponent {
    let dt = if dt.is_finite() { dt.max(0.0) } else { 0.0 };
    let desired = chase_anchor(vehicle, &config.offset);
    let factor = config.smoothing.factor(dt);

    CameraComponent {
        position: lerp_vector(&camera.position, &desired, factor),
        look_at: vehicle.spatial.position,
    }
}

use approx::assert_relative_eq;
use arcade_flyer::{
    components::{CameraComponent, SpatialComponent, VehicleState},
    resources::FlightPhysicsConfig,
};
use nalgebra::Vector3;

/// Assert that a spatial component's state is valid
#[track_caller]
pub fn assert_spatial_valid(spatial: &SpatialComponent) {
    assert!(
        spatial.position.iter().all(|x| x.is_finite()),
        "Position is not finite: {:?}",
        spatial.position
    );
    assert!(
        spatial.velocity.iter().all(|x| x.is_finite()),
        "Velocity is not finite: {:?}",
        spatial.velocity
    );
    assert_relative_eq!(spatial.attitude.as_ref().norm(), 1.0, epsilon = 1e-9);
}

/// Assert the integrator's post-step guarantees
#[track_caller]
pub fn assert_vehicle_state_valid(state: &VehicleState, physics: &FlightPhysicsConfig) {
    assert_spatial_valid(&state.spatial);
    assert!(
        (0.0..=1.0).contains(&state.throttle),
        "Throttle {} out of range",
        state.throttle
    );
    assert!(
        state.speed() <= physics.max_speed + 1e-9,
        "Speed {} above limit",
        state.speed()
    );
    assert!(
        state.altitude() >= physics.ground_clearance,
        "Altitude {} below ground clearance",
        state.altitude()
    );
}

#[track_caller]
pub fn assert_camera_valid(camera: &CameraComponent) {
    assert!(camera.position.iter().all(|x| x.is_finite()));
    assert!(camera.look_at.iter().all(|x| x.is_finite()));
}

/// Assert that two positions are approximately equal
#[track_caller]
pub fn assert_position_eq(actual: &Vector3<f64>, expected: &Vector3<f64>, epsilon: f64) {
    assert_relative_eq!(actual.x, expected.x, epsilon = epsilon);
    assert_relative_eq!(actual.y, expected.y, epsilon = epsilon);
    assert_relative_eq!(actual.z, expected.z, epsilon = epsilon);
}

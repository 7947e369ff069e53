use crate::components::{FlightPhase, SpatialComponent};
use crate::resources::FlightPhysicsConfig;

/// Keep the vehicle above the ground plane and decide its flight phase.
///
/// Below the clearance floor the vehicle is clamped back onto it. If it is
/// fast enough and close to level it gets an upward nudge proportional to its
/// excess speed; otherwise vertical motion is cancelled and rolling friction
/// bleeds off speed.
pub fn resolve_ground_contact(
    spatial: &mut SpatialComponent,
    physics: &FlightPhysicsConfig,
) -> FlightPhase {
    if spatial.position.y >= physics.ground_clearance {
        return FlightPhase::Airborne;
    }

    spatial.position.y = physics.ground_clearance;

    let speed = spatial.speed();
    if can_lift_off(speed, spatial.pitch(), physics) {
        spatial.position.y += physics.liftoff_gain * (speed - physics.liftoff_speed);
        FlightPhase::Airborne
    } else {
        spatial.velocity.y = 0.0;
        spatial.velocity *= physics.ground_friction;
        FlightPhase::Grounded
    }
}

/// Takeoff predicate: above liftoff speed with a shallow enough pitch.
pub fn can_lift_off(speed: f64, pitch: f64, physics: &FlightPhysicsConfig) -> bool {
    speed > physics.liftoff_speed && pitch.abs() < physics.max_takeoff_pitch
}

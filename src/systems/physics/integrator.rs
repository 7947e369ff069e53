use bevy::prelude::*;
use nalgebra::{UnitQuaternion, Vector3};

use super::forces::accumulate_forces;
use super::ground::resolve_ground_contact;
use crate::components::{
    AircraftConfig, ControlAxes, PlayerController, SpatialComponent, VehicleState,
};
use crate::resources::{FlightPhysicsConfig, FrameDelta, InputSnapshot};
use crate::utils::{clamp_magnitude, rotation_from_euler_xyz};

/// System advancing every vehicle by one clamped frame.
///
/// The piloted vehicle consumes the sampled input; vehicles without an
/// active controller fly hands-off with the throttle left alone.
pub fn flight_integrator_system(
    mut query: Query<(
        Entity,
        &mut VehicleState,
        &AircraftConfig,
        Option<&PlayerController>,
    )>,
    input: Res<InputSnapshot>,
    delta: Res<FrameDelta>,
    physics: Res<FlightPhysicsConfig>,
) {
    let dt = delta.seconds;

    for (entity, mut state, aircraft, controller) in query.iter_mut() {
        let piloted = controller.is_some_and(|c| c.active);
        let (axes, throttle_delta) = if piloted {
            (input.axes, input.throttle_delta(&physics, dt))
        } else {
            (ControlAxes::neutral(), 0.0)
        };

        let next = advance(&state, aircraft, &physics, &axes, throttle_delta, dt);
        if next.phase != state.phase {
            info!(
                "{:?} {} -> {} at speed {:.1}",
                entity,
                state.phase,
                next.phase,
                next.speed()
            );
        }
        *state = next;
    }
}

/// Advance a vehicle state by one explicit Euler step of `dt` seconds.
///
/// Pure function of its inputs. Afterwards the throttle lies in [0, 1], the
/// attitude is a unit quaternion, the speed does not exceed
/// `physics.max_speed` and the altitude is at least `physics.ground_clearance`.
pub fn advance(
    state: &VehicleState,
    aircraft: &AircraftConfig,
    physics: &FlightPhysicsConfig,
    axes: &ControlAxes,
    throttle_delta: f64,
    dt: f64,
) -> VehicleState {
    let dt = if dt.is_finite() { dt.max(0.0) } else { 0.0 };
    let throttle_delta = if throttle_delta.is_finite() {
        throttle_delta
    } else {
        0.0
    };

    let mut next = *state;
    next.throttle = (state.throttle + throttle_delta).clamp(0.0, 1.0);
    if dt == 0.0 {
        // Nothing moves, but the limits still apply to whatever came in
        clamp_magnitude(&mut next.spatial.velocity, physics.max_speed);
        if next.spatial.position.y < physics.ground_clearance {
            next.phase = resolve_ground_contact(&mut next.spatial, physics);
        }
        return next;
    }

    update_attitude(&mut next.spatial, axes, physics, dt);

    let forces = accumulate_forces(&next.spatial, next.throttle, aircraft, physics);
    integrate_motion(&mut next.spatial, forces.total(), physics.max_speed, dt);

    next.phase = resolve_ground_contact(&mut next.spatial, physics);
    next
}

/// Compose this frame's small rotation into the attitude, in the body frame.
fn update_attitude(
    spatial: &mut SpatialComponent,
    axes: &ControlAxes,
    physics: &FlightPhysicsConfig,
    dt: f64,
) {
    let pitch_rate = axes.pitch * physics.pitch_gain;
    let roll_rate = axes.roll * physics.roll_gain;
    let yaw_rate = axes.yaw * physics.yaw_gain;

    let increment = rotation_from_euler_xyz(pitch_rate * dt, yaw_rate * dt, roll_rate * dt);

    // Renormalize so repeated composition cannot drift off the unit sphere
    spatial.attitude =
        UnitQuaternion::new_normalize((spatial.attitude * increment).into_inner());
}

fn integrate_motion(
    spatial: &mut SpatialComponent,
    acceleration: Vector3<f64>,
    max_speed: f64,
    dt: f64,
) {
    spatial.velocity += acceleration * dt;
    clamp_magnitude(&mut spatial.velocity, max_speed);
    spatial.position += spatial.velocity * dt;
}

use bevy::prelude::*;

use crate::resources::{FlightPhysicsConfig, FrameDelta};

/// Measures this tick's elapsed time and clamps it for the integrator.
///
/// A configured fixed timestep replaces the measured frame time, which keeps
/// headless runs and tests deterministic.
pub fn frame_clock_system(
    time: Res<Time>,
    physics: Res<FlightPhysicsConfig>,
    mut delta: ResMut<FrameDelta>,
) {
    let raw = physics
        .fixed_timestep
        .unwrap_or_else(|| time.delta_secs_f64());
    let dt = physics.clamp_frame_delta(raw);

    if raw > dt {
        debug!("Frame delta {:.3}s clamped to {:.3}s", raw, dt);
    }
    delta.advance(dt);
}

use bevy::prelude::*;
use nalgebra::Vector2;

use crate::components::ControlAxes;
use crate::resources::{InputConfig, InputSnapshot, TouchInput};

/// Samples keyboard and touch state into this tick's `InputSnapshot`.
///
/// Touch throttle taps are consumed. Runs without a keyboard resource when
/// the app has no input plugin (headless runs, tests).
pub fn input_sampling_system(
    keyboard: Option<Res<ButtonInput<KeyCode>>>,
    mut touch: ResMut<TouchInput>,
    config: Res<InputConfig>,
    mut snapshot: ResMut<InputSnapshot>,
) {
    *snapshot = sample_input(keyboard.as_deref(), &touch, &config);
    touch.throttle_taps = 0;
}

/// Build a snapshot from raw device state.
///
/// A held key decides its axis; otherwise the joystick does.
pub fn sample_input(
    keyboard: Option<&ButtonInput<KeyCode>>,
    touch: &TouchInput,
    config: &InputConfig,
) -> InputSnapshot {
    let pressed = |key: KeyCode| keyboard.is_some_and(|k| k.pressed(key));

    let (stick_roll, stick_pitch) = touch
        .stick
        .map(|offset| joystick_axes(&offset, config.joystick_radius))
        .unwrap_or((0.0, 0.0));

    let roll = held_axis(&[
        (pressed(KeyCode::KeyA), -config.key_roll),
        (pressed(KeyCode::KeyD), config.key_roll),
    ])
    .unwrap_or(stick_roll);
    let pitch = held_axis(&[
        (pressed(KeyCode::ArrowUp), config.key_pitch),
        (pressed(KeyCode::ArrowDown), -config.key_pitch),
    ])
    .unwrap_or(stick_pitch);
    let yaw = held_axis(&[
        (pressed(KeyCode::KeyQ), config.key_yaw),
        (pressed(KeyCode::KeyE), -config.key_yaw),
    ])
    .unwrap_or(0.0);

    InputSnapshot {
        throttle_up: pressed(KeyCode::KeyW),
        throttle_down: pressed(KeyCode::KeyS),
        throttle_step: f64::from(touch.throttle_taps) * config.touch_throttle_step,
        axes: ControlAxes::new(pitch, roll, yaw),
    }
}

/// Value of the last held key in `keys`, `None` when none is held.
fn held_axis(keys: &[(bool, f64)]) -> Option<f64> {
    keys.iter()
        .rev()
        .find(|(held, _)| *held)
        .map(|(_, value)| *value)
}

/// Map a stick offset in screen pixels to `(roll, pitch)` in [-1, 1].
///
/// Travel is limited to `radius`; pushing the stick up (negative screen y)
/// raises the nose.
pub fn joystick_axes(offset: &Vector2<f64>, radius: f64) -> (f64, f64) {
    let distance = offset.norm();
    let travel = distance.min(radius);
    // Offsets under a pixel are scaled rather than normalized
    let direction = offset / distance.max(1.0);
    let stick = direction * travel;
    (stick.x / radius, -stick.y / radius)
}

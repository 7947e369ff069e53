use approx::assert_relative_eq;
use arcade_flyer::components::{PlayerController, VehicleState};
use arcade_flyer::resources::{InputSnapshot, TouchInput};
use bevy::prelude::*;
use nalgebra::Vector2;

use crate::common::{vehicle_state, TestAppBuilder};

const DT: f64 = 0.016;

#[test]
fn test_throttle_ramps_while_held() {
    let mut app = TestAppBuilder::new().build();
    app.press(KeyCode::KeyW);
    app.run_steps(50);

    assert_relative_eq!(vehicle_state(&mut app).throttle, 0.2 + 50.0 * 0.6 * DT, epsilon = 1e-9);
}

#[test]
fn test_throttle_saturates() {
    let mut app = TestAppBuilder::new().build();
    app.press(KeyCode::KeyW);
    app.run_steps(200);
    assert_eq!(vehicle_state(&mut app).throttle, 1.0);

    app.release(KeyCode::KeyW);
    app.press(KeyCode::KeyS);
    app.run_steps(200);
    assert_eq!(vehicle_state(&mut app).throttle, 0.0);
}

#[test]
fn test_throttle_decreases_faster() {
    let mut app = TestAppBuilder::new().build();
    app.press(KeyCode::KeyS);
    app.run_steps(10);

    assert_relative_eq!(vehicle_state(&mut app).throttle, 0.2 - 10.0 * 0.8 * DT, epsilon = 1e-9);
}

#[test]
fn test_touch_taps_are_consumed() {
    let mut app = TestAppBuilder::new().build();
    {
        let mut touch = app.get_state_mut::<TouchInput>().unwrap();
        touch.press_throttle_up();
        touch.press_throttle_up();
    }
    app.run_frame();
    assert_relative_eq!(vehicle_state(&mut app).throttle, 0.5, epsilon = 1e-12);
    assert_eq!(app.get_state::<TouchInput>().unwrap().throttle_taps, 0);

    app.run_frame();
    assert_relative_eq!(vehicle_state(&mut app).throttle, 0.5, epsilon = 1e-12);
}

#[test]
fn test_joystick_drives_axes() {
    let mut app = TestAppBuilder::new().build();
    app.get_state_mut::<TouchInput>()
        .unwrap()
        .move_stick(Vector2::new(25.0, -100.0));
    app.run_frame();

    let snapshot = *app.get_state::<InputSnapshot>().unwrap();
    assert!(snapshot.axes.pitch > 0.0);
    assert!(snapshot.axes.roll > 0.0);
    assert_relative_eq!(
        snapshot.axes.roll.hypot(snapshot.axes.pitch),
        1.0,
        epsilon = 1e-9
    );

    app.get_state_mut::<TouchInput>().unwrap().release_stick();
    app.run_frame();
    assert!(app.get_state::<InputSnapshot>().unwrap().axes.is_neutral());
}

#[test]
fn test_pitch_key_raises_nose() {
    let mut app = TestAppBuilder::new().build();
    app.press(KeyCode::ArrowUp);
    app.run_steps(10);

    // Ground contact never touches the attitude
    assert_relative_eq!(
        vehicle_state(&mut app).spatial.pitch(),
        10.0 * 0.6 * 0.8 * DT,
        epsilon = 1e-9
    );
}

#[test]
fn test_disabled_controller_ignores_input() {
    let mut app = TestAppBuilder::new().build();
    *app.query_single_mut::<PlayerController>().unwrap() = PlayerController::disabled();

    app.press(KeyCode::KeyW);
    app.press(KeyCode::KeyA);
    app.run_steps(30);

    let state = *app.query_single::<VehicleState>().unwrap();
    assert_eq!(state.throttle, 0.2);
    assert_relative_eq!(state.spatial.roll(), 0.0, epsilon = 1e-12);

    app.query_single_mut::<PlayerController>().unwrap().enable();
    app.run_steps(10);
    assert_relative_eq!(vehicle_state(&mut app).throttle, 0.2 + 10.0 * 0.6 * DT, epsilon = 1e-9);
}

use approx::assert_relative_eq;
use arcade_flyer::{
    components::{AircraftConfig, AircraftPreset, CameraComponent, PlayerController, VehicleState},
    plugins::FlightCommand,
    resources::{FlightTelemetry, FrameDelta},
    systems::to_render_vec,
};
use bevy::prelude::*;
use nalgebra::Vector3;
use pretty_assertions::assert_eq;

use crate::common::{
    assert_camera_valid, assert_position_eq, create_idle_launch, create_linear_camera,
    expected_anchor, settle_on_runway, vehicle_state, TestAppBuilder,
};

#[test]
fn test_camera_looks_at_this_ticks_position() {
    let mut app = TestAppBuilder::new().build();
    app.press(KeyCode::KeyW);

    for _ in 0..30 {
        app.run_frame();
        let position = vehicle_state(&mut app).spatial.position;
        let camera = *app.query_single::<CameraComponent>().unwrap();
        assert_camera_valid(&camera);
        assert_eq!(camera.look_at, position);
    }
}

#[test]
fn test_camera_settles_behind_resting_vehicle() {
    let mut app = TestAppBuilder::new()
        .with_launch(create_idle_launch())
        .build();
    settle_on_runway(&mut app);
    app.run_steps(600);

    let state = vehicle_state(&mut app);
    assert_eq!(state.speed(), 0.0);

    let camera = *app.query_single::<CameraComponent>().unwrap();
    assert_position_eq(&camera.position, &expected_anchor(&state.spatial.position), 1e-6);
}

#[test]
fn test_camera_moves_a_fraction_per_tick() {
    let mut app = TestAppBuilder::new()
        .with_camera(create_linear_camera(3.0))
        .with_launch(create_idle_launch())
        .build();

    let first = app.query_single::<CameraComponent>().unwrap().position;
    app.run_frame();
    let second = app.query_single::<CameraComponent>().unwrap().position;
    let anchor = expected_anchor(&vehicle_state(&mut app).spatial.position);

    // Moves toward the anchor without overshooting
    assert!((second - anchor).norm() < (first - anchor).norm());
    assert!((second - first).norm() < (first - anchor).norm());
}

#[test]
fn test_render_transforms_mirror_state() {
    let mut app = TestAppBuilder::new().build();
    app.press(KeyCode::KeyW);
    app.press(KeyCode::KeyQ);
    app.run_steps(20);

    let state = vehicle_state(&mut app);
    let vehicle_transform = app.transform_of::<VehicleState>().unwrap();
    assert_eq!(
        vehicle_transform.translation,
        to_render_vec(&state.spatial.position)
    );

    let camera = *app.query_single::<CameraComponent>().unwrap();
    let camera_transform = app.transform_of::<CameraComponent>().unwrap();
    assert_eq!(camera_transform.translation, to_render_vec(&camera.position));
}

#[test]
fn test_telemetry_reflects_vehicle() {
    let mut app = TestAppBuilder::new().build();
    app.press(KeyCode::KeyW);
    app.run_steps(40);

    let state = vehicle_state(&mut app);
    let telemetry = *app.get_state::<FlightTelemetry>().unwrap();
    assert_eq!(telemetry.speed, state.speed());
    assert_eq!(telemetry.altitude, state.altitude());
    assert_eq!(telemetry.throttle, state.throttle);
    assert_eq!(telemetry.phase, state.phase);
    assert!((0.0..360.0).contains(&telemetry.heading));
}

#[test]
fn test_long_frames_are_clamped() {
    let mut app = TestAppBuilder::new().with_time_step(0.5).build();

    let delta = *app.get_state::<FrameDelta>().unwrap();
    assert_relative_eq!(delta.seconds, 0.06);
    assert_eq!(delta.frame, 1);

    // A single clamped tick of free fall
    assert_relative_eq!(
        vehicle_state(&mut app).altitude(),
        2.0 - 9.81 * 0.06 * 0.06,
        epsilon = 1e-9
    );
}

#[test]
fn test_frame_counter_advances() {
    let mut app = TestAppBuilder::new().build();
    app.run_steps(5);
    assert_eq!(app.get_state::<FrameDelta>().unwrap().frame, 6);
}

#[test]
fn test_parked_vehicle_does_not_steal_camera() {
    let mut app = TestAppBuilder::new().build();
    let parked = VehicleState::at_rest(Vector3::new(100.0, 1.0, 0.0), 0.0);
    app.app.world_mut().spawn((
        parked,
        AircraftConfig::storm(),
        PlayerController::disabled(),
        Transform::default(),
    ));

    app.press(KeyCode::KeyW);
    app.run_steps(30);

    let piloted = vehicle_state(&mut app);
    let camera = *app.query_single::<CameraComponent>().unwrap();
    assert_eq!(camera.look_at, piloted.spatial.position);
    assert!(camera.position.x.abs() < 1.0);

    let telemetry = *app.get_state::<FlightTelemetry>().unwrap();
    assert_eq!(telemetry.throttle, piloted.throttle);
    assert_eq!(telemetry.altitude, piloted.altitude());
}

#[test]
fn test_commands_reach_only_the_active_pilot() {
    let mut app = TestAppBuilder::new().build();
    let parked = app
        .app
        .world_mut()
        .spawn((
            VehicleState::at_rest(Vector3::new(100.0, 1.0, 0.0), 0.0),
            AircraftConfig::sport(),
            PlayerController::disabled(),
            Transform::default(),
        ))
        .id();

    app.send_command(FlightCommand::SelectPreset(AircraftPreset::Storm));
    app.run_frame();

    assert_eq!(
        app.app.world().get::<AircraftConfig>(parked),
        Some(&AircraftConfig::sport())
    );
    let world = app.app.world_mut();
    let mut query = world.query::<(&AircraftConfig, &PlayerController)>();
    let piloted: Vec<_> = query
        .iter(world)
        .filter(|(_, c)| c.active)
        .map(|(aircraft, _)| aircraft.name.clone())
        .collect();
    assert_eq!(piloted, vec!["storm".to_string()]);
}

#[test]
fn test_camera_holds_without_active_pilot() {
    let mut app = TestAppBuilder::new().build();
    *app.query_single_mut::<PlayerController>().unwrap() = PlayerController::disabled();
    let before = *app.query_single::<CameraComponent>().unwrap();

    app.run_steps(20);

    let after = *app.query_single::<CameraComponent>().unwrap();
    assert_eq!(after, before);
}

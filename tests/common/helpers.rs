use arcade_flyer::components::{single_active, PlayerController, VehicleState};

use crate::common::TestApp;

/// Runs frames until `condition` holds, up to `max_steps`
pub fn wait_for_condition<F>(test_app: &mut TestApp, condition: F, max_steps: usize) -> bool
where
    F: Fn(&mut TestApp) -> bool,
{
    for _ in 0..max_steps {
        if condition(test_app) {
            return true;
        }
        test_app.run_frame();
    }
    false
}

/// Copy of the active pilot's vehicle state
pub fn vehicle_state(test_app: &mut TestApp) -> VehicleState {
    let world = test_app.app.world_mut();
    let mut query = world.query::<(&VehicleState, &PlayerController)>();
    *single_active(query.iter(world).map(|(state, c)| (state, *c)))
        .expect("Piloted vehicle not found")
}

/// Runs until the vehicle has dropped from the launch point onto the runway
pub fn settle_on_runway(test_app: &mut TestApp) {
    let settled = wait_for_condition(
        test_app,
        |app| vehicle_state(app).phase == arcade_flyer::components::FlightPhase::Grounded,
        300,
    );
    assert!(settled, "Vehicle never touched down");
}

#![allow(dead_code)]

mod assertions;
mod fixtures;
mod helpers;

// Re-export
pub use assertions::{
    assert_camera_valid, assert_position_eq, assert_spatial_valid, assert_vehicle_state_valid,
};

pub use helpers::*;

pub use fixtures::*;
pub use test_app::{TestApp, TestAppBuilder};

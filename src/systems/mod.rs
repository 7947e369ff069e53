mod camera;
mod clock;
mod controller;
pub mod physics;
mod render;
mod telemetry;

pub use camera::{camera_follow_system, chase_anchor, follow};
pub use clock::frame_clock_system;
pub use controller::{input_sampling_system, joystick_axes, sample_input};
pub use physics::{advance, flight_integrator_system};
pub use render::{
    camera_transform_system, to_render_quat, to_render_vec, vehicle_transform_system,
};
pub use telemetry::telemetry_system;

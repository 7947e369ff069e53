mod input;

pub use input::{input_sampling_system, joystick_axes, sample_input};

pub mod config;
pub mod errors;
mod input;
mod telemetry;
mod time;

pub use config::{
    CameraSmoothing, ChaseCameraConfig, FlightPhysicsConfig, InputConfig, LaunchConfig,
    SimulationConfig,
};
pub use errors::ConfigError;
pub use input::{InputSnapshot, TouchInput};
pub use telemetry::FlightTelemetry;
pub use time::FrameDelta;

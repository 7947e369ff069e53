pub mod camera;
pub mod input;
pub mod launch;
pub mod physics;
pub mod simulation;

pub use camera::{CameraSmoothing, ChaseCameraConfig};
pub use input::InputConfig;
pub use launch::LaunchConfig;
pub use physics::FlightPhysicsConfig;
pub use simulation::SimulationConfig;

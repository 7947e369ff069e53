pub mod aircraft;
pub mod camera;
pub mod controller;
pub mod spatial;

pub use aircraft::{AircraftConfig, AircraftPreset, ControlAxes, FlightPhase, VehicleState};
pub use camera::CameraComponent;
pub use controller::{single_active, PilotLookupError, PlayerController};
pub use spatial::SpatialComponent;

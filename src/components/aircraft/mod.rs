pub mod config;
pub mod controls;
pub mod state;

pub use config::{AircraftConfig, AircraftPreset};
pub use controls::ControlAxes;
pub use state::{FlightPhase, VehicleState};

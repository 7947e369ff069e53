mod camera;
mod events;
mod flight;
mod staging;

pub use camera::CameraPlugin;
pub use events::{handle_flight_commands, FlightCommand};
pub use flight::FlightPlugin;
pub use staging::{FlightSet, StartupSequencePlugin, StartupSet};

use bevy::prelude::App;

use crate::resources::SimulationConfig;

/// Add the flight model and chase camera configured from one `SimulationConfig`.
pub fn add_flight_plugins(app: &mut App, config: &SimulationConfig) {
    app.add_plugins((
        FlightPlugin::from_config(config),
        CameraPlugin::new(config.camera.clone()),
    ));
}

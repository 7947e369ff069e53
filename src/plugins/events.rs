use bevy::prelude::*;

use crate::components::{
    single_active, AircraftConfig, AircraftPreset, PlayerController, VehicleState,
};
use crate::resources::LaunchConfig;

/// Discrete lifecycle commands issued by the UI, separate from per-frame input.
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub enum FlightCommand {
    /// Back to the launch point, stopped, with the spawn throttle.
    Spawn,
    /// Back to the launch point, stopped, engine idle.
    Reset,
    /// Swap the aircraft; physical state is kept.
    SelectPreset(AircraftPreset),
}

pub fn handle_flight_commands(
    mut commands: EventReader<FlightCommand>,
    mut query: Query<(&mut VehicleState, &mut AircraftConfig, &PlayerController)>,
    launch: Res<LaunchConfig>,
) {
    for command in commands.read() {
        let pilots = query
            .iter_mut()
            .map(|(state, aircraft, c)| ((state, aircraft), *c));
        let (mut state, mut aircraft) = match single_active(pilots) {
            Ok(pilot) => pilot,
            Err(e) => {
                warn!("Ignoring {:?}: {}", command, e);
                continue;
            }
        };

        match *command {
            FlightCommand::Spawn => {
                state.relaunch(launch.position, launch.spawn_throttle);
                info!("Spawned {} at {:?}", aircraft.name, launch.position);
            }
            FlightCommand::Reset => {
                state.relaunch(launch.position, launch.reset_throttle);
                info!("Reset {} at {:?}", aircraft.name, launch.position);
            }
            FlightCommand::SelectPreset(preset) => {
                *aircraft = preset.config();
                info!("Selected aircraft {}", preset);
            }
        }
    }
}

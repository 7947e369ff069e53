use bevy::prelude::*;

use crate::components::{AircraftConfig, PlayerController, VehicleState};
use crate::plugins::{handle_flight_commands, FlightCommand, FlightSet, StartupSet};
use crate::resources::{
    FlightPhysicsConfig, FlightTelemetry, FrameDelta, InputConfig, InputSnapshot, LaunchConfig,
    SimulationConfig, TouchInput,
};
use crate::systems::{
    flight_integrator_system, frame_clock_system, input_sampling_system, telemetry_system,
    vehicle_transform_system,
};

/// Spawns the piloted aircraft and runs the flight model every frame.
pub struct FlightPlugin {
    pub aircraft: AircraftConfig,
    pub physics: FlightPhysicsConfig,
    pub input: InputConfig,
    pub launch: LaunchConfig,
}

impl Default for FlightPlugin {
    fn default() -> Self {
        Self::from_config(&SimulationConfig::default())
    }
}

impl FlightPlugin {
    pub fn from_config(config: &SimulationConfig) -> Self {
        Self {
            aircraft: config.aircraft_config(),
            physics: config.physics.clone(),
            input: config.input.clone(),
            launch: config.launch.clone(),
        }
    }

    fn spawn_aircraft(mut commands: Commands, aircraft: AircraftConfig, launch: &LaunchConfig) {
        info!(
            "Spawning {} (mass {}, power {}, lift {})",
            aircraft.name, aircraft.mass, aircraft.power, aircraft.lift_coefficient
        );
        commands.spawn((
            Name::new(aircraft.name.clone()),
            VehicleState::at_rest(launch.position, launch.spawn_throttle),
            aircraft,
            PlayerController::new(),
            Transform::default(),
        ));
    }
}

impl Plugin for FlightPlugin {
    fn build(&self, app: &mut App) {
        if !app.is_plugin_added::<crate::plugins::StartupSequencePlugin>() {
            app.add_plugins(crate::plugins::StartupSequencePlugin);
        }

        let aircraft = self.aircraft.clone();
        let launch = self.launch.clone();

        app.insert_resource(self.physics.clone())
            .insert_resource(self.input.clone())
            .insert_resource(self.launch.clone())
            .init_resource::<InputSnapshot>()
            .init_resource::<TouchInput>()
            .init_resource::<FrameDelta>()
            .init_resource::<FlightTelemetry>()
            .add_event::<FlightCommand>()
            .add_systems(
                Startup,
                (move |commands: Commands| {
                    Self::spawn_aircraft(commands, aircraft.clone(), &launch)
                })
                .in_set(StartupSet::SpawnPlayer),
            )
            .add_systems(
                Update,
                (
                    frame_clock_system.in_set(FlightSet::Clock),
                    input_sampling_system.in_set(FlightSet::Input),
                    handle_flight_commands.in_set(FlightSet::Commands),
                    flight_integrator_system.in_set(FlightSet::Integrate),
                    (telemetry_system, vehicle_transform_system).in_set(FlightSet::Sinks),
                ),
            );
    }
}

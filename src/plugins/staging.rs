use bevy::prelude::*;

#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub enum StartupSet {
    SpawnPlayer,
    SpawnCamera,
}

/// Per-tick stages, run in this order every frame.
///
/// The camera and the sinks read the vehicle state the integrator produced
/// in the same tick.
#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub enum FlightSet {
    Clock,
    Input,
    Commands,
    Integrate,
    Camera,
    Sinks,
}

pub struct StartupSequencePlugin;

impl Plugin for StartupSequencePlugin {
    fn build(&self, app: &mut App) {
        app.configure_sets(Startup, (StartupSet::SpawnPlayer, StartupSet::SpawnCamera).chain())
            .configure_sets(
                Update,
                (
                    FlightSet::Clock,
                    FlightSet::Input,
                    FlightSet::Commands,
                    FlightSet::Integrate,
                    FlightSet::Camera,
                    FlightSet::Sinks,
                )
                    .chain(),
            );
    }
}

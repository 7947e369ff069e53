use bevy::prelude::*;

use crate::components::CameraComponent;
use crate::plugins::{FlightSet, StartupSet};
use crate::resources::ChaseCameraConfig;
use crate::systems::{camera_follow_system, camera_transform_system, to_render_vec};

/// Spawns a chase camera that trails the piloted aircraft.
///
/// The entity carries a `Transform` only; a renderer attaches its own camera
/// components to it.
#[derive(Default)]
pub struct CameraPlugin {
    pub config: ChaseCameraConfig,
}

impl CameraPlugin {
    pub fn new(config: ChaseCameraConfig) -> Self {
        Self { config }
    }
}

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        if !app.is_plugin_added::<crate::plugins::StartupSequencePlugin>() {
            app.add_plugins(crate::plugins::StartupSequencePlugin);
        }

        app.insert_resource(self.config.clone())
            .add_systems(Startup, spawn_camera.in_set(StartupSet::SpawnCamera))
            .add_systems(
                Update,
                (
                    camera_follow_system.in_set(FlightSet::Camera),
                    camera_transform_system.in_set(FlightSet::Sinks),
                ),
            );
    }
}

fn spawn_camera(mut commands: Commands, config: Res<ChaseCameraConfig>) {
    commands.spawn((
        Name::new("Chase Camera"),
        CameraComponent::new(config.initial_position),
        Transform::from_translation(to_render_vec(&config.initial_position)),
    ));
}

use bevy::prelude::*;

use super::to_render_vec;
use crate::components::CameraComponent;

/// Places each chase camera and points it at the vehicle it follows.
pub fn camera_transform_system(mut query: Query<(&CameraComponent, &mut Transform)>) {
    for (camera, mut transform) in query.iter_mut() {
        let position = to_render_vec(&camera.position);
        *transform = Transform::from_translation(position)
            .looking_at(to_render_vec(&camera.look_at), Vec3::Y);
    }
}

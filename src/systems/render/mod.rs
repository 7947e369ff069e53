mod aircraft;
mod camera;

pub use aircraft::vehicle_transform_system;
pub use camera::camera_transform_system;

use bevy::math::{Quat, Vec3};
use nalgebra::{UnitQuaternion, Vector3};

/// Convert a physics-space position into a render translation.
pub fn to_render_vec(v: &Vector3<f64>) -> Vec3 {
    Vec3::new(v.x as f32, v.y as f32, v.z as f32)
}

/// Convert a physics-space attitude into a render rotation.
pub fn to_render_quat(q: &UnitQuaternion<f64>) -> Quat {
    Quat::from_xyzw(q.i as f32, q.j as f32, q.k as f32, q.w as f32).normalize()
}

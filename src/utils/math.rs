use nalgebra::{UnitQuaternion, Vector3};
use std::f64::consts::PI;

use super::constants::{LOCAL_FORWARD, MIN_VECTOR_LENGTH};

/// Convert degrees to radians
#[inline]
pub fn deg_to_rad(deg: f64) -> f64 {
    deg * PI / 180.0
}

/// Convert radians to degrees
#[inline]
pub fn rad_to_deg(rad: f64) -> f64 {
    rad * 180.0 / PI
}

/// Linear interpolation between two points, factor clamped to [0, 1]
#[inline]
pub fn lerp_vector(start: &Vector3<f64>, end: &Vector3<f64>, factor: f64) -> Vector3<f64> {
    start + (end - start) * factor.clamp(0.0, 1.0)
}

/// Wrap an angle in degrees into [0, 360).
pub fn wrap_degrees(deg: f64) -> f64 {
    let wrapped = deg.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}

/// Normalize a vector, substituting `fallback` when it is too short to carry a direction.
pub fn safe_normalize(v: &Vector3<f64>, fallback: Vector3<f64>) -> Vector3<f64> {
    v.try_normalize(MIN_VECTOR_LENGTH).unwrap_or(fallback)
}

/// Scale `v` down so its length does not exceed `max_length`.
pub fn clamp_magnitude(v: &mut Vector3<f64>, max_length: f64) {
    let norm = v.norm();
    if norm > max_length && norm > MIN_VECTOR_LENGTH {
        *v *= max_length / norm;
    }
}

/// Rotation built from intrinsic X, then Y, then Z angles (radians).
pub fn rotation_from_euler_xyz(x: f64, y: f64, z: f64) -> UnitQuaternion<f64> {
    UnitQuaternion::from_axis_angle(&Vector3::x_axis(), x)
        * UnitQuaternion::from_axis_angle(&Vector3::y_axis(), y)
        * UnitQuaternion::from_axis_angle(&Vector3::z_axis(), z)
}

/// Decompose a rotation into intrinsic X, Y, Z angles (radians).
///
/// Inverse of [`rotation_from_euler_xyz`]. With a Y-up frame and the nose
/// along -Z, X is pitch (positive nose up), Y is yaw and Z is roll.
pub fn euler_xyz(quat: &UnitQuaternion<f64>) -> Vector3<f64> {
    let m = quat.to_rotation_matrix();
    let m = m.matrix();

    let y = m[(0, 2)].clamp(-1.0, 1.0).asin();
    if m[(0, 2)].abs() < 0.999_999_9 {
        let x = (-m[(1, 2)]).atan2(m[(2, 2)]);
        let z = (-m[(0, 1)]).atan2(m[(0, 0)]);
        Vector3::new(x, y, z)
    } else {
        // Gimbal lock, roll folded into pitch
        let x = m[(2, 1)].atan2(m[(1, 1)]);
        Vector3::new(x, y, 0.0)
    }
}

/// Unit forward direction of a body with the given attitude.
pub fn forward_vector(attitude: &UnitQuaternion<f64>) -> Vector3<f64> {
    let local = Vector3::from(LOCAL_FORWARD);
    safe_normalize(&(attitude * local), local)
}

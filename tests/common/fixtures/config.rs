use arcade_flyer::resources::{CameraSmoothing, ChaseCameraConfig, LaunchConfig};
use nalgebra::Vector3;

/// Launch with the engine off so the vehicle comes to rest on the runway
pub fn create_idle_launch() -> LaunchConfig {
    LaunchConfig {
        spawn_throttle: 0.0,
        ..Default::default()
    }
}

pub fn create_linear_camera(rate: f64) -> ChaseCameraConfig {
    ChaseCameraConfig {
        smoothing: CameraSmoothing::Linear { rate },
        ..Default::default()
    }
}

/// Where the default chase offset puts the camera behind a level vehicle
pub fn expected_anchor(vehicle_position: &Vector3<f64>) -> Vector3<f64> {
    vehicle_position + Vector3::new(0.0, 4.0, 14.0)
}

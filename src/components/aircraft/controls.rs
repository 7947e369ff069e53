use serde::{Deserialize, Serialize};

/// Normalized pilot intent for one frame, each axis in [-1, 1].
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ControlAxes {
    /// Positive raises the nose.
    pub pitch: f64,
    /// Positive banks right.
    pub roll: f64,
    /// Positive turns the nose left.
    pub yaw: f64,
}

impl ControlAxes {
    pub fn new(pitch: f64, roll: f64, yaw: f64) -> Self {
        Self {
            pitch: clamp_axis(pitch),
            roll: clamp_axis(roll),
            yaw: clamp_axis(yaw),
        }
    }

    pub fn neutral() -> Self {
        Self::default()
    }

    pub fn is_neutral(&self) -> bool {
        self.pitch == 0.0 && self.roll == 0.0 && self.yaw == 0.0
    }
}

fn clamp_axis(value: f64) -> f64 {
    if value.is_finite() {
        value.clamp(-1.0, 1.0)
    } else {
        0.0
    }
}

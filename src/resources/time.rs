use bevy::prelude::*;

/// Clamped elapsed time of the current tick [s]
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameDelta {
    pub seconds: f64,
    /// Ticks since startup
    pub frame: u64,
}

impl FrameDelta {
    pub fn advance(&mut self, seconds: f64) {
        self.seconds = seconds;
        self.frame += 1;
    }
}

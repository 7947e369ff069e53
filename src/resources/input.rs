use bevy::prelude::*;
use nalgebra::Vector2;

use crate::components::ControlAxes;
use crate::resources::FlightPhysicsConfig;

/// Control signals sampled once per tick, consumed by the integrator.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq)]
pub struct InputSnapshot {
    pub throttle_up: bool,
    pub throttle_down: bool,
    /// Discrete throttle change requested this tick (touch buttons)
    pub throttle_step: f64,
    pub axes: ControlAxes,
}

impl InputSnapshot {
    /// Throttle change for a step of `dt` seconds. Held controls are
    /// rate-based, touch taps are applied whole.
    pub fn throttle_delta(&self, physics: &FlightPhysicsConfig, dt: f64) -> f64 {
        let mut delta = self.throttle_step;
        if self.throttle_up {
            delta += physics.throttle_increase_rate * dt;
        }
        if self.throttle_down {
            delta -= physics.throttle_decrease_rate * dt;
        }
        delta
    }
}

/// Touch surface state written by the UI layer between ticks.
#[derive(Resource, Debug, Clone, Default, PartialEq)]
pub struct TouchInput {
    /// Stick offset from its centre in pixels, `None` while released.
    /// Screen convention: +x right, +y down.
    pub stick: Option<Vector2<f64>>,
    /// Throttle button taps since the last tick, up minus down.
    pub throttle_taps: i32,
}

impl TouchInput {
    pub fn press_throttle_up(&mut self) {
        self.throttle_taps += 1;
    }

    pub fn press_throttle_down(&mut self) {
        self.throttle_taps -= 1;
    }

    pub fn move_stick(&mut self, offset: Vector2<f64>) {
        self.stick = Some(offset);
    }

    pub fn release_stick(&mut self) {
        self.stick = None;
    }
}

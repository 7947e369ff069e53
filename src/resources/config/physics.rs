use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::resources::errors::ConfigError;
use crate::utils::{
    DEFAULT_GROUND_CLEARANCE, DEFAULT_LIFTOFF_SPEED, DEFAULT_MAX_FRAME_DELTA, DEFAULT_MAX_SPEED,
    GRAVITY,
};

/// Tuning constants of the arcade flight model.
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlightPhysicsConfig {
    /// Downward acceleration [units/s²]
    pub gravity: f64,
    /// Quadratic drag factor, drag = -k·|v|·v
    pub drag_coefficient: f64,
    /// Hard speed limit applied after every step [units/s]
    pub max_speed: f64,
    /// Lowest allowed altitude of the vehicle origin [units]
    pub ground_clearance: f64,
    /// Speed above which ground contact no longer pins the vehicle [units/s]
    pub liftoff_speed: f64,
    /// Upward nudge per unit of speed above `liftoff_speed`
    pub liftoff_gain: f64,
    /// Largest pitch magnitude that still allows takeoff [rad]
    pub max_takeoff_pitch: f64,
    /// Velocity scale applied every grounded step
    pub ground_friction: f64,
    /// Throttle change per second while increase is held
    pub throttle_increase_rate: f64,
    /// Throttle change per second while decrease is held
    pub throttle_decrease_rate: f64,
    /// Angular rate at full pitch deflection [rad/s]
    pub pitch_gain: f64,
    /// Angular rate at full roll deflection [rad/s]
    pub roll_gain: f64,
    /// Angular rate at full yaw deflection [rad/s]
    pub yaw_gain: f64,
    /// Upper bound on the frame delta fed to the integrator [s]
    pub max_frame_delta: f64,
    /// Use this step instead of measured frame time when set [s]
    pub fixed_timestep: Option<f64>,
}

impl Default for FlightPhysicsConfig {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            drag_coefficient: 0.02,
            max_speed: DEFAULT_MAX_SPEED,
            ground_clearance: DEFAULT_GROUND_CLEARANCE,
            liftoff_speed: DEFAULT_LIFTOFF_SPEED,
            liftoff_gain: 0.02,
            max_takeoff_pitch: 0.6,
            ground_friction: 0.995,
            throttle_increase_rate: 0.6,
            throttle_decrease_rate: 0.8,
            pitch_gain: 0.8,
            roll_gain: 0.9,
            yaw_gain: 0.5,
            max_frame_delta: DEFAULT_MAX_FRAME_DELTA,
            fixed_timestep: None,
        }
    }
}

impl FlightPhysicsConfig {
    /// Configuration stepping at a constant rate regardless of wall-clock time.
    pub fn with_fixed_timestep(mut self, dt: f64) -> Self {
        self.fixed_timestep = Some(dt);
        self
    }

    /// Clamp a raw frame delta into `[0, max_frame_delta]`.
    pub fn clamp_frame_delta(&self, dt: f64) -> f64 {
        if dt.is_finite() {
            dt.clamp(0.0, self.max_frame_delta)
        } else {
            0.0
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("gravity", self.gravity),
            ("max_speed", self.max_speed),
            ("liftoff_speed", self.liftoff_speed),
            ("max_takeoff_pitch", self.max_takeoff_pitch),
            ("max_frame_delta", self.max_frame_delta),
        ];
        for (name, value) in positive {
            if !(value > 0.0 && value.is_finite()) {
                return Err(ConfigError::invalid(name, value));
            }
        }

        let non_negative = [
            ("drag_coefficient", self.drag_coefficient),
            ("ground_clearance", self.ground_clearance),
            ("liftoff_gain", self.liftoff_gain),
            ("throttle_increase_rate", self.throttle_increase_rate),
            ("throttle_decrease_rate", self.throttle_decrease_rate),
            ("pitch_gain", self.pitch_gain),
            ("roll_gain", self.roll_gain),
            ("yaw_gain", self.yaw_gain),
        ];
        for (name, value) in non_negative {
            if !(value >= 0.0 && value.is_finite()) {
                return Err(ConfigError::invalid(name, value));
            }
        }

        if !(self.ground_friction > 0.0 && self.ground_friction <= 1.0) {
            return Err(ConfigError::invalid(
                "ground_friction",
                self.ground_friction,
            ));
        }

        if let Some(dt) = self.fixed_timestep {
            if !(dt > 0.0 && dt.is_finite()) {
                return Err(ConfigError::invalid("fixed_timestep", dt));
            }
        }

        Ok(())
    }
}

use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::resources::errors::ConfigError;

/// Mass and force parameters of a selectable aircraft.
#[derive(Component, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AircraftConfig {
    /// Display name, defaults to the preset name.
    pub name: String,
    /// Vehicle mass, divides thrust.
    pub mass: f64,
    /// Engine power at full throttle.
    pub power: f64,
    /// Lift per unit of forward speed and nose-down pitch.
    pub lift_coefficient: f64,
    /// Body colour as 0xRRGGBB, passed through to the renderer.
    pub livery: u32,
}

impl Default for AircraftConfig {
    /// The trainer is the default for convenience.
    fn default() -> Self {
        AircraftPreset::Trainer.config()
    }
}

impl AircraftConfig {
    pub fn new(name: &str, mass: f64, power: f64, lift_coefficient: f64, livery: u32) -> Self {
        Self {
            name: name.to_string(),
            mass,
            power,
            lift_coefficient,
            livery,
        }
    }

    /// Acceleration produced by thrust at full throttle.
    pub fn max_thrust_acceleration(&self) -> f64 {
        self.power / self.mass
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [
            ("mass", self.mass),
            ("power", self.power),
            ("lift_coefficient", self.lift_coefficient),
        ] {
            if !(value > 0.0 && value.is_finite()) {
                return Err(ConfigError::invalid(name, value));
            }
        }
        Ok(())
    }

    pub fn trainer() -> Self {
        AircraftPreset::Trainer.config()
    }

    pub fn sport() -> Self {
        AircraftPreset::Sport.config()
    }

    pub fn storm() -> Self {
        AircraftPreset::Storm.config()
    }
}

/// The fixed set of aircraft a pilot can pick from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AircraftPreset {
    #[default]
    Trainer,
    Sport,
    Storm,
}

impl AircraftPreset {
    pub const ALL: [AircraftPreset; 3] = [
        AircraftPreset::Trainer,
        AircraftPreset::Sport,
        AircraftPreset::Storm,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            AircraftPreset::Trainer => "trainer",
            AircraftPreset::Sport => "sport",
            AircraftPreset::Storm => "storm",
        }
    }

    pub fn config(&self) -> AircraftConfig {
        match self {
            AircraftPreset::Trainer => AircraftConfig::new(self.name(), 1000.0, 1800.0, 1.25, 0xffaa33),
            AircraftPreset::Sport => AircraftConfig::new(self.name(), 800.0, 2500.0, 1.05, 0xff2244),
            AircraftPreset::Storm => AircraftConfig::new(self.name(), 1400.0, 3200.0, 0.95, 0x2277ff),
        }
    }
}

impl fmt::Display for AircraftPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for AircraftPreset {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        AircraftPreset::ALL
            .into_iter()
            .find(|preset| preset.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| ConfigError::UnknownPreset(s.to_string()))
    }
}

use bevy::log::{info, warn};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::{ChaseCameraConfig, FlightPhysicsConfig, InputConfig, LaunchConfig};
use crate::components::{AircraftConfig, AircraftPreset};
use crate::resources::errors::ConfigError;

const CONFIG_DIR_NAME: &str = "arcade_flyer";
const CONFIG_FILE_NAME: &str = "config.yaml";

/// Top level configuration, loadable from YAML. Missing sections take their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Name of the aircraft preset selected at startup
    pub aircraft: String,
    pub physics: FlightPhysicsConfig,
    pub camera: ChaseCameraConfig,
    pub input: InputConfig,
    pub launch: LaunchConfig,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            aircraft: AircraftPreset::default().name().to_string(),
            physics: FlightPhysicsConfig::default(),
            camera: ChaseCameraConfig::default(),
            input: InputConfig::default(),
            launch: LaunchConfig::default(),
        }
    }
}

impl SimulationConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path.as_ref())?;
        let config: SimulationConfig = serde_yaml::from_str(&contents)?;
        config.validate()?;
        info!("Loaded simulation config from {}", path.as_ref().display());
        Ok(config)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let file = std::fs::File::create(path)?;
        serde_yaml::to_writer(file, self)?;
        Ok(())
    }

    /// `<config dir>/arcade_flyer/config.yaml` for the current user.
    pub fn default_path() -> Result<PathBuf, ConfigError> {
        dirs::config_dir()
            .map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
            .ok_or(ConfigError::NoConfigDir)
    }

    /// Load from the user config file if one exists, otherwise fall back to defaults.
    pub fn load_or_default() -> Result<Self, ConfigError> {
        match Self::default_path() {
            Ok(path) if path.exists() => Self::load(path),
            Ok(path) => {
                info!("No config at {}, using defaults", path.display());
                Ok(Self::default())
            }
            Err(ConfigError::NoConfigDir) => {
                warn!("No config directory on this platform, using defaults");
                Ok(Self::default())
            }
            Err(e) => Err(e),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.physics.validate()?;
        self.camera.validate()?;
        self.input.validate()?;
        self.launch.validate()?;
        Ok(())
    }

    /// Aircraft for the configured preset name, `trainer` when the name is unknown.
    pub fn aircraft_config(&self) -> AircraftConfig {
        match self.aircraft.parse::<AircraftPreset>() {
            Ok(preset) => preset.config(),
            Err(e) => {
                warn!("{}, falling back to {}", e, AircraftPreset::default().name());
                AircraftPreset::default().config()
            }
        }
    }
}

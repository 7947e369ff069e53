use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    FileError(#[from] std::io::Error),
    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),
    #[error("Unknown aircraft preset: {0}")]
    UnknownPreset(String),
    #[error("Invalid parameter '{name}' with value '{value}'")]
    InvalidParameter { name: String, value: String },
    #[error("No configuration directory available on this platform")]
    NoConfigDir,
}

impl ConfigError {
    pub(crate) fn invalid(name: &str, value: f64) -> Self {
        ConfigError::InvalidParameter {
            name: name.to_string(),
            value: value.to_string(),
        }
    }
}

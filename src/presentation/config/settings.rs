use std::path::PathBuf;

use config::{Config, ConfigError, File};
use serde::Deserialize;

use super::Environment;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Settings {
    pub server: ServerSettings,
    pub speech: SpeechSettings,
    pub processing: ProcessingSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SpeechSettings {
    pub piper_binary: PathBuf,
    pub model_path: PathBuf,
}

impl Default for SpeechSettings {
    fn default() -> Self {
        Self {
            piper_binary: PathBuf::from("piper"),
            model_path: PathBuf::from("models/en_US-lessac-medium.onnx"),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ProcessingSettings {
    /// When true (the default), a segment whose synthesis fails is logged
    /// and skipped and the job carries on; when false the failure ends the
    /// job in the failed state.
    pub continue_on_segment_failure: bool,
}

impl Default for ProcessingSettings {
    fn default() -> Self {
        Self {
            continue_on_segment_failure: true,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    pub level: String,
    pub enable_json: bool,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            enable_json: false,
        }
    }
}

impl Settings {
    /// Layered load: optional `appsettings.<environment>` file, then
    /// `APP_`-prefixed environment variables. Defaults cover every field so
    /// the service starts with neither present.
    pub fn load(environment: Environment) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(
                File::with_name(&format!("appsettings.{}", environment.as_str())).required(false),
            )
            .add_source(config::Environment::with_prefix("APP").separator("__"))
            .build()?
            .try_deserialize()
    }
}

use config::{Config, ConfigError};
use serde::Deserialize;
use tracing::debug;

#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    /// Author stamped into emitted documents. Falls back to the builder default.
    #[serde(default)]
    pub created_by: Option<String>,
    #[serde(default = "default_output_dir")]
    pub output_dir: String,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            created_by: None,
            output_dir: default_output_dir(),
            log_level: default_log_level(),
        }
    }
}

fn default_output_dir() -> String {
    "output".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Settings {
    pub fn new(path: &str) -> Result<Self, ConfigError> {
        let builder = Config::builder()
            .add_source(config::File::with_name(path).required(false))
            .add_source(config::Environment::with_prefix("APP"));

        // Build the configuration
        let config = builder.build()?;

        let settings: Settings = config.try_deserialize()?;

        debug!(
            created_by = ?settings.created_by,
            output_dir = %settings.output_dir,
            "Loaded settings"
        );

        Ok(settings)
    }
}

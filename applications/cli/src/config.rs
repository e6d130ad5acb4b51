/// CLI configuration
use cantor_queue::{QueueConfig, QueueError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default configuration file, read from the working directory if present
pub const DEFAULT_CONFIG_FILE: &str = "cantor.toml";

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CliConfig {
    #[serde(default = "default_catalog_path")]
    pub catalog_path: PathBuf,

    #[serde(default)]
    pub queue: QueueConfig,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            catalog_path: default_catalog_path(),
            queue: QueueConfig::default(),
        }
    }
}

impl CliConfig {
    /// Load configuration from file and environment
    ///
    /// An explicitly given file must exist; the default `cantor.toml` is
    /// optional. Environment variables prefixed with `CANTOR_` override file
    /// values, with `__` between nested keys (`CANTOR_QUEUE__AUTOPLAY=true`).
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut settings = config::Config::builder();

        match path {
            Some(path) => {
                settings = settings.add_source(config::File::from(path).required(true));
            }
            None => {
                let default_path = PathBuf::from(DEFAULT_CONFIG_FILE);
                if default_path.exists() {
                    settings = settings.add_source(config::File::from(default_path));
                }
            }
        }

        settings = settings.add_source(
            config::Environment::with_prefix("CANTOR")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config = settings
            .build()
            .map_err(|e| QueueError::Config(e.to_string()))?;

        config
            .try_deserialize()
            .map_err(|e| QueueError::Config(e.to_string()))
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if !self.catalog_path.is_file() {
            return Err(QueueError::Config(format!(
                "Catalog not found at {:?}",
                self.catalog_path
            )));
        }

        Ok(())
    }
}

fn default_catalog_path() -> PathBuf {
    PathBuf::from("./catalog.toml")
}

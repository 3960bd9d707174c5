//! Configuration loading.
//!
//! Layered the usual way: built-in defaults, then an optional config file,
//! then a `SUNBURST_*` environment overlay (with `__` separating nested
//! keys, e.g. `SUNBURST_CHART__RADIUS=300`).

use crate::layout::PartitionConfig;
use crate::logging::LoggingConfig;
use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SunburstConfig {
    #[serde(default)]
    pub dataset: DatasetConfig,

    #[serde(default)]
    pub chart: PartitionConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Row-dataset knobs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetConfig {
    /// Separator between path segments in row datasets.
    #[serde(default = "default_separator")]
    pub separator: String,
}

fn default_separator() -> String {
    "-".to_string()
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            separator: default_separator(),
        }
    }
}

/// Configuration loader facade.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration, optionally from a specific file, with the
    /// environment overlay applied on top.
    pub fn load(path: Option<&Path>) -> Result<SunburstConfig, ConfigError> {
        let mut builder = Config::builder();
        if let Some(path) = path {
            builder = builder.add_source(File::from(path));
        }
        let builder = builder.add_source(
            Environment::with_prefix("SUNBURST")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build()?;
        config.try_deserialize()
    }

    /// Create default configuration.
    pub fn default() -> SunburstConfig {
        SunburstConfig::default()
    }
}

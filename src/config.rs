use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use anyhow::{Context, Result};

/// File looked up in the current directory by [`Config::load`]
pub const CONFIG_FILE: &str = "operit.yaml";

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Log filter configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Default level for every target
    #[serde(default = "default_level")]
    pub level: String,

    /// Per-target overrides, e.g. `operit_template: debug`
    #[serde(default)]
    pub modules: BTreeMap<String, String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            modules: BTreeMap::new(),
        }
    }
}

fn default_level() -> String { "warn".to_string() }

impl LoggingConfig {
    /// Filter directive string: the default level followed by `target=level` pairs
    pub fn directives(&self) -> String {
        let mut filter = self.level.clone();
        for (target, level) in &self.modules {
            filter.push_str(&format!(",{}={}", target, level));
        }
        filter
    }
}

impl Config {
    /// Load configuration from operit.yaml, or use defaults if not found
    pub fn load() -> Result<Self> {
        let config_path = Path::new(CONFIG_FILE);

        if config_path.exists() {
            Self::load_from(config_path)
        } else {
            Ok(Config::default())
        }
    }

    /// Load configuration from a specific file path
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {:?}", path))?;
        let config: Config = serde_yaml::from_str(&contents)
            .with_context(|| format!("Failed to parse config from {:?}", path))?;
        Ok(config)
    }
}

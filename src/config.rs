//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub sources: SourcesConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Data source locations and HTTP settings
#[derive(Debug, Clone, Deserialize)]
pub struct SourcesConfig {
    /// World Bank API base URL
    #[serde(default = "default_worldbank_url")]
    pub worldbank_url: String,

    /// Survey CSV location: local path or HTTP URL
    #[serde(default = "default_survey")]
    pub survey: String,

    /// Topology document location: local path or HTTP URL
    #[serde(default = "default_topology")]
    pub topology: String,

    /// Key of the topology object holding the country features
    #[serde(default = "default_topology_object")]
    pub topology_object: String,

    /// HTTP request timeout in seconds
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

fn default_worldbank_url() -> String {
    "https://api.worldbank.org/v2".to_string()
}

fn default_survey() -> String {
    "whr.csv".to_string()
}

fn default_topology() -> String {
    "countries-110m.json".to_string()
}

fn default_topology_object() -> String {
    "countries".to_string()
}

fn default_request_timeout() -> u64 {
    30
}

impl Default for SourcesConfig {
    fn default() -> Self {
        Self {
            worldbank_url: default_worldbank_url(),
            survey: default_survey(),
            topology: default_topology(),
            topology_object: default_topology_object(),
            request_timeout_secs: default_request_timeout(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Ok(config)
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load from default locations or environment
    pub fn load_default() -> Self {
        let config_paths = [
            dirs::config_dir().map(|p| p.join("happydata").join("config.toml")),
            Some(PathBuf::from("/etc/happydata/config.toml")),
            Some(PathBuf::from("./config.toml")),
        ];

        for path in config_paths.iter().flatten() {
            if path.exists() {
                match Self::load_with_env(path) {
                    Ok(config) => {
                        tracing::info!("Loaded config from {:?}", path);
                        return config;
                    }
                    Err(e) => {
                        tracing::warn!("Failed to load config from {:?}: {}", path, e);
                    }
                }
            }
        }

        tracing::debug!("Using default config with environment overrides");
        Self::from_env()
    }

    /// Apply environment variable overrides to an existing config
    fn apply_env_overrides(&mut self) {
        if let Ok(url) = std::env::var("HAPPYDATA_WORLDBANK_URL") {
            self.sources.worldbank_url = url;
        }
        if let Ok(survey) = std::env::var("HAPPYDATA_SURVEY") {
            self.sources.survey = survey;
        }
        if let Ok(topology) = std::env::var("HAPPYDATA_TOPOLOGY") {
            self.sources.topology = topology;
        }
        if let Ok(object) = std::env::var("HAPPYDATA_TOPOLOGY_OBJECT") {
            self.sources.topology_object = object;
        }
        if let Ok(timeout) = std::env::var("HAPPYDATA_TIMEOUT_SECS") {
            if let Ok(secs) = timeout.parse() {
                self.sources.request_timeout_secs = secs;
            }
        }
        if let Ok(level) = std::env::var("HAPPYDATA_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Ok(format) = std::env::var("HAPPYDATA_LOG_FORMAT") {
            self.logging.format = format;
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# HappyData Configuration
#
# Environment variables override these settings:
# - HAPPYDATA_WORLDBANK_URL
# - HAPPYDATA_SURVEY
# - HAPPYDATA_TOPOLOGY
# - HAPPYDATA_TOPOLOGY_OBJECT
# - HAPPYDATA_TIMEOUT_SECS
# - HAPPYDATA_LOG_LEVEL
# - HAPPYDATA_LOG_FORMAT

[sources]
# World Bank API base URL
worldbank_url = "https://api.worldbank.org/v2"

# World Happiness Report CSV: local path or HTTP URL
survey = "whr.csv"

# TopoJSON world topology: local path or HTTP URL
topology = "countries-110m.json"

# Topology object holding the country features
topology_object = "countries"

# HTTP request timeout in seconds
request_timeout_secs = 30

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.sources.worldbank_url, "https://api.worldbank.org/v2");
        assert_eq!(config.sources.topology_object, "countries");
        assert_eq!(config.sources.request_timeout_secs, 30);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_load_partial_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        write!(file, "[sources]\nsurvey = \"/data/whr.csv\"\n").unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.sources.survey, "/data/whr.csv");
        // Unspecified fields fall back to defaults.
        assert_eq!(config.sources.topology, "countries-110m.json");
    }

    #[test]
    fn test_load_missing_file() {
        let err = Config::load(Path::new("/no/such/config.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn test_load_invalid_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        write!(file, "[sources\n").unwrap();

        let err = Config::load(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_generated_default_config_parses() {
        let config: Config = toml::from_str(&generate_default_config()).unwrap();
        assert_eq!(config.sources.survey, "whr.csv");
    }
}

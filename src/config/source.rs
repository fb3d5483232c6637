//! Configuration sources
//!
//! This module defines traits and implementations for loading configuration
//! from different sources.

use std::collections::HashMap;
use std::env;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use log::{debug, warn};

use crate::config::contact_points::merge_contact_points;
use crate::config::error::{ConfigError, Result};
use crate::config::types::{ClusterConfig, ConfigValues, ValueSource};

/// Configuration source trait
pub trait ConfigSource {
    /// Load configuration from this source
    fn load(&self) -> Result<ClusterConfig>;

    /// Get the source type
    fn source_type(&self) -> ValueSource;
}

/// Default configuration source
pub struct DefaultSource;

impl ConfigSource for DefaultSource {
    fn load(&self) -> Result<ClusterConfig> {
        debug!("Loading default configuration");
        Ok(ClusterConfig::default())
    }

    fn source_type(&self) -> ValueSource {
        ValueSource::Default
    }
}

/// File configuration source
pub struct FileSource {
    pub path: PathBuf,
}

impl FileSource {
    /// Create a new file source
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl ConfigSource for FileSource {
    fn load(&self) -> Result<ClusterConfig> {
        debug!("Loading configuration from file: {}", self.path.display());

        // Check if file exists
        if !self.path.exists() {
            warn!("Configuration file not found: {}", self.path.display());
            warn!("Will use default values unless overridden by environment variables");
            return Ok(ClusterConfig {
                values: ConfigValues::default(),
                config_file: None,
                sources: HashMap::new(),
            });
        }

        // Read file contents
        let mut contents = String::new();
        let mut file = match File::open(&self.path) {
            Ok(f) => f,
            Err(e) => {
                warn!(
                    "Failed to open configuration file {}: {}",
                    self.path.display(),
                    e
                );
                return Err(ConfigError::FileReadError(self.path.clone(), e.to_string()));
            }
        };

        if let Err(e) = file.read_to_string(&mut contents) {
            warn!(
                "Failed to read configuration file {}: {}",
                self.path.display(),
                e
            );
            return Err(ConfigError::FileReadError(self.path.clone(), e.to_string()));
        }

        // Parse JSON
        debug!("Parsing JSON from file: {}", self.path.display());

        let values: ConfigValues = match serde_json::from_str::<ConfigValues>(&contents) {
            Ok(v) => v,
            Err(e) => {
                let err_msg = format!("Error parsing {}: {}", self.path.display(), e);
                warn!("{}", err_msg);
                return Err(ConfigError::ParseError(err_msg));
            }
        };

        // Create config with values
        let mut config = ClusterConfig {
            values,
            config_file: Some(self.path.clone()),
            sources: HashMap::new(),
        };

        // Update sources for all supplied fields
        let source = self.source_type();

        if config.values.connect_timeout.is_some() {
            config.sources.insert("connect_timeout".to_string(), source);
        }
        if config.values.port.is_some() {
            config.sources.insert("port".to_string(), source);
        }
        if !config.values.contact_points.is_empty() {
            config.sources.insert("contact_points".to_string(), source);
        }

        Ok(config)
    }

    fn source_type(&self) -> ValueSource {
        ValueSource::File
    }
}

/// Environment variable configuration source
pub struct EnvSource {
    pub prefix: String,
}

impl EnvSource {
    /// Create a new environment source
    pub fn new(prefix: &str) -> Self {
        Self {
            prefix: prefix.to_string(),
        }
    }
}

impl ConfigSource for EnvSource {
    fn load(&self) -> Result<ClusterConfig> {
        debug!(
            "Loading configuration from environment variables with prefix: {}",
            self.prefix
        );

        let mut config = ClusterConfig {
            values: ConfigValues::default(),
            config_file: None,
            sources: HashMap::new(),
        };

        if let Ok(value) = env::var(format!("{}CONNECT_TIMEOUT", self.prefix)) {
            debug!("Found environment variable {}CONNECT_TIMEOUT={}", self.prefix, value);
            if let Ok(timeout) = value.parse::<u64>() {
                config.values.connect_timeout = Some(timeout);
                config
                    .sources
                    .insert("connect_timeout".to_string(), self.source_type());
            } else {
                warn!("Invalid connect_timeout in environment: {}", value);
            }
        }

        if let Ok(value) = env::var(format!("{}PORT", self.prefix)) {
            debug!("Found environment variable {}PORT={}", self.prefix, value);
            if let Ok(port) = value.parse::<u16>() {
                config.values.port = Some(port);
                config.sources.insert("port".to_string(), self.source_type());
            } else {
                warn!("Invalid port in environment: {}", value);
            }
        }

        if let Ok(value) = env::var(format!("{}CONTACT_POINTS", self.prefix)) {
            debug!("Found environment variable {}CONTACT_POINTS={}", self.prefix, value);
            // Normalized exactly like programmatic input; a noise-only value
            // yields no entries.
            config.values.contact_points = merge_contact_points(&[], &value);
            if !config.values.contact_points.is_empty() {
                config
                    .sources
                    .insert("contact_points".to_string(), self.source_type());
            }
        }

        Ok(config)
    }

    fn source_type(&self) -> ValueSource {
        ValueSource::Environment
    }
}

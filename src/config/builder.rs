//! Cluster configuration builder
//!
//! This module provides a builder pattern for constructing cluster
//! configuration from layered sources and programmatic setters.

use std::path::Path;

use log::debug;

use crate::config::defaults::{DEFAULT_CONFIG_FILE, ENV_PREFIX};
use crate::config::error::Result;
use crate::config::source::{ConfigSource, DefaultSource, EnvSource, FileSource};
use crate::config::types::ClusterConfig;

/// Programmatic override applied after all sources
enum Override {
    ConnectTimeout(u64),
    Port(u16),
    ContactPoints(String),
}

/// Cluster configuration builder
///
/// The single writer of a [`ClusterConfig`] during construction. Sources are
/// applied in the order they are added (lowest to highest priority), then the
/// programmatic setters in call order. `build()` hands the finalized
/// configuration off by value; downstream session machinery treats it as an
/// immutable snapshot.
pub struct ClusterBuilder {
    sources: Vec<Box<dyn ConfigSource>>,
    overrides: Vec<Override>,
}

impl ClusterBuilder {
    /// Create a new builder with no sources
    pub fn new() -> Self {
        Self {
            sources: Vec::new(),
            overrides: Vec::new(),
        }
    }

    /// Add default source
    pub fn with_defaults(mut self) -> Self {
        debug!("Adding default configuration source");
        self.sources.push(Box::new(DefaultSource));
        self
    }

    /// Add file source
    pub fn with_file<P: AsRef<Path>>(mut self, path: P) -> Self {
        let path = path.as_ref();
        debug!("Adding file configuration source: {}", path.display());
        self.sources.push(Box::new(FileSource::new(path)));
        self
    }

    /// Add environment source
    pub fn with_env(mut self, prefix: &str) -> Self {
        debug!("Adding environment configuration source with prefix: {}", prefix);
        self.sources.push(Box::new(EnvSource::new(prefix)));
        self
    }

    /// Set the connect timeout in milliseconds
    ///
    /// Last write wins; no validation is performed at this layer.
    pub fn connect_timeout(mut self, ms: u64) -> Self {
        self.overrides.push(Override::ConnectTimeout(ms));
        self
    }

    /// Set the native protocol port
    ///
    /// Last write wins; no validation is performed at this layer.
    pub fn port(mut self, port: u16) -> Self {
        self.overrides.push(Override::Port(port));
        self
    }

    /// Merge a raw comma-separated contact-point string into the list
    ///
    /// Repeated calls are cumulative; a string containing nothing but commas
    /// and whitespace clears everything accumulated so far, sources included.
    pub fn contact_points(mut self, raw: &str) -> Self {
        self.overrides.push(Override::ContactPoints(raw.to_string()));
        self
    }

    /// Build the configuration
    ///
    /// Sources and setters cannot reject input, so the only failures here are
    /// unreadable or unparsable configuration files.
    pub fn build(self) -> Result<ClusterConfig> {
        let mut config = ClusterConfig {
            values: Default::default(),
            config_file: None,
            sources: Default::default(),
        };

        debug!("Building configuration from {} sources", self.sources.len());

        // Apply sources in order (lowest to highest priority)
        for source in self.sources {
            let source_type = source.source_type();
            debug!("Loading configuration from source: {:?}", source_type);

            let source_config = source.load()?;
            config = config.merge(&source_config, source_type);
        }

        // Apply programmatic setters in call order
        for op in self.overrides {
            match op {
                Override::ConnectTimeout(ms) => config.set_connect_timeout(ms),
                Override::Port(port) => config.set_port(port),
                Override::ContactPoints(raw) => config.set_contact_points(&raw),
            }
        }

        // Apply default values for any scalar that is still unset
        config.set_default_values();

        // Log the final configuration at debug level
        debug!("Final configuration:");
        config.log();

        Ok(config)
    }
}

impl Default for ClusterBuilder {
    fn default() -> Self {
        Self::new()
            .with_defaults()
            .with_file(DEFAULT_CONFIG_FILE)
            .with_env(ENV_PREFIX)
    }
}

//! Configuration types
//!
//! This module contains the main configuration types used throughout the library.

use std::collections::HashMap;
use std::ops::Deref;
use std::path::{Path, PathBuf};

use log::debug;
use serde::{Deserialize, Serialize};

use crate::config::contact_points::{deserialize_contact_points, merge_contact_points};
use crate::config::defaults;

/// Source of a configuration value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueSource {
    /// Default value
    Default,
    /// From configuration file
    File,
    /// From environment variable
    Environment,
    /// Set programmatically at runtime
    Runtime,
}

impl std::fmt::Display for ValueSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValueSource::Default => write!(f, "default"),
            ValueSource::File => write!(f, "file"),
            ValueSource::Environment => write!(f, "environment"),
            ValueSource::Runtime => write!(f, "runtime"),
        }
    }
}

/// Configuration values
///
/// Contains all configuration values with their optional state. Scalar fields
/// are `None` until some source or setter supplies them; the contact-point
/// list is always present and grows through the accumulator.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigValues {
    /// Connect timeout in milliseconds
    #[serde(default)]
    pub connect_timeout: Option<u64>,

    /// Native protocol port
    #[serde(default)]
    pub port: Option<u16>,

    /// Ordered contact-point list
    ///
    /// In a configuration file this may be either a comma-separated string or
    /// a list of strings; both are normalized on load.
    #[serde(default, deserialize_with = "deserialize_contact_points")]
    pub contact_points: Vec<String>,
}

impl Default for ConfigValues {
    fn default() -> Self {
        Self {
            connect_timeout: None,
            port: None,
            contact_points: Vec::new(),
        }
    }
}

/// Cluster configuration
///
/// The in-memory record of connection parameters built up before a session is
/// established. It is owned and mutated by a single writer (normally a
/// [`ClusterBuilder`](crate::config::ClusterBuilder)) and handed off by value
/// as an immutable snapshot to session bootstrap, which reads the contact
/// points in order when attempting initial connections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClusterConfig {
    /// Configuration values
    pub values: ConfigValues,

    /// Configuration file path
    pub config_file: Option<PathBuf>,

    /// Source tracking for configuration values
    pub sources: HashMap<String, ValueSource>,
}

// Manual implementation of Hash for ClusterConfig that ignores sources
impl std::hash::Hash for ClusterConfig {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.values.hash(state);
        self.config_file.hash(state);
        // Deliberately skip hashing sources as HashMap doesn't implement Hash
    }
}

impl Deref for ClusterConfig {
    type Target = ConfigValues;

    fn deref(&self) -> &Self::Target {
        &self.values
    }
}

impl Serialize for ClusterConfig {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.values.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for ClusterConfig {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let values = ConfigValues::deserialize(deserializer)?;
        Ok(Self {
            values,
            config_file: None,
            sources: HashMap::new(),
        })
    }
}

impl Default for ClusterConfig {
    fn default() -> Self {
        let mut config = Self {
            values: ConfigValues::default(),
            config_file: None,
            sources: HashMap::new(),
        };

        // Apply default values and track their source
        config.set_default_values();

        config
    }
}

impl ClusterConfig {
    /// Set default values for all scalar options that are still unset
    pub fn set_default_values(&mut self) {
        if self.values.connect_timeout.is_none() {
            self.values.connect_timeout = Some(defaults::connect_timeout());
            self.sources
                .insert("connect_timeout".to_string(), ValueSource::Default);
        }

        if self.values.port.is_none() {
            self.values.port = Some(defaults::port());
            self.sources.insert("port".to_string(), ValueSource::Default);
        }

        // The contact-point list has no default entries; it starts empty and
        // is only ever populated through the accumulator.
    }

    /// Load configuration from a specific file
    ///
    /// Applies defaults first, then the file, then environment variables.
    pub fn from_file<P: AsRef<Path>>(path: P) -> crate::common::Result<Self> {
        use crate::config::{builder::ClusterBuilder, ENV_PREFIX};
        use log::warn;

        let path = path.as_ref();

        if !path.exists() {
            warn!("Configuration file not found: {}", path.display());
            warn!("Will use default values unless overridden by environment variables");
        } else {
            debug!("Using configuration file: {}", path.display());
        }

        let config = ClusterBuilder::new()
            .with_defaults()
            .with_file(path)
            .with_env(ENV_PREFIX)
            .build()?;

        Ok(config)
    }

    /// Get the source of a configuration value
    pub fn source(&self, name: &str) -> &str {
        match self.sources.get(name) {
            Some(ValueSource::Default) => "default",
            Some(ValueSource::File) => "file",
            Some(ValueSource::Environment) => "environment",
            Some(ValueSource::Runtime) => "runtime",
            None => "unknown",
        }
    }

    /// Get the connect timeout in milliseconds
    pub fn connect_timeout(&self) -> u64 {
        self.values
            .connect_timeout
            .unwrap_or_else(defaults::connect_timeout)
    }

    /// Get the native protocol port
    pub fn port(&self) -> u16 {
        self.values.port.unwrap_or_else(defaults::port)
    }

    /// Get the ordered contact-point list
    ///
    /// Reflects exactly the accumulated state at call time; never contains an
    /// empty or whitespace-only entry.
    pub fn contact_points(&self) -> &[String] {
        &self.values.contact_points
    }

    /// Get the configuration file path
    pub fn config_file(&self) -> Option<&Path> {
        self.config_file.as_deref()
    }

    /// Set the connect timeout in milliseconds
    ///
    /// Replaces the current value unconditionally; last write wins.
    pub fn set_connect_timeout(&mut self, ms: u64) {
        self.values.connect_timeout = Some(ms);
        self.sources
            .insert("connect_timeout".to_string(), ValueSource::Runtime);
    }

    /// Set the native protocol port
    ///
    /// Replaces the current value unconditionally; last write wins.
    pub fn set_port(&mut self, port: u16) {
        self.values.port = Some(port);
        self.sources.insert("port".to_string(), ValueSource::Runtime);
    }

    /// Merge a raw comma-separated contact-point string into the list
    ///
    /// Thin mutation wrapper over
    /// [`merge_contact_points`](crate::config::merge_contact_points): repeated
    /// non-empty calls are cumulative, while an input containing nothing but
    /// commas and whitespace clears the whole list. Scalar fields are not
    /// affected.
    pub fn set_contact_points(&mut self, raw: &str) {
        self.values.contact_points = merge_contact_points(&self.values.contact_points, raw);
        self.sources
            .insert("contact_points".to_string(), ValueSource::Runtime);
    }

    /// Merge two configurations
    ///
    /// Scalar fields present in `other` replace this configuration's values.
    /// Contact points from `other` are appended, keeping the accumulation
    /// order across layered sources.
    pub fn merge(&self, other: &ClusterConfig, source: ValueSource) -> Self {
        let mut result = self.clone();

        macro_rules! merge_field {
            ($field:expr, $name:ident) => {
                if other.values.$name.is_some() {
                    result.values.$name = other.values.$name.clone();
                    result.sources.insert($field.to_string(), source);
                }
            };
        }

        merge_field!("connect_timeout", connect_timeout);
        merge_field!("port", port);

        if !other.values.contact_points.is_empty() {
            result
                .values
                .contact_points
                .extend(other.values.contact_points.iter().cloned());
            result
                .sources
                .insert("contact_points".to_string(), source);
        }

        // Configuration file path
        if let Some(path) = &other.config_file {
            result.config_file = Some(path.clone());
        }

        result
    }

    /// Log the configuration
    pub fn log(&self) {
        debug!("=== Cluster configuration ===");
        debug!(
            "  Connect timeout: {} ms (from {})",
            self.connect_timeout(),
            self.source("connect_timeout")
        );
        debug!("  Port: {} (from {})", self.port(), self.source("port"));

        if self.contact_points().is_empty() {
            debug!("  Contact points: (none)");
        } else {
            debug!(
                "  Contact points ({}, from {}):",
                self.contact_points().len(),
                self.source("contact_points")
            );
            for point in self.contact_points() {
                debug!("    {}", point);
            }
        }

        if let Some(file) = self.config_file() {
            debug!("  Configuration file: {}", file.display());
        }

        debug!("=============================");
    }
}

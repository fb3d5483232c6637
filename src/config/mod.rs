//! Configuration module
//!
//! This module handles cluster configuration, including the configuration
//! store, the contact-point accumulator, and loading from different sources
//! (files, environment variables, programmatic setters).

// Submodules
pub mod builder;
mod contact_points;
mod defaults;
mod error;
mod source;
mod types;

// Re-export types and traits
pub use self::builder::ClusterBuilder;
pub use self::contact_points::merge_contact_points;
pub use self::error::ConfigError;
pub use self::source::{ConfigSource, DefaultSource, EnvSource, FileSource};
pub use self::types::{ClusterConfig, ConfigValues, ValueSource};

// Export constants needed externally
pub use defaults::{CONNECT_TIMEOUT_MS, DEFAULT_CONFIG_FILE, ENV_PREFIX, LOG_LEVEL_STR, PORT};

//! Configuration errors
//!
//! This module defines error types for the configuration module.

use std::path::PathBuf;
use thiserror::Error;

/// Configuration error type
#[derive(Error, Debug)]
pub enum ConfigError {
    /// File not found
    #[error("Configuration file not found: {0}")]
    FileNotFound(PathBuf),

    /// Error reading file
    #[error("Error reading configuration file {0}: {1}")]
    FileReadError(PathBuf, String),

    /// Error parsing configuration
    #[error("Error parsing configuration: {0}")]
    ParseError(String),

    /// Invalid value for configuration option
    #[error("Invalid value for '{0}': {1}")]
    InvalidValue(String, String),
}

/// Result type alias for configuration operations
pub type Result<T> = std::result::Result<T, ConfigError>;

// Convert from other error types
impl From<std::io::Error> for ConfigError {
    fn from(err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound =>
                ConfigError::FileNotFound(PathBuf::from("unknown")),

            _ => ConfigError::FileReadError(PathBuf::from("unknown"), err.to_string()),
        }
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::ParseError(err.to_string())
    }
}

// Convert to crate's common error type
impl From<ConfigError> for crate::common::DriverError {
    fn from(err: ConfigError) -> Self {
        crate::common::DriverError::Config(err.to_string())
    }
}

//! Default configuration values
//!
//! This module provides default values for configuration options.
//! It is designed to be a single source of truth for defaults,
//! making it easier to maintain consistent defaults across the library.

/// Environment variable prefix for all configuration options
pub const ENV_PREFIX: &str = "CLUSTER_";

/// Default configuration file name
pub const DEFAULT_CONFIG_FILE: &str = "cluster.json";

/// Default connect timeout in milliseconds
pub const CONNECT_TIMEOUT_MS: u64 = 5000;

/// Default native protocol port
pub const PORT: u16 = 9042;

/// Default log level as string
pub const LOG_LEVEL_STR: &str = "info";

// Functions for default values

/// Default connect timeout in milliseconds
pub fn connect_timeout() -> u64 {
    CONNECT_TIMEOUT_MS
}

/// Default native protocol port
pub fn port() -> u16 {
    PORT
}

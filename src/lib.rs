//! Cluster configuration builder for a CQL-style database driver
//!
//! This library implements the configuration-accumulation subsystem of a
//! cluster client driver: an owned, mutable configuration store holding
//! scalar connection settings (connect timeout, port) and the ordered
//! contact-point list, built up before a session is established.
//!
//! Contact points are supplied as comma-separated strings, possibly across
//! several calls. Parsing is cumulative and forgiving: tokens are trimmed,
//! empty tokens from stray delimiters are dropped, and an input with no
//! address content at all clears the whole list. The finalized configuration
//! is handed off by value to session bootstrap, which iterates the contact
//! points in order when attempting initial connections.
//!
//! # Example
//!
//! ```
//! use cluster_config::ClusterBuilder;
//!
//! let config = ClusterBuilder::new()
//!     .with_defaults()
//!     .contact_points("127.0.0.1,127.0.0.2")
//!     .contact_points("127.0.0.3")
//!     .port(9042)
//!     .connect_timeout(5000)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.contact_points().len(), 3);
//! assert_eq!(config.port(), 9042);
//! ```

// Public modules
pub mod common;
pub mod config;

// Re-export commonly used structures and functions for convenience
pub use common::{DriverError, Result};
pub use config::{ClusterBuilder, ClusterConfig};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const APP_NAME: &str = env!("CARGO_PKG_NAME");

//! Common module
//!
//! This module contains shared types, errors, and utility functions used throughout the library.

pub mod error;
pub mod log;

// Re-export commonly used types and functions
pub use error::{DriverError, Result};
pub use log::init_logger;

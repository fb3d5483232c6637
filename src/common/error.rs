//! Error handling module
//!
//! This module defines the error types and result type aliases used in the library.

use thiserror::Error;
use std::io;

/// Driver error type
#[derive(Error, Debug)]
pub enum DriverError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Other error
    #[error("Other error: {0}")]
    Other(String),
}

/// Result type alias
///
/// This is a `Result` type alias that uses our custom `DriverError`.
pub type Result<T> = std::result::Result<T, DriverError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_conversion() {
        // Test IO error conversion
        let io_err = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let driver_err: DriverError = io_err.into();

        match driver_err {
            DriverError::Io(_) => assert!(true),
            _ => panic!("Should convert to IO error"),
        }
    }

    #[test]
    fn test_error_display() {
        // Test error display
        let err = DriverError::Config("Invalid configuration".to_string());
        let err_str = format!("{}", err);
        assert!(err_str.contains("Invalid configuration"));
    }
}

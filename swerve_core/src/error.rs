//! Unified error handling for SWERVE
//!
//! This module provides a centralized error type for the swerve crates,
//! ensuring consistent error handling across waypoints, paths and path files.

use thiserror::Error;

/// Main error type for SWERVE operations
#[derive(Debug, Error)]
pub enum SwerveError {
    /// I/O related errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid argument passed to a constructor or edit
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Row index does not address an existing waypoint
    #[error("Index {index} out of range for path of length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    /// Configuration / path file parsing or validation errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Parse errors
    #[error("Parse error: {0}")]
    ParseError(String),
}

/// Convenience type alias for Results using SwerveError
pub type SwerveResult<T> = Result<T, SwerveError>;

impl From<serde_json::Error> for SwerveError {
    fn from(err: serde_json::Error) -> Self {
        SwerveError::Serialization(err.to_string())
    }
}

impl From<toml::de::Error> for SwerveError {
    fn from(err: toml::de::Error) -> Self {
        SwerveError::Config(format!("TOML parse error: {}", err))
    }
}

impl From<toml::ser::Error> for SwerveError {
    fn from(err: toml::ser::Error) -> Self {
        SwerveError::Serialization(format!("TOML serialization error: {}", err))
    }
}

impl From<serde_yaml::Error> for SwerveError {
    fn from(err: serde_yaml::Error) -> Self {
        SwerveError::Serialization(format!("YAML error: {}", err))
    }
}

// Helper methods
impl SwerveError {
    /// Create an invalid argument error
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        SwerveError::InvalidArgument(msg.into())
    }

    /// Create a configuration error with a custom message
    pub fn config<S: Into<String>>(msg: S) -> Self {
        SwerveError::Config(msg.into())
    }

    /// Create a parse error
    pub fn parse<S: Into<String>>(msg: S) -> Self {
        SwerveError::ParseError(msg.into())
    }

    /// Create an index error for a path of length `len`
    pub fn index_out_of_range(index: usize, len: usize) -> Self {
        SwerveError::IndexOutOfRange { index, len }
    }

    /// Check if this is an invalid argument error
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, SwerveError::InvalidArgument(_))
    }

    /// Check if this is a parse error
    pub fn is_parse_error(&self) -> bool {
        matches!(self, SwerveError::ParseError(_))
    }

    /// Check if this is a filesystem error
    pub fn is_io(&self) -> bool {
        matches!(self, SwerveError::Io(_))
    }

    /// Check if this is an index error
    pub fn is_index_out_of_range(&self) -> bool {
        matches!(self, SwerveError::IndexOutOfRange { .. })
    }
}

//! # SWERVE Core
//!
//! Shared plumbing for the swerve waypoint crates:
//!
//! - **Errors**: a single [`SwerveError`] enum with [`SwerveResult`] alias
//! - **Logging**: the [`LogSummary`] trait used when waypoints and paths are logged
//! - **Config**: YAML / TOML / JSON file helpers used for path files

pub mod config;
pub mod core;
pub mod error;

// Re-export commonly used types for easy access
pub use crate::config::ConfigFormat;
pub use crate::core::LogSummary;
pub use crate::error::{SwerveError, SwerveResult};

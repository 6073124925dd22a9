//! Path files
//!
//! A named path saved as YAML, TOML or JSON.
//!
//! # Example YAML
//!
//! ```yaml
//! name: auto_left
//! waypoints:
//!   - x: 0.0
//!     y: 0.0
//!     heading: 0.0
//!     orientation: 0.0
//!   - x: 2.5
//!     y: 1.0
//!     heading: 0.0
//!     orientation: 1.5707963267948966
//! ```
//!
//! Waypoints are validated while loading: a file holding a NaN or infinite
//! value fails to load instead of producing a path.

use std::path::Path;

use serde::{Deserialize, Serialize};
use swerve_core::config::{self, ConfigFormat};
use swerve_core::core::LogSummary;
use swerve_core::error::SwerveResult;

use super::SwervePath;
use crate::messages::SwerveWaypoint;

/// Serialized form of a swerve path
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PathFile {
    /// Optional path name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Waypoints in path order
    #[serde(default)]
    pub waypoints: Vec<SwerveWaypoint>,
}

impl PathFile {
    /// Create a path file from a path
    pub fn from_path(name: &str, path: &SwervePath) -> Self {
        Self {
            name: Some(name.to_string()),
            waypoints: path.as_slice().to_vec(),
        }
    }

    /// Load a path file (format from extension, YAML then TOML otherwise)
    pub fn from_file<P: AsRef<Path>>(path: P) -> SwerveResult<Self> {
        let path = path.as_ref();
        let file: Self = config::load_file(path)?;
        log::info!(
            "Loaded path '{}' from {}: {}",
            file.display_name(),
            path.display(),
            file.waypoints.log_summary()
        );
        Ok(file)
    }

    /// Parse a path file from YAML
    pub fn from_yaml(contents: &str) -> SwerveResult<Self> {
        config::parse_str(contents, ConfigFormat::Yaml)
    }

    /// Parse a path file from TOML
    pub fn from_toml(contents: &str) -> SwerveResult<Self> {
        config::parse_str(contents, ConfigFormat::Toml)
    }

    /// Parse a path file from JSON
    pub fn from_json(contents: &str) -> SwerveResult<Self> {
        config::parse_str(contents, ConfigFormat::Json)
    }

    /// Render as YAML
    pub fn to_yaml(&self) -> SwerveResult<String> {
        config::to_string(self, ConfigFormat::Yaml)
    }

    /// Save to a file; the extension picks the format, YAML by default
    pub fn save<P: AsRef<Path>>(&self, path: P) -> SwerveResult<()> {
        config::save_file(self, path)
    }

    /// Convert into an editable path
    pub fn into_path(self) -> SwervePath {
        SwervePath::from_waypoints(self.waypoints)
    }

    fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("<unnamed>")
    }
}

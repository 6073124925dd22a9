//! Config file utilities for SWERVE
//!
//! Path files and other persisted settings share one loader: the format is
//! picked from the file extension, and anything unrecognised is tried as YAML
//! first and TOML second.
//!
//! # Example
//!
//! ```rust,ignore
//! use swerve_core::config::{self, ConfigFormat};
//!
//! let settings: MySettings = config::load_file("settings.yaml")?;
//! config::save_file(&settings, "settings.toml")?;
//! let json = config::to_string(&settings, ConfigFormat::Json)?;
//! ```

use crate::error::{SwerveError, SwerveResult};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::Path;

/// Supported on-disk formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Yaml,
    Toml,
    Json,
}

impl ConfigFormat {
    /// Detect the format from a file extension
    pub fn from_path<P: AsRef<Path>>(path: P) -> Option<Self> {
        match path.as_ref().extension().and_then(|s| s.to_str()) {
            Some("yaml") | Some("yml") => Some(Self::Yaml),
            Some("toml") => Some(Self::Toml),
            Some("json") => Some(Self::Json),
            _ => None,
        }
    }

    /// Canonical extension for this format
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Yaml => "yaml",
            Self::Toml => "toml",
            Self::Json => "json",
        }
    }
}

impl std::fmt::Display for ConfigFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Yaml => write!(f, "YAML"),
            Self::Toml => write!(f, "TOML"),
            Self::Json => write!(f, "JSON"),
        }
    }
}

/// Parse a value from a string in the given format
pub fn parse_str<T: DeserializeOwned>(contents: &str, format: ConfigFormat) -> SwerveResult<T> {
    match format {
        ConfigFormat::Yaml => serde_yaml::from_str(contents)
            .map_err(|e| SwerveError::config(format!("Failed to parse YAML: {}", e))),
        ConfigFormat::Toml => toml::from_str(contents)
            .map_err(|e| SwerveError::config(format!("Failed to parse TOML: {}", e))),
        ConfigFormat::Json => serde_json::from_str(contents)
            .map_err(|e| SwerveError::config(format!("Failed to parse JSON: {}", e))),
    }
}

/// Serialize a value to a string in the given format
pub fn to_string<T: Serialize>(value: &T, format: ConfigFormat) -> SwerveResult<String> {
    let contents = match format {
        ConfigFormat::Yaml => serde_yaml::to_string(value)?,
        ConfigFormat::Toml => toml::to_string_pretty(value)?,
        ConfigFormat::Json => serde_json::to_string_pretty(value)?,
    };
    Ok(contents)
}

/// Load a value from a file (auto-detect format)
pub fn load_file<T: DeserializeOwned, P: AsRef<Path>>(path: P) -> SwerveResult<T> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path)
        .inspect_err(|e| log::error!("Failed to read {}: {}", path.display(), e))?;

    log::debug!("Loading config from {}", path.display());

    match ConfigFormat::from_path(path) {
        Some(format) => parse_str(&contents, format),
        None => parse_yaml_or_toml(&contents, path),
    }
}

/// Fallback for unknown extensions; reports both failures
fn parse_yaml_or_toml<T: DeserializeOwned>(contents: &str, path: &Path) -> SwerveResult<T> {
    let yaml_err = match serde_yaml::from_str(contents) {
        Ok(value) => return Ok(value),
        Err(e) => e,
    };
    toml::from_str(contents).map_err(|toml_err| {
        SwerveError::config(format!(
            "{} is neither valid YAML ({}) nor valid TOML ({})",
            path.display(),
            yaml_err,
            toml_err
        ))
    })
}

/// Save a value to a file; unknown extensions are written as YAML
pub fn save_file<T: Serialize, P: AsRef<Path>>(value: &T, path: P) -> SwerveResult<()> {
    let path = path.as_ref();
    let format = ConfigFormat::from_path(path).unwrap_or(ConfigFormat::Yaml);
    let contents = to_string(value, format)?;

    std::fs::write(path, contents)
        .inspect_err(|e| log::error!("Failed to write {}: {}", path.display(), e))?;

    log::info!("Saved {} config to {}", format, path.display());
    Ok(())
}

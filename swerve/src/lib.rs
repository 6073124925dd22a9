//! # SWERVE
//!
//! Waypoint definitions for swerve-drive trajectory generation.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use swerve::prelude::*;
//!
//! fn build() -> SwerveResult<SwervePath> {
//!     let mut path = SwervePath::new();
//!     path.push(SwerveWaypoint::new(0.0, 0.0, Rotation2D::ZERO, Rotation2D::ZERO)?);
//!     path.push(SwerveWaypoint::new(
//!         2.0,
//!         1.0,
//!         Rotation2D::from_degrees(90.0), // module orientation
//!         Rotation2D::ZERO,               // chassis heading
//!     )?);
//!     Ok(path)
//! }
//! ```

// Re-export core components
pub use swerve_core::{self, config, error, ConfigFormat, LogSummary, SwerveError, SwerveResult};

// Re-export standard library with alias
pub use swerve_library as library;

// Re-export serde at crate root
pub use serde;

/// The SWERVE prelude - everything needed to define and persist paths
pub mod prelude {
    // Errors and logging
    pub use swerve_core::core::LogSummary;
    pub use swerve_core::error::{SwerveError, SwerveResult};

    // Config
    pub use swerve_core::config::ConfigFormat;

    // Messages
    pub use swerve_library::messages::{Pose2D, Rotation2D, SwerveWaypoint};

    // Paths
    pub use swerve_library::path::{
        format_waypoints, parse_waypoints, PathFile, SwervePath, WaypointRow, MIN_WAYPOINTS,
    };
}

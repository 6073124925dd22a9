//! # SWERVE Standard Library
//!
//! Waypoint messages and path tooling for swerve-drive trajectory generation.
//!
//! ## Structure
//!
//! ```text
//! swerve_library/
//! ── messages/       # Rotation2D, Pose2D, SwerveWaypoint
//! ── path/           # Ordered waypoint paths, text import/export, path files
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use swerve_library::{PathFile, Rotation2D, SwervePath, SwerveWaypoint};
//!
//! let mut path = SwervePath::new();
//! path.push(SwerveWaypoint::new(0.0, 0.0, Rotation2D::ZERO, Rotation2D::ZERO)?);
//! path.push(SwerveWaypoint::new(2.0, 1.0, Rotation2D::from_degrees(90.0), Rotation2D::ZERO)?);
//!
//! // Hand an immutable snapshot to a trajectory generator
//! let snapshot = path.snapshot();
//!
//! // Persist or export
//! PathFile::from_path("auto_left", &path).save("auto_left.yaml")?;
//! println!("{}", path.to_text());
//! ```

pub mod messages;
pub mod path;

// Re-export core traits needed for message types
pub use swerve_core::core::LogSummary;

// Re-export message types at the crate root for convenience
pub use messages::*;

// Re-export path types
pub use path::{PathFile, SwervePath, WaypointRow, MIN_WAYPOINTS};

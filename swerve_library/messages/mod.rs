// Message types for swerve path definition
//
// - Geometry: spatial primitives (Rotation2D, Pose2D)
// - Waypoint: the swerve waypoint value type (SwerveWaypoint)
//
// All message types are re-exported at the crate root for convenience.

pub mod geometry;
pub mod waypoint;

// Geometry
pub use geometry::{Pose2D, Rotation2D};

// Waypoint
pub use waypoint::SwerveWaypoint;

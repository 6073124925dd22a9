use swerve_core::core::LogSummary;
use swerve_core::error::{SwerveError, SwerveResult};

use serde::{Deserialize, Serialize};

use super::geometry::{Pose2D, Rotation2D};

/// One sample point of a swerve-drive path
///
/// Pairs a chassis pose (`x`, `y`, `heading`) with an independent module
/// `orientation`: on a swerve drive the wheels can point somewhere other than
/// the chassis, e.g. while strafing.
///
/// Waypoints are immutable. Every constructor validates its input, so any
/// `SwerveWaypoint` in hand has finite coordinates and finite angles. Edits
/// go through the `with_*` builders, which return a new waypoint.
///
/// # Example
///
/// ```rust,ignore
/// use swerve_library::{Rotation2D, SwerveWaypoint};
///
/// let wp = SwerveWaypoint::new(
///     1.0,
///     2.0,
///     Rotation2D::from_degrees(90.0), // orientation
///     Rotation2D::from_degrees(0.0),  // heading
/// )?;
/// assert_eq!(wp.x(), 1.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "WaypointRecord", into = "WaypointRecord")]
pub struct SwerveWaypoint {
    pose: Pose2D,
    orientation: Rotation2D,
}

impl SwerveWaypoint {
    /// Create a new waypoint
    ///
    /// Argument order is `x, y, orientation, heading`. Fails with
    /// `InvalidArgument` if any value is NaN or infinite.
    pub fn new(
        x: f64,
        y: f64,
        orientation: Rotation2D,
        heading: Rotation2D,
    ) -> SwerveResult<Self> {
        Self::from_pose(Pose2D::new(x, y, heading), orientation)
    }

    /// Create a waypoint from an existing chassis pose
    pub fn from_pose(pose: Pose2D, orientation: Rotation2D) -> SwerveResult<Self> {
        check_finite("x", pose.x)?;
        check_finite("y", pose.y)?;
        check_finite("heading", pose.heading.radians())?;
        check_finite("orientation", orientation.radians())?;
        Ok(Self { pose, orientation })
    }

    pub fn x(&self) -> f64 {
        self.pose.x
    }

    pub fn y(&self) -> f64 {
        self.pose.y
    }

    /// Chassis heading
    pub fn heading(&self) -> Rotation2D {
        self.pose.heading
    }

    /// Module steering orientation
    pub fn orientation(&self) -> Rotation2D {
        self.orientation
    }

    /// The embedded chassis pose
    pub fn pose(&self) -> Pose2D {
        self.pose
    }

    /// Copy of this waypoint with a different x
    pub fn with_x(&self, x: f64) -> SwerveResult<Self> {
        Self::new(x, self.y(), self.orientation, self.heading())
    }

    /// Copy of this waypoint with a different y
    pub fn with_y(&self, y: f64) -> SwerveResult<Self> {
        Self::new(self.x(), y, self.orientation, self.heading())
    }

    /// Copy of this waypoint with a different chassis heading
    pub fn with_heading(&self, heading: Rotation2D) -> SwerveResult<Self> {
        Self::new(self.x(), self.y(), self.orientation, heading)
    }

    /// Copy of this waypoint with a different module orientation
    pub fn with_orientation(&self, orientation: Rotation2D) -> SwerveResult<Self> {
        Self::new(self.x(), self.y(), orientation, self.heading())
    }
}

fn check_finite(field: &str, value: f64) -> SwerveResult<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(SwerveError::invalid_argument(format!(
            "{} must be finite, got {}",
            field, value
        )))
    }
}

/// Flat on-disk shape of a waypoint
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct WaypointRecord {
    x: f64,
    y: f64,
    heading: Rotation2D,
    orientation: Rotation2D,
}

impl TryFrom<WaypointRecord> for SwerveWaypoint {
    type Error = SwerveError;

    fn try_from(record: WaypointRecord) -> SwerveResult<Self> {
        Self::new(record.x, record.y, record.orientation, record.heading)
    }
}

impl From<SwerveWaypoint> for WaypointRecord {
    fn from(waypoint: SwerveWaypoint) -> Self {
        Self {
            x: waypoint.x(),
            y: waypoint.y(),
            heading: waypoint.heading(),
            orientation: waypoint.orientation(),
        }
    }
}

impl LogSummary for SwerveWaypoint {
    fn log_summary(&self) -> String {
        format!(
            "SwerveWaypoint(x={:.3}, y={:.3}, heading={}, orientation={})",
            self.x(),
            self.y(),
            self.heading().log_summary(),
            self.orientation.log_summary()
        )
    }
}

// Geometric primitives for planar swerve paths
//
// Rotation2D and Pose2D carry just enough math for waypoint definitions:
// angle conversion, raw arithmetic, comparison and normalization.

use serde::{Deserialize, Serialize};
use std::f64::consts::{PI, TAU};
use std::ops::{Add, Neg, Sub};
use swerve_core::core::LogSummary;

/// A single planar angle, stored in radians
///
/// Values are kept exactly as constructed. Arithmetic does not wrap; call
/// [`Rotation2D::normalized`] to bring an angle into (-pi, pi].
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Rotation2D(f64);

impl Rotation2D {
    /// Zero rotation
    pub const ZERO: Self = Self(0.0);

    /// Create a rotation from radians
    pub const fn from_radians(radians: f64) -> Self {
        Self(radians)
    }

    /// Create a rotation from degrees
    pub fn from_degrees(degrees: f64) -> Self {
        Self(degrees.to_radians())
    }

    /// Angle in radians
    pub const fn radians(&self) -> f64 {
        self.0
    }

    /// Angle in degrees
    pub fn degrees(&self) -> f64 {
        self.0.to_degrees()
    }

    pub fn cos(&self) -> f64 {
        self.0.cos()
    }

    pub fn sin(&self) -> f64 {
        self.0.sin()
    }

    /// Same angle mapped into (-pi, pi]
    pub fn normalized(&self) -> Self {
        let wrapped = self.0.rem_euclid(TAU);
        if wrapped > PI {
            Self(wrapped - TAU)
        } else {
            Self(wrapped)
        }
    }

    /// Check if the angle is finite
    pub fn is_valid(&self) -> bool {
        self.0.is_finite()
    }
}

impl Add for Rotation2D {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Rotation2D {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self(self.0 - rhs.0)
    }
}

impl Neg for Rotation2D {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

/// 2D pose representation (position and heading)
///
/// The chassis pose half of a swerve waypoint.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct Pose2D {
    /// X position in meters
    pub x: f64,
    /// Y position in meters
    pub y: f64,
    /// Chassis heading
    pub heading: Rotation2D,
}

impl Pose2D {
    /// Create a new 2D pose
    pub fn new(x: f64, y: f64, heading: Rotation2D) -> Self {
        Self { x, y, heading }
    }

    /// Create pose at origin
    pub fn origin() -> Self {
        Self::new(0.0, 0.0, Rotation2D::ZERO)
    }

    /// Calculate euclidean distance to another pose
    pub fn distance_to(&self, other: &Pose2D) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Check if values are finite
    pub fn is_valid(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.heading.is_valid()
    }
}

impl LogSummary for Rotation2D {
    fn log_summary(&self) -> String {
        format!("{:.3}rad", self.0)
    }
}

impl LogSummary for Pose2D {
    fn log_summary(&self) -> String {
        format!(
            "Pose2D(x={:.3}, y={:.3}, heading={})",
            self.x,
            self.y,
            self.heading.log_summary()
        )
    }
}

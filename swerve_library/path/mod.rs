//! Ordered swerve paths
//!
//! A [`SwervePath`] is the editable list of waypoints a trajectory is built
//! from. Rows are never mutated in place: every edit rebuilds the waypoint at
//! that row, so the validation in [`SwerveWaypoint`] applies to edits too.
//! Generators receive a [`SwervePath::snapshot`], which later edits cannot
//! reach.

pub mod file;
pub mod text;

pub use file::PathFile;
pub use text::{format_waypoints, parse_waypoints};

use std::sync::Arc;

use swerve_core::core::LogSummary;
use swerve_core::error::{SwerveError, SwerveResult};

use crate::messages::{Rotation2D, SwerveWaypoint};

/// A path never shrinks below this many waypoints through removal
pub const MIN_WAYPOINTS: usize = 2;

/// Display row for a waypoint, every value rounded to 1e-3
///
/// `x` and `y` are meters, `heading` and `orientation` radians.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WaypointRow {
    pub x: f64,
    pub y: f64,
    pub heading: f64,
    pub orientation: f64,
}

impl From<&SwerveWaypoint> for WaypointRow {
    fn from(waypoint: &SwerveWaypoint) -> Self {
        Self {
            x: round_millis(waypoint.x()),
            y: round_millis(waypoint.y()),
            heading: round_millis(waypoint.heading().radians()),
            orientation: round_millis(waypoint.orientation().radians()),
        }
    }
}

fn round_millis(value: f64) -> f64 {
    (value * 1e3).round_ties_even() / 1e3
}

/// Ordered, exclusively owned list of swerve waypoints
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SwervePath {
    waypoints: Vec<SwerveWaypoint>,
}

impl SwervePath {
    /// Create an empty path
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a path from already validated waypoints
    pub fn from_waypoints(waypoints: Vec<SwerveWaypoint>) -> Self {
        Self { waypoints }
    }

    pub fn len(&self) -> usize {
        self.waypoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.waypoints.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&SwerveWaypoint> {
        self.waypoints.get(index)
    }

    pub fn first(&self) -> Option<&SwerveWaypoint> {
        self.waypoints.first()
    }

    pub fn last(&self) -> Option<&SwerveWaypoint> {
        self.waypoints.last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SwerveWaypoint> {
        self.waypoints.iter()
    }

    pub fn as_slice(&self) -> &[SwerveWaypoint] {
        &self.waypoints
    }

    /// Append a waypoint to the end of the path
    pub fn push(&mut self, waypoint: SwerveWaypoint) {
        log::debug!("Adding {}", waypoint.log_summary());
        self.waypoints.push(waypoint);
    }

    /// Insert a waypoint before `index`; `index == len` appends
    pub fn insert(&mut self, index: usize, waypoint: SwerveWaypoint) -> SwerveResult<()> {
        if index > self.waypoints.len() {
            return Err(SwerveError::index_out_of_range(index, self.waypoints.len()));
        }
        self.waypoints.insert(index, waypoint);
        Ok(())
    }

    /// Replace the x coordinate of a row
    pub fn set_x(&mut self, row: usize, x: f64) -> SwerveResult<()> {
        self.edit(row, |wp| wp.with_x(x))
    }

    /// Replace the y coordinate of a row
    pub fn set_y(&mut self, row: usize, y: f64) -> SwerveResult<()> {
        self.edit(row, |wp| wp.with_y(y))
    }

    /// Replace the chassis heading of a row
    pub fn set_heading(&mut self, row: usize, heading: Rotation2D) -> SwerveResult<()> {
        self.edit(row, |wp| wp.with_heading(heading))
    }

    /// Replace the module orientation of a row
    pub fn set_orientation(&mut self, row: usize, orientation: Rotation2D) -> SwerveResult<()> {
        self.edit(row, |wp| wp.with_orientation(orientation))
    }

    fn edit<F>(&mut self, row: usize, rebuild: F) -> SwerveResult<()>
    where
        F: FnOnce(&SwerveWaypoint) -> SwerveResult<SwerveWaypoint>,
    {
        let current = self
            .waypoints
            .get(row)
            .ok_or_else(|| SwerveError::index_out_of_range(row, self.waypoints.len()))?;

        let updated = rebuild(current)?;
        log::debug!("Row {}: {}", row, updated.log_summary());
        self.waypoints[row] = updated;
        Ok(())
    }

    /// Remove a waypoint while more than [`MIN_WAYPOINTS`] remain
    ///
    /// Returns the removed waypoint, or `None` when the index is out of range
    /// or the path is already at the minimum.
    pub fn remove_if_possible(&mut self, index: usize) -> Option<SwerveWaypoint> {
        if index >= self.waypoints.len() {
            return None;
        }
        if self.waypoints.len() <= MIN_WAYPOINTS {
            log::warn!(
                "Refusing to remove row {}: path needs at least {} waypoints",
                index,
                MIN_WAYPOINTS
            );
            return None;
        }
        Some(self.waypoints.remove(index))
    }

    /// Drag-and-drop reorder
    ///
    /// With more than two waypoints the one at `from` moves to `to`; a `to`
    /// past the end appends. With two or fewer the path is reversed instead.
    /// Dropping a row onto itself does nothing.
    pub fn move_waypoint(&mut self, from: usize, to: usize) -> SwerveResult<()> {
        let len = self.waypoints.len();
        if from >= len {
            return Err(SwerveError::index_out_of_range(from, len));
        }
        if from == to {
            return Ok(());
        }

        if len > MIN_WAYPOINTS {
            let waypoint = self.waypoints.remove(from);
            let to = to.min(self.waypoints.len());
            self.waypoints.insert(to, waypoint);
            log::debug!("Moved row {} to {}", from, to);
        } else {
            self.reverse();
        }
        Ok(())
    }

    /// Reverse the order of the path
    pub fn reverse(&mut self) {
        self.waypoints.reverse();
        log::debug!("Reversed path of {} waypoints", self.waypoints.len());
    }

    /// Replace every waypoint at once
    pub fn replace_all(&mut self, waypoints: Vec<SwerveWaypoint>) {
        log::debug!(
            "Replacing {} waypoints with {}",
            self.waypoints.len(),
            waypoints.len()
        );
        self.waypoints = waypoints;
    }

    /// Rounded display rows, one per waypoint
    pub fn rows(&self) -> Vec<WaypointRow> {
        self.waypoints.iter().map(WaypointRow::from).collect()
    }

    /// Immutable copy of the current waypoints for a trajectory generator
    pub fn snapshot(&self) -> Arc<[SwerveWaypoint]> {
        Arc::from(self.waypoints.as_slice())
    }

    /// Replace the path with the waypoints parsed from `text`
    ///
    /// See [`parse_waypoints`] for the format. The path is left untouched if
    /// any line fails to parse. Returns the number of waypoints loaded.
    pub fn load_from_text(&mut self, text: &str) -> SwerveResult<usize> {
        let waypoints = parse_waypoints(text)?;
        let count = waypoints.len();
        self.replace_all(waypoints);
        log::info!("Loaded {} waypoints from text", count);
        Ok(count)
    }

    /// Render the path in the constructor-call text format
    pub fn to_text(&self) -> String {
        format_waypoints(&self.waypoints)
    }
}

impl From<Vec<SwerveWaypoint>> for SwervePath {
    fn from(waypoints: Vec<SwerveWaypoint>) -> Self {
        Self::from_waypoints(waypoints)
    }
}

impl FromIterator<SwerveWaypoint> for SwervePath {
    fn from_iter<I: IntoIterator<Item = SwerveWaypoint>>(iter: I) -> Self {
        Self::from_waypoints(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a SwervePath {
    type Item = &'a SwerveWaypoint;
    type IntoIter = std::slice::Iter<'a, SwerveWaypoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.waypoints.iter()
    }
}

impl LogSummary for SwervePath {
    fn log_summary(&self) -> String {
        format!("SwervePath{}", self.waypoints.log_summary())
    }
}

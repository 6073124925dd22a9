//! Constructor-call text format
//!
//! Paths are exchanged as source-style snippets, one waypoint per line:
//!
//! ```text
//! new SwerveTrajectoryWaypoint(0.0, 0.0, 0.0, 0.0),
//! new SwerveTrajectoryWaypoint(2.5, 1.0, 1.5707963267948966, 0.0)
//! ```
//!
//! Arguments are `x, y, orientation, heading` with rotations in radians.
//! When reading, whitespace is ignored, the constructor name is matched
//! case-insensitively, each argument may be wrapped in one pair of
//! parentheses, and anything after the call's closing `)` (a trailing comma,
//! the `)` closing a `List.of(`, a comment) is ignored. Lines that are not
//! waypoint constructors are skipped.

use swerve_core::error::{SwerveError, SwerveResult};

use crate::messages::{Rotation2D, SwerveWaypoint};

const CONSTRUCTOR: &str = "newSwerveTrajectoryWaypoint(";
const ARGUMENTS: usize = 4;

/// Parse every waypoint constructor in `text`
///
/// All-or-nothing: the first malformed waypoint line aborts with a
/// `ParseError` (bad literal, argument count, missing `)`) or an
/// `InvalidArgument` (non-finite value), naming the 1-based line.
pub fn parse_waypoints(text: &str) -> SwerveResult<Vec<SwerveWaypoint>> {
    let mut waypoints = Vec::new();

    for (index, line) in text.lines().enumerate() {
        let line_no = index + 1;
        let compact: String = line.chars().filter(|c| !c.is_whitespace()).collect();
        if compact.is_empty() {
            continue;
        }

        let Some(rest) = strip_constructor(&compact) else {
            log::debug!("Skipping line {}: not a waypoint constructor", line_no);
            continue;
        };

        waypoints.push(parse_arguments(rest, line_no)?);
    }

    Ok(waypoints)
}

/// Render waypoints as constructor calls, comma-separated like an array body
pub fn format_waypoints(waypoints: &[SwerveWaypoint]) -> String {
    waypoints
        .iter()
        .map(|wp| {
            format!(
                "new SwerveTrajectoryWaypoint({:?}, {:?}, {:?}, {:?})",
                wp.x(),
                wp.y(),
                wp.orientation().radians(),
                wp.heading().radians()
            )
        })
        .collect::<Vec<_>>()
        .join(",\n")
}

fn strip_constructor(compact: &str) -> Option<&str> {
    let prefix = compact.get(..CONSTRUCTOR.len())?;
    if prefix.eq_ignore_ascii_case(CONSTRUCTOR) {
        Some(&compact[CONSTRUCTOR.len()..])
    } else {
        None
    }
}

/// Argument list of the call, up to its matching `)`; the tail is dropped
fn call_body(rest: &str) -> Option<&str> {
    let mut depth = 1usize;
    for (i, c) in rest.char_indices() {
        match c {
            '(' => depth += 1,
            ')' => {
                depth -= 1;
                if depth == 0 {
                    return Some(&rest[..i]);
                }
            }
            _ => {}
        }
    }
    None
}

fn parse_arguments(rest: &str, line_no: usize) -> SwerveResult<SwerveWaypoint> {
    let body = call_body(rest)
        .ok_or_else(|| SwerveError::parse(format!("line {}: missing closing ')'", line_no)))?;

    let args: Vec<&str> = body.split(',').collect();
    if args.len() != ARGUMENTS {
        return Err(SwerveError::parse(format!(
            "line {}: expected {} arguments (x, y, orientation, heading), found {}",
            line_no,
            ARGUMENTS,
            args.len()
        )));
    }

    let x = parse_number(args[0], line_no)?;
    let y = parse_number(args[1], line_no)?;
    let orientation = parse_number(args[2], line_no)?;
    let heading = parse_number(args[3], line_no)?;

    SwerveWaypoint::new(
        x,
        y,
        Rotation2D::from_radians(orientation),
        Rotation2D::from_radians(heading),
    )
    .map_err(|err| match err {
        SwerveError::InvalidArgument(msg) => {
            SwerveError::invalid_argument(format!("line {}: {}", line_no, msg))
        }
        other => other,
    })
}

fn parse_number(arg: &str, line_no: usize) -> SwerveResult<f64> {
    let literal = match arg.strip_prefix('(') {
        Some(inner) => inner.strip_suffix(')').unwrap_or(inner),
        None => arg,
    };
    literal
        .parse::<f64>()
        .map_err(|e| SwerveError::parse(format!("line {}: '{}': {}", line_no, arg, e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn test_parse_basic_lines() {
        let text = "new SwerveTrajectoryWaypoint(1.0, 2.0, 0.5, 0.25),\n\
                    new SwerveTrajectoryWaypoint(3.0, -4.0, -1.0, 2.0)";
        let waypoints = parse_waypoints(text).unwrap();

        assert_eq!(waypoints.len(), 2);
        assert_eq!(waypoints[0].x(), 1.0);
        assert_eq!(waypoints[0].y(), 2.0);
        assert_eq!(waypoints[0].orientation().radians(), 0.5);
        assert_eq!(waypoints[0].heading().radians(), 0.25);
        assert_eq!(waypoints[1].y(), -4.0);
        assert_eq!(waypoints[1].heading().radians(), 2.0);
    }

    #[test]
    fn test_parse_tolerates_parens_case_and_spacing() {
        let text = "   NEW swerveTrajectoryWaypoint( (1.5) , 2 ,(0.1),(0.2) ) ,  ";
        let waypoints = parse_waypoints(text).unwrap();

        assert_eq!(waypoints.len(), 1);
        assert_eq!(waypoints[0].x(), 1.5);
        assert_eq!(waypoints[0].y(), 2.0);
        assert_eq!(waypoints[0].orientation().radians(), 0.1);
        assert_eq!(waypoints[0].heading().radians(), 0.2);
    }

    #[test]
    fn test_parse_skips_other_lines() {
        let text = "List<SwerveTrajectoryWaypoint> path = List.of(\n\
                    \n\
                    new SwerveTrajectoryWaypoint(1.0, 1.0, 0.0, 0.0),\n\
                    // new Pose2d(5.0, 5.0, 0.0)\n\
                    new SwerveTrajectoryWaypoint(2.0, 2.0, 0.0, 0.0)\n\
                    );";
        let waypoints = parse_waypoints(text).unwrap();
        assert_eq!(waypoints.len(), 2);
        assert_eq!(waypoints[1].x(), 2.0);
    }

    #[test]
    fn test_parse_errors_name_the_line() {
        let text = "new SwerveTrajectoryWaypoint(1.0, 1.0, 0.0, 0.0),\n\
                    new SwerveTrajectoryWaypoint(1.0, abc, 0.0, 0.0),";
        let err = parse_waypoints(text).unwrap_err();
        assert!(err.is_parse_error());
        assert!(err.to_string().contains("line 2"), "{}", err);

        let err = parse_waypoints("new SwerveTrajectoryWaypoint(1.0, 1.0, 0.0)").unwrap_err();
        assert!(err.is_parse_error());
        assert!(err.to_string().contains("found 3"), "{}", err);

        let err = parse_waypoints("new SwerveTrajectoryWaypoint(1.0, 1.0, 0.0, 0.0").unwrap_err();
        assert!(err.is_parse_error());
    }

    #[test]
    fn test_parse_ignores_text_after_call() {
        let text = "List.of(\n\
                    new SwerveTrajectoryWaypoint(1.0, 1.0, 0.0, 0.0), // start\n\
                    new SwerveTrajectoryWaypoint(2.0, 2.0, (0.5), (0.25)));";
        let waypoints = parse_waypoints(text).unwrap();

        assert_eq!(waypoints.len(), 2);
        assert_eq!(waypoints[0].x(), 1.0);
        assert_eq!(waypoints[1].x(), 2.0);
        assert_eq!(waypoints[1].orientation().radians(), 0.5);
        assert_eq!(waypoints[1].heading().radians(), 0.25);
    }

    #[test]
    fn test_parse_rejects_unbalanced_parens() {
        let err = parse_waypoints("new SwerveTrajectoryWaypoint(((1.0, 1.0, 0.0, 0.0)").unwrap_err();
        assert!(err.is_parse_error());

        let err = parse_waypoints("new SwerveTrajectoryWaypoint(((1.0), 1.0, 0.0, 0.0))").unwrap_err();
        assert!(err.is_parse_error());
        assert!(err.to_string().contains("'((1.0)'"), "{}", err);
    }

    #[test]
    fn test_parse_rejects_non_finite() {
        let err = parse_waypoints("new SwerveTrajectoryWaypoint(NaN, 1.0, 0.0, 0.0)").unwrap_err();
        assert!(err.is_invalid_argument());
        assert!(err.to_string().contains("line 1"), "{}", err);

        let err = parse_waypoints("new SwerveTrajectoryWaypoint(0.0, 1.0, inf, 0.0)").unwrap_err();
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn test_format_and_reparse() {
        let waypoints = vec![
            SwerveWaypoint::new(0.0, 0.0, Rotation2D::ZERO, Rotation2D::ZERO).unwrap(),
            SwerveWaypoint::new(
                2.5,
                -1.125,
                Rotation2D::from_radians(FRAC_PI_2),
                Rotation2D::from_radians(0.1),
            )
            .unwrap(),
        ];

        let text = format_waypoints(&waypoints);
        assert_eq!(
            text,
            "new SwerveTrajectoryWaypoint(0.0, 0.0, 0.0, 0.0),\n\
             new SwerveTrajectoryWaypoint(2.5, -1.125, 1.5707963267948966, 0.1)"
        );
        assert_eq!(parse_waypoints(&text).unwrap(), waypoints);
    }

    #[test]
    fn test_empty_input() {
        assert!(parse_waypoints("").unwrap().is_empty());
        assert_eq!(format_waypoints(&[]), "");
    }
}

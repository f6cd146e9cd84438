use std::path::Path;

use orienteer_core::{Error, Point};

use crate::{IoError, read_text};

/// Parse a waypoint list: one `x y` integer pair per non-empty line.
///
/// At least two waypoints are required. Bounds are not checked here since
/// they depend on the raster.
pub fn parse_waypoints(text: &str) -> Result<Vec<Point>, IoError> {
    let mut points = Vec::new();
    for (i, line) in text.lines().enumerate() {
        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.is_empty() {
            continue;
        }
        if fields.len() != 2 {
            return Err(IoError::FieldCount {
                line: i + 1,
                expected: 2,
                found: fields.len(),
            });
        }
        let coord = |j: usize| {
            fields[j].parse::<i32>().map_err(|_| IoError::Number {
                line: i + 1,
                field: j + 1,
                value: fields[j].to_owned(),
                expected: "integer",
            })
        };
        points.push(Point::new(coord(0)?, coord(1)?));
    }
    if points.len() < 2 {
        return Err(Error::TooFewWaypoints(points.len()).into());
    }
    Ok(points)
}

/// Read and parse a waypoint file.
pub fn load_waypoints(path: impl AsRef<Path>) -> Result<Vec<Point>, IoError> {
    parse_waypoints(&read_text(path.as_ref())?)
}

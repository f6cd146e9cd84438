//! Fatal setup errors shared by every orienteer crate.
//!
//! None of these are routing outcomes: an unreachable goal is reported as an
//! empty path, not as an [`Error`].

use crate::geom::Point;
use crate::raster::Rgb;

/// Result alias using the crate [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// A raster color that the cost model does not know.
    #[error("unmapped terrain color {color} at {at}")]
    UnknownColor { color: Rgb, at: Point },

    /// Lookup of an unmapped color outside any raster context.
    #[error("unmapped terrain color {0}")]
    UnmappedColor(Rgb),

    /// Two cost-model entries share the same color.
    #[error("terrain color {color} is assigned to both {first:?} and {second:?}")]
    DuplicateColor {
        color: Rgb,
        first: String,
        second: String,
    },

    /// A passable terrain cost that is zero, negative or NaN.
    #[error("terrain {name:?} has invalid cost {cost}")]
    InvalidCost { name: String, cost: f64 },

    /// Elevation grid and raster disagree on size.
    #[error(
        "elevation grid is {elevation_width}x{elevation_height} \
         but raster is {raster_width}x{raster_height}"
    )]
    DimensionMismatch {
        raster_width: i32,
        raster_height: i32,
        elevation_width: i32,
        elevation_height: i32,
    },

    /// Elevation row `row` (0-based) does not have the width of row 0.
    #[error("elevation row {row} has {found} values, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("elevation grid is empty")]
    EmptyGrid,

    /// A coordinate that is not a finite number.
    #[error("non-finite coordinate {value} at ({x}, {y})")]
    NonFiniteCoordinate { x: i32, y: i32, value: f64 },

    #[error("waypoint {0} lies outside the raster")]
    WaypointOutOfBounds(Point),

    #[error("at least two waypoints are required, got {0}")]
    TooFewWaypoints(usize),

    /// Raster pixel buffer length does not match its declared size.
    #[error("raster of {width}x{height} cannot hold {len} pixels")]
    PixelCount { width: i32, height: i32, len: usize },
}
